//! Shapes behind the `Shape` trait: circles and rectangles.

use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A closed planar figure.
pub trait Shape {
    /// Enclosed area.
    fn area(&self) -> f64;
    /// Length of the boundary.
    fn perimeter(&self) -> f64;
    /// Lowercase kind, e.g. `"circle"`.
    fn name(&self) -> &'static str;
}

/// A circle of the given radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Circle with `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Rectangle of `width` by `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}
