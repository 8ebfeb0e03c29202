//! Vehicles behind the `Vehicle` trait: cars and bikes.

use serde::{Deserialize, Serialize};

/// Anything that can be started and stopped.
pub trait Vehicle {
    /// Model name shown in messages.
    fn model(&self) -> &str;

    /// Message announcing the vehicle is starting.
    fn start(&self) -> String {
        format!("{} is starting", self.model())
    }

    /// Message announcing the vehicle is stopping.
    fn stop(&self) -> String {
        format!("{} is stopping", self.model())
    }
}

/// Four wheels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Model name.
    pub model: String,
}

impl Car {
    /// Car of the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Vehicle for Car {
    fn model(&self) -> &str {
        &self.model
    }
}

/// Two wheels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    /// Model name.
    pub model: String,
}

impl Bike {
    /// Bike of the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Vehicle for Bike {
    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let fleet: Vec<Box<dyn Vehicle>> =
            vec![Box::new(Car::new("Toyota")), Box::new(Bike::new("Yamaha"))];
        let log: Vec<String> = fleet.iter().flat_map(|v| [v.start(), v.stop()]).collect();
        assert_eq!(
            log,
            [
                "Toyota is starting",
                "Toyota is stopping",
                "Yamaha is starting",
                "Yamaha is stopping",
            ]
        );
    }
}
