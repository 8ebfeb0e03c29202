//! Small domain models: trait objects over shapes and vehicles, an account
//! that guards its balance, and composition with `Deref`.

mod account;
mod employee;
mod shape;
mod vehicle;

pub use account::BankAccount;
pub use employee::{Employee, Person};
pub use shape::{Circle, Rectangle, Shape};
pub use vehicle::{Bike, Car, Vehicle};
