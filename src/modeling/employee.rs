//! `Person` and `Employee`: composition with `Deref` to the embedded person.

use core::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// A person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    /// A person called `name`, aged `age`.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// A [`Person`] with a department. Person fields are reachable directly
/// through `Deref`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee as a person.
    #[serde(flatten)]
    pub person: Person,
    /// Department name.
    pub department: String,
}

impl Employee {
    /// Hires `person` into `department`.
    pub fn new(person: Person, department: impl Into<String>) -> Self {
        Self {
            person,
            department: department.into(),
        }
    }
}

impl Deref for Employee {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.person
    }
}

impl DerefMut for Employee {
    fn deref_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
