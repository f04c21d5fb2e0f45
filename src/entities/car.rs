// 🚗 Car Entity - Fleet inventory
//
// A car is just an id and a display name. It exists once added to the
// inventory and disappears when removed; there is no other lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CAR ID
// ============================================================================

/// Caller-supplied car identifier (opaque, no format constraint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(pub u64);

impl From<u64> for CarId {
    fn from(id: u64) -> Self {
        CarId(id)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CAR ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,

    /// Display name, e.g. "Toyota Corolla"
    pub name: String,
}

impl Car {
    pub fn new(id: CarId, name: impl Into<String>) -> Self {
        Car {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_creation() {
        let car = Car::new(CarId(1), "Toyota Corolla");

        assert_eq!(car.id, CarId(1));
        assert_eq!(car.name, "Toyota Corolla");
    }

    #[test]
    fn test_car_display() {
        let car = Car::new(CarId(7), "Honda Civic");
        assert_eq!(car.to_string(), "Honda Civic (ID: 7)");
    }

    #[test]
    fn test_car_id_serializes_transparently() {
        let json = serde_json::to_string(&CarId(42)).unwrap();
        assert_eq!(json, "42");

        let back: CarId = serde_json::from_str("42").unwrap();
        assert_eq!(back, CarId(42));
    }
}
