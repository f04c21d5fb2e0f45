// 👤 User Entity - Registered customer + open rentals
//
// Each user owns a map of car id → rental start date. Only rentals that are
// still open stay in the map: closing a rental pops its entry.

use crate::billing::elapsed_days;
use crate::entities::car::CarId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// USER ID
// ============================================================================

/// Caller-supplied user identifier (opaque, no format constraint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// USER ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,

    /// Open rentals: car id → rental start date
    open_rentals: BTreeMap<CarId, DateTime<Utc>>,
}

impl User {
    /// Create a user with no open rentals
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            open_rentals: BTreeMap::new(),
        }
    }

    /// Record a rental start. Overwrites any previous start for the same car.
    pub fn open_rental(&mut self, car_id: CarId, start: DateTime<Utc>) {
        self.open_rentals.insert(car_id, start);
    }

    /// Close a rental, returning the elapsed whole days.
    ///
    /// Returns `None` if this user has no open rental for `car_id`.
    pub fn close_rental(&mut self, car_id: CarId, end: DateTime<Utc>) -> Option<i64> {
        self.open_rentals
            .remove(&car_id)
            .map(|start| elapsed_days(start, end))
    }

    /// Remove an open rental without computing a duration (ownership handover)
    pub fn take_rental(&mut self, car_id: CarId) -> Option<DateTime<Utc>> {
        self.open_rentals.remove(&car_id)
    }

    /// Move the recorded start date of an open rental by `days`.
    ///
    /// Returns the new start date, or `None` if the rental is not open here
    /// or the shifted date is out of range.
    pub fn shift_rental(&mut self, car_id: CarId, days: i64) -> Option<DateTime<Utc>> {
        let start = self.open_rentals.get_mut(&car_id)?;
        let shifted = start.checked_add_signed(Duration::try_days(days)?)?;
        *start = shifted;
        Some(shifted)
    }

    pub fn rental_start(&self, car_id: CarId) -> Option<DateTime<Utc>> {
        self.open_rentals.get(&car_id).copied()
    }

    pub fn holds(&self, car_id: CarId) -> bool {
        self.open_rentals.contains_key(&car_id)
    }

    pub fn open_rentals(&self) -> &BTreeMap<CarId, DateTime<Utc>> {
        &self.open_rentals
    }
}

// ============================================================================
// TESTS
// ============================================================================
