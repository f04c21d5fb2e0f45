// 🏢 Rental Registry - Inventory, users and the rental lifecycle
//
// The registry owns three structures:
// - inventory:       car id → display name
// - active rentals:  car id → renting user id
// - users:           user records, in registration order, indexed by id
//
// A rental is not stored on its own. It is the pair of an active-rentals
// entry and the renter's open-rental start date for that car; every
// mutation below keeps both halves in step.

use crate::billing::{elapsed_days, rental_cost};
use crate::config::RentalConfig;
use crate::entities::{Car, CarId, User, UserId};
use crate::error::{RentalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

// ============================================================================
// RETURN RECEIPT
// ============================================================================

/// Outcome of a successful return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    /// Unique receipt id (UUID v4)
    pub id: String,
    pub car_id: CarId,
    pub user_id: UserId,
    pub rented_at: DateTime<Utc>,
    pub returned_at: DateTime<Utc>,

    /// Whole elapsed days, signed
    pub days: i64,
    pub cost: i64,
}

// ============================================================================
// RENTAL REGISTRY
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct RentalRegistry {
    pub(crate) config: RentalConfig,
    pub(crate) inventory: BTreeMap<CarId, String>,
    pub(crate) active_rentals: BTreeMap<CarId, UserId>,
    pub(crate) users: Vec<User>,

    /// user id → position in `users` (users are never removed)
    user_index: HashMap<UserId, usize>,
}

impl RentalRegistry {
    /// Create an empty registry with default pricing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RentalConfig) -> Self {
        RentalRegistry {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    // ========================================================================
    // INVENTORY
    // ========================================================================

    /// Add a car to the inventory
    pub fn add_car(&mut self, name: impl Into<String>, car_id: CarId) -> Result<()> {
        if self.inventory.contains_key(&car_id) {
            warn!(%car_id, "car already exists in inventory");
            return Err(RentalError::DuplicateCar(car_id));
        }

        let name = name.into();
        info!(%car_id, name = %name, "added car to inventory");
        self.inventory.insert(car_id, name);
        Ok(())
    }

    /// Remove a car from the inventory.
    ///
    /// A rented car is returned implicitly at the current time first; the
    /// cost of that return is not reported.
    pub fn remove_car(&mut self, car_id: CarId) -> Result<Car> {
        let Some(name) = self.inventory.remove(&car_id) else {
            warn!(%car_id, "car not found in inventory");
            return Err(RentalError::CarNotFound(car_id));
        };
        info!(%car_id, name = %name, "removed car from inventory");

        if let Some(user_id) = self.active_rentals.remove(&car_id) {
            let days = self
                .user_mut(user_id)
                .and_then(|user| user.close_rental(car_id, Utc::now()));
            debug!(%car_id, %user_id, ?days, "implicit return of removed car");
        }

        Ok(Car { id: car_id, name })
    }

    pub fn car(&self, car_id: CarId) -> Option<Car> {
        self.inventory
            .get(&car_id)
            .map(|name| Car::new(car_id, name.clone()))
    }

    /// Full inventory, rented or not
    pub fn inventory(&self) -> &BTreeMap<CarId, String> {
        &self.inventory
    }

    /// Cars currently checked out: car id → renting user id
    pub fn active_rentals(&self) -> &BTreeMap<CarId, UserId> {
        &self.active_rentals
    }

    /// Inventory minus active rentals
    pub fn available_cars(&self) -> BTreeMap<CarId, String> {
        self.inventory
            .iter()
            .filter(|(car_id, _)| !self.active_rentals.contains_key(*car_id))
            .map(|(car_id, name)| (*car_id, name.clone()))
            .collect()
    }

    pub fn is_rented(&self, car_id: CarId) -> bool {
        self.active_rentals.contains_key(&car_id)
    }

    // ========================================================================
    // USERS
    // ========================================================================

    /// Register a new user with no open rentals
    pub fn add_user(&mut self, user_id: UserId, name: impl Into<String>) -> Result<()> {
        if self.user(user_id).is_some() {
            warn!(%user_id, "user already exists");
            return Err(RentalError::DuplicateUser(user_id));
        }

        let user = User::new(user_id, name);
        info!(%user_id, name = %user.name, "user added");
        self.user_index.insert(user_id, self.users.len());
        self.users.push(user);
        Ok(())
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        let index = *self.user_index.get(&user_id)?;
        self.users.get(index)
    }

    pub(crate) fn user_mut(&mut self, user_id: UserId) -> Option<&mut User> {
        let index = *self.user_index.get(&user_id)?;
        self.users.get_mut(index)
    }

    /// All users, in registration order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    // ========================================================================
    // RENTAL LIFECYCLE
    // ========================================================================

    /// Check a car out to a user.
    ///
    /// Failures are checked in order: already rented, unknown user, unknown car.
    pub fn rent(&mut self, car_id: CarId, user_id: UserId, start: DateTime<Utc>) -> Result<()> {
        let check = if self.active_rentals.contains_key(&car_id) {
            Err(RentalError::AlreadyRented(car_id))
        } else if self.user(user_id).is_none() {
            Err(RentalError::UserNotFound(user_id))
        } else if !self.inventory.contains_key(&car_id) {
            Err(RentalError::CarNotFound(car_id))
        } else {
            Ok(())
        };
        if let Err(err) = check {
            warn!(%car_id, %user_id, error = %err, "rental rejected");
            return Err(err);
        }

        let user = self
            .user_mut(user_id)
            .ok_or(RentalError::UserNotFound(user_id))?;
        user.open_rental(car_id, start);
        self.active_rentals.insert(car_id, user_id);

        info!(%car_id, %user_id, %start, "car rented");
        Ok(())
    }

    /// Return a rented car and bill the elapsed days
    pub fn return_car(&mut self, car_id: CarId, end: DateTime<Utc>) -> Result<ReturnReceipt> {
        let (user_id, rented_at) = self.open_rental(car_id)?;

        let days = self
            .user_mut(user_id)
            .and_then(|user| user.close_rental(car_id, end))
            .ok_or(RentalError::HistoryMissing { car_id, user_id })?;
        self.active_rentals.remove(&car_id);
        let cost = rental_cost(days, self.config.daily_rate);

        info!(%car_id, %user_id, days, cost, "car returned");
        Ok(ReturnReceipt {
            id: uuid::Uuid::new_v4().to_string(),
            car_id,
            user_id,
            rented_at,
            returned_at: end,
            days,
            cost,
        })
    }

    /// Cost of an active rental if it were returned at `end` (no mutation)
    pub fn rental_cost(&self, car_id: CarId, end: DateTime<Utc>) -> Result<i64> {
        let (_, rented_at) = self.open_rental(car_id)?;
        let days = elapsed_days(rented_at, end);
        Ok(rental_cost(days, self.config.daily_rate))
    }

    /// Move an active rental's recorded start date forward by `extra_days`.
    ///
    /// Later cost computations are measured from the new date.
    pub fn extend(&mut self, car_id: CarId, user_id: UserId, extra_days: i64) -> Result<DateTime<Utc>> {
        let check = if !self.active_rentals.contains_key(&car_id) {
            Err(RentalError::CarNotRented(car_id))
        } else if !self.inventory.contains_key(&car_id) {
            Err(RentalError::CarNotFound(car_id))
        } else {
            match self.user(user_id) {
                None => Err(RentalError::UserNotFound(user_id)),
                Some(user) if !user.holds(car_id) => {
                    Err(RentalError::HistoryMissing { car_id, user_id })
                }
                Some(_) => Ok(()),
            }
        };
        if let Err(err) = check {
            warn!(%car_id, %user_id, extra_days, error = %err, "extension rejected");
            return Err(err);
        }

        let user = self
            .user_mut(user_id)
            .ok_or(RentalError::UserNotFound(user_id))?;
        let Some(new_start) = user.shift_rental(car_id, extra_days) else {
            warn!(%car_id, %user_id, extra_days, "extension out of range");
            return Err(RentalError::InvalidExtension {
                car_id,
                days: extra_days,
            });
        };

        info!(%car_id, %user_id, extra_days, %new_start, "rental extended");
        Ok(new_start)
    }

    /// Renter and start date of an active rental
    fn open_rental(&self, car_id: CarId) -> Result<(UserId, DateTime<Utc>)> {
        let Some(&user_id) = self.active_rentals.get(&car_id) else {
            warn!(%car_id, "car is not rented");
            return Err(RentalError::CarNotRented(car_id));
        };

        match self.user(user_id).and_then(|u| u.rental_start(car_id)) {
            Some(start) => Ok((user_id, start)),
            None => {
                warn!(%car_id, %user_id, "rental history not found for rented car");
                Err(RentalError::HistoryMissing { car_id, user_id })
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
