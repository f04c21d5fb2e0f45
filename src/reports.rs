// 📋 Directory & Reporting - Lookups, transfers and filtered views
//
// Read-only queries over the registry, plus `transfer`, which hands an
// active rental from one user to another.

use crate::entities::{CarId, User, UserId};
use crate::error::{RentalError, Result};
use crate::registry::RentalRegistry;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Point-in-time view of the whole registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub taken_at: DateTime<Utc>,
    pub inventory: BTreeMap<CarId, String>,
    pub active_rentals: BTreeMap<CarId, UserId>,

    /// Users in registration order, with their open rentals
    pub users: Vec<User>,
}

impl RegistrySnapshot {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize registry snapshot")
    }

    /// Inventory entries with no active rental
    pub fn available_count(&self) -> usize {
        self.inventory
            .keys()
            .filter(|car_id| !self.active_rentals.contains_key(*car_id))
            .count()
    }
}

// ============================================================================
// QUERIES
// ============================================================================

impl RentalRegistry {
    /// First user (in registration order) with exactly this name
    pub fn find_user_by_name(&self, name: &str) -> Option<UserId> {
        self.users.iter().find(|u| u.name == name).map(|u| u.id)
    }

    /// Open rentals of a user: car id → start date
    pub fn rental_history(&self, user_id: UserId) -> Result<&BTreeMap<CarId, DateTime<Utc>>> {
        match self.user(user_id) {
            Some(user) => Ok(user.open_rentals()),
            None => {
                warn!(%user_id, "user not found");
                Err(RentalError::UserNotFound(user_id))
            }
        }
    }

    /// Hand an active rental over from one user to another.
    ///
    /// The rental keeps its original start date; it moves from the
    /// `from` user's open rentals to the `to` user's.
    pub fn transfer(&mut self, car_id: CarId, from: UserId, to: UserId) -> Result<()> {
        let check = if !self.active_rentals.contains_key(&car_id) {
            Err(RentalError::CarNotRented(car_id))
        } else if !self.inventory.contains_key(&car_id) {
            Err(RentalError::CarNotFound(car_id))
        } else if self.user(from).is_none() {
            Err(RentalError::UserNotFound(from))
        } else if self.user(to).is_none() {
            Err(RentalError::UserNotFound(to))
        } else if self.active_rentals.get(&car_id) != Some(&from) {
            Err(RentalError::NotRentedBy {
                car_id,
                user_id: from,
            })
        } else if !self.user(from).is_some_and(|u| u.holds(car_id)) {
            Err(RentalError::HistoryMissing {
                car_id,
                user_id: from,
            })
        } else {
            Ok(())
        };
        if let Err(err) = check {
            warn!(%car_id, %from, %to, error = %err, "transfer rejected");
            return Err(err);
        }

        let start = self
            .user_mut(from)
            .and_then(|u| u.take_rental(car_id))
            .ok_or(RentalError::HistoryMissing {
                car_id,
                user_id: from,
            })?;
        if let Some(user) = self.user_mut(to) {
            user.open_rental(car_id, start);
        }
        self.active_rentals.insert(car_id, to);

        info!(%car_id, %from, %to, "rental transferred");
        Ok(())
    }

    /// Cars currently rented by `user_id`: car id → name
    pub fn rented_cars_for_user(&self, user_id: UserId) -> BTreeMap<CarId, String> {
        self.active_rentals
            .iter()
            .filter(|(_, renter)| **renter == user_id)
            .filter_map(|(car_id, _)| self.named(*car_id))
            .collect()
    }

    /// Active rentals whose start date falls within `[start, end]`
    pub fn rented_cars_in_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BTreeMap<CarId, String> {
        self.active_rentals
            .iter()
            .filter(|(car_id, renter)| {
                self.user(**renter)
                    .and_then(|u| u.rental_start(**car_id))
                    .is_some_and(|rented_at| start <= rented_at && rented_at <= end)
            })
            .filter_map(|(car_id, _)| self.named(*car_id))
            .collect()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            taken_at: Utc::now(),
            inventory: self.inventory.clone(),
            active_rentals: self.active_rentals.clone(),
            users: self.users.clone(),
        }
    }

    fn named(&self, car_id: CarId) -> Option<(CarId, String)> {
        self.inventory
            .get(&car_id)
            .map(|name| (car_id, name.clone()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
