// ⚠️ Rental Errors - Soft failures as typed results
//
// Every precondition violation is reported as one of these variants.
// An operation that returns an error has not mutated anything.

use crate::entities::{CarId, UserId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RentalError {
    #[error("car with ID {0} already exists in inventory")]
    DuplicateCar(CarId),

    #[error("user with ID {0} already exists")]
    DuplicateUser(UserId),

    #[error("car with ID {0} not found in inventory")]
    CarNotFound(CarId),

    #[error("user with ID {0} not found")]
    UserNotFound(UserId),

    #[error("car (ID: {0}) is already rented")]
    AlreadyRented(CarId),

    #[error("car (ID: {0}) was not rented or does not exist in the inventory")]
    CarNotRented(CarId),

    /// The car is actively rented but the renter holds no start date for it
    #[error("rental history not found for car (ID: {car_id}) and user {user_id}")]
    HistoryMissing { car_id: CarId, user_id: UserId },

    #[error("car (ID: {car_id}) is not currently rented by user {user_id}")]
    NotRentedBy { car_id: CarId, user_id: UserId },

    #[error("cannot extend rental for car (ID: {car_id}) by {days} days")]
    InvalidExtension { car_id: CarId, days: i64 },
}

pub type Result<T> = std::result::Result<T, RentalError>;
