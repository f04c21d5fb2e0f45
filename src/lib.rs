// Car Rental Registry - Core Library
// Fleet inventory, registered users and the rental lifecycle, in memory

pub mod billing;
pub mod config;
pub mod entities;
pub mod error;
pub mod registry;
pub mod reports;

// Re-export commonly used types
pub use billing::{elapsed_days, rental_cost, DEFAULT_DAILY_RATE};
pub use config::RentalConfig;
pub use entities::{Car, CarId, User, UserId};
pub use error::RentalError;
pub use registry::{RentalRegistry, ReturnReceipt};
pub use reports::RegistrySnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
