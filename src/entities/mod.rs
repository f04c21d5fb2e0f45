// Entity Models
//
// Each entity has:
// - Caller-supplied identity (opaque id) that never changes
// - Plain values (display name, open rentals)
// - The registry owns every entity; nothing is shared between owners

pub mod car;
pub mod user;

pub use car::{Car, CarId};
pub use user::{User, UserId};
