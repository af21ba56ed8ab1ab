//! API payload models
//!
//! Request/response shapes shared by the server and its clients. Stored
//! records live in the server's `db::models`.

pub mod gadget;
pub mod payment;
pub mod rental;
pub mod user;

// Re-exports
pub use gadget::*;
pub use payment::*;
pub use rental::*;
pub use user::*;
