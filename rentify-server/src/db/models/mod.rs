//! Stored records
//!
//! Request payloads live in `shared::models`; these are the shapes
//! persisted in SurrealDB and returned to clients.

pub mod serde_helpers;

pub mod cart;
pub mod gadget;
pub mod payment;
pub mod user;
pub mod wishlist;

pub use cart::CartItem;
pub use gadget::{Gadget, GadgetPatch};
pub use payment::Payment;
pub use user::User;
pub use wishlist::WishlistItem;
