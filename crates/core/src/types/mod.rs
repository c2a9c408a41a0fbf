//! Newtype wrappers for domain values.

mod email;
mod id;
mod role;

pub use email::{Email, EmailError};
pub use id::BookId;
pub use role::Role;
