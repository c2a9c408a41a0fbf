//! Domain types for identities and catalog entries.

pub mod book;
pub mod identity;

pub use book::{Book, NewBook};
pub use identity::Identity;
