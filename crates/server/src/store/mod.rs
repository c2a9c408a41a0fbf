//! In-memory stores for identities and the catalog.
//!
//! All state lives in process memory behind `RwLock`s owned by
//! [`crate::state::AppState`] - never module-level globals. The component
//! contracts do not depend on the in-memory choice: a persistent backend
//! could replace these stores without touching the services above them.
//!
//! Locking discipline: write locks are held only for the single
//! insert/append step; reads clone out a consistent snapshot. Lock
//! poisoning is recovered with `PoisonError::into_inner` - the guarded
//! data is a plain collection and is structurally valid even if a panic
//! unwound through a guard.

pub mod catalog;
pub mod identities;

pub use catalog::Catalog;
pub use identities::{IdentityStore, StoreError};
