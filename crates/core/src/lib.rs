//! Bookstall Core - Shared domain types.
//!
//! This crate provides the common types used by the Bookstall server:
//!
//! - [`Email`] - validated email address, the sole key for identities
//! - [`Role`] - the two principal classes (user, seller)
//! - [`BookId`] - stable identifier assigned to catalog entries at append time
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage. This
//! keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
