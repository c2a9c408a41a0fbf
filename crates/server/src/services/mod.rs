//! Application services.
//!
//! - [`auth`] - password hashing/verification and the register/login flows
//! - [`token`] - bearer token issuance and verification
//! - [`ingest`] - the upload parse-validate-attribute-commit pipeline

pub mod auth;
pub mod ingest;
pub mod token;
