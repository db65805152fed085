//! Shadow Notes: personal notes with per-note lock keys
//!
//! Accounts and notes live in two JSON documents on local disk. Note bodies
//! are Base64 encoded, which hides them from a casual glance but is not
//! encryption. Passwords and lock keys are stored as salted BLAKE3 digests.

pub mod account;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod notes;
pub mod store;
pub mod tooling;
