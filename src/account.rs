//! Accounts
//!
//! Registration, login, and profile management over the users document. The
//! notes side only relies on [`UserRepository::verify_password`] and
//! [`UserRepository::username_exists`].

pub mod model;
pub mod repository;
pub mod validation;

pub use model::{Profile, UserRecord, UserStats};
pub use repository::UserRepository;
pub use validation::{canonical_username, AccountPolicy};
