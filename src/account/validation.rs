//! Username and password rules.

use crate::error::AccountError;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

fn default_min_username_length() -> usize {
    3
}

fn default_min_password_length() -> usize {
    6
}

/// Length limits applied at registration and password change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    #[serde(default = "default_min_username_length")]
    pub min_username_length: usize,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            min_username_length: default_min_username_length(),
            min_password_length: default_min_password_length(),
        }
    }
}

/// Canonical form of a username: NFKC, trimmed, lowercased
pub fn canonical_username(username: &str) -> String {
    username.nfkc().collect::<String>().trim().to_lowercase()
}

impl AccountPolicy {
    /// Validate an already canonicalized username
    pub fn validate_username(&self, username: &str) -> Result<(), AccountError> {
        if username.is_empty() {
            return Err(AccountError::EmptyInput);
        }
        if username.chars().count() < self.min_username_length {
            return Err(AccountError::InvalidUsername(format!(
                "must be at least {} characters",
                self.min_username_length
            )));
        }
        if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(AccountError::InvalidUsername(
                "only letters, digits and underscores are allowed".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_password(&self, password: &str) -> Result<(), AccountError> {
        if password.is_empty() {
            return Err(AccountError::EmptyInput);
        }
        if password.chars().count() < self.min_password_length {
            return Err(AccountError::PasswordTooShort {
                min: self.min_password_length,
            });
        }
        Ok(())
    }
}
