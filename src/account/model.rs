//! Persisted user record.

use crate::store::null_as_default;
use serde::{Deserialize, Serialize};

/// Optional profile details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// One entry of the users document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub login_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: Profile,
}

/// Account summary shown by `account info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub username: String,
    pub created_at: String,
    pub last_login: Option<String>,
    pub login_count: u64,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl UserStats {
    pub fn new(username: &str, record: &UserRecord) -> Self {
        Self {
            username: username.to_string(),
            created_at: record.created_at.clone(),
            last_login: record.last_login.clone(),
            login_count: record.login_count,
            email: record.profile.email.clone(),
            bio: record.profile.bio.clone(),
        }
    }
}
