//! User repository over the users document.
//!
//! All lookups go through [`canonical_username`], so `Alice` and `alice` name
//! the same account.

use crate::account::model::{Profile, UserRecord, UserStats};
use crate::account::validation::{canonical_username, AccountPolicy};
use crate::codec;
use crate::error::AccountError;
use crate::notes::timestamp_now;
use crate::store::{self, Document, DocumentStore};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

pub struct UserRepository {
    store: Arc<dyn DocumentStore<UserRecord>>,
    policy: AccountPolicy,
    write_lock: Mutex<()>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore<UserRecord>>, policy: AccountPolicy) -> Self {
        Self {
            store,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    fn transact<R, F>(&self, mutation: F) -> Result<R, AccountError>
    where
        F: FnOnce(&mut Document<UserRecord>) -> Result<R, AccountError>,
    {
        let _guard = self.write_lock.lock();
        store::transact(self.store.as_ref(), mutation)
    }

    /// Create an account; returns the canonical username
    pub fn register(&self, username: &str, password: &str) -> Result<String, AccountError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AccountError::EmptyInput);
        }
        let name = canonical_username(username);
        self.policy.validate_username(&name)?;
        self.policy.validate_password(password)?;

        self.transact(|doc| {
            if doc.contains_key(&name) || self.store.is_unreadable(&name) {
                return Err(AccountError::UsernameTaken);
            }
            doc.insert(
                name.clone(),
                UserRecord {
                    password_hash: codec::hash_secret(password),
                    created_at: timestamp_now(),
                    last_login: None,
                    login_count: 0,
                    profile: Profile::default(),
                },
            );
            Ok(())
        })?;
        info!(user = %name, "account registered");
        Ok(name)
    }

    /// Verify credentials and record the login; returns the canonical username
    pub fn login(&self, username: &str, password: &str) -> Result<String, AccountError> {
        let name = canonical_username(username);
        self.transact(|doc| {
            let record = doc.get_mut(&name).ok_or(AccountError::UnknownUser)?;
            if !codec::verify_secret(password, &record.password_hash) {
                return Err(AccountError::WrongPassword);
            }
            record.last_login = Some(timestamp_now());
            record.login_count += 1;
            Ok(())
        })
        .map_err(|e| {
            if matches!(e, AccountError::WrongPassword) {
                warn!(user = %name, "login rejected");
            }
            e
        })?;
        info!(user = %name, "login recorded");
        Ok(name)
    }

    /// Check credentials without touching the document
    pub fn verify_password(&self, username: &str, password: &str) -> bool {
        self.store
            .load()
            .get(&canonical_username(username))
            .is_some_and(|record| codec::verify_secret(password, &record.password_hash))
    }

    pub fn username_exists(&self, username: &str) -> bool {
        let name = canonical_username(username);
        self.store.load().contains_key(&name) || self.store.is_unreadable(&name)
    }

    pub fn info(&self, username: &str) -> Result<UserRecord, AccountError> {
        self.store
            .load()
            .remove(&canonical_username(username))
            .ok_or(AccountError::UnknownUser)
    }

    pub fn stats(&self, username: &str) -> Result<UserStats, AccountError> {
        let name = canonical_username(username);
        let record = self.info(&name)?;
        Ok(UserStats::new(&name, &record))
    }

    /// Update whichever profile fields are given
    pub fn update_profile(
        &self,
        username: &str,
        email: Option<String>,
        bio: Option<String>,
    ) -> Result<Profile, AccountError> {
        let name = canonical_username(username);
        let profile = self.transact(|doc| {
            let record = doc.get_mut(&name).ok_or(AccountError::UnknownUser)?;
            if email.is_some() {
                record.profile.email = email;
            }
            if bio.is_some() {
                record.profile.bio = bio;
            }
            Ok(record.profile.clone())
        })?;
        info!(user = %name, "profile updated");
        Ok(profile)
    }

    pub fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AccountError> {
        let name = canonical_username(username);
        self.transact(|doc| {
            let record = doc.get_mut(&name).ok_or(AccountError::UnknownUser)?;
            if !codec::verify_secret(old_password, &record.password_hash) {
                return Err(AccountError::WrongPassword);
            }
            self.policy.validate_password(new_password)?;
            record.password_hash = codec::hash_secret(new_password);
            Ok(())
        })?;
        info!(user = %name, "password changed");
        Ok(())
    }

    /// Remove an account after confirming its password
    pub fn delete(&self, username: &str, password: &str) -> Result<(), AccountError> {
        let name = canonical_username(username);
        self.transact(|doc| {
            let record = doc.get(&name).ok_or(AccountError::UnknownUser)?;
            if !codec::verify_secret(password, &record.password_hash) {
                return Err(AccountError::WrongPassword);
            }
            doc.remove(&name);
            Ok(())
        })?;
        info!(user = %name, "account deleted");
        Ok(())
    }

    /// All usernames in sorted order
    pub fn list_usernames(&self) -> Vec<String> {
        self.store.load().into_keys().collect()
    }
}
