// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! User repository.
//!
//! One JSON file per user under `users/`. Username and email lookups scan
//! the collection; there is no secondary index, matching the lookup
//! semantics of the upstream record store.

use crate::models::User;

use super::super::{FileStorage, StorageError, StorageResult};

/// Repository for user records.
pub struct UserRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    /// Check if a user exists.
    pub fn exists(&self, user_id: &str) -> bool {
        self.storage.exists(self.storage.paths().user(user_id))
    }

    /// Get a user by id, erroring when absent.
    pub fn get(&self, user_id: &str) -> StorageResult<User> {
        let path = self.storage.paths().user(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("User {user_id}")));
        }
        self.storage.read_json(path)
    }

    /// Find a user by id, returning `None` when absent.
    pub fn find(&self, user_id: &str) -> StorageResult<Option<User>> {
        if !self.exists(user_id) {
            return Ok(None);
        }
        self.storage
            .read_json(self.storage.paths().user(user_id))
            .map(Some)
    }

    /// Create a new user record.
    pub fn create(&self, user: &User) -> StorageResult<()> {
        if self.exists(&user.id) {
            return Err(StorageError::AlreadyExists(format!("User {}", user.id)));
        }
        self.storage
            .write_json(self.storage.paths().user(&user.id), user)
    }

    /// Update an existing user record.
    pub fn update(&self, user: &User) -> StorageResult<()> {
        if !self.exists(&user.id) {
            return Err(StorageError::NotFound(format!("User {}", user.id)));
        }
        self.storage
            .write_json(self.storage.paths().user(&user.id), user)
    }

    /// Delete a user record.
    pub fn delete(&self, user_id: &str) -> StorageResult<()> {
        if !self.exists(user_id) {
            return Err(StorageError::NotFound(format!("User {user_id}")));
        }
        self.storage.delete(self.storage.paths().user(user_id))
    }

    /// List all users.
    pub fn list_all(&self) -> StorageResult<Vec<User>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().users_dir(), "json")?;

        let mut users = Vec::new();
        for id in ids {
            if let Ok(user) = self.get(&id) {
                users.push(user);
            }
        }
        Ok(users)
    }

    /// Find a user by username.
    pub fn find_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .list_all()?
            .into_iter()
            .find(|user| user.username == username))
    }

    /// Find a user by email.
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        Ok(self.list_all()?.into_iter().find(|user| user.email == email))
    }

    /// Resolve a list of usernames to user ids.
    ///
    /// Unknown usernames are silently dropped; duplicates resolve to a
    /// single id so callers can rely on set semantics.
    pub fn resolve_usernames(&self, usernames: &[String]) -> StorageResult<Vec<String>> {
        let mut ids = Vec::new();
        for username in usernames {
            if let Some(user) = self.find_by_username(username)? {
                if !ids.contains(&user.id) {
                    ids.push(user.id);
                }
            }
        }
        Ok(ids)
    }

    /// Resolve a list of user ids back to usernames, dropping dangling ids.
    pub fn usernames_for(&self, user_ids: &[String]) -> StorageResult<Vec<String>> {
        let mut usernames = Vec::new();
        for id in user_ids {
            if let Some(user) = self.find(id)? {
                usernames.push(user.username);
            }
        }
        Ok(usernames)
    }
}
