// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Filesystem-backed record store.
//!
//! Records are plain JSON files, one per record, grouped by collection
//! directory (see [`StoragePaths`]). Writes go through a temp file and an
//! atomic rename so a crash never leaves a half-written record behind.
//! There is no cross-record transaction support; callers perform their
//! existence checks immediately before mutating.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use super::StoragePaths;

/// Error type for record store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Record not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Record already exists
    #[error("already exists: {0}")]
    AlreadyExists(String),
    /// Storage not initialized
    #[error("storage not initialized")]
    NotInitialized,
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// JSON-file record store for the three collections (users, projects, tickets).
#[derive(Debug)]
pub struct FileStorage {
    paths: StoragePaths,
    initialized: bool,
}

impl FileStorage {
    /// Create a new FileStorage instance.
    ///
    /// Does NOT create the directory structure. Call `initialize()` first.
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            paths,
            initialized: false,
        }
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Initialize the storage directory structure.
    ///
    /// Creates the per-collection directories. Safe to call multiple times.
    pub fn initialize(&mut self) -> StorageResult<()> {
        let dirs = [
            self.paths.users_dir(),
            self.paths.projects_dir(),
            self.paths.tickets_dir(),
        ];

        for dir in dirs {
            fs::create_dir_all(&dir)?;
        }

        self.initialized = true;
        Ok(())
    }

    // ========== Generic JSON Operations ==========

    /// Read a JSON file and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StorageResult<T> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Write a JSON file (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Check if a record file exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    /// Delete a record file.
    pub fn delete(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }
        fs::remove_file(path.as_ref())?;
        Ok(())
    }

    /// List the ids (file stems) of all records in a collection directory.
    pub fn list_files(&self, dir: impl AsRef<Path>, extension: &str) -> StorageResult<Vec<String>> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == extension {
                        if let Some(stem) = path.file_stem() {
                            if let Some(id) = stem.to_str() {
                                ids.push(id.to_string());
                            }
                        }
                    }
                }
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Record {
        id: String,
        value: i32,
    }

    fn test_storage() -> (FileStorage, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize");
        (storage, dir)
    }

    #[test]
    fn operations_fail_before_initialize() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(StoragePaths::new(dir.path()));

        let result: StorageResult<Record> = storage.read_json(storage.paths().user("u1"));
        assert!(matches!(result, Err(StorageError::NotInitialized)));
    }

    #[test]
    fn write_then_read_round_trips() {
        let (storage, _dir) = test_storage();
        let record = Record {
            id: "u1".into(),
            value: 7,
        };

        storage
            .write_json(storage.paths().user("u1"), &record)
            .unwrap();
        let loaded: Record = storage.read_json(storage.paths().user("u1")).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let (storage, _dir) = test_storage();
        let record = Record {
            id: "u1".into(),
            value: 1,
        };
        storage
            .write_json(storage.paths().user("u1"), &record)
            .unwrap();

        assert!(!storage.paths().user("u1").with_extension("tmp").exists());
    }

    #[test]
    fn list_files_returns_ids() {
        let (storage, _dir) = test_storage();
        for id in ["a", "b", "c"] {
            let record = Record {
                id: id.into(),
                value: 0,
            };
            storage
                .write_json(storage.paths().project(id), &record)
                .unwrap();
        }

        let mut ids = storage
            .list_files(storage.paths().projects_dir(), "json")
            .unwrap();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn list_files_on_missing_dir_is_empty() {
        let (storage, dir) = test_storage();
        let ids = storage
            .list_files(dir.path().join("nothing-here"), "json")
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn delete_removes_record() {
        let (storage, _dir) = test_storage();
        let record = Record {
            id: "t1".into(),
            value: 0,
        };
        storage
            .write_json(storage.paths().ticket("t1"), &record)
            .unwrap();
        storage.delete(storage.paths().ticket("t1")).unwrap();
        assert!(!storage.exists(storage.paths().ticket("t1")));
    }
}
