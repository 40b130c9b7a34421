// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Project repository.
//!
//! One JSON file per project under `projects/`. Ownership and membership
//! filters scan the collection.

use crate::models::Project;

use super::super::{FileStorage, StorageError, StorageResult};

/// Repository for project records.
pub struct ProjectRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new ProjectRepository.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    /// Check if a project exists.
    pub fn exists(&self, project_id: &str) -> bool {
        self.storage
            .exists(self.storage.paths().project(project_id))
    }

    /// Get a project by id, erroring when absent.
    pub fn get(&self, project_id: &str) -> StorageResult<Project> {
        let path = self.storage.paths().project(project_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Project {project_id}")));
        }
        self.storage.read_json(path)
    }

    /// Find a project by id, returning `None` when absent.
    pub fn find(&self, project_id: &str) -> StorageResult<Option<Project>> {
        if !self.exists(project_id) {
            return Ok(None);
        }
        self.storage
            .read_json(self.storage.paths().project(project_id))
            .map(Some)
    }

    /// Create a new project record.
    pub fn create(&self, project: &Project) -> StorageResult<()> {
        if self.exists(&project.id) {
            return Err(StorageError::AlreadyExists(format!(
                "Project {}",
                project.id
            )));
        }
        self.storage
            .write_json(self.storage.paths().project(&project.id), project)
    }

    /// Update an existing project record.
    pub fn update(&self, project: &Project) -> StorageResult<()> {
        if !self.exists(&project.id) {
            return Err(StorageError::NotFound(format!("Project {}", project.id)));
        }
        self.storage
            .write_json(self.storage.paths().project(&project.id), project)
    }

    /// Delete a project record.
    ///
    /// Tickets referencing this project are left in place; their
    /// back-reference dangles and is dropped by readers on resolution.
    pub fn delete(&self, project_id: &str) -> StorageResult<()> {
        if !self.exists(project_id) {
            return Err(StorageError::NotFound(format!("Project {project_id}")));
        }
        self.storage.delete(self.storage.paths().project(project_id))
    }

    /// List all projects.
    pub fn list_all(&self) -> StorageResult<Vec<Project>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().projects_dir(), "json")?;

        let mut projects = Vec::new();
        for id in ids {
            if let Ok(project) = self.get(&id) {
                projects.push(project);
            }
        }
        Ok(projects)
    }

    /// List all projects owned by a user.
    pub fn list_owned_by(&self, user_id: &str) -> StorageResult<Vec<Project>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|project| project.owner == user_id)
            .collect())
    }

    /// List all projects where the user appears in the member set.
    pub fn list_with_member(&self, user_id: &str) -> StorageResult<Vec<Project>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|project| project.members.iter().any(|member| member == user_id))
            .collect())
    }
}
