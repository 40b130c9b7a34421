// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Ticket repository.
//!
//! One JSON file per ticket under `tickets/`. Creator, assignee, and
//! project filters scan the collection.

use crate::models::Ticket;

use super::super::{FileStorage, StorageError, StorageResult};

/// Repository for ticket records.
pub struct TicketRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> TicketRepository<'a> {
    /// Create a new TicketRepository.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    /// Check if a ticket exists.
    pub fn exists(&self, ticket_id: &str) -> bool {
        self.storage.exists(self.storage.paths().ticket(ticket_id))
    }

    /// Get a ticket by id, erroring when absent.
    pub fn get(&self, ticket_id: &str) -> StorageResult<Ticket> {
        let path = self.storage.paths().ticket(ticket_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Ticket {ticket_id}")));
        }
        self.storage.read_json(path)
    }

    /// Find a ticket by id, returning `None` when absent.
    pub fn find(&self, ticket_id: &str) -> StorageResult<Option<Ticket>> {
        if !self.exists(ticket_id) {
            return Ok(None);
        }
        self.storage
            .read_json(self.storage.paths().ticket(ticket_id))
            .map(Some)
    }

    /// Create a new ticket record.
    pub fn create(&self, ticket: &Ticket) -> StorageResult<()> {
        if self.exists(&ticket.id) {
            return Err(StorageError::AlreadyExists(format!("Ticket {}", ticket.id)));
        }
        self.storage
            .write_json(self.storage.paths().ticket(&ticket.id), ticket)
    }

    /// Update an existing ticket record.
    pub fn update(&self, ticket: &Ticket) -> StorageResult<()> {
        if !self.exists(&ticket.id) {
            return Err(StorageError::NotFound(format!("Ticket {}", ticket.id)));
        }
        self.storage
            .write_json(self.storage.paths().ticket(&ticket.id), ticket)
    }

    /// Delete a ticket record.
    pub fn delete(&self, ticket_id: &str) -> StorageResult<()> {
        if !self.exists(ticket_id) {
            return Err(StorageError::NotFound(format!("Ticket {ticket_id}")));
        }
        self.storage.delete(self.storage.paths().ticket(ticket_id))
    }

    /// List all tickets.
    pub fn list_all(&self) -> StorageResult<Vec<Ticket>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().tickets_dir(), "json")?;

        let mut tickets = Vec::new();
        for id in ids {
            if let Ok(ticket) = self.get(&id) {
                tickets.push(ticket);
            }
        }
        Ok(tickets)
    }

    /// List all tickets created by a user.
    pub fn list_created_by(&self, user_id: &str) -> StorageResult<Vec<Ticket>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|ticket| ticket.creator == user_id)
            .collect())
    }

    /// List all tickets where the user appears in the assignee set.
    pub fn list_assigned_to(&self, user_id: &str) -> StorageResult<Vec<Ticket>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|ticket| ticket.assignees.iter().any(|assignee| assignee == user_id))
            .collect())
    }

    /// List all tickets belonging to a project.
    pub fn list_in_project(&self, project_id: &str) -> StorageResult<Vec<Ticket>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|ticket| ticket.project == project_id)
            .collect())
    }
}
