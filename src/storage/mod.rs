// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! # Storage Module
//!
//! Persistent storage as plain JSON files, one record per file.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//!   users/{user_id}.json
//!   projects/{project_id}.json
//!   tickets/{ticket_id}.json
//! ```
//!
//! The three collections are independent record sets. Referential fields
//! (project owner, ticket creator, member/assignee sets, the ticket's
//! project back-reference) store raw ids with no foreign-key enforcement;
//! repositories and handlers check existence before dereferencing and drop
//! ids that no longer resolve.

pub mod fs;
pub mod ownership;
pub mod paths;
pub mod repository;

pub use fs::{FileStorage, StorageError, StorageResult};
pub use ownership::Owned;
pub use paths::StoragePaths;
pub use repository::{ProjectRepository, TicketRepository, UserRepository};
