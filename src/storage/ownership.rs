// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Ownership checks for owner-gated mutations.
//!
//! Every resource that can be mutated has exactly one owning identity,
//! assigned at creation and never changed. Comparison is always on stored
//! user ids, never on display fields like usernames.

use crate::models::{Project, Ticket};

/// Trait for resources with a single owning identity.
pub trait Owned {
    /// Get the owner's user id.
    fn owner_id(&self) -> &str;

    /// Check whether the given user id owns this resource.
    fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id() == user_id
    }
}

impl Owned for Project {
    fn owner_id(&self) -> &str {
        &self.owner
    }
}

impl Owned for Ticket {
    fn owner_id(&self) -> &str {
        &self.creator
    }
}
