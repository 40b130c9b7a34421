// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Per-collection repositories over the record store.

pub mod projects;
pub mod tickets;
pub mod users;

pub use projects::ProjectRepository;
pub use tickets::TicketRepository;
pub use users::UserRepository;
