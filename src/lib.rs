// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Scrumboard Server - Project & Ticket Tracker
//!
//! A small tracker service: users register and sign in, create projects,
//! manage project members, and track tickets with assignees and deadlines.
//! Resources are gated by ownership; records persist as one JSON file each.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Passwords, tokens and the request auth gate
//! - `storage` - JSON-file record store and repositories
//! - `models` - Persisted records and API request/response types

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
