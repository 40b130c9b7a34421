// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenIssuer;
use crate::storage::FileStorage;

/// Shared application state: the record store behind a read/write lock
/// and the token issuer holding the startup-injected signing key.
///
/// Reads take the read lock; every mutating operation takes the write
/// lock for its whole check-then-act sequence, which serializes
/// uniqueness and ownership checks within this process.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<RwLock<FileStorage>>,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(storage: FileStorage, tokens: TokenIssuer) -> Self {
        Self {
            storage: Arc::new(RwLock::new(storage)),
            tokens,
        }
    }
}
