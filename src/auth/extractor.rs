// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Axum extractor for authenticated callers.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(caller): Auth) -> impl IntoResponse {
//!     // caller.user_id is the verified identity
//! }
//! ```
//!
//! This is the only place token verification happens; no handler derives
//! the caller identity on its own.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::AuthError;
use crate::state::AppState;

/// Request header carrying the identity token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// The caller identity resolved from a verified token, valid for the
/// duration of one operation.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Id of the user the token was issued to
    pub user_id: String,
}

/// Extractor that rejects the request with 401 before any handler logic
/// when no valid token is present.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Tests (and any future middleware) may pre-populate the caller
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let token = parts
            .headers
            .get(AUTH_HEADER)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;

        let user_id = state.tokens.verify(token.trim())?;

        Ok(Auth(AuthenticatedUser { user_id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenIssuer;
    use crate::storage::{FileStorage, StoragePaths};
    use axum::http::Request;
    use tempfile::TempDir;

    fn create_test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize");
        let state = AppState::new(storage, TokenIssuer::new("test-secret"));
        (state, dir)
    }

    #[tokio::test]
    async fn extractor_requires_token_header() {
        let (state, _dir) = create_test_state();
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn extractor_accepts_issued_token() {
        let (state, _dir) = create_test_state();
        let token = state.tokens.issue("user-123").unwrap();

        let mut parts = Request::builder()
            .uri("/test")
            .header(AUTH_HEADER, token)
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0.user_id, "user-123");
    }

    #[tokio::test]
    async fn extractor_rejects_tampered_token() {
        let (state, _dir) = create_test_state();
        let token = TokenIssuer::new("other-secret").issue("user-123").unwrap();

        let mut parts = Request::builder()
            .uri("/test")
            .header(AUTH_HEADER, token)
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn extractor_prefers_extensions() {
        let (state, _dir) = create_test_state();
        let mut parts = Request::builder()
            .uri("/test")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        parts.extensions.insert(AuthenticatedUser {
            user_id: "preset-user".to_string(),
        });

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0.user_id, "preset-user");
    }
}
