// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! # Authentication Module
//!
//! Credential and token primitives for the API.
//!
//! ## Auth Flow
//!
//! 1. Client registers via `/user-auth/signup`; the password is stored as
//!    a bcrypt digest only.
//! 2. Client signs in via `/user-auth/signin` and receives a signed token
//!    binding its user id.
//! 3. Every other request carries the token in the `x-auth-token` header;
//!    the [`Auth`](extractor::Auth) extractor verifies it and resolves the
//!    caller identity before any handler logic runs.
//!
//! Tokens are stateless and carry no expiry claim; there is no server-side
//! session table and no revocation list.

pub mod error;
pub mod extractor;
pub mod password;
pub mod token;

pub use error::AuthError;
pub use extractor::{Auth, AuthenticatedUser, AUTH_HEADER};
pub use token::TokenIssuer;
