// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Password hashing primitive.
//!
//! Bcrypt with a fixed work factor. The digest embeds its own salt and
//! cost, so verification needs no external state. Strength rules (length,
//! character classes) are the caller's responsibility; see
//! [`validate_strength`].

use bcrypt::BcryptError;

/// Bcrypt work factor. Matches the cost the stored digests were created with.
pub const HASH_COST: u32 = 8;

/// Hash a plaintext password into a self-describing digest.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Verify a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}

/// Why a candidate password fails the strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthViolation {
    /// Shorter than six characters
    TooShort,
    /// Missing a lowercase letter, an uppercase letter, or a digit,
    /// or containing anything outside ASCII alphanumerics
    MissingCharacterClass,
}

/// Check the registration password rule: at least six characters, at least
/// one lowercase letter, one uppercase letter, and one digit, and nothing
/// but ASCII alphanumerics.
pub fn validate_strength(plaintext: &str) -> Result<(), StrengthViolation> {
    if plaintext.len() < 6 {
        return Err(StrengthViolation::TooShort);
    }

    let has_lower = plaintext.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = plaintext.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = plaintext.chars().any(|c| c.is_ascii_digit());
    let alnum_only = plaintext.chars().all(|c| c.is_ascii_alphanumeric());

    if has_lower && has_upper && has_digit && alnum_only {
        Ok(())
    } else {
        Err(StrengthViolation::MissingCharacterClass)
    }
}
