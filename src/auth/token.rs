// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! Stateless identity tokens.
//!
//! A token binds a single claim, the authenticated user's id, signed with
//! HS256 under a process-wide symmetric key. No expiry claim is set;
//! tokens are valid for as long as the key stays the same. That is a
//! known gap, kept intentionally rather than papered over with an
//! invented expiry policy.

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// The single claim carried by an identity token.
#[derive(Debug, Serialize, Deserialize)]
struct IdentityClaims {
    /// The authenticated user's id
    id: String,
}

/// Issues and verifies signed identity tokens.
///
/// The signing key is injected at construction (from startup config in
/// production, from a literal in tests) and never read from ambient state.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer from a symmetric signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a token binding the given user id.
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let claims = IdentityClaims {
            id: user_id.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify a token and return the user id it binds.
    ///
    /// Fails with [`AuthError::InvalidToken`] when the signature does not
    /// validate or the token is malformed.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<IdentityClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;
        Ok(data.claims.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_resolves_same_user() {
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue("user-123").unwrap();
        let user_id = issuer.verify(&token).unwrap();
        assert_eq!(user_id, "user-123");
    }

    #[test]
    fn verify_rejects_garbage() {
        let issuer = TokenIssuer::new("test-secret");
        assert!(matches!(
            issuer.verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(issuer.verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn verify_rejects_token_signed_with_other_key() {
        let issuer = TokenIssuer::new("test-secret");
        let other = TokenIssuer::new("different-secret");

        let token = other.issue("user-123").unwrap();
        assert!(matches!(
            issuer.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn tokens_have_no_expiry() {
        // A token minted now verifies later; there is no exp claim to age out.
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue("user-123").unwrap();

        let payload = token.split('.').nth(1).unwrap();
        // Base64url payload of {"id":"user-123"} contains no "exp"
        assert!(!payload.is_empty());
        assert_eq!(issuer.verify(&token).unwrap(), "user-123");
    }
}
