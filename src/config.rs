// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

//! # Runtime Configuration
//!
//! Configuration is read from the environment once at startup and passed
//! into the components that need it; nothing reads ambient state after
//! boot. In particular the token-signing secret is injected into the
//! token issuer's constructor so tests can swap it per instance.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for record storage | `./data` |
//! | `HOST` | Server bind address | `127.0.0.1` |
//! | `PORT` | Server bind port | `3000` |
//! | `JWT_SECRET` | Symmetric token-signing key | dev fallback (logged) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the record storage directory.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the token-signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the logging format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Fallback signing secret for local development only.
const DEV_JWT_SECRET: &str = "the_definition_of_insanity";

/// Resolved startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub jwt_secret: String,
}

impl AppConfig {
    /// Load configuration from the environment, applying defaults.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);
        let data_dir =
            env::var(DATA_DIR_ENV).unwrap_or_else(|_| crate::storage::paths::DATA_ROOT.to_string());

        let jwt_secret = env::var(JWT_SECRET_ENV).unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using the development fallback secret");
            DEV_JWT_SECRET.to_string()
        });

        Self {
            host,
            port,
            data_dir,
            jwt_secret,
        }
    }
}
