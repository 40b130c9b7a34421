// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Scrumboard Developers

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use scrumboard_server::{
    api::router,
    auth::TokenIssuer,
    config::{AppConfig, LOG_FORMAT_ENV},
    state::AppState,
    storage::{FileStorage, StoragePaths},
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let format = std::env::var(LOG_FORMAT_ENV).unwrap_or_default();
    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();

    let mut storage = FileStorage::new(StoragePaths::new(&config.data_dir));
    storage
        .initialize()
        .expect("Failed to initialize record storage");

    let state = AppState::new(storage, TokenIssuer::new(&config.jwt_secret));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, data_dir = %config.data_dir, "Scrumboard server listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
