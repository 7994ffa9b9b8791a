// ABOUTME: Server binary entry point for the Fitlog REST backend
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! # Fitlog Server Binary
//!
//! Starts the fitness-tracking REST API with an in-memory store. All state
//! lives in the process; restarting the server clears user data, which is
//! acceptable for this non-durable design.

use anyhow::Result;
use clap::Parser;
use fitlog::{
    auth::AuthManager,
    config::ServerConfig,
    logging,
    server::{FitnessServer, ServerResources},
    storage::MemoryStorage,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fitlog-server")]
#[command(about = "Fitlog - REST backend for a consumer fitness tracking app")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first, so config loading can warn about a generated secret
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Fitlog server");
    info!("{}", config.summary());

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.clone().into_bytes(),
        config.auth.jwt_expiry_hours,
    );

    let resources = Arc::new(ServerResources::new(
        Arc::new(MemoryStorage::new()),
        auth_manager,
        config,
    ));

    info!("Ready to serve fitness data");
    FitnessServer::new(resources).run().await?;

    Ok(())
}
