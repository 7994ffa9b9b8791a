// ABOUTME: Structured logging initialization for the server process
// ABOUTME: Wires tracing-subscriber with an env-filter driven by RUST_LOG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Production logging setup.
//!
//! Uses `tracing_subscriber` with an [`EnvFilter`] so operators can tune
//! verbosity per module via `RUST_LOG` (e.g. `RUST_LOG=fitlog=debug,info`).

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber from the environment
///
/// # Errors
/// Returns an error if a subscriber was already installed
pub fn init_from_env() -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))
}
