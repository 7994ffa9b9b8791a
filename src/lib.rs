// ABOUTME: Main library entry point for the Fitlog fitness tracking backend
// ABOUTME: Provides the REST API, storage layer, and authentication for the app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

#![deny(unsafe_code)]

//! # Fitlog Server
//!
//! REST backend for a consumer fitness-tracking application. Users register
//! and log in, manage workouts with nested exercises, and append daily
//! activities, body measurements, strength progress, and meals; a web
//! frontend renders dashboards and charts against this API.
//!
//! ## Architecture
//!
//! - **Models**: persisted entities and the create/update DTOs that form
//!   the validation boundary
//! - **Storage**: the repository trait and its in-memory implementation;
//!   sole authority for ids, timestamps, per-user scoping, and cascade
//!   delete
//! - **Auth**: JWT tokens and bcrypt credentials
//! - **Routes**: thin axum handlers - authenticate, validate, call storage,
//!   shape JSON
//! - **Server**: explicit resource bundle and router assembly
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitlog::auth::AuthManager;
//! use fitlog::config::ServerConfig;
//! use fitlog::server::{FitnessServer, ServerResources};
//! use fitlog::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> fitlog::errors::AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let auth_manager = AuthManager::new(
//!         config.auth.jwt_secret.clone().into_bytes(),
//!         config.auth.jwt_expiry_hours,
//!     );
//!     let resources = Arc::new(ServerResources::new(
//!         Arc::new(MemoryStorage::new()),
//!         auth_manager,
//!         config,
//!     ));
//!     FitnessServer::new(resources).run().await
//! }
//! ```

/// Common data models for users, workouts, and tracking logs
pub mod models;

/// Storage abstraction and the in-memory repository
pub mod storage;

/// JWT authentication and password hashing
pub mod auth;

/// Environment-based configuration management
pub mod config;

/// HTTP routes for the REST API
pub mod routes;

/// Server resources and router assembly
pub mod server;

/// Production logging and structured output
pub mod logging;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;
