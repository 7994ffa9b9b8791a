// ABOUTME: Server assembly - shared resources, router construction, and serving
// ABOUTME: Bundles storage, auth, and config into ServerResources and runs axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Server assembly.
//!
//! [`ServerResources`] is the explicitly constructed dependency bundle passed
//! by reference into every router: one storage repository, one auth manager,
//! one config. There are no module-level singletons; the one instance is
//! created in `main` (or per test).

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::routes::{AuthRoutes, HealthRoutes, InsightRoutes, TrackingRoutes, WorkoutRoutes};
use crate::storage::Storage;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared resources handed to every route handler
pub struct ServerResources {
    /// Entity repository
    pub storage: Arc<dyn Storage>,
    /// JWT and password management
    pub auth_manager: AuthManager,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the server dependencies
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, auth_manager: AuthManager, config: ServerConfig) -> Self {
        Self {
            storage,
            auth_manager,
            config,
        }
    }
}

/// The Fitlog HTTP server
pub struct FitnessServer {
    resources: Arc<ServerResources>,
}

impl FitnessServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AuthRoutes::routes(resources.clone()))
            .merge(WorkoutRoutes::routes(resources.clone()))
            .merge(TrackingRoutes::routes(resources.clone()))
            .merge(InsightRoutes::routes(resources))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(self) -> AppResult<()> {
        let port = self.resources.config.http_port;
        let app = Self::router(self.resources);

        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind port {port}: {e}")))?;
        info!("HTTP server listening on port {port}");

        axum::serve(listener, app)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))
    }
}
