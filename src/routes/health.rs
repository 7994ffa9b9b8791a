// ABOUTME: Health check route for liveness probes
// ABOUTME: Returns service name, version, and status without authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Health check route.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health routes
    pub fn routes() -> Router {
        Router::new().route("/api/health", get(Self::handle_health))
    }

    /// GET /api/health
    async fn handle_health() -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            })),
        )
    }
}
