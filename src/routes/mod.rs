// ABOUTME: Route module organization for the Fitlog HTTP endpoints
// ABOUTME: Domain routers plus the shared bearer-token authentication helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Route modules, organized by domain. Each module owns a router over
//! `Arc<ServerResources>` with thin handlers: authenticate, validate,
//! call the storage layer, shape the JSON response.
//!
//! Authentication (401) and ownership checks (403) happen here, never in
//! the storage layer.

/// Health check routes
pub mod health;

/// Registration, login, profile, and premium account routes
pub mod auth;

/// Workout CRUD with nested exercises
pub mod workouts;

/// Append-only tracking logs: activities, measurements, strength, meals
pub mod tracking;

/// Premium-gated insight endpoints (canned placeholder data)
pub mod insights;

pub use auth::{AuthResponse, AuthRoutes, AuthService, LoginRequest, RegisterRequest};
pub use health::HealthRoutes;
pub use insights::InsightRoutes;
pub use tracking::TrackingRoutes;
pub use workouts::{WorkoutRoutes, WorkoutWithExercises};

use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::server::ServerResources;
use axum::http::{header, HeaderMap};
use std::sync::Arc;

/// Resolve the authenticated user from the `Authorization` header.
///
/// Validates the bearer token and loads the user record, so handlers always
/// see current profile data (premium flag included) rather than stale claims.
pub(crate) async fn authenticate(
    headers: &HeaderMap,
    resources: &Arc<ServerResources>,
) -> AppResult<User> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::auth_required("Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be a bearer token"))?;

    let claims = resources.auth_manager.validate_token(token)?;

    resources
        .storage
        .get_user(claims.sub)
        .await?
        .ok_or_else(|| AppError::auth_invalid("Token references a user that no longer exists"))
}
