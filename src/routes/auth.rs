// ABOUTME: User authentication route handlers for registration, login, and profile
// ABOUTME: REST endpoints for account creation, credential checks, and premium upgrades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Authentication and account routes.
//!
//! Registration hashes the password with bcrypt before anything reaches the
//! storage layer; the duplicate-username case surfaces as 409 from the
//! store's atomic uniqueness check rather than a check-then-act race here.

use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, UpdateUserProfile, User};
use crate::routes::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Minimum accepted username length
const MIN_USERNAME_LEN: usize = 3;
/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 8;

/// Registration request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub fitness_goal: Option<String>,
    pub activity_level: Option<String>,
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response returned by register and login
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: String,
    pub user: User,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    /// Creates a new authentication service
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle user registration
    ///
    /// # Errors
    /// Returns `INVALID_INPUT` for weak credentials or bad profile fields,
    /// and `RESOURCE_ALREADY_EXISTS` for a taken username
    #[tracing::instrument(skip(self, request), fields(route = "register"))]
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        info!("User registration attempt");

        if request.username.trim().len() < MIN_USERNAME_LEN {
            return Err(AppError::invalid_input(format!(
                "username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::invalid_input(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let profile = UpdateUserProfile {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            age: request.age,
            height: request.height,
            weight: request.weight,
            fitness_goal: request.fitness_goal.clone(),
            activity_level: request.activity_level.clone(),
        };
        profile.validate()?;

        let password_hash = self
            .resources
            .auth_manager
            .hash_password(request.password)
            .await?;

        // The store rejects duplicate usernames atomically; no pre-check here
        let user = self
            .resources
            .storage
            .create_user(NewUser {
                username: request.username.trim().to_owned(),
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                age: request.age,
                height: request.height,
                weight: request.weight,
                fitness_goal: request.fitness_goal,
                activity_level: request.activity_level,
            })
            .await?;

        info!(user_id = user.id, "User registered successfully");
        self.auth_response(user)
    }

    /// Handle user login
    ///
    /// # Errors
    /// Returns `AUTH_INVALID` when the username or password does not match
    #[tracing::instrument(skip(self, request), fields(route = "login"))]
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        debug!("User login attempt");

        let user = self
            .resources
            .storage
            .get_user_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Invalid username or password"))?;

        let is_valid = self
            .resources
            .auth_manager
            .verify_password(request.password, user.password_hash.clone())
            .await?;

        if !is_valid {
            debug!(user_id = user.id, "Login failed: password mismatch");
            return Err(AppError::auth_invalid("Invalid username or password"));
        }

        info!(user_id = user.id, "User logged in successfully");
        self.auth_response(user)
    }

    /// Issue a token and wrap it with the user record
    fn auth_response(&self, user: User) -> AppResult<AuthResponse> {
        let token = self.resources.auth_manager.generate_token(&user)?;
        let expires_at = self.resources.auth_manager.token_expiry(Utc::now());
        Ok(AuthResponse {
            token,
            expires_at: expires_at.to_rfc3339(),
            user,
        })
    }
}

/// Authentication and account routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/register", post(Self::handle_register))
            .route("/api/login", post(Self::handle_login))
            .route("/api/user", get(Self::handle_current_user))
            .route("/api/profile", put(Self::handle_update_profile))
            .route("/api/premium/upgrade", post(Self::handle_premium_upgrade))
            .with_state(resources)
    }

    /// POST /api/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// POST /api/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).login(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// GET /api/user - the authenticated user's record
    async fn handle_current_user(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// PUT /api/profile - shallow-merge profile fields onto the caller
    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(profile): Json<UpdateUserProfile>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        profile.validate()?;

        let updated = resources
            .storage
            .update_user_profile(user.id, profile)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok((StatusCode::OK, Json(updated)).into_response())
    }

    /// POST /api/premium/upgrade - flip the premium flag for the caller
    async fn handle_premium_upgrade(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;

        let updated = resources
            .storage
            .set_premium(user.id, true)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = updated.id, "User upgraded to premium");
        Ok((StatusCode::OK, Json(updated)).into_response())
    }
}
