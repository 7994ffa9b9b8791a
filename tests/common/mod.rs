// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides resource bundles, routers, and user registration helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code, missing_docs)]

//! Shared test utilities for the Fitlog server.

use crate::helpers::axum_test::AxumTestRequest;

use axum::Router;
use fitlog::auth::AuthManager;
use fitlog::config::{AuthConfig, Environment, ServerConfig};
use fitlog::routes::{AuthResponse, RegisterRequest};
use fitlog::server::{FitnessServer, ServerResources};
use fitlog::storage::MemoryStorage;
use std::sync::Arc;

/// Low bcrypt cost to keep registration fast in tests
const TEST_BCRYPT_COST: u32 = 4;

/// Build a resource bundle over a fresh in-memory store
pub fn create_test_resources() -> Arc<ServerResources> {
    let config = ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        auth: AuthConfig {
            jwt_secret: "fitlog-test-secret".to_owned(),
            jwt_expiry_hours: 1,
        },
    };

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.clone().into_bytes(),
        config.auth.jwt_expiry_hours,
    )
    .with_bcrypt_cost(TEST_BCRYPT_COST);

    Arc::new(ServerResources::new(
        Arc::new(MemoryStorage::new()),
        auth_manager,
        config,
    ))
}

/// Build the full application router over fresh resources
pub fn create_test_router() -> Router {
    FitnessServer::router(create_test_resources())
}

/// A minimal registration payload for the given username
pub fn register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_owned(),
        password: "correct-horse-battery".to_owned(),
        first_name: None,
        last_name: None,
        age: None,
        height: None,
        weight: None,
        fitness_goal: None,
        activity_level: None,
    }
}

/// Register a user through the API and return the auth response
pub async fn register_user(router: &Router, username: &str) -> AuthResponse {
    let response = AxumTestRequest::post("/api/register")
        .json(&register_request(username))
        .send(router.clone())
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);
    response.json()
}

/// Register a user and return a ready-to-use bearer header value
pub async fn register_and_bearer(router: &Router, username: &str) -> String {
    let auth = register_user(router, username).await;
    format!("Bearer {}", auth.token)
}
