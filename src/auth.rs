// ABOUTME: JWT-based user authentication and password hashing
// ABOUTME: Handles token generation, validation, and bcrypt credential checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! # Authentication
//!
//! HS256 JWT issue/validate plus bcrypt password hashing. Hashing and
//! verification run under `spawn_blocking` so the bcrypt work factor never
//! stalls the async executor.
//!
//! The storage layer has no notion of identity beyond the `user_id` key it
//! is handed; everything here stays at the route boundary.

use crate::errors::{AppError, AppResult};
use crate::models::User;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::task;

/// JWT claims for an authenticated user
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    /// Username, for log context without a storage round trip
    pub username: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authentication manager for JWT tokens and password credentials
#[derive(Clone)]
pub struct AuthManager {
    secret: Vec<u8>,
    token_expiry_hours: i64,
    bcrypt_cost: u32,
}

impl AuthManager {
    /// Create a new authentication manager with the default bcrypt cost
    #[must_use]
    pub fn new(secret: Vec<u8>, token_expiry_hours: i64) -> Self {
        Self {
            secret,
            token_expiry_hours,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt work factor (lowered in tests)
    #[must_use]
    pub const fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Generate a JWT token for a user
    ///
    /// # Errors
    /// Returns an error if JWT encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: self.token_expiry(now).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))
    }

    /// When a token issued at `now` will expire
    #[must_use]
    pub fn token_expiry(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::hours(self.token_expiry_hours)
    }

    /// Validate a JWT token and return its claims
    ///
    /// # Errors
    /// Returns `AUTH_EXPIRED` for an expired token and `AUTH_INVALID` for a
    /// malformed token or bad signature
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &DecodingKey::from_secret(&self.secret), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::auth_expired("Token has expired")
                }
                _ => AppError::auth_invalid(format!("Invalid token: {e}")),
            })
    }

    /// Hash a plaintext password on a blocking thread
    ///
    /// # Errors
    /// Returns an error if hashing fails or the blocking task is cancelled
    pub async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;
        task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verify a plaintext password against a stored hash on a blocking thread
    ///
    /// # Errors
    /// Returns an error if the blocking task is cancelled; a malformed hash
    /// verifies as `false` rather than leaking details to the caller
    pub async fn verify_password(&self, password: String, hash: String) -> AppResult<bool> {
        task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
            .map(|result| result.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: 7,
            username: "alice".to_owned(),
            password_hash: String::new(),
            first_name: None,
            last_name: None,
            age: None,
            height: None,
            weight: None,
            fitness_goal: None,
            activity_level: None,
            is_premium: false,
            created_at: Utc::now(),
        }
    }

    fn test_manager() -> AuthManager {
        AuthManager::new(b"test-secret-for-unit-tests".to_vec(), 24).with_bcrypt_cost(4)
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let manager = test_manager();
        let token = manager.generate_token(&test_user()).unwrap();
        let claims = manager.validate_token(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let manager = test_manager();
        let other = AuthManager::new(b"a-different-secret-entirely".to_vec(), 24);
        let token = other.generate_token(&test_user()).unwrap();
        assert!(manager.validate_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let manager = test_manager();
        assert!(manager.validate_token("not.a.token").is_err());
    }

    #[tokio::test]
    async fn password_hash_verifies() {
        let manager = test_manager();
        let hash = manager.hash_password("hunter2hunter2".to_owned()).await.unwrap();
        assert!(manager
            .verify_password("hunter2hunter2".to_owned(), hash.clone())
            .await
            .unwrap());
        assert!(!manager
            .verify_password("wrong-password".to_owned(), hash)
            .await
            .unwrap());
    }
}
