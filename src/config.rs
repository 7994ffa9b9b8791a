// ABOUTME: Environment-based configuration for deployment-specific settings
// ABOUTME: Parses ports, JWT settings, and the runtime environment from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Environment-based configuration.
//!
//! All settings come from environment variables with development-friendly
//! defaults. The one hard requirement is `FITLOG_JWT_SECRET` in production;
//! in development a random secret is generated with a warning, which means
//! tokens do not survive a restart.

use crate::errors::{AppError, AppResult};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::warn;

/// Default HTTP port when `FITLOG_HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default JWT expiry when `FITLOG_JWT_EXPIRY_HOURS` is unset
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Runtime environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for JWT tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Runtime environment
    pub environment: Environment,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable fails to parse, or if
    /// `FITLOG_JWT_SECRET` is missing in production
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("FITLOG_ENV").unwrap_or_default(),
        );

        let http_port = match env::var("FITLOG_HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid FITLOG_HTTP_PORT: {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let jwt_expiry_hours = match env::var("FITLOG_JWT_EXPIRY_HOURS") {
            Ok(raw) => {
                let hours = raw
                    .parse::<i64>()
                    .map_err(|e| AppError::config(format!("Invalid FITLOG_JWT_EXPIRY_HOURS: {e}")))?;
                if hours <= 0 {
                    return Err(AppError::config("FITLOG_JWT_EXPIRY_HOURS must be positive"));
                }
                hours
            }
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        let jwt_secret = match env::var("FITLOG_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if environment.is_production() => {
                return Err(AppError::config(
                    "FITLOG_JWT_SECRET is required in production",
                ));
            }
            _ => {
                warn!("FITLOG_JWT_SECRET not set; generating an ephemeral secret (tokens will not survive a restart)");
                generate_secret()
            }
        };

        Ok(Self {
            http_port,
            environment,
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours,
            },
        })
    }

    /// One-line summary for startup logging; never includes the secret
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} http_port={} jwt_expiry_hours={}",
            self.environment, self.http_port, self.auth.jwt_expiry_hours
        )
    }
}

/// Generate a random 64-character alphanumeric secret
fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
