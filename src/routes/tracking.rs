// ABOUTME: Route handlers for the append-only tracking logs
// ABOUTME: List/create pairs for activities, body measurements, strength progress, and meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Tracking log routes.
//!
//! Four list/create pairs with identical shape: lists return the caller's
//! records most recent first (with an optional `limit` query parameter where
//! the store supports it), creates validate the payload and stamp
//! server-assigned id/user/date values. Entries are never updated or
//! deleted.

use crate::errors::AppError;
use crate::models::{NewActivity, NewBodyMeasurement, NewMeal, NewStrengthProgress};
use crate::routes::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters accepted by the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Truncate to the N most recent records
    pub limit: Option<usize>,
}

/// Tracking log routes
pub struct TrackingRoutes;

impl TrackingRoutes {
    /// Create all tracking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/activities",
                get(Self::handle_list_activities).post(Self::handle_create_activity),
            )
            .route(
                "/api/measurements",
                get(Self::handle_list_measurements).post(Self::handle_create_measurement),
            )
            .route(
                "/api/strength",
                get(Self::handle_list_strength).post(Self::handle_create_strength),
            )
            .route(
                "/api/meals",
                get(Self::handle_list_meals).post(Self::handle_create_meal),
            )
            .with_state(resources)
    }

    /// GET /api/activities?limit=N
    async fn handle_list_activities(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let activities = resources.storage.get_activities(user.id, query.limit).await?;
        Ok((StatusCode::OK, Json(activities)).into_response())
    }

    /// POST /api/activities
    async fn handle_create_activity(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(activity): Json<NewActivity>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        activity.validate()?;
        let record = resources.storage.create_activity(user.id, activity).await?;
        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// GET /api/measurements?limit=N
    async fn handle_list_measurements(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let measurements = resources
            .storage
            .get_body_measurements(user.id, query.limit)
            .await?;
        Ok((StatusCode::OK, Json(measurements)).into_response())
    }

    /// POST /api/measurements
    async fn handle_create_measurement(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(measurement): Json<NewBodyMeasurement>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        measurement.validate()?;
        let record = resources
            .storage
            .create_body_measurement(user.id, measurement)
            .await?;
        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// GET /api/strength - full history, no limit parameter
    async fn handle_list_strength(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let progress = resources.storage.get_strength_progress(user.id).await?;
        Ok((StatusCode::OK, Json(progress)).into_response())
    }

    /// POST /api/strength
    async fn handle_create_strength(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(progress): Json<NewStrengthProgress>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        progress.validate()?;
        let record = resources
            .storage
            .create_strength_progress(user.id, progress)
            .await?;
        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// GET /api/meals?limit=N
    async fn handle_list_meals(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let meals = resources.storage.get_meals(user.id, query.limit).await?;
        Ok((StatusCode::OK, Json(meals)).into_response())
    }

    /// POST /api/meals
    async fn handle_create_meal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(meal): Json<NewMeal>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        meal.validate()?;
        let record = resources.storage.create_meal(user.id, meal).await?;
        Ok((StatusCode::CREATED, Json(record)).into_response())
    }
}
