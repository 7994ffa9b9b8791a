// ABOUTME: Workout route handlers for CRUD over workouts and their nested exercises
// ABOUTME: Joins workouts with exercises and enforces per-user ownership checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Workout routes.
//!
//! The storage layer's single-workout lookup is ownership-blind by design;
//! these handlers re-verify `workout.user_id` against the caller before
//! returning or deleting anything (404 for unknown ids, 403 for foreign
//! ones).

use crate::errors::AppError;
use crate::models::{Exercise, NewWorkout, Workout};
use crate::routes::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// A workout joined with its exercises, as the frontend consumes it
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutWithExercises {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<Exercise>,
}

/// Workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/workouts/:id",
                get(Self::handle_get).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Join one workout with its exercises
    async fn with_exercises(
        resources: &Arc<ServerResources>,
        workout: Workout,
    ) -> Result<WorkoutWithExercises, AppError> {
        let exercises = resources
            .storage
            .get_exercises_by_workout_id(workout.id)
            .await?;
        Ok(WorkoutWithExercises { workout, exercises })
    }

    /// Fetch a workout and verify it belongs to the caller
    async fn owned_workout(
        resources: &Arc<ServerResources>,
        workout_id: i64,
        user_id: i64,
    ) -> Result<Workout, AppError> {
        let workout = resources
            .storage
            .get_workout_by_id(workout_id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout not found"))?;

        if workout.user_id != user_id {
            return Err(AppError::permission_denied("Access denied"));
        }

        Ok(workout)
    }

    /// GET /api/workouts - the caller's workouts, each with its exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;

        let workouts = resources.storage.get_workouts(user.id).await?;
        let mut joined = Vec::with_capacity(workouts.len());
        for workout in workouts {
            joined.push(Self::with_exercises(&resources, workout).await?);
        }

        Ok((StatusCode::OK, Json(joined)).into_response())
    }

    /// POST /api/workouts - create a workout with nested exercises
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(new_workout): Json<NewWorkout>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        new_workout.validate()?;

        let exercise_count = new_workout.exercises.len();
        let workout = resources.storage.create_workout(user.id, new_workout).await?;
        info!(
            user_id = user.id,
            workout_id = workout.id,
            exercises = exercise_count,
            "Workout created"
        );

        let joined = Self::with_exercises(&resources, workout).await?;
        Ok((StatusCode::CREATED, Json(joined)).into_response())
    }

    /// GET /api/workouts/:id - a single owned workout with exercises
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let workout = Self::owned_workout(&resources, workout_id, user.id).await?;
        let joined = Self::with_exercises(&resources, workout).await?;
        Ok((StatusCode::OK, Json(joined)).into_response())
    }

    /// DELETE /api/workouts/:id - delete an owned workout, cascading to exercises
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(workout_id): Path<i64>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        Self::owned_workout(&resources, workout_id, user.id).await?;

        resources.storage.delete_workout(workout_id).await?;
        info!(user_id = user.id, workout_id, "Workout deleted");

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
