// ABOUTME: Premium-gated insight endpoints serving placeholder plan and report data
// ABOUTME: Provides the AI workout plan and weekly report routes with canned payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Premium insight routes.
//!
//! Both endpoints return hardcoded placeholder payloads; no analytics run
//! anywhere in this service. The only real logic is the premium gate: free
//! accounts get 403.

use crate::errors::AppError;
use crate::models::User;
use crate::routes::authenticate;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Premium insight routes
pub struct InsightRoutes;

impl InsightRoutes {
    /// Create all insight routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai/workout-plan", get(Self::handle_workout_plan))
            .route("/api/report/weekly", get(Self::handle_weekly_report))
            .with_state(resources)
    }

    fn require_premium(user: &User) -> Result<(), AppError> {
        if user.is_premium {
            Ok(())
        } else {
            Err(AppError::permission_denied("Premium subscription required"))
        }
    }

    /// GET /api/ai/workout-plan - placeholder personalized plan
    async fn handle_workout_plan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        Self::require_premium(&user)?;
        Ok((StatusCode::OK, Json(Self::workout_plan())).into_response())
    }

    /// GET /api/report/weekly - placeholder progress report
    async fn handle_weekly_report(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        Self::require_premium(&user)?;
        Ok((StatusCode::OK, Json(Self::weekly_report())).into_response())
    }

    /// Canned workout plan payload
    fn workout_plan() -> Value {
        json!({
            "name": "AI Custom Plan",
            "description": "Personalized plan based on your goals and fitness level",
            "workouts": [
                {
                    "name": "Upper Body Focus",
                    "dayOfWeek": "Monday",
                    "exercises": [
                        { "name": "Bench Press", "sets": 4, "reps": 10, "weight": 60 },
                        { "name": "Shoulder Press", "sets": 3, "reps": 12, "weight": 40 },
                        { "name": "Pull-ups", "sets": 3, "reps": 8, "weight": 0 },
                        { "name": "Bicep Curls", "sets": 3, "reps": 12, "weight": 15 }
                    ]
                },
                {
                    "name": "Lower Body Focus",
                    "dayOfWeek": "Wednesday",
                    "exercises": [
                        { "name": "Squats", "sets": 4, "reps": 10, "weight": 80 },
                        { "name": "Deadlifts", "sets": 3, "reps": 8, "weight": 100 },
                        { "name": "Lunges", "sets": 3, "reps": 12, "weight": 20 },
                        { "name": "Calf Raises", "sets": 3, "reps": 15, "weight": 30 }
                    ]
                },
                {
                    "name": "Full Body HIIT",
                    "dayOfWeek": "Friday",
                    "exercises": [
                        { "name": "Burpees", "sets": 3, "reps": 15, "weight": 0 },
                        { "name": "Kettlebell Swings", "sets": 3, "reps": 15, "weight": 16 },
                        { "name": "Mountain Climbers", "sets": 3, "reps": 20, "weight": 0 },
                        { "name": "Plank", "sets": 3, "reps": 60, "weight": 0 }
                    ]
                }
            ]
        })
    }

    /// Canned weekly report payload
    fn weekly_report() -> Value {
        json!({
            "week": "May 15 - May 21, 2023",
            "summary": {
                "workoutsCompleted": 3,
                "totalCaloriesBurned": 1540,
                "totalActiveMinutes": 135,
                "averageSteps": 7850
            },
            "achievements": [
                "Completed all scheduled workouts",
                "Increased bench press weight by 5kg",
                "Reached daily step goal 4 times"
            ],
            "suggestions": [
                "Try to increase your water intake",
                "Consider adding one more cardio session",
                "Focus on improving squat form"
            ]
        })
    }
}
