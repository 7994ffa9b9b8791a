// ABOUTME: Storage abstraction for entity persistence and retrieval
// ABOUTME: Defines the Storage trait implemented by the in-memory repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! # Storage Layer
//!
//! The [`Storage`] trait is the sole authority for entity persistence: it
//! assigns identifiers, stamps server-set timestamps, scopes reads by owning
//! user, and cascades workout deletion to the workout's exercises.
//!
//! The trait is deliberately ownership-blind for single-record lookups
//! ([`Storage::get_workout_by_id`]): the route layer compares the record's
//! `user_id` against the authenticated caller before acting. Field validation
//! also lives at the route boundary; the store trusts its inputs.
//!
//! "Not found" is `Ok(None)` or a no-op, never an error. The one domain
//! error the store raises itself is the username uniqueness constraint on
//! [`Storage::create_user`], enforced atomically so concurrent registrations
//! cannot both succeed.

pub mod memory;

pub use memory::MemoryStorage;

use crate::errors::AppResult;
use crate::models::{
    Activity, BodyMeasurement, Exercise, Meal, NewActivity, NewBodyMeasurement, NewExercise,
    NewMeal, NewStrengthProgress, NewUser, NewWorkout, StrengthProgress, UpdateUserProfile, User,
    Workout,
};
use async_trait::async_trait;

/// Repository contract for all persisted entities
#[async_trait]
pub trait Storage: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Create a user with a fresh id, `is_premium = false` and `created_at`
    /// set to the server clock.
    ///
    /// # Errors
    /// Returns `RESOURCE_ALREADY_EXISTS` if the username is taken. The check
    /// and the insert happen under one lock, so concurrent registrations with
    /// the same username cannot both succeed.
    async fn create_user(&self, new: NewUser) -> AppResult<User>;

    /// Look up a user by id; absence is `Ok(None)`, not an error
    async fn get_user(&self, id: i64) -> AppResult<Option<User>>;

    /// Look up a user by username; absence is `Ok(None)`, not an error
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Shallow-merge the supplied profile fields onto an existing user.
    /// Returns `Ok(None)` if the user does not exist; never creates.
    async fn update_user_profile(
        &self,
        id: i64,
        profile: UpdateUserProfile,
    ) -> AppResult<Option<User>>;

    /// Set the premium flag. Returns `Ok(None)` if the user does not exist.
    async fn set_premium(&self, id: i64, is_premium: bool) -> AppResult<Option<User>>;

    // ========================================================================
    // Workouts and exercises
    // ========================================================================

    /// All workouts owned by the user, ordered by creation time ascending
    /// (ties broken by id). The ordering is a documented contract.
    async fn get_workouts(&self, user_id: i64) -> AppResult<Vec<Workout>>;

    /// Single workout by id. Ownership is NOT checked here; callers compare
    /// `workout.user_id` against the authenticated user before acting.
    async fn get_workout_by_id(&self, id: i64) -> AppResult<Option<Workout>>;

    /// Persist a workout and its nested exercises in submission order.
    /// Creation is atomic: the workout and all its exercises become visible
    /// together. Returns the workout alone; exercises are fetched separately.
    async fn create_workout(&self, user_id: i64, workout: NewWorkout) -> AppResult<Workout>;

    /// Delete a workout and cascade to exactly its exercises. A missing
    /// workout id is a no-op, not an error.
    async fn delete_workout(&self, id: i64) -> AppResult<()>;

    /// Exercises belonging to a workout, in submission order
    async fn get_exercises_by_workout_id(&self, workout_id: i64) -> AppResult<Vec<Exercise>>;

    /// Insert a single exercise scoped to the given workout
    async fn create_exercise(&self, workout_id: i64, exercise: NewExercise)
        -> AppResult<Exercise>;

    // ========================================================================
    // Time-series logs (append-only, date descending)
    // ========================================================================

    /// Activities for the user, most recent first, truncated to `limit`
    async fn get_activities(&self, user_id: i64, limit: Option<usize>)
        -> AppResult<Vec<Activity>>;

    /// Log an activity; the `date` is stamped from the server clock
    async fn create_activity(&self, user_id: i64, activity: NewActivity) -> AppResult<Activity>;

    /// Body measurements for the user, most recent first, truncated to `limit`
    async fn get_body_measurements(
        &self,
        user_id: i64,
        limit: Option<usize>,
    ) -> AppResult<Vec<BodyMeasurement>>;

    /// Log a body measurement; the `date` is stamped from the server clock
    async fn create_body_measurement(
        &self,
        user_id: i64,
        measurement: NewBodyMeasurement,
    ) -> AppResult<BodyMeasurement>;

    /// Full strength history for the user, most recent first (no limit)
    async fn get_strength_progress(&self, user_id: i64) -> AppResult<Vec<StrengthProgress>>;

    /// Log a strength progress entry; the `date` is stamped from the server clock
    async fn create_strength_progress(
        &self,
        user_id: i64,
        progress: NewStrengthProgress,
    ) -> AppResult<StrengthProgress>;

    /// Meals for the user, most recent first, truncated to `limit`
    async fn get_meals(&self, user_id: i64, limit: Option<usize>) -> AppResult<Vec<Meal>>;

    /// Log a meal; the `date` is stamped from the server clock
    async fn create_meal(&self, user_id: i64, meal: NewMeal) -> AppResult<Meal>;
}
