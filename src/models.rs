// ABOUTME: Entity model for the fitness tracker and the DTOs accepted at the API boundary
// ABOUTME: Defines User, Workout, Exercise, Activity, BodyMeasurement, StrengthProgress, Meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! # Entity Schema
//!
//! Persisted record types and the per-entity create/update DTOs. The DTOs are
//! the validation boundary: they carry only the fields a caller may supply,
//! so server-assigned values (`id`, `user_id`, timestamps) can never be
//! injected through the wire. Each DTO exposes a `validate` method the route
//! layer invokes before anything reaches the storage layer; the storage layer
//! trusts its inputs.
//!
//! Wire form is camelCase to match the frontend contract.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A registered user and the root owner of all other entities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Opaque credential (bcrypt hash); never serialized to the wire
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    /// Height in centimeters
    pub height: Option<i32>,
    /// Weight in kilograms
    pub weight: Option<i32>,
    pub fitness_goal: Option<String>,
    pub activity_level: Option<String>,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

/// A named workout owned by a user, parent of its exercises
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub day_of_week: Option<String>,
    /// Planned duration in minutes
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// A single exercise inside a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub muscle_group: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    /// Working weight in kilograms
    pub weight: Option<i32>,
    /// Rest between sets in seconds
    pub rest_time: Option<i32>,
}

/// A logged daily activity (steps, active minutes, a finished workout, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub user_id: i64,
    /// Free-form activity tag, e.g. "steps" or "active_minutes"
    #[serde(rename = "type")]
    pub activity_type: String,
    pub value: i32,
    pub calories: Option<i32>,
    pub date: DateTime<Utc>,
}

/// An append-only body measurement snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurement {
    pub id: i64,
    pub user_id: i64,
    pub weight: Option<i32>,
    pub body_fat: Option<i32>,
    pub muscle_mass: Option<i32>,
    pub chest: Option<i32>,
    pub waist: Option<i32>,
    pub hips: Option<i32>,
    pub biceps: Option<i32>,
    pub thighs: Option<i32>,
    pub calves: Option<i32>,
    pub date: DateTime<Utc>,
}

/// An append-only strength progress entry for one exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthProgress {
    pub id: i64,
    pub user_id: i64,
    pub exercise_name: String,
    pub weight: i32,
    pub date: DateTime<Utc>,
}

/// Meal classification accepted by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Stable wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(AppError::invalid_input(format!("Invalid meal type: {s}"))),
        }
    }
}

/// An append-only logged meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub calories: i32,
    pub date: DateTime<Utc>,
}

// ============================================================================
// Create / update DTOs (the validation boundary)
// ============================================================================

/// Fields accepted when creating a user. The password arrives already hashed;
/// the route layer owns the plaintext-to-hash step.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub fitness_goal: Option<String>,
    pub activity_level: Option<String>,
}

/// Profile fields accepted on update. Only supplied fields overwrite the
/// stored record; absent fields are left untouched (shallow merge).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub fitness_goal: Option<String>,
    pub activity_level: Option<String>,
}

impl UpdateUserProfile {
    /// Validate the patch before it reaches the storage layer
    ///
    /// # Errors
    /// Returns an error if a supplied numeric field is outside a sane range
    pub fn validate(&self) -> AppResult<()> {
        validate_positive("age", self.age)?;
        validate_positive("height", self.height)?;
        validate_positive("weight", self.weight)?;
        Ok(())
    }
}

/// Fields accepted when creating a workout, including its nested exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub name: String,
    pub day_of_week: Option<String>,
    pub duration: Option<i32>,
    #[serde(default)]
    pub exercises: Vec<NewExercise>,
}

impl NewWorkout {
    /// Validate the workout and every nested exercise
    ///
    /// # Errors
    /// Returns an error if the name is empty or any nested exercise is invalid
    pub fn validate(&self) -> AppResult<()> {
        validate_required("name", &self.name)?;
        validate_positive("duration", self.duration)?;
        for exercise in &self.exercises {
            exercise.validate()?;
        }
        Ok(())
    }
}

/// Fields accepted for an exercise nested in a workout creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub rest_time: Option<i32>,
}

impl NewExercise {
    /// Validate a single exercise entry
    ///
    /// # Errors
    /// Returns an error if the name is empty or a numeric field is negative
    pub fn validate(&self) -> AppResult<()> {
        validate_required("exercise name", &self.name)?;
        validate_positive("sets", self.sets)?;
        validate_positive("reps", self.reps)?;
        validate_non_negative("weight", self.weight)?;
        validate_non_negative("restTime", self.rest_time)?;
        Ok(())
    }
}

/// Fields accepted when logging an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub value: i32,
    pub calories: Option<i32>,
}

impl NewActivity {
    /// Validate the activity entry
    ///
    /// # Errors
    /// Returns an error if the type tag is empty or a value is negative
    pub fn validate(&self) -> AppResult<()> {
        validate_required("type", &self.activity_type)?;
        if self.value < 0 {
            return Err(AppError::invalid_input("value must not be negative"));
        }
        validate_non_negative("calories", self.calories)?;
        Ok(())
    }
}

/// Fields accepted when logging a body measurement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBodyMeasurement {
    pub weight: Option<i32>,
    pub body_fat: Option<i32>,
    pub muscle_mass: Option<i32>,
    pub chest: Option<i32>,
    pub waist: Option<i32>,
    pub hips: Option<i32>,
    pub biceps: Option<i32>,
    pub thighs: Option<i32>,
    pub calves: Option<i32>,
}

impl NewBodyMeasurement {
    /// Validate the measurement entry
    ///
    /// # Errors
    /// Returns an error if any supplied field is negative
    pub fn validate(&self) -> AppResult<()> {
        validate_non_negative("weight", self.weight)?;
        validate_non_negative("bodyFat", self.body_fat)?;
        validate_non_negative("muscleMass", self.muscle_mass)?;
        validate_non_negative("chest", self.chest)?;
        validate_non_negative("waist", self.waist)?;
        validate_non_negative("hips", self.hips)?;
        validate_non_negative("biceps", self.biceps)?;
        validate_non_negative("thighs", self.thighs)?;
        validate_non_negative("calves", self.calves)?;
        Ok(())
    }
}

/// Fields accepted when logging a strength progress entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrengthProgress {
    pub exercise_name: String,
    pub weight: i32,
}

impl NewStrengthProgress {
    /// Validate the strength progress entry
    ///
    /// # Errors
    /// Returns an error if the exercise name is empty or the weight negative
    pub fn validate(&self) -> AppResult<()> {
        validate_required("exerciseName", &self.exercise_name)?;
        if self.weight < 0 {
            return Err(AppError::invalid_input("weight must not be negative"));
        }
        Ok(())
    }
}

/// Fields accepted when logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeal {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub calories: i32,
}

impl NewMeal {
    /// Validate the meal entry
    ///
    /// # Errors
    /// Returns an error if the name is empty or calories are negative
    pub fn validate(&self) -> AppResult<()> {
        validate_required("name", &self.name)?;
        if self.calories < 0 {
            return Err(AppError::invalid_input("calories must not be negative"));
        }
        Ok(())
    }
}

fn validate_required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} is required")));
    }
    Ok(())
}

fn validate_positive(field: &str, value: Option<i32>) -> AppResult<()> {
    if let Some(v) = value {
        if v <= 0 {
            return Err(AppError::invalid_input(format!("{field} must be positive")));
        }
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: Option<i32>) -> AppResult<()> {
    if let Some(v) = value {
        if v < 0 {
            return Err(AppError::invalid_input(format!(
                "{field} must not be negative"
            )));
        }
    }
    Ok(())
}
