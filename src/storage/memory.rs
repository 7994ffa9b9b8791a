// ABOUTME: In-memory Storage implementation backed by per-entity maps and counters
// ABOUTME: Serializes read-modify-write sequences behind a single RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! In-memory repository.
//!
//! All collections and id counters live behind one `tokio::sync::RwLock`, so
//! every multi-step mutation (id assignment + insert, username uniqueness
//! check + insert, workout creation with nested exercises, cascade delete)
//! holds the write guard for its full duration. That single lock is what a
//! relational implementation would get from a transaction.
//!
//! Identifiers are per-entity monotonically increasing counters starting at
//! 1; ids are never reused, even after deletion.

use super::Storage;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Activity, BodyMeasurement, Exercise, Meal, NewActivity, NewBodyMeasurement, NewExercise,
    NewMeal, NewStrengthProgress, NewUser, NewWorkout, StrengthProgress, UpdateUserProfile, User,
    Workout,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory repository; construct once per process and share via `Arc`
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i64, User>,
    workouts: HashMap<i64, Workout>,
    exercises: HashMap<i64, Exercise>,
    activities: HashMap<i64, Activity>,
    body_measurements: HashMap<i64, BodyMeasurement>,
    strength_progress: HashMap<i64, StrengthProgress>,
    meals: HashMap<i64, Meal>,

    next_user_id: i64,
    next_workout_id: i64,
    next_exercise_id: i64,
    next_activity_id: i64,
    next_body_measurement_id: i64,
    next_strength_progress_id: i64,
    next_meal_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl Inner {
    /// Insert an exercise against a workout id. Callers already hold the
    /// write guard, so workout creation stays atomic with its exercises.
    fn insert_exercise(&mut self, workout_id: i64, exercise: NewExercise) -> Exercise {
        let record = Exercise {
            id: next_id(&mut self.next_exercise_id),
            workout_id,
            name: exercise.name,
            muscle_group: exercise.muscle_group,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
            rest_time: exercise.rest_time,
        };
        self.exercises.insert(record.id, record.clone());
        record
    }
}

impl MemoryStorage {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect a user's records from a map, sorted by date descending with
    /// newer inserts winning date ties, optionally truncated.
    fn recent_records<T, F, D>(
        map: &HashMap<i64, T>,
        limit: Option<usize>,
        belongs: F,
        sort_key: D,
    ) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> bool,
        D: Fn(&T) -> (chrono::DateTime<Utc>, i64),
    {
        let mut records: Vec<T> = map.values().filter(|r| belongs(r)).cloned().collect();
        records.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        records
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_user(&self, new: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        // Uniqueness check and insert under the same guard
        if inner.users.values().any(|u| u.username == new.username) {
            return Err(AppError::already_exists(format!(
                "Username already taken: {}",
                new.username
            )));
        }

        let user = User {
            id: next_id(&mut inner.next_user_id),
            username: new.username,
            password_hash: new.password_hash,
            first_name: new.first_name,
            last_name: new.last_name,
            age: new.age,
            height: new.height,
            weight: new.weight,
            fitness_goal: new.fitness_goal,
            activity_level: new.activity_level,
            is_premium: false,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.username == username).cloned())
    }

    async fn update_user_profile(
        &self,
        id: i64,
        profile: UpdateUserProfile,
    ) -> AppResult<Option<User>> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(first_name) = profile.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = profile.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(age) = profile.age {
            user.age = Some(age);
        }
        if let Some(height) = profile.height {
            user.height = Some(height);
        }
        if let Some(weight) = profile.weight {
            user.weight = Some(weight);
        }
        if let Some(fitness_goal) = profile.fitness_goal {
            user.fitness_goal = Some(fitness_goal);
        }
        if let Some(activity_level) = profile.activity_level {
            user.activity_level = Some(activity_level);
        }

        Ok(Some(user.clone()))
    }

    async fn set_premium(&self, id: i64, is_premium: bool) -> AppResult<Option<User>> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };
        user.is_premium = is_premium;
        Ok(Some(user.clone()))
    }

    async fn get_workouts(&self, user_id: i64) -> AppResult<Vec<Workout>> {
        let inner = self.inner.read().await;
        let mut workouts: Vec<Workout> = inner
            .workouts
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        workouts.sort_by_key(|w| (w.created_at, w.id));
        Ok(workouts)
    }

    async fn get_workout_by_id(&self, id: i64) -> AppResult<Option<Workout>> {
        let inner = self.inner.read().await;
        Ok(inner.workouts.get(&id).cloned())
    }

    async fn create_workout(&self, user_id: i64, workout: NewWorkout) -> AppResult<Workout> {
        let mut inner = self.inner.write().await;

        let NewWorkout {
            name,
            day_of_week,
            duration,
            exercises,
        } = workout;

        let record = Workout {
            id: next_id(&mut inner.next_workout_id),
            user_id,
            name,
            day_of_week,
            duration,
            created_at: Utc::now(),
        };
        inner.workouts.insert(record.id, record.clone());

        for exercise in exercises {
            inner.insert_exercise(record.id, exercise);
        }

        Ok(record)
    }

    async fn delete_workout(&self, id: i64) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.exercises.retain(|_, e| e.workout_id != id);
        inner.workouts.remove(&id);
        Ok(())
    }

    async fn get_exercises_by_workout_id(&self, workout_id: i64) -> AppResult<Vec<Exercise>> {
        let inner = self.inner.read().await;
        let mut exercises: Vec<Exercise> = inner
            .exercises
            .values()
            .filter(|e| e.workout_id == workout_id)
            .cloned()
            .collect();
        // Ids are assigned in submission order
        exercises.sort_by_key(|e| e.id);
        Ok(exercises)
    }

    async fn create_exercise(
        &self,
        workout_id: i64,
        exercise: NewExercise,
    ) -> AppResult<Exercise> {
        let mut inner = self.inner.write().await;
        Ok(inner.insert_exercise(workout_id, exercise))
    }

    async fn get_activities(
        &self,
        user_id: i64,
        limit: Option<usize>,
    ) -> AppResult<Vec<Activity>> {
        let inner = self.inner.read().await;
        Ok(Self::recent_records(
            &inner.activities,
            limit,
            |a| a.user_id == user_id,
            |a| (a.date, a.id),
        ))
    }

    async fn create_activity(&self, user_id: i64, activity: NewActivity) -> AppResult<Activity> {
        let mut inner = self.inner.write().await;
        let record = Activity {
            id: next_id(&mut inner.next_activity_id),
            user_id,
            activity_type: activity.activity_type,
            value: activity.value,
            calories: activity.calories,
            date: Utc::now(),
        };
        inner.activities.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_body_measurements(
        &self,
        user_id: i64,
        limit: Option<usize>,
    ) -> AppResult<Vec<BodyMeasurement>> {
        let inner = self.inner.read().await;
        Ok(Self::recent_records(
            &inner.body_measurements,
            limit,
            |m| m.user_id == user_id,
            |m| (m.date, m.id),
        ))
    }

    async fn create_body_measurement(
        &self,
        user_id: i64,
        measurement: NewBodyMeasurement,
    ) -> AppResult<BodyMeasurement> {
        let mut inner = self.inner.write().await;
        let record = BodyMeasurement {
            id: next_id(&mut inner.next_body_measurement_id),
            user_id,
            weight: measurement.weight,
            body_fat: measurement.body_fat,
            muscle_mass: measurement.muscle_mass,
            chest: measurement.chest,
            waist: measurement.waist,
            hips: measurement.hips,
            biceps: measurement.biceps,
            thighs: measurement.thighs,
            calves: measurement.calves,
            date: Utc::now(),
        };
        inner.body_measurements.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_strength_progress(&self, user_id: i64) -> AppResult<Vec<StrengthProgress>> {
        let inner = self.inner.read().await;
        Ok(Self::recent_records(
            &inner.strength_progress,
            None,
            |p| p.user_id == user_id,
            |p| (p.date, p.id),
        ))
    }

    async fn create_strength_progress(
        &self,
        user_id: i64,
        progress: NewStrengthProgress,
    ) -> AppResult<StrengthProgress> {
        let mut inner = self.inner.write().await;
        let record = StrengthProgress {
            id: next_id(&mut inner.next_strength_progress_id),
            user_id,
            exercise_name: progress.exercise_name,
            weight: progress.weight,
            date: Utc::now(),
        };
        inner.strength_progress.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_meals(&self, user_id: i64, limit: Option<usize>) -> AppResult<Vec<Meal>> {
        let inner = self.inner.read().await;
        Ok(Self::recent_records(
            &inner.meals,
            limit,
            |m| m.user_id == user_id,
            |m| (m.date, m.id),
        ))
    }

    async fn create_meal(&self, user_id: i64, meal: NewMeal) -> AppResult<Meal> {
        let mut inner = self.inner.write().await;
        let record = Meal {
            id: next_id(&mut inner.next_meal_id),
            user_id,
            name: meal.name,
            meal_type: meal.meal_type,
            calories: meal.calories,
            date: Utc::now(),
        };
        inner.meals.insert(record.id, record.clone());
        Ok(record)
    }
}
