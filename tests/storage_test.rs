// ABOUTME: Integration tests for the in-memory storage repository
// ABOUTME: Covers id assignment, scoping, cascade delete, ordering, and uniqueness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitlog::errors::ErrorCode;
use fitlog::models::{
    MealType, NewActivity, NewExercise, NewMeal, NewStrengthProgress, NewUser, NewWorkout,
    UpdateUserProfile,
};
use fitlog::storage::{MemoryStorage, Storage};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        password_hash: "$2b$04$placeholderhash".to_owned(),
        ..NewUser::default()
    }
}

fn new_workout(name: &str, exercises: Vec<NewExercise>) -> NewWorkout {
    NewWorkout {
        name: name.to_owned(),
        day_of_week: None,
        duration: None,
        exercises,
    }
}

fn new_exercise(name: &str) -> NewExercise {
    NewExercise {
        name: name.to_owned(),
        muscle_group: None,
        sets: Some(3),
        reps: Some(10),
        weight: Some(50),
        rest_time: Some(90),
    }
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn create_user_assigns_id_and_defaults() {
    let storage = MemoryStorage::new();

    let user = storage.create_user(new_user("alice")).await.unwrap();
    assert_eq!(user.id, 1);
    assert!(!user.is_premium);

    let second = storage.create_user(new_user("bob")).await.unwrap();
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn duplicate_username_is_rejected_atomically() {
    let storage = MemoryStorage::new();
    storage.create_user(new_user("alice")).await.unwrap();

    let err = storage.create_user(new_user("alice")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // The failed insert must not have consumed the username lookup
    let found = storage.get_user_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found.id, 1);
}

#[tokio::test]
async fn get_user_absence_is_none_not_error() {
    let storage = MemoryStorage::new();
    assert!(storage.get_user(99).await.unwrap().is_none());
    assert!(storage.get_user_by_username("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn update_profile_merges_only_supplied_fields() {
    let storage = MemoryStorage::new();
    let user = storage
        .create_user(NewUser {
            age: Some(30),
            height: Some(180),
            ..new_user("alice")
        })
        .await
        .unwrap();

    let updated = storage
        .update_user_profile(
            user.id,
            UpdateUserProfile {
                weight: Some(75),
                fitness_goal: Some("strength".to_owned()),
                ..UpdateUserProfile::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.weight, Some(75));
    assert_eq!(updated.fitness_goal.as_deref(), Some("strength"));
    // Untouched fields survive the merge
    assert_eq!(updated.age, Some(30));
    assert_eq!(updated.height, Some(180));
}

#[tokio::test]
async fn update_profile_on_missing_user_returns_none_and_creates_nothing() {
    let storage = MemoryStorage::new();

    let result = storage
        .update_user_profile(42, UpdateUserProfile::default())
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(storage.get_user(42).await.unwrap().is_none());
}

#[tokio::test]
async fn set_premium_toggles_the_flag() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let upgraded = storage.set_premium(user.id, true).await.unwrap().unwrap();
    assert!(upgraded.is_premium);

    assert!(storage.set_premium(999, true).await.unwrap().is_none());
}

// ============================================================================
// Workouts and exercises
// ============================================================================

#[tokio::test]
async fn workout_creation_persists_exercises_in_submission_order() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let workout = storage
        .create_workout(
            user.id,
            new_workout(
                "Push Day",
                vec![
                    new_exercise("Bench Press"),
                    new_exercise("Shoulder Press"),
                    new_exercise("Dips"),
                ],
            ),
        )
        .await
        .unwrap();

    let exercises = storage
        .get_exercises_by_workout_id(workout.id)
        .await
        .unwrap();
    assert_eq!(exercises.len(), 3);
    let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Bench Press", "Shoulder Press", "Dips"]);
    assert!(exercises.iter().all(|e| e.workout_id == workout.id));
}

#[tokio::test]
async fn cascade_delete_removes_only_the_workouts_exercises() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let doomed = storage
        .create_workout(user.id, new_workout("Doomed", vec![new_exercise("Squats")]))
        .await
        .unwrap();
    let survivor = storage
        .create_workout(
            user.id,
            new_workout("Survivor", vec![new_exercise("Deadlifts")]),
        )
        .await
        .unwrap();

    storage.delete_workout(doomed.id).await.unwrap();

    let workouts = storage.get_workouts(user.id).await.unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].id, survivor.id);

    assert!(storage
        .get_exercises_by_workout_id(doomed.id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        storage
            .get_exercises_by_workout_id(survivor.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn exercises_can_be_added_to_an_existing_workout() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let workout = storage
        .create_workout(user.id, new_workout("Push Day", vec![new_exercise("Bench Press")]))
        .await
        .unwrap();

    let added = storage
        .create_exercise(workout.id, new_exercise("Dips"))
        .await
        .unwrap();
    assert_eq!(added.workout_id, workout.id);
    assert_eq!(added.sets, Some(3));

    let exercises = storage
        .get_exercises_by_workout_id(workout.id)
        .await
        .unwrap();
    assert_eq!(exercises.len(), 2);
    // Appended after the ones created with the workout
    assert_eq!(exercises[1].id, added.id);
    assert_eq!(exercises[1].name, "Dips");
}

#[tokio::test]
async fn delete_workout_on_unknown_id_is_a_noop() {
    let storage = MemoryStorage::new();
    storage.delete_workout(12345).await.unwrap();
}

#[tokio::test]
async fn workout_ids_are_never_reused_after_deletion() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let first = storage
        .create_workout(user.id, new_workout("First", Vec::new()))
        .await
        .unwrap();
    storage.delete_workout(first.id).await.unwrap();

    let second = storage
        .create_workout(user.id, new_workout("Second", Vec::new()))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn workouts_are_scoped_to_their_owner() {
    let storage = MemoryStorage::new();
    let alice = storage.create_user(new_user("alice")).await.unwrap();
    let bob = storage.create_user(new_user("bob")).await.unwrap();

    storage
        .create_workout(alice.id, new_workout("Alice Day", Vec::new()))
        .await
        .unwrap();
    storage
        .create_workout(bob.id, new_workout("Bob Day", Vec::new()))
        .await
        .unwrap();

    let alices = storage.get_workouts(alice.id).await.unwrap();
    assert_eq!(alices.len(), 1);
    assert!(alices.iter().all(|w| w.user_id == alice.id));
}

#[tokio::test]
async fn workouts_list_in_creation_order() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    for name in ["Monday", "Wednesday", "Friday"] {
        storage
            .create_workout(user.id, new_workout(name, Vec::new()))
            .await
            .unwrap();
    }

    let names: Vec<String> = storage
        .get_workouts(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, ["Monday", "Wednesday", "Friday"]);
}

// ============================================================================
// Time-series logs
// ============================================================================

#[tokio::test]
async fn activities_limit_returns_most_recent_first() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let mut ids = Vec::new();
    for value in 1..=5 {
        let activity = storage
            .create_activity(
                user.id,
                NewActivity {
                    activity_type: "steps".to_owned(),
                    value,
                    calories: None,
                },
            )
            .await
            .unwrap();
        ids.push(activity.id);
    }

    let limited = storage.get_activities(user.id, Some(2)).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, ids[4]);
    assert_eq!(limited[1].id, ids[3]);

    let all = storage.get_activities(user.id, None).await.unwrap();
    assert_eq!(all.len(), 5);
    // Newest first throughout
    assert!(all.windows(2).all(|pair| pair[0].date >= pair[1].date));
}

#[tokio::test]
async fn logs_are_scoped_per_user() {
    let storage = MemoryStorage::new();
    let alice = storage.create_user(new_user("alice")).await.unwrap();
    let bob = storage.create_user(new_user("bob")).await.unwrap();

    storage
        .create_meal(
            alice.id,
            NewMeal {
                name: "Oatmeal".to_owned(),
                meal_type: MealType::Breakfast,
                calories: 350,
            },
        )
        .await
        .unwrap();

    assert!(storage.get_meals(bob.id, None).await.unwrap().is_empty());
    assert_eq!(storage.get_meals(alice.id, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn strength_progress_returns_full_history_descending() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    for weight in [100, 105, 110] {
        storage
            .create_strength_progress(
                user.id,
                NewStrengthProgress {
                    exercise_name: "Squat".to_owned(),
                    weight,
                },
            )
            .await
            .unwrap();
    }

    let history = storage.get_strength_progress(user.id).await.unwrap();
    assert_eq!(history.len(), 3);
    let weights: Vec<i32> = history.iter().map(|p| p.weight).collect();
    assert_eq!(weights, [110, 105, 100]);
}

#[tokio::test]
async fn create_stamps_server_assigned_fields() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(new_user("alice")).await.unwrap();

    let before = chrono::Utc::now();
    let activity = storage
        .create_activity(
            user.id,
            NewActivity {
                activity_type: "active_minutes".to_owned(),
                value: 45,
                calories: Some(300),
            },
        )
        .await
        .unwrap();
    let after = chrono::Utc::now();

    assert_eq!(activity.user_id, user.id);
    assert!(activity.id > 0);
    assert!(activity.date >= before && activity.date <= after);
}
