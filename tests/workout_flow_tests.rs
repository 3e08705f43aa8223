// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end flows through the coordinator: create, select, delete.
//!
//! Every mutating test finishes by checking that the store, list, markers and
//! the persisted slot agree on the same ids.

use mapty::error::AppError;
use mapty::models::{Coordinates, WorkoutId, WorkoutKind, WorkoutType};
use mapty::services::FormState;
use mapty::storage::{slots, KeyValueStore, MemoryStorage};

mod common;
use common::{add_cycling, add_running, fixed_now, ready_app, start_with};

#[test]
fn test_create_running_workout() {
    let (app, _) = ready_app();
    let mut app = app.with_clock(fixed_now);

    let id = add_running(&mut app, Coordinates::new(10.0, 20.0), "5", "30", "150");

    let workout = app.store().find_by_id(&id).expect("Workout should be stored");
    assert_eq!(workout.pace_min_per_km(), Some(6.0));
    assert!(workout.description().starts_with("Running on"));
    assert_eq!(workout.coords(), Coordinates::new(10.0, 20.0));

    assert_eq!(app.form_state(), FormState::Idle);
    assert_eq!(app.list().len(), 1);
    assert_eq!(app.map().marker_count(), 1);
    let marker = app.map().markers().next().unwrap();
    assert_eq!(marker.popup.class_name, "running-popup");
    assert!(marker.popup.content.ends_with(workout.description()));
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_create_cycling_workout() {
    let (mut app, _) = ready_app();

    let id = add_cycling(&mut app, Coordinates::new(10.0, 20.0), "20", "60", "100");

    let workout = app.store().find_by_id(&id).unwrap();
    assert_eq!(workout.speed_km_per_h(), Some(20.0));
    assert_eq!(
        *workout.kind(),
        WorkoutKind::Cycling {
            elevation_gain_m: 100.0
        }
    );
    assert_eq!(
        app.map().markers().next().unwrap().popup.class_name,
        "cycling-popup"
    );
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_invalid_input_keeps_form_open() {
    let (mut app, storage) = ready_app();
    let location = Coordinates::new(1.0, 2.0);
    app.map_clicked(location).unwrap();
    {
        let form = app.form_mut();
        form.distance = "-1".to_string();
        form.duration = "30".to_string();
        form.cadence = "150".to_string();
    }

    let err = app.submit().unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(
        err.user_message(),
        Some("Inputs have to be positive numbers.")
    );
    assert!(app.store().is_empty());
    assert_eq!(app.form_state(), FormState::FormOpen { location });
    assert_eq!(app.form().distance, "-1");
    assert_eq!(app.map().marker_count(), 0);
    assert_eq!(storage.get(slots::WORKOUTS).unwrap(), None);
}

#[test]
fn test_negative_elevation_rejected() {
    let (mut app, _) = ready_app();
    app.map_clicked(Coordinates::new(1.0, 2.0)).unwrap();
    app.change_type(WorkoutType::Cycling);
    {
        let form = app.form_mut();
        form.distance = "20".to_string();
        form.duration = "60".to_string();
        form.elevation = "-5".to_string();
    }

    assert!(matches!(app.submit(), Err(AppError::Validation(_))));
    assert!(app.store().is_empty());
}

#[test]
fn test_submit_without_open_form() {
    let (mut app, _) = ready_app();
    assert!(matches!(app.submit(), Err(AppError::InvalidState(_))));

    app.begin_placement().unwrap();
    assert_eq!(app.form_state(), FormState::AwaitingMapClick);
    assert!(matches!(app.submit(), Err(AppError::InvalidState(_))));

    app.map_clicked(Coordinates::new(3.0, 4.0)).unwrap();
    assert_eq!(
        app.form_state(),
        FormState::FormOpen {
            location: Coordinates::new(3.0, 4.0)
        }
    );
}

#[test]
fn test_cancel_clears_form() {
    let (mut app, _) = ready_app();
    app.map_clicked(Coordinates::new(1.0, 2.0)).unwrap();
    app.change_type(WorkoutType::Cycling);
    app.form_mut().distance = "12".to_string();

    app.cancel_form();

    assert_eq!(app.form_state(), FormState::Idle);
    assert_eq!(app.form().workout_type, WorkoutType::Running);
    assert!(app.form().distance.is_empty());
}

#[test]
fn test_map_click_requires_map() {
    let mut app = start_with(MemoryStorage::new());
    assert!(matches!(
        app.map_clicked(Coordinates::new(0.0, 0.0)),
        Err(AppError::MapNotReady)
    ));
    assert!(matches!(app.begin_placement(), Err(AppError::MapNotReady)));
}

#[test]
fn test_same_millisecond_ids_are_unique() {
    let (app, _) = ready_app();
    let mut app = app.with_clock(fixed_now);

    let a = add_running(&mut app, Coordinates::new(1.0, 1.0), "5", "30", "150");
    let b = add_running(&mut app, Coordinates::new(2.0, 2.0), "5", "30", "150");

    assert_ne!(a, b);
    assert_eq!(app.store().len(), 2);
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_delete_one_workout() {
    let (mut app, _) = ready_app();
    let keep = add_running(&mut app, Coordinates::new(1.0, 1.0), "5", "30", "150");
    let gone = add_cycling(&mut app, Coordinates::new(2.0, 2.0), "20", "60", "100");

    let removed = app.delete_workout(&gone);

    assert_eq!(removed.map(|w| w.id().clone()), Some(gone.clone()));
    assert_eq!(app.store().ids(), vec![keep]);
    assert_eq!(app.map().marker_count(), 1);
    assert!(!app.has_marker(&gone));
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_delete_unknown_id_is_silent() {
    let (mut app, _) = ready_app();
    add_running(&mut app, Coordinates::new(1.0, 1.0), "5", "30", "150");
    let before = app.store().clone();

    assert!(app.delete_workout(&WorkoutId::from("nope")).is_none());

    assert_eq!(app.store(), &before);
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_delete_twice_is_noop() {
    let (mut app, _) = ready_app();
    let id = add_running(&mut app, Coordinates::new(1.0, 1.0), "5", "30", "150");

    assert!(app.delete_workout(&id).is_some());
    assert!(app.delete_workout(&id).is_none());
    assert!(app.select_workout(&id).is_none());
    assert!(app.store().is_empty());
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_delete_all_with_three_workouts() {
    let (mut app, storage) = ready_app();
    add_running(&mut app, Coordinates::new(1.0, 1.0), "5", "30", "150");
    add_cycling(&mut app, Coordinates::new(2.0, 2.0), "20", "60", "100");
    add_running(&mut app, Coordinates::new(3.0, 3.0), "10", "55", "170");

    assert_eq!(app.delete_all(), 3);

    assert!(app.store().is_empty());
    assert!(app.list().is_empty());
    assert_eq!(app.map().marker_count(), 0);
    assert_eq!(app.marker_count(), 0);
    assert_eq!(
        storage.get(slots::WORKOUTS).unwrap().as_deref(),
        Some("[]")
    );
    assert!(app.views_synchronized().unwrap());
}

#[test]
fn test_select_recenters_map() {
    let (mut app, _) = ready_app();
    add_running(&mut app, Coordinates::new(1.0, 1.0), "5", "30", "150");
    let target = add_cycling(&mut app, Coordinates::new(45.0, 7.0), "20", "60", "100");

    let clicks = app.select_workout(&target).map(|w| w.clicks());

    // Selection does not count as an interaction.
    assert_eq!(clicks, Some(0));
    assert_eq!(app.map().view(), Some((Coordinates::new(45.0, 7.0), 13.0)));
}

#[test]
fn test_list_order_follows_insertion() {
    let (mut app, _) = ready_app();
    let first = add_cycling(&mut app, Coordinates::new(1.0, 1.0), "20", "60", "100");
    let second = add_running(&mut app, Coordinates::new(2.0, 2.0), "5", "30", "150");

    let ids: Vec<WorkoutId> = app.list().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![first, second]);
}
