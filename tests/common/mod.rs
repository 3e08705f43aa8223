// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use mapty::config::Config;
use mapty::map::RecordingMap;
use mapty::models::{Coordinates, WorkoutId, WorkoutType};
use mapty::services::WorkoutCoordinator;
use mapty::storage::MemoryStorage;
use mapty::AppState;

#[allow(dead_code)]
pub type TestCoordinator = WorkoutCoordinator<RecordingMap, MemoryStorage>;

/// Fixed clock for deterministic ids and descriptions.
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn home() -> Coordinates {
    Coordinates::new(51.5, -0.12)
}

/// Start a coordinator over `storage` without creating the map.
#[allow(dead_code)]
pub fn start_with(storage: MemoryStorage) -> TestCoordinator {
    WorkoutCoordinator::start(AppState {
        config: Config::default(),
        map: RecordingMap::new(),
        storage,
    })
    .expect("Coordinator should start")
}

/// Start a coordinator with an empty store and a ready map.
#[allow(dead_code)]
pub fn ready_app() -> (TestCoordinator, MemoryStorage) {
    let storage = MemoryStorage::new();
    let mut app = start_with(storage.clone());
    app.position_resolved(Ok(home()))
        .expect("Map should be created");
    (app, storage)
}

/// Open the form at `at` and submit a running workout.
#[allow(dead_code)]
pub fn add_running(
    app: &mut TestCoordinator,
    at: Coordinates,
    distance: &str,
    duration: &str,
    cadence: &str,
) -> WorkoutId {
    app.map_clicked(at).expect("Map click should open form");
    let form = app.form_mut();
    form.set_type(WorkoutType::Running);
    form.distance = distance.to_string();
    form.duration = duration.to_string();
    form.cadence = cadence.to_string();
    app.submit().expect("Running workout should be created")
}

/// Open the form at `at` and submit a cycling workout.
#[allow(dead_code)]
pub fn add_cycling(
    app: &mut TestCoordinator,
    at: Coordinates,
    distance: &str,
    duration: &str,
    elevation: &str,
) -> WorkoutId {
    app.map_clicked(at).expect("Map click should open form");
    app.change_type(WorkoutType::Cycling);
    let form = app.form_mut();
    form.distance = distance.to_string();
    form.duration = duration.to_string();
    form.elevation = elevation.to_string();
    app.submit().expect("Cycling workout should be created")
}
