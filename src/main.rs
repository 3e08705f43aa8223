// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapty headless host
//!
//! Boots the workout coordinator against on-disk storage and an in-memory
//! map, resolves the startup position from configuration, and logs the
//! restored workouts.

use anyhow::Context;
use mapty::{
    config::Config,
    map::RecordingMap,
    services::{request_position, GeolocationError, WorkoutCoordinator},
    storage::FileStorage,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting Mapty");

    let storage = FileStorage::open(&config.data_dir).context("Failed to open storage")?;

    // Ask for the position before restoring data; it resolves independently.
    let (responder, pending) = request_position();
    let home = config.home_position;
    tokio::spawn(async move {
        responder.resolve(home.ok_or(GeolocationError::PermissionDenied));
    });

    let mut coordinator = WorkoutCoordinator::start(AppState {
        config,
        map: RecordingMap::new(),
        storage,
    })?;

    if let Err(e) = coordinator.position_resolved(pending.resolved().await) {
        match e.user_message() {
            Some(alert) => tracing::warn!(alert, "Map unavailable"),
            None => {
                tracing::error!(error = %e, "Map creation failed");
                return Err(e.into());
            }
        }
    }

    for entry in coordinator.list() {
        tracing::info!(workout_id = %entry.id, title = %entry.title, "Workout");
    }
    tracing::info!(
        workouts = coordinator.workouts().len(),
        markers = coordinator.marker_count(),
        map_ready = coordinator.is_map_ready(),
        "Ready"
    );

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mapty=debug,info")),
        )
        .with(format)
        .init();
}
