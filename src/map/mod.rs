// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map widget boundary.
//!
//! The coordinator drives the map only through [`MapAdapter`]. Click
//! notifications flow the other way: the host forwards each map click to
//! [`crate::services::WorkoutCoordinator::map_clicked`].

pub mod recording;

pub use recording::{MarkerHandle, PlacedMarker, RecordingMap};

use serde::Serialize;

use crate::models::{Coordinates, Workout};

/// Tile source for the base layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// Popup attached to a workout marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub content: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl Popup {
    /// Always-open popup styled by workout type (`running-popup`, `cycling-popup`).
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            content: workout.popup_content(),
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{}-popup", workout.workout_type().as_str()),
        }
    }
}

/// Animation options for moving the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanOptions {
    pub animate: bool,
    pub pan_duration_secs: f64,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            animate: true,
            pan_duration_secs: 1.0,
        }
    }
}

/// Operations the coordinator needs from a map widget.
pub trait MapAdapter {
    /// Handle for a placed marker; given back to `remove_marker` to release it.
    type Marker;

    /// Create the map in `container_id`, centered on `center`, with a base layer.
    fn create_map(
        &mut self,
        container_id: &str,
        center: Coordinates,
        zoom: f64,
        tiles: &TileLayer,
    ) -> Result<(), MapError>;

    /// Place a marker with its popup opened.
    fn add_marker(&mut self, coords: Coordinates, popup: &Popup) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn set_view(&mut self, coords: Coordinates, zoom: f64, options: &PanOptions);
}

/// Errors from map widgets.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Map container not found: {0}")]
    ContainerNotFound(String),

    #[error("Map already created")]
    AlreadyCreated,
}
