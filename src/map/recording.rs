// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map adapter that keeps markers and viewport in memory.
//!
//! Used by the headless host and by tests to observe what a real widget
//! would display.

use std::collections::BTreeMap;

use super::{MapAdapter, MapError, PanOptions, Popup, TileLayer};
use crate::models::Coordinates;

/// Handle to a marker placed on a [`RecordingMap`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

/// A marker currently on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub coords: Coordinates,
    pub popup: Popup,
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    container: Option<String>,
    tiles: Option<TileLayer>,
    view: Option<(Coordinates, f64)>,
    markers: BTreeMap<u64, PlacedMarker>,
    next_marker: u64,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_created(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    pub fn tiles(&self) -> Option<&TileLayer> {
        self.tiles.as_ref()
    }

    /// Current center and zoom.
    pub fn view(&self) -> Option<(Coordinates, f64)> {
        self.view
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Markers in placement order.
    pub fn markers(&self) -> impl Iterator<Item = &PlacedMarker> {
        self.markers.values()
    }
}

impl MapAdapter for RecordingMap {
    type Marker = MarkerHandle;

    fn create_map(
        &mut self,
        container_id: &str,
        center: Coordinates,
        zoom: f64,
        tiles: &TileLayer,
    ) -> Result<(), MapError> {
        if self.container.is_some() {
            return Err(MapError::AlreadyCreated);
        }
        if container_id.is_empty() {
            return Err(MapError::ContainerNotFound(container_id.to_string()));
        }
        self.container = Some(container_id.to_string());
        self.tiles = Some(tiles.clone());
        self.view = Some((center, zoom));
        Ok(())
    }

    fn add_marker(&mut self, coords: Coordinates, popup: &Popup) -> MarkerHandle {
        let id = self.next_marker;
        self.next_marker += 1;
        self.markers.insert(
            id,
            PlacedMarker {
                coords,
                popup: popup.clone(),
            },
        );
        MarkerHandle(id)
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        self.markers.remove(&marker.0);
    }

    fn set_view(&mut self, coords: Coordinates, zoom: f64, _options: &PanOptions) {
        self.view = Some((coords, zoom));
    }
}
