// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout view coordinator.
//!
//! Owns the store and keeps four views of it in step: the store itself, the
//! rendered list, the map markers and the persisted slot. Every mutating
//! handler updates all of them before returning.
//!
//! Handlers:
//! 1. `position_resolved` - create the map, place markers for loaded workouts
//! 2. `map_clicked` / `submit` / `cancel_form` - new-workout form flow
//! 3. `delete_workout` / `delete_all` - removal paths
//! 4. `select_workout` - re-center on a list entry
//! 5. `reset` - wipe persisted data and hand the adapters back for a rebuild

use std::collections::HashMap;

use chrono::{DateTime, SubsecRound, Utc};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::map::{MapAdapter, PanOptions, Popup, TileLayer};
use crate::models::{Coordinates, ListEntry, Workout, WorkoutForm, WorkoutId, WorkoutType};
use crate::services::geolocation::PositionResult;
use crate::services::persistence::WorkoutRepository;
use crate::storage::KeyValueStore;
use crate::store::WorkoutStore;
use crate::AppState;

/// Where the new-workout form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    /// Form hidden
    Idle,
    /// User started placing a workout but has not clicked the map yet
    AwaitingMapClick,
    /// Form shown for a workout at `location`
    FormOpen { location: Coordinates },
}

pub struct WorkoutCoordinator<M: MapAdapter, S> {
    config: Config,
    map: M,
    map_ready: bool,
    repository: WorkoutRepository<S>,
    store: WorkoutStore,
    markers: HashMap<WorkoutId, M::Marker>,
    list: Vec<ListEntry>,
    form: WorkoutForm,
    state: FormState,
    clock: fn() -> DateTime<Utc>,
}

impl<M: MapAdapter, S: KeyValueStore> WorkoutCoordinator<M, S> {
    /// Build the coordinator and render any persisted workouts into the list.
    ///
    /// Markers for these workouts are placed once the map exists.
    pub fn start(state: AppState<M, S>) -> Result<Self> {
        let AppState {
            config,
            map,
            storage,
        } = state;
        let repository = WorkoutRepository::new(storage, config.storage_key.clone());

        let mut coordinator = Self {
            config,
            map,
            map_ready: false,
            repository,
            store: WorkoutStore::new(),
            markers: HashMap::new(),
            list: Vec::new(),
            form: WorkoutForm::default(),
            state: FormState::Idle,
            clock: Utc::now,
        };

        if let Some(workouts) = coordinator.repository.load()? {
            coordinator.list = workouts.iter().map(ListEntry::render).collect();
            coordinator.store.replace_all(workouts);
            tracing::info!(count = coordinator.store.len(), "Restored workouts");
        }

        Ok(coordinator)
    }

    /// Replace the clock used for new workout timestamps and ids.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    // ─── Map lifecycle ───────────────────────────────────────────

    /// Completion of the startup position request.
    ///
    /// On success the map is created around the position and every stored
    /// workout gets its marker. On failure the app stays usable for viewing
    /// the list, but new workouts cannot be placed.
    pub fn position_resolved(&mut self, result: PositionResult) -> Result<()> {
        let center = match result {
            Ok(center) => center,
            Err(e) => {
                tracing::warn!(error = %e, "Position unavailable, map not created");
                return Err(e.into());
            }
        };
        if self.map_ready {
            return Err(AppError::InvalidState("map already created".to_string()));
        }

        let tiles = TileLayer {
            url_template: self.config.tile_url.clone(),
            attribution: self.config.tile_attribution.clone(),
        };
        self.map.create_map(
            &self.config.map_container,
            center,
            self.config.map_zoom,
            &tiles,
        )?;
        self.map_ready = true;

        for workout in self.store.iter() {
            let marker = self
                .map
                .add_marker(workout.coords(), &Popup::for_workout(workout));
            self.markers.insert(workout.id().clone(), marker);
        }

        tracing::info!(
            lat = center.lat,
            lng = center.lng,
            markers = self.markers.len(),
            "Map ready"
        );
        Ok(())
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    // ─── New-workout form ────────────────────────────────────────

    /// User signalled they want to place a workout.
    pub fn begin_placement(&mut self) -> Result<()> {
        if !self.map_ready {
            return Err(AppError::MapNotReady);
        }
        if self.state == FormState::Idle {
            self.state = FormState::AwaitingMapClick;
        }
        Ok(())
    }

    /// A click on the map opens the form at that location. Clicking again
    /// while the form is open moves the pending location.
    pub fn map_clicked(&mut self, location: Coordinates) -> Result<()> {
        if !self.map_ready {
            return Err(AppError::MapNotReady);
        }
        self.state = FormState::FormOpen { location };
        tracing::debug!(lat = location.lat, lng = location.lng, "Form opened");
        Ok(())
    }

    pub fn form(&self) -> &WorkoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WorkoutForm {
        &mut self.form
    }

    /// Type select changed; swaps which variant field is shown.
    pub fn change_type(&mut self, workout_type: WorkoutType) {
        self.form.set_type(workout_type);
    }

    pub fn form_state(&self) -> FormState {
        self.state
    }

    /// Hide the form without creating anything.
    pub fn cancel_form(&mut self) {
        self.form.clear();
        self.state = FormState::Idle;
    }

    /// Submit the open form.
    ///
    /// On validation failure nothing is mutated and the form stays open; the
    /// error's `user_message` is the alert to show.
    pub fn submit(&mut self) -> Result<WorkoutId> {
        let FormState::FormOpen { location } = self.state else {
            return Err(AppError::InvalidState("form is not open".to_string()));
        };

        let input = self.form.parse()?;
        let kind = input.kind()?;

        // Persisted dates carry milliseconds only.
        let now = (self.clock)().trunc_subsecs(3);
        let store = &self.store;
        let id = WorkoutId::generate(now, |candidate| store.contains(candidate));
        let workout = Workout::new(
            id.clone(),
            now,
            location,
            input.distance_km,
            input.duration_min,
            kind,
        );

        let workout_type = workout.workout_type();

        let marker = self
            .map
            .add_marker(workout.coords(), &Popup::for_workout(&workout));
        self.markers.insert(id.clone(), marker);
        self.list.push(ListEntry::render(&workout));
        self.store.add(workout);

        self.form.clear();
        self.state = FormState::Idle;
        self.persist();

        tracing::info!(workout_id = %id, kind = workout_type.as_str(), "Workout created");
        Ok(id)
    }

    // ─── Removal ─────────────────────────────────────────────────

    /// Delete one workout. Unknown ids are silently ignored.
    pub fn delete_workout(&mut self, id: &WorkoutId) -> Option<Workout> {
        let removed = self.store.remove_by_id(id);
        if let Some(marker) = self.markers.remove(id) {
            self.map.remove_marker(marker);
        }
        self.list.retain(|entry| &entry.id != id);
        self.persist();

        match &removed {
            Some(_) => tracing::info!(workout_id = %id, "Workout deleted"),
            None => tracing::debug!(workout_id = %id, "Delete of unknown workout ignored"),
        }
        removed
    }

    /// Delete every workout. Returns how many were removed.
    pub fn delete_all(&mut self) -> usize {
        self.release_markers();
        let removed = self.store.clear().len();
        self.list.clear();
        self.persist();

        tracing::info!(count = removed, "All workouts deleted");
        removed
    }

    // ─── Selection ───────────────────────────────────────────────

    /// List entry clicked: re-center the map on that workout.
    pub fn select_workout(&mut self, id: &WorkoutId) -> Option<&Workout> {
        let workout = self.store.find_by_id(id)?;
        if self.map_ready {
            self.map
                .set_view(workout.coords(), self.config.map_zoom, &PanOptions::default());
        }
        tracing::debug!(workout_id = %id, "Workout selected");
        Some(workout)
    }

    // ─── Reset ───────────────────────────────────────────────────

    /// Remove the persisted slot and tear everything down.
    ///
    /// The adapters come back so the host can start a fresh coordinator, the
    /// equivalent of reloading the page.
    pub fn reset(mut self) -> Result<AppState<M, S>> {
        self.repository.clear()?;
        self.release_markers();
        tracing::info!(count = self.store.len(), "Workouts reset");

        Ok(AppState {
            config: self.config,
            map: self.map,
            storage: self.repository.into_storage(),
        })
    }

    // ─── Views ───────────────────────────────────────────────────

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.as_slice()
    }

    /// Rendered list entries, in store order.
    pub fn list(&self) -> &[ListEntry] {
        &self.list
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_marker(&self, id: &WorkoutId) -> bool {
        self.markers.contains_key(id)
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn storage(&self) -> &S {
        self.repository.storage()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether store, list, markers (once the map exists) and the persisted
    /// slot all hold the same ids.
    pub fn views_synchronized(&self) -> Result<bool> {
        let ids = self.store.ids();

        let list_ids: Vec<WorkoutId> = self.list.iter().map(|e| e.id.clone()).collect();
        if list_ids != ids {
            return Ok(false);
        }

        if self.map_ready {
            if self.markers.len() != ids.len() || !ids.iter().all(|id| self.markers.contains_key(id))
            {
                return Ok(false);
            }
        } else if !self.markers.is_empty() {
            return Ok(false);
        }

        let persisted: Vec<WorkoutId> = self
            .repository
            .load()?
            .unwrap_or_default()
            .iter()
            .map(|w| w.id().clone())
            .collect();
        Ok(persisted == ids)
    }

    fn release_markers(&mut self) {
        for (_, marker) in self.markers.drain() {
            self.map.remove_marker(marker);
        }
    }

    /// Best-effort write of the store; failures are logged, not retried.
    fn persist(&self) {
        if let Err(e) = self.repository.save(self.store.as_slice()) {
            tracing::error!(error = %e, "Failed to persist workouts");
        }
    }
}
