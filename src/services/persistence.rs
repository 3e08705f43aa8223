// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout list persistence over a single key-value slot.

use std::collections::HashSet;

use crate::error::Result;
use crate::models::{StoredWorkout, Workout, WorkoutId};
use crate::storage::KeyValueStore;

/// Reads and writes the ordered workout list as JSON in one named slot.
pub struct WorkoutRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Overwrite the slot with `workouts` in order.
    pub fn save(&self, workouts: &[Workout]) -> Result<()> {
        let stored: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from).collect();
        let json = serde_json::to_string(&stored)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = stored.len(), "Saved workouts");
        Ok(())
    }

    /// Read the slot back.
    ///
    /// Returns `None` when the slot is missing, unreadable, or is not a JSON
    /// list of workouts. Individual records that fail re-hydration, or repeat
    /// an earlier id, are dropped with a warning.
    pub fn load(&self) -> Result<Option<Vec<Workout>>> {
        let json = match self.storage.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring unreadable workout data");
                return Ok(None);
            }
        };

        let stored: Vec<StoredWorkout> = match serde_json::from_str(&json) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring malformed workout data");
                return Ok(None);
            }
        };

        let mut seen: HashSet<WorkoutId> = HashSet::new();
        let mut workouts = Vec::with_capacity(stored.len());
        for record in stored {
            let id = record.id.clone();
            match Workout::try_from(record) {
                Ok(workout) => {
                    if seen.insert(workout.id().clone()) {
                        workouts.push(workout);
                    } else {
                        tracing::warn!(workout_id = %id, "Dropping workout with duplicate id");
                    }
                }
                Err(e) => {
                    tracing::warn!(workout_id = %id, error = %e, "Dropping invalid stored workout");
                }
            }
        }

        tracing::debug!(key = %self.key, count = workouts.len(), "Loaded workouts");
        Ok(Some(workouts))
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)?;
        Ok(())
    }
}
