// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory ordered collection of workouts, the authoritative state.
//!
//! Iteration order is insertion order and drives both list rendering and the
//! persisted order. No deduplication, sorting or capacity bound.

use crate::models::{Workout, WorkoutId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end.
    pub fn add(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Remove and return the workout with `id`; unknown ids are a no-op.
    pub fn remove_by_id(&mut self, id: &WorkoutId) -> Option<Workout> {
        let index = self.workouts.iter().position(|w| w.id() == id)?;
        Some(self.workouts.remove(index))
    }

    /// Discard current contents and take `workouts` in their given order.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Empty the store, returning what it held.
    pub fn clear(&mut self) -> Vec<Workout> {
        std::mem::take(&mut self.workouts)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.workouts.iter()
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn ids(&self) -> Vec<WorkoutId> {
        self.workouts.iter().map(|w| w.id().clone()).collect()
    }
}

impl<'a> IntoIterator for &'a WorkoutStore {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
