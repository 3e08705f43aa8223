// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod form;
pub mod list;
pub mod stored;
pub mod workout;

pub use form::{ValidationError, VariantField, WorkoutForm, WorkoutInput};
pub use list::{Detail, ListEntry};
pub use stored::{HydrateError, StoredDetails, StoredWorkout};
pub use workout::{Coordinates, Metric, Workout, WorkoutId, WorkoutKind, WorkoutType};
