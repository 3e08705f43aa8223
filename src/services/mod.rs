// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - application logic layer.

pub mod coordinator;
pub mod geolocation;
pub mod persistence;

pub use coordinator::{FormState, WorkoutCoordinator};
pub use geolocation::{
    request_position, GeolocationError, PendingPosition, PositionResponder, PositionResult,
};
pub use persistence::WorkoutRepository;
