// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing alerts.

use crate::map::MapError;
use crate::models::form::ValidationError;
use crate::services::geolocation::GeolocationError;
use crate::storage::StorageError;

/// Application error type surfaced to the host as a blocking alert or a log line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid workout input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Map is not ready")]
    MapNotReady,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Alert text shown when a form field is missing, non-numeric or not positive.
    pub const INVALID_INPUT_ALERT: &'static str = "Inputs have to be positive numbers.";

    /// Alert text shown when the browser refuses or cannot provide a position.
    pub const POSITION_ALERT: &'static str = "Could not get your position.";

    /// Text for the blocking alert the host shows, if this error warrants one.
    ///
    /// Storage and internal failures have no alert; callers log them instead.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AppError::Validation(_) => Some(Self::INVALID_INPUT_ALERT),
            AppError::Geolocation(_) => Some(Self::POSITION_ALERT),
            AppError::Storage(_)
            | AppError::Serialization(_)
            | AppError::Map(_)
            | AppError::MapNotReady
            | AppError::InvalidState(_)
            | AppError::Internal(_) => None,
        }
    }
}

/// Result type alias for coordinator operations
pub type Result<T> = std::result::Result<T, AppError>;
