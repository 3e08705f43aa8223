// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted workout record.
//!
//! Each workout is flattened into a plain JSON object with a `type`
//! discriminator. Derived values (`pace`, `speed`, `description`) are written
//! for readers of the slot, but are recomputed from the raw inputs on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::workout::{Coordinates, Metric, Workout, WorkoutId, WorkoutKind};
use crate::time_utils;

/// Flat record as stored in the persisted slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StoredWorkout {
    /// Creation time (ISO 8601, milliseconds)
    pub date: String,
    pub id: String,
    #[serde(default)]
    pub clicks: u32,
    /// `[lat, lng]`
    pub coords: [f64; 2],
    /// Kilometres
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub details: StoredDetails,
}

/// Variant fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoredDetails {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per kilometre, as computed when saved
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pace: Option<f64>,
    },
    Cycling {
        /// Metres
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// Kilometres per hour, as computed when saved
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<f64>,
    },
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        let details = match (*w.kind(), w.metric()) {
            (WorkoutKind::Running { cadence_spm }, metric) => StoredDetails::Running {
                cadence: f64::from(cadence_spm),
                pace: Some(metric.value()),
            },
            (WorkoutKind::Cycling { elevation_gain_m }, metric) => StoredDetails::Cycling {
                elevation_gain: elevation_gain_m,
                speed: Some(metric.value()),
            },
        };

        Self {
            date: time_utils::format_utc_rfc3339(w.created_at()),
            id: w.id().to_string(),
            clicks: w.clicks(),
            coords: w.coords().into(),
            distance: w.distance_km(),
            duration: w.duration_min(),
            description: Some(w.description().to_string()),
            details,
        }
    }
}

/// Reasons a stored record cannot be re-hydrated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HydrateError {
    #[error("empty id")]
    EmptyId,

    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("{0} must be a positive number, got {1}")]
    NotPositive(&'static str, f64),

    #[error("cadence must be a positive whole number, got {0}")]
    InvalidCadence(f64),

    #[error("elevation gain must be a non-negative number, got {0}")]
    InvalidElevation(f64),

    #[error("coordinates must be finite")]
    InvalidCoordinates,
}

impl TryFrom<StoredWorkout> for Workout {
    type Error = HydrateError;

    fn try_from(stored: StoredWorkout) -> Result<Self, Self::Error> {
        if stored.id.is_empty() {
            return Err(HydrateError::EmptyId);
        }
        let created_at = DateTime::parse_from_rfc3339(&stored.date)
            .map_err(|_| HydrateError::InvalidDate(stored.date.clone()))?
            .with_timezone(&Utc);

        if !stored.coords.iter().all(|c| c.is_finite()) {
            return Err(HydrateError::InvalidCoordinates);
        }
        check_positive("distance", stored.distance)?;
        check_positive("duration", stored.duration)?;

        let kind = match stored.details {
            StoredDetails::Running { cadence, .. } => {
                if !(cadence.is_finite()
                    && cadence > 0.0
                    && cadence.fract() == 0.0
                    && cadence <= f64::from(u32::MAX))
                {
                    return Err(HydrateError::InvalidCadence(cadence));
                }
                WorkoutKind::Running {
                    cadence_spm: cadence as u32,
                }
            }
            StoredDetails::Cycling { elevation_gain, .. } => {
                if !(elevation_gain.is_finite() && elevation_gain >= 0.0) {
                    return Err(HydrateError::InvalidElevation(elevation_gain));
                }
                WorkoutKind::Cycling {
                    elevation_gain_m: elevation_gain,
                }
            }
        };

        let workout = Workout::new(
            WorkoutId::from(stored.id),
            created_at,
            Coordinates::from(stored.coords),
            stored.distance,
            stored.duration,
            kind,
        );
        Ok(workout.with_clicks(stored.clicks))
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), HydrateError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HydrateError::NotPositive(field, value))
    }
}

impl StoredDetails {
    /// Derived metric as it was written, which may predate the current formula.
    pub fn stored_metric(&self) -> Option<Metric> {
        match self {
            StoredDetails::Running { pace, .. } => pace.map(Metric::Pace),
            StoredDetails::Cycling { speed, .. } => speed.map(Metric::Speed),
        }
    }
}
