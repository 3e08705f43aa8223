// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model: a shared record shape plus a per-activity payload.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Opaque workout identifier, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Number of trailing millisecond digits used for generated ids.
    const DIGITS: usize = 10;

    /// Derive an id from the last ten digits of a timestamp in milliseconds.
    ///
    /// `taken` reports whether a candidate is already in use; the candidate is
    /// bumped until it is free, so two workouts created in the same millisecond
    /// still get distinct ids.
    pub fn generate(now: DateTime<Utc>, taken: impl Fn(&WorkoutId) -> bool) -> Self {
        let modulus = 10u64.pow(Self::DIGITS as u32);
        let mut n = now.timestamp_millis().unsigned_abs() % modulus;
        loop {
            let candidate = WorkoutId(format!("{:0width$}", n, width = Self::DIGITS));
            if !taken(&candidate) {
                return candidate;
            }
            n = (n + 1) % modulus;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        WorkoutId(s.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(s: String) -> Self {
        WorkoutId(s)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Activity discriminator, serialized as `"running"` / `"cycling"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    /// Emoji shown on markers and list entries.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

/// Variant-specific payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running { cadence_spm: u32 },
    Cycling { elevation_gain_m: f64 },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// Derived metric of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Minutes per kilometre (running)
    Pace(f64),
    /// Kilometres per hour (cycling)
    Speed(f64),
}

impl Metric {
    /// Compute the metric for a variant from raw distance and duration.
    pub fn compute(kind: &WorkoutKind, distance_km: f64, duration_min: f64) -> Self {
        match kind {
            WorkoutKind::Running { .. } => Metric::Pace(duration_min / distance_km),
            WorkoutKind::Cycling { .. } => Metric::Speed(distance_km / (duration_min / 60.0)),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Metric::Pace(v) | Metric::Speed(v) => *v,
        }
    }
}

/// One logged activity.
///
/// Everything except `clicks` is fixed at construction; the description and
/// metric are computed once from the creation timestamp and raw inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    kind: WorkoutKind,
    description: String,
    metric: Metric,
    clicks: u32,
}

impl Workout {
    /// Build a workout from already-validated inputs.
    ///
    /// Callers validate positivity first (see [`crate::models::form`]); this
    /// constructor only computes the derived fields.
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        kind: WorkoutKind,
    ) -> Self {
        let description = describe(kind.workout_type(), created_at);
        let metric = Metric::compute(&kind, distance_km, duration_min);
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            kind,
            description,
            metric,
            clicks: 0,
        }
    }

    pub fn running(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Self {
        Self::new(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            WorkoutKind::Running { cadence_spm },
        )
    }

    pub fn cycling(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::new(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            WorkoutKind::Cycling { elevation_gain_m },
        )
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Pace in min/km, for running workouts only.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.metric {
            Metric::Pace(p) => Some(p),
            Metric::Speed(_) => None,
        }
    }

    /// Speed in km/h, for cycling workouts only.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.metric {
            Metric::Speed(s) => Some(s),
            Metric::Pace(_) => None,
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn click(&mut self) {
        self.clicks += 1;
    }

    pub(crate) fn with_clicks(mut self, clicks: u32) -> Self {
        self.clicks = clicks;
        self
    }

    /// Popup text for this workout's map marker.
    pub fn popup_content(&self) -> String {
        format!("{} {}", self.workout_type().icon(), self.description)
    }
}

/// `"<Type> on <Month> <day>"` in local time.
pub fn describe(workout_type: WorkoutType, created_at: DateTime<Utc>) -> String {
    describe_in(workout_type, created_at, &Local)
}

/// `"<Type> on <Month> <day>"` with the day taken in `tz`.
pub fn describe_in<Tz: TimeZone>(
    workout_type: WorkoutType,
    created_at: DateTime<Utc>,
    tz: &Tz,
) -> String {
    format!(
        "{} on {}",
        workout_type.title(),
        time_utils::month_day_in(created_at, tz)
    )
}
