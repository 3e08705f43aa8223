// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! New-workout form: raw field text, parsing and validation.

use validator::Validate;

use crate::models::workout::{WorkoutKind, WorkoutType};

/// Which variant-specific row the form currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantField {
    Cadence,
    ElevationGain,
}

/// Field contents as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            workout_type: WorkoutType::Running,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

impl WorkoutForm {
    /// Switch activity type; the visible variant row follows.
    pub fn set_type(&mut self, workout_type: WorkoutType) {
        self.workout_type = workout_type;
    }

    pub fn visible_field(&self) -> VariantField {
        match self.workout_type {
            WorkoutType::Running => VariantField::Cadence,
            WorkoutType::Cycling => VariantField::ElevationGain,
        }
    }

    /// Empty every field and go back to the default type.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse and validate the fields relevant to the selected type.
    ///
    /// The field that is hidden for the selected type is ignored.
    pub fn parse(&self) -> Result<WorkoutInput, ValidationError> {
        let distance_km = parse_number("distance", &self.distance)?;
        let duration_min = parse_number("duration", &self.duration)?;

        let input = match self.workout_type {
            WorkoutType::Running => WorkoutInput {
                distance_km,
                duration_min,
                cadence_spm: Some(parse_number("cadence", &self.cadence)?),
                elevation_gain_m: None,
            },
            WorkoutType::Cycling => WorkoutInput {
                distance_km,
                duration_min,
                cadence_spm: None,
                elevation_gain_m: Some(parse_number("elevation", &self.elevation)?),
            },
        };

        input.validate()?;
        Ok(input)
    }
}

/// Numeric form input that passed parsing and range checks.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct WorkoutInput {
    #[validate(range(exclusive_min = 0.0))]
    pub distance_km: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub duration_min: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub cadence_spm: Option<f64>,
    #[validate(range(min = 0.0))]
    pub elevation_gain_m: Option<f64>,
}

impl WorkoutInput {
    /// Variant payload for a validated input.
    pub fn kind(&self) -> Result<WorkoutKind, ValidationError> {
        match (self.cadence_spm, self.elevation_gain_m) {
            (Some(cadence), None) => {
                if cadence.fract() != 0.0 || cadence > f64::from(u32::MAX) {
                    return Err(ValidationError::InvalidCadence(cadence));
                }
                Ok(WorkoutKind::Running {
                    cadence_spm: cadence as u32,
                })
            }
            (None, Some(elevation)) => Ok(WorkoutKind::Cycling {
                elevation_gain_m: elevation,
            }),
            _ => Err(ValidationError::MissingVariantField),
        }
    }
}

/// Numeric coercion of a text field: blank is zero, anything else must be a
/// finite decimal number.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        })
}

/// Form validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a finite number: {raw:?}")]
    NotANumber { field: &'static str, raw: String },

    #[error("{0}")]
    OutOfRange(#[from] validator::ValidationErrors),

    #[error("cadence must be a positive whole number that fits in 32 bits, got {0}")]
    InvalidCadence(f64),

    #[error("form has no value for the selected workout type")]
    MissingVariantField,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(distance: &str, duration: &str, cadence: &str) -> WorkoutForm {
        WorkoutForm {
            workout_type: WorkoutType::Running,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: String::new(),
        }
    }

    fn cycling(distance: &str, duration: &str, elevation: &str) -> WorkoutForm {
        WorkoutForm {
            workout_type: WorkoutType::Cycling,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: elevation.to_string(),
        }
    }

    #[test]
    fn test_valid_running_input() {
        let input = running("5", "30", "150").parse().unwrap();
        assert_eq!(input.distance_km, 5.0);
        assert_eq!(
            input.kind().unwrap(),
            WorkoutKind::Running { cadence_spm: 150 }
        );
    }

    #[test]
    fn test_valid_cycling_allows_zero_elevation() {
        let input = cycling("20", "60", "0").parse().unwrap();
        assert_eq!(
            input.kind().unwrap(),
            WorkoutKind::Cycling {
                elevation_gain_m: 0.0
            }
        );
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = running("-1", "30", "150").parse().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange(_)));
    }

    #[test]
    fn test_blank_field_counts_as_zero_and_fails() {
        let err = running("5", "", "150").parse().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange(_)));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = running("five", "30", "150").parse().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotANumber {
                field: "distance",
                ..
            }
        ));
        assert!(running("inf", "30", "150").parse().is_err());
        assert!(running("NaN", "30", "150").parse().is_err());
    }

    #[test]
    fn test_zero_cadence_rejected() {
        assert!(running("5", "30", "0").parse().is_err());
    }

    #[test]
    fn test_fractional_cadence_rejected() {
        let input = running("5", "30", "150.5").parse().unwrap();
        assert!(matches!(
            input.kind(),
            Err(ValidationError::InvalidCadence(_))
        ));
    }

    #[test]
    fn test_oversized_cadence_rejected() {
        let input = running("5", "30", "5000000000").parse().unwrap();
        let err = input.kind().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCadence(c) if c == 5_000_000_000.0));
        assert!(err.to_string().contains("positive whole number"));
    }

    #[test]
    fn test_negative_elevation_rejected() {
        assert!(cycling("20", "60", "-10").parse().is_err());
    }

    #[test]
    fn test_hidden_field_ignored() {
        // Cadence garbage does not matter for cycling.
        let mut form = cycling("20", "60", "100");
        form.cadence = "garbage".to_string();
        assert!(form.parse().is_ok());
    }

    #[test]
    fn test_type_toggle_and_clear() {
        let mut form = running("5", "30", "150");
        assert_eq!(form.visible_field(), VariantField::Cadence);

        form.set_type(WorkoutType::Cycling);
        assert_eq!(form.visible_field(), VariantField::ElevationGain);

        form.clear();
        assert_eq!(form, WorkoutForm::default());
        assert_eq!(form.visible_field(), VariantField::Cadence);
    }
}
