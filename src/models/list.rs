// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendered workout list entries.

use serde::Serialize;

use crate::models::workout::{Metric, Workout, WorkoutId, WorkoutKind, WorkoutType};

/// One value/unit pair shown under an entry's title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// A workout as shown in the sidebar list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub workout_type: WorkoutType,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListEntry {
    pub fn render(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();
        let mut details = vec![
            Detail {
                icon: workout_type.icon(),
                value: format_number(workout.distance_km()),
                unit: "km",
            },
            Detail {
                icon: "⏱",
                value: format_number(workout.duration_min()),
                unit: "min",
            },
        ];

        match (workout.metric(), workout.kind()) {
            (Metric::Pace(pace), WorkoutKind::Running { cadence_spm }) => {
                details.push(Detail {
                    icon: "⚡️",
                    value: format!("{:.1}", pace),
                    unit: "min/km",
                });
                details.push(Detail {
                    icon: "🦶🏼",
                    value: cadence_spm.to_string(),
                    unit: "spm",
                });
            }
            (Metric::Speed(speed), WorkoutKind::Cycling { elevation_gain_m }) => {
                details.push(Detail {
                    icon: "⚡️",
                    value: format!("{:.1}", speed),
                    unit: "km/h",
                });
                details.push(Detail {
                    icon: "🚴‍♀️",
                    value: format_number(*elevation_gain_m),
                    unit: "m",
                });
            }
            // Metric is always computed from the kind.
            _ => {}
        }

        Self {
            id: workout.id().clone(),
            workout_type,
            title: workout.description().to_string(),
            details,
        }
    }

    /// Markup for browser hosts: an `li.workout` carrying `data-id` and a
    /// `.workout__delete` button.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<li class=\"workout workout--{ty}\" data-id=\"{id}\">\
             <button class=\"workout__delete\" data-id=\"{id}\">Delete</button>\
             <h2 class=\"workout__title\">{title}</h2>",
            ty = self.workout_type.as_str(),
            id = escape(self.id.as_str()),
            title = escape(&self.title),
        );
        for detail in &self.details {
            html.push_str(&format!(
                "<div class=\"workout__details\">\
                 <span class=\"workout__icon\">{}</span>\
                 <span class=\"workout__value\">{}</span>\
                 <span class=\"workout__unit\">{}</span>\
                 </div>",
                detail.icon,
                escape(&detail.value),
                detail.unit
            ));
        }
        html.push_str("</li>");
        html
    }
}

/// Whole numbers print without a fractional part, like `5` rather than `5.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
