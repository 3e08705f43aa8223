// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

use crate::models::Coordinates;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Persistence ---
    /// Directory holding the persisted slot file
    pub data_dir: PathBuf,
    /// Name of the single slot holding the serialized workout list
    pub storage_key: String,

    // --- Map ---
    /// Id of the element the map is created in
    pub map_container: String,
    /// Zoom level for the initial view and list-click re-centering
    pub map_zoom: f64,
    /// Tile layer URL template
    pub tile_url: String,
    /// Tile layer attribution HTML
    pub tile_attribution: String,

    // --- Geolocation ---
    /// Position the host reports when asked; `None` behaves like a denied request
    pub home_position: Option<Coordinates>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: "workouts".to_string(),
            map_container: "map".to_string(),
            map_zoom: 13.0,
            tile_url: "https://tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".to_string(),
            tile_attribution:
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                    .to_string(),
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let map_zoom = match env::var("MAPTY_MAP_ZOOM") {
            Ok(raw) => parse_number("MAPTY_MAP_ZOOM", &raw)?,
            Err(_) => defaults.map_zoom,
        };

        let home_position = match (env::var("MAPTY_HOME_LAT"), env::var("MAPTY_HOME_LNG")) {
            (Ok(lat), Ok(lng)) => Some(Coordinates::new(
                parse_number("MAPTY_HOME_LAT", &lat)?,
                parse_number("MAPTY_HOME_LNG", &lng)?,
            )),
            (Ok(_), Err(_)) => return Err(ConfigError::Missing("MAPTY_HOME_LNG")),
            (Err(_), Ok(_)) => return Err(ConfigError::Missing("MAPTY_HOME_LAT")),
            (Err(_), Err(_)) => None,
        };

        Ok(Self {
            data_dir: env::var("MAPTY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_key: env::var("MAPTY_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.storage_key),
            map_container: env::var("MAPTY_MAP_CONTAINER").unwrap_or(defaults.map_container),
            map_zoom,
            tile_url: env::var("MAPTY_TILE_URL").unwrap_or(defaults.tile_url),
            tile_attribution: env::var("MAPTY_TILE_ATTRIBUTION")
                .unwrap_or(defaults.tile_attribution),
            home_position,
        })
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::Invalid(name, raw.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
