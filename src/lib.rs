// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mapty: log running and cycling workouts on a map.
//!
//! This crate provides the workout model, the ordered workout store, its
//! persistence in a key-value slot, and the coordinator that keeps the list,
//! map markers and persisted data in step. Map widgets and storage backends
//! plug in through [`map::MapAdapter`] and [`storage::KeyValueStore`].

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod time_utils;

use config::Config;

/// Adapters and configuration handed to the coordinator at startup.
pub struct AppState<M, S> {
    pub config: Config,
    pub map: M,
    pub storage: S,
}
