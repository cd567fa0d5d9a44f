// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness-Tracker: accept activity records and list them newest-first
//!
//! This crate provides the HTTP API that ingests fitness-activity records
//! into process-local memory and serves them back in reverse upload order.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;
use db::RecordStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
}

impl AppState {
    /// Build state around a fresh, empty record store.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: RecordStore::new(),
        }
    }
}
