// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness-activity record model for ingest and listing.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored activity record, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrackerRecord {
    /// Assigned by the store, starting at 1
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub username: String,
    /// Activity type (Run, Swim, Cycling, etc.)
    pub activity: String,
    pub duration: i32,
    pub calories: i32,
}

impl TrackerRecord {
    pub fn new(id: u64, record: NewRecord) -> Self {
        Self {
            id,
            username: record.username,
            activity: record.activity,
            duration: record.duration,
            calories: record.calories,
        }
    }
}

/// A validated ingest with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub username: String,
    pub activity: String,
    pub duration: i32,
    pub calories: i32,
}

/// Raw ingest body. Fields stay optional so a missing key can be reported by name.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordPayload {
    pub username: Option<String>,
    pub activity: Option<String>,
    pub duration: Option<i32>,
    pub calories: Option<i32>,
}

impl RecordPayload {
    /// Extract the required fields, failing on the first one that is absent or null.
    pub fn into_new_record(self) -> Result<NewRecord, AppError> {
        Ok(NewRecord {
            username: self.username.ok_or(AppError::MissingField("username"))?,
            activity: self.activity.ok_or(AppError::MissingField("activity"))?,
            duration: self.duration.ok_or(AppError::MissingField("duration"))?,
            calories: self.calories.ok_or(AppError::MissingField("calories"))?,
        })
    }
}
