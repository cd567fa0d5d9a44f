// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tracker routes: ingest a record, list records newest-first.

use crate::error::{AppError, Result};
use crate::models::{RecordPayload, TrackerRecord};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/tracker", get(list_records).post(create_record))
}

/// Store a new activity record.
///
/// The body is fully validated before the store is touched, so a rejected
/// request never consumes an id or grows the collection.
async fn create_record(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RecordPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TrackerRecord>)> {
    let new_record = payload
        .map_err(AppError::from)
        .and_then(|Json(payload)| payload.into_new_record())
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected tracker record"))?;

    let record = state.store.append(new_record);

    tracing::info!(
        record_id = record.id,
        username = %record.username,
        activity = %record.activity,
        "Tracker record stored"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// List every stored record, most recent upload first.
async fn list_records(State(state): State<Arc<AppState>>) -> Json<Vec<TrackerRecord>> {
    let records = state.store.list_newest_first();
    tracing::debug!(count = records.len(), "Listing tracker records");
    Json(records)
}
