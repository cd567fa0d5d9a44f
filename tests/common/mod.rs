// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, Response},
};
use fitness_tracker::config::Config;
use fitness_tracker::routes::create_router;
use fitness_tracker::AppState;
use std::sync::Arc;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create a test app around a fresh, empty store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default()));
    (create_router(state.clone()), state)
}

/// Build a JSON POST to the tracker endpoint.
#[allow(dead_code)]
pub fn post_record(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tracker")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET of the tracker listing.
#[allow(dead_code)]
pub fn get_records() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/tracker")
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
