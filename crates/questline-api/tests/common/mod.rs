//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use questline_core::clock::Clock;
use questline_session::InMemorySessionStore;
use questline_story::StoryGraph;
use questline_test_support::{FixedClock, fixed_now, intro_camp_story};
use tower::ServiceExt;

use questline_api::state::AppState;

/// Build app state around `story` with an empty session store and a fixed clock.
pub fn test_state(story: StoryGraph) -> AppState {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(fixed_now()));
    AppState::new(
        Arc::new(story),
        Arc::new(InMemorySessionStore::new()),
        clock,
    )
}

/// Build the full app router serving the `intro_camp_story` fixture. Uses the
/// same route structure as `main.rs`.
pub fn build_test_app() -> (Router, AppState) {
    let state = test_state(intro_camp_story());
    (questline_api::app(state.clone()), state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
