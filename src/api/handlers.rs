//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    response::{Html, Json},
};
use chrono::Utc;
use tracing::debug;

use crate::{display::render_page, state::AppState};
use super::responses::{CountdownResponse, HealthResponse};

/// Handle GET / - Render the countdown page
pub async fn page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.snapshot();
    debug!("Rendering page, ended={}", snapshot.ended);
    Html(render_page(state.options(), &snapshot))
}

/// Handle GET /countdown - Return the current countdown as JSON
pub async fn countdown_handler(State(state): State<Arc<AppState>>) -> Json<CountdownResponse> {
    let options = state.options();

    Json(CountdownResponse {
        title: options.title.clone(),
        position: options.position,
        state: state.timer.state(),
        display: state.snapshot(),
        event_instant: state.timer.target().map(|target| target.instant()),
        error: state.timer.failure().map(|e| e.to_string()),
        uptime: state.get_uptime(),
        timestamp: Utc::now(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
