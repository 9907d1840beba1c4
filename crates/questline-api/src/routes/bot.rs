//! Routes for chat gateway events.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use questline_core::user::UserId;
use questline_session::application::query_handlers::{self, SessionView};
use questline_session::application::command_handlers;
use questline_session::domain::commands;
use questline_session::domain::render::{RenderInstruction, RenderedScene};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /start.
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    /// The user who sent the start command.
    pub user_id: UserId,
}

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    /// The user who pressed the button.
    pub user_id: UserId,
    /// The button's callback payload.
    pub payload: String,
}

/// POST /start
#[instrument(skip(state, request), fields(user_id = %request.user_id))]
async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<RenderInstruction>, ApiError> {
    let command = commands::BeginStory {
        correlation_id: Uuid::new_v4(),
        user_id: request.user_id,
    };

    info!(correlation_id = %command.correlation_id, "handling begin_story command");

    let instruction = command_handlers::handle_begin_story(
        &command,
        &state.story,
        state.sessions.as_ref(),
        state.clock.as_ref(),
    )?;

    Ok(Json(instruction))
}

/// POST /choice
#[instrument(skip(state, request), fields(user_id = %request.user_id))]
async fn choice(
    State(state): State<AppState>,
    Json(request): Json<ChoiceRequest>,
) -> Result<Json<RenderInstruction>, ApiError> {
    let command = commands::SelectChoice {
        correlation_id: Uuid::new_v4(),
        user_id: request.user_id,
        payload: request.payload,
    };

    info!(correlation_id = %command.correlation_id, "handling select_choice command");

    let instruction = command_handlers::handle_select_choice(
        &command,
        &state.story,
        state.sessions.as_ref(),
        state.clock.as_ref(),
    )?;

    Ok(Json(instruction))
}

/// GET /sessions/{user_id}
async fn get_session(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<SessionView>, ApiError> {
    let view = query_handlers::get_session_by_user(UserId(user_id), state.sessions.as_ref())?;
    Ok(Json(view))
}

/// GET /sessions/{user_id}/scene
async fn get_current_scene(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<RenderedScene>, ApiError> {
    let scene =
        query_handlers::resolve_current(UserId(user_id), &state.story, state.sessions.as_ref())?;
    Ok(Json(scene))
}

/// Returns the router for gateway events.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start))
        .route("/choice", post(choice))
        .route("/sessions/{user_id}", get(get_session))
        .route("/sessions/{user_id}/scene", get(get_current_scene))
}
