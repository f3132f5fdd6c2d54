//! HTTP boundary for the move endpoint.

use crate::board::Board;
use crate::llm_client::Completion;
use crate::parser::{MoveResult, parse_response};
use crate::prompt::build_prompt;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Request body for the move endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Column the opponent just played.
    #[serde(rename = "move")]
    pub user_move: i64,
    /// Current board state.
    pub board: Board,
}

/// Body of the 400 response for a malformed board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    /// Static description of the shape violation.
    pub error: String,
}

/// Shared request-handler state: the completion client configured at startup.
///
/// Held behind a trait object so tests can swap in a stub provider.
#[derive(Clone)]
pub struct AppState {
    llm: Arc<dyn Completion>,
}

impl AppState {
    /// Creates state around a completion client.
    pub fn new(llm: Arc<dyn Completion>) -> Self {
        Self { llm }
    }
}

/// Builds the application router.
#[instrument(skip(llm))]
pub fn router(llm: Arc<dyn Completion>) -> Router {
    info!("Building application router");
    Router::new()
        .route("/api/llm-move", post(llm_move))
        .with_state(AppState::new(llm))
}

/// Handles one move request: validate, prompt, complete, parse.
///
/// Only board-shape and provider failures become HTTP errors. Content-level
/// parse failures stay inside a 200 with the `"Error"` sentinel so the client
/// UI always has an explanation string to render.
#[instrument(skip(state, req), fields(user_move = req.user_move))]
async fn llm_move(State(state): State<AppState>, Json(req): Json<MoveRequest>) -> Response {
    debug!("Processing move request");

    if let Err(e) = req.board.check_shape() {
        warn!(error = %e, "Rejecting malformed board");
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorBody {
                error: "Invalid board size".to_string(),
            }),
        )
            .into_response();
    }

    let prompt = build_prompt(req.user_move, &req.board);
    debug!(prompt_length = prompt.len(), "Prompt built");

    let raw = match state.llm.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, "LLM call failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MoveResult::transport_error()),
            )
                .into_response();
        }
    };

    let result = parse_response(&raw);
    info!(column = %result.column, "Move request completed");
    (StatusCode::OK, Json(result)).into_response()
}
