//! REST API handlers for the game endpoints.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use conway::patterns;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AppState, GameState, PatternRequest, SetCellRequest, StepResponse, SuccessResponse};

/// GET `/api/game/state` - Generation, live-cell count and grid, read in one
/// critical section.
pub async fn state_handler(State(state): State<AppState>) -> Json<GameState> {
    let sim = state.sim.lock().await;
    Json(GameState::of(&sim))
}

/// POST `/api/game/next` - Advances one generation.
pub async fn next_handler(State(state): State<AppState>) -> Json<StepResponse> {
    let mut sim = state.sim.lock().await;
    sim.advance();
    debug!(generation = sim.generation(), "advanced via API");
    Json(StepResponse {
        success: true,
        generation: sim.generation(),
    })
}

/// POST `/api/game/reset` - Generation 0, all cells dead.
pub async fn reset_handler(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.sim.lock().await.reset();
    info!("game reset");
    Json(SuccessResponse::ok())
}

/// POST `/api/game/random` - Randomizes the grid; the generation is kept.
pub async fn random_handler(State(state): State<AppState>) -> Json<SuccessResponse> {
    let mut sim = state.sim.lock().await;
    sim.randomize(&mut rand::rng());
    Json(SuccessResponse::ok())
}

/// POST `/api/game/pattern` - Resets, then applies the preset.
///
/// # Request Body
/// Optional. `{"name": "glider"}` selects another pattern from the library.
///
/// # Response
/// - `200 OK` with `{"success": true}`
/// - `400 BAD_REQUEST` if a body is present but is not valid JSON
/// - `404 NOT_FOUND` if the named pattern does not exist
pub async fn pattern_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let pattern = if body.iter().all(u8::is_ascii_whitespace) {
        patterns::PRESET
    } else {
        let request: PatternRequest = serde_json::from_slice(&body)?;
        patterns::find(&request.name).ok_or(ApiError::UnknownPattern(request.name))?
    };

    let mut sim = state.sim.lock().await;
    sim.reset();
    sim.apply_pattern(pattern);
    info!(pattern = pattern.name, "pattern applied");
    Ok(Json(SuccessResponse::ok()))
}

/// GET `/api/game/patterns` - Names accepted by `/api/game/pattern`.
pub async fn patterns_handler() -> Json<Vec<&'static str>> {
    Json(patterns::names().collect())
}

/// POST `/api/game/cell` - Writes one cell.
///
/// # Request Body
/// ```json
/// { "row": 0, "col": 1, "alive": true }
/// ```
///
/// Coordinates outside the grid, negative ones included, are accepted and
/// ignored.
pub async fn cell_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessResponse>, ApiError> {
    let request: SetCellRequest = serde_json::from_slice(&body)?;

    match (usize::try_from(request.row), usize::try_from(request.col)) {
        (Ok(row), Ok(col)) => state.sim.lock().await.set_cell(row, col, request.alive),
        _ => debug!(row = request.row, col = request.col, "ignoring negative cell coordinates"),
    }
    Ok(Json(SuccessResponse::ok()))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>404 - Not Found</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; padding: 50px; }
        h1 { color: #e74c3c; }
        a { color: #3498db; text-decoration: none; }
    </style>
</head>
<body>
    <h1>404 - Not Found</h1>
    <p>The requested file does not exist.</p>
    <a href="/">&larr; Back to the Game of Life</a>
</body>
</html>
"#,
        ),
    )
}
