//! Shared application state and request/response types for the game API.

use std::sync::Arc;

use conway::{GRID_SIZE, Simulation};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Shared application state for the web server.
///
/// Every handler goes through the one mutex, so engine calls are serialized
/// and a read taken under the lock always reflects the last completed
/// mutation.
pub struct AppState {
    pub sim: Arc<Mutex<Simulation<GRID_SIZE>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sim: Arc::new(Mutex::new(Simulation::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones the `Arc`, not the simulation: all clones drive the same game.
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            sim: Arc::clone(&self.sim),
        }
    }
}

/// Response payload for `GET /api/game/state`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub generation: u64,
    pub live_cells: usize,
    /// Row-major N x N liveness matrix
    pub grid: Vec<Vec<bool>>,
}

impl GameState {
    pub fn of<const N: usize>(sim: &Simulation<N>) -> Self {
        Self {
            generation: sim.generation(),
            live_cells: sim.live_count(),
            grid: sim.snapshot().iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// Request body for `POST /api/game/cell`.
///
/// Coordinates are signed so that negative values parse and are then
/// ignored by the engine, like any other out-of-range write.
#[derive(Debug, Deserialize)]
pub struct SetCellRequest {
    pub row: i64,
    pub col: i64,
    pub alive: bool,
}

/// Optional request body for `POST /api/game/pattern`.
#[derive(Debug, Deserialize)]
pub struct PatternRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Response payload for `POST /api/game/next`.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub success: bool,
    pub generation: u64,
}
