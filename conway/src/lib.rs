//! Conway's Game of Life on a small bounded grid.
//!
//! [`Simulation`] is the engine and the single source of truth for the grid
//! and generation counter. Presentation code (console, HTTP, desktop viewer)
//! reads it through copies and mutates it through its methods only.

pub mod grid;
pub mod history;
pub mod patterns;
pub mod render;
pub mod simulation;

pub use grid::{GRID_SIZE, Grid, TGrid, TRow};
pub use history::CycleDetector;
pub use patterns::{PATTERNS, PRESET, Pattern};
pub use render::{Population, Stats, render};
pub use simulation::{Simulation, next_state};
