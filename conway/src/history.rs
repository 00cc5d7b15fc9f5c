// history.rs - Repeat detection for drivers that auto-advance

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::TGrid;

pub const HISTORY_LEN: usize = 10;

/// Remembers the hashes of the last [`HISTORY_LEN`] grids in a circular
/// buffer. A grid seen again inside that window means the run has settled
/// into a still life or an oscillator.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

pub fn hash_grid<const N: usize>(grid: &TGrid<N>) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `grid` is already in the window, otherwise records it.
    pub fn observe<const N: usize>(&mut self, grid: &TGrid<N>) -> bool {
        let current_hash = hash_grid(grid);
        let filled = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..filled].contains(&current_hash) {
            return true;
        }

        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
    }
}
