// viewer.rs - Desktop viewer state: one simulation plus the run/pause driver

use std::time::{Duration, Instant};

use conway::{CycleDetector, GRID_SIZE, PATTERNS, Simulation};
use egui::Color32;
use tracing::{debug, info};

pub struct Viewer {
    pub sim: Simulation<GRID_SIZE>,
    cycles: CycleDetector,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub status: String,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            sim: Simulation::new(),
            cycles: CycleDetector::new(),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(500),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            status: String::new(),
        }
    }
}

impl Viewer {
    pub fn toggle_running(&mut self, now: Instant) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = now;
            self.cycles.clear();
            self.cycles.observe(&self.sim.snapshot());
            self.status.clear();
        }
    }

    /// Advances when running and the interval has elapsed. Returns whether a
    /// generation was computed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.step();
        self.last_update = now;
        true
    }

    /// One generation; pauses once the grid is empty or starts repeating.
    pub fn step(&mut self) {
        self.sim.advance();

        if self.sim.is_empty() {
            self.pause(format!("All cells died at generation {}", self.sim.generation()));
        } else if self.cycles.observe(&self.sim.snapshot()) {
            self.pause(format!("Pattern repeats at generation {}", self.sim.generation()));
        }
    }

    fn pause(&mut self, reason: String) {
        if self.is_running {
            info!("{reason}, pausing");
        }
        self.is_running = false;
        self.status = reason;
    }

    pub fn clear(&mut self) {
        self.is_running = false;
        self.sim.reset();
        self.cycles.clear();
        self.status.clear();
    }

    pub fn randomize(&mut self) {
        self.clear();
        self.sim.randomize(&mut rand::rng());
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.clear();
            self.sim.apply_pattern(pattern);
            debug!(pattern = pattern.name, "viewer applied pattern");
        }
    }

    /// Click-to-toggle; ignored while the simulation is running.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if !self.is_running {
            self.sim.toggle_cell(row, col);
        }
    }

    pub fn speed(&self) -> f32 {
        1000.0 / self.update_interval.as_millis().max(1) as f32
    }

    pub fn set_speed(&mut self, generations_per_sec: f32) {
        let millis = (1000.0 / generations_per_sec.max(0.1)) as u64;
        self.update_interval = Duration::from_millis(millis.max(1));
    }
}
