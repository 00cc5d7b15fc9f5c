// render.rs - Text rendering and population statistics

use std::fmt::{self, Write};

use crate::Simulation;

pub const LIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = '░';

/// Generation banner, a column header, then one labelled line per row.
pub fn render<const N: usize>(sim: &Simulation<N>) -> String {
    let grid = sim.snapshot();
    let mut out = String::new();

    let _ = writeln!(out, "=== Generation {} ===", sim.generation());
    out.push(' ');
    for col in 0..N {
        let _ = write!(out, " {}", col % 10);
    }
    out.push('\n');

    for (row, cells) in grid.iter().enumerate() {
        let _ = write!(out, "{}", row % 10);
        for &alive in cells {
            out.push(' ');
            out.push(if alive { LIVE_GLYPH } else { DEAD_GLYPH });
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Extinct,
    Full,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub generation: u64,
    pub live_cells: usize,
    pub total_cells: usize,
    pub population: Population,
}

impl Stats {
    pub fn of<const N: usize>(sim: &Simulation<N>) -> Self {
        let live_cells = sim.live_count();
        let total_cells = N * N;
        let population = match live_cells {
            0                        => Population::Extinct,
            n if n == total_cells    => Population::Full,
            _                        => Population::Active,
        };
        Self {
            generation: sim.generation(),
            live_cells,
            total_cells,
            population,
        }
    }

    pub fn live_percent(&self) -> f64 {
        self.live_cells as f64 / self.total_cells as f64 * 100.0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.population {
            Population::Extinct => "extinct",
            Population::Full    => "full",
            Population::Active  => "active",
        };
        writeln!(f, "=== Statistics ===")?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Live cells: {}/{}", self.live_cells, self.total_cells)?;
        writeln!(f, "Population: {:.1}%", self.live_percent())?;
        write!(f, "State: {state}")
    }
}
