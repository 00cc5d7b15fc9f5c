// simulation.rs - Bounded Game of Life engine (B3/S23, no wraparound)

use rand::{Rng, RngCore};
use tracing::{debug, trace};

use crate::grid::{GRID_SIZE, Grid, TGrid};
use crate::patterns::{self, Pattern};

// Moore neighbourhood offsets, the cell itself excluded
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Next liveness of a single cell under B3/S23.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Game of Life on a bounded N x N grid.
///
/// The simulation is the single owner of its grid and generation counter.
/// Every operation is total: coordinates outside the grid are ignored, never
/// reported, and nothing here panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation<const N: usize = GRID_SIZE> {
    grid: Grid<N>,
    generation: u64,
}

impl<const N: usize> Default for Simulation<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Simulation<N> {
    /// All cells dead, generation 0.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            generation: 0,
        }
    }

    pub const fn size(&self) -> usize {
        N
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.contains(row, col) && self.grid.get(row, col)
    }

    /// Writes a cell. Out-of-range coordinates are a silent no-op.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        if !self.grid.contains(row, col) {
            trace!(row, col, size = N, "ignoring out-of-range cell write");
            return;
        }
        self.grid.set(row, col, alive);
    }

    /// Flips a cell. Out-of-range coordinates are a silent no-op.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.grid.contains(row, col) {
            let alive = self.grid.get(row, col);
            self.grid.set(row, col, !alive);
        }
    }

    /// One independent fair coin per cell drawn from `rng`. Generation is
    /// left untouched.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) {
        for row in 0..N {
            for col in 0..N {
                self.grid.set(row, col, rng.random_bool(0.5));
            }
        }
        debug!(live = self.grid.live_count(), "randomized grid");
    }

    /// Replaces the grid with the canonical preset. Generation is left
    /// untouched; callers wanting generation 0 reset first.
    pub fn apply_preset(&mut self) {
        self.apply_pattern(patterns::PRESET);
    }

    /// Clears the grid, then brings the pattern's cells to life. Cells that
    /// fall outside the grid are skipped.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.grid = Grid::new();
        for &(row, col) in pattern.cells {
            if self.grid.contains(row, col) {
                self.grid.set(row, col, true);
            }
        }
        debug!(pattern = pattern.name, "applied pattern");
    }

    /// Live cells among the 8 neighbours of `(row, col)`. Positions outside
    /// the grid count as dead.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBORS
            .iter()
            .filter_map(|&(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
            .filter(|&(nr, nc)| self.grid.contains(nr, nc) && self.grid.get(nr, nc))
            .count() as u8
    }

    /// Computes the whole next generation from the current one, then swaps
    /// it in and bumps the generation by one.
    pub fn advance(&mut self) {
        let mut next = Grid::new();
        for row in 0..N {
            for col in 0..N {
                let alive = self.grid.get(row, col);
                next.set(row, col, next_state(alive, self.live_neighbors(row, col)));
            }
        }

        self.grid = next;
        self.generation += 1;
        trace!(generation = self.generation, live = self.grid.live_count(), "advanced");
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Back to the freshly constructed state.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.generation = 0;
        debug!("simulation reset");
    }

    pub fn snapshot(&self) -> TGrid<N> {
        self.grid.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Replays a fixed sequence of words, wrapping around.
    struct FixedSequence {
        words: Vec<u64>,
        index: usize,
    }

    impl FixedSequence {
        fn new(words: &[u64]) -> Self {
            Self { words: words.to_vec(), index: 0 }
        }
    }

    impl RngCore for FixedSequence {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.index % self.words.len()];
            self.index += 1;
            word
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst {
                *byte = self.next_u64() as u8;
            }
        }
    }

    fn with_cells<const N: usize>(cells: &[(usize, usize)]) -> Simulation<N> {
        let mut sim = Simulation::new();
        for &(row, col) in cells {
            sim.set_cell(row, col, true);
        }
        sim
    }

    fn live_cells<const N: usize>(sim: &Simulation<N>) -> Vec<(usize, usize)> {
        let snapshot = sim.snapshot();
        (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .filter(|&(row, col)| snapshot[row][col])
            .collect()
    }

    #[test]
    fn rule_table() {
        for neighbors in 0..=8 {
            assert_eq!(next_state(true, neighbors), neighbors == 2 || neighbors == 3);
            assert_eq!(next_state(false, neighbors), neighbors == 3);
        }
    }

    #[test]
    fn new_simulation_is_empty_at_generation_zero() {
        let sim = Simulation::<GRID_SIZE>::new();
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_empty());
        assert_eq!(sim.live_count(), 0);
        assert_eq!(sim.size(), GRID_SIZE);
    }

    #[test]
    fn set_cell_out_of_range_is_ignored() {
        let mut sim: Simulation = with_cells(&[(0, 0), (4, 4)]);
        let before = sim.snapshot();

        sim.set_cell(5, 0, true);
        sim.set_cell(0, 5, true);
        sim.set_cell(usize::MAX, usize::MAX, true);
        sim.set_cell(7, 7, false);

        assert_eq!(sim.snapshot(), before);
        assert_eq!(sim.live_count(), 2);
    }

    #[test]
    fn toggle_cell_flips_and_ignores_out_of_range() {
        let mut sim = Simulation::<3>::new();
        sim.toggle_cell(1, 2);
        assert!(sim.is_alive(1, 2));
        sim.toggle_cell(1, 2);
        assert!(!sim.is_alive(1, 2));

        sim.toggle_cell(3, 3);
        assert!(sim.is_empty());
    }

    #[test]
    fn is_alive_is_false_outside_grid() {
        let sim: Simulation = with_cells(&[(4, 4)]);
        assert!(sim.is_alive(4, 4));
        assert!(!sim.is_alive(5, 4));
    }

    #[test]
    fn neighbors_of_full_grid_respect_edges() {
        let mut sim = Simulation::<5>::new();
        for row in 0..5 {
            for col in 0..5 {
                sim.set_cell(row, col, true);
            }
        }

        for corner in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(sim.live_neighbors(corner.0, corner.1), 3, "corner {corner:?}");
        }
        for edge in [(0, 2), (2, 0), (4, 2), (2, 4), (0, 1), (3, 4)] {
            assert_eq!(sim.live_neighbors(edge.0, edge.1), 5, "edge {edge:?}");
        }
        assert_eq!(sim.live_neighbors(2, 2), 8);
    }

    #[test]
    fn neighbors_exclude_the_cell_itself() {
        let sim: Simulation = with_cells(&[(2, 2)]);
        assert_eq!(sim.live_neighbors(2, 2), 0);
        assert_eq!(sim.live_neighbors(1, 1), 1);
        assert_eq!(sim.live_neighbors(0, 0), 0);
    }

    #[test]
    fn neighbors_on_a_single_cell_grid() {
        let sim: Simulation<1> = with_cells(&[(0, 0)]);
        assert_eq!(sim.live_neighbors(0, 0), 0);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut sim = Simulation::<GRID_SIZE>::new();
        sim.advance();
        assert!(sim.is_empty());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn isolated_cell_dies() {
        for (row, col) in [(0, 0), (2, 2), (4, 1)] {
            let mut sim: Simulation = with_cells(&[(row, col)]);
            sim.advance();
            assert!(sim.is_empty(), "lonely cell at ({row}, {col}) should die");
        }
    }

    #[test]
    fn block_is_a_still_life() {
        let mut sim: Simulation<6> = with_cells(&[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let before = sim.snapshot();
        sim.advance();
        assert_eq!(sim.snapshot(), before);
        sim.advance();
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut sim: Simulation = with_cells(&[(2, 1), (2, 2), (2, 3)]);
        sim.advance();
        assert_eq!(live_cells(&sim), [(1, 2), (2, 2), (3, 2)]);
        sim.advance();
        assert_eq!(live_cells(&sim), [(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn update_is_simultaneous() {
        // An in-place update would let (1, 1) die before (0, 1) is counted.
        let mut sim: Simulation<3> = with_cells(&[(1, 0), (1, 1), (1, 2)]);
        sim.advance();
        assert_eq!(live_cells(&sim), [(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn preset_then_advance_matches_fixture() {
        let mut sim = Simulation::<5>::new();
        sim.apply_preset();
        assert_eq!(live_cells(&sim), [(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
        assert_eq!(sim.generation(), 0);

        sim.advance();
        assert_eq!(
            sim.snapshot(),
            [
                [false, false, false, false, false],
                [false, true,  true,  true,  false],
                [false, true,  false, true,  false],
                [false, true,  true,  true,  false],
                [false, false, false, false, false],
            ]
        );
        assert_eq!(sim.live_count(), 8);

        sim.advance();
        assert_eq!(
            live_cells(&sim),
            [(0, 2), (1, 1), (1, 3), (2, 0), (2, 4), (3, 1), (3, 3), (4, 2)]
        );
        assert_eq!(sim.live_count(), 8);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn apply_preset_overwrites_previous_state() {
        let mut sim: Simulation = with_cells(&[(0, 0), (4, 4), (0, 4)]);
        sim.apply_preset();
        assert_eq!(live_cells(&sim), [(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn apply_pattern_skips_cells_outside_grid() {
        let mut sim = Simulation::<3>::new();
        sim.apply_preset();
        // (2,1), (2,2), (1,2) fit; (2,3) and (3,2) do not
        assert_eq!(live_cells(&sim), [(1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn randomize_follows_the_injected_source() {
        // random_bool(0.5) is true for words below 2^63
        let mut rng = FixedSequence::new(&[0, u64::MAX]);
        let mut sim = Simulation::<2>::new();
        sim.randomize(&mut rng);
        assert_eq!(sim.snapshot(), [[true, false], [true, false]]);
        assert_eq!(sim.generation(), 0);

        let mut rng = FixedSequence::new(&[u64::MAX]);
        sim.randomize(&mut rng);
        assert!(sim.is_empty());
    }

    #[test]
    fn randomize_is_reproducible_with_a_seeded_source() {
        let mut a = Simulation::<8>::new();
        let mut b = Simulation::<8>::new();
        a.randomize(&mut SmallRng::seed_from_u64(7));
        b.randomize(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a.snapshot(), b.snapshot());
        assert!(a.live_count() > 0 && a.live_count() < 64, "64 fair coins should not all agree");
    }

    #[test]
    fn randomize_keeps_generation() {
        let mut sim = Simulation::<GRID_SIZE>::new();
        sim.advance();
        sim.advance();
        sim.randomize(&mut SmallRng::seed_from_u64(1));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut sim = Simulation::<GRID_SIZE>::new();
        sim.apply_preset();
        sim.advance();
        sim.advance();
        sim.reset();
        assert_eq!(sim.generation(), 0);
        assert!(sim.is_empty());
        assert_eq!(sim, Simulation::new());
    }

    #[test]
    fn generation_counts_only_advances() {
        let mut sim = Simulation::<GRID_SIZE>::new();
        let mut rng = SmallRng::seed_from_u64(99);
        for k in 1..=12u64 {
            match k % 3 {
                0 => sim.set_cell(1, 1, true),
                1 => sim.randomize(&mut rng),
                _ => sim.apply_preset(),
            }
            sim.advance();
            assert_eq!(sim.generation(), k);
        }
    }
}
