// grid.rs - Grid types for Conway's Game of Life

// Compile-time grid size configuration
pub const GRID_SIZE: usize = 5;                       // Default playing area (5x5)

pub type TRow<const N: usize> = [bool; N];
pub type TGrid<const N: usize> = [TRow<N>; N];

/// Square N x N matrix of cell states.
///
/// Pure storage: every position `0 <= row, col < N` holds exactly one state
/// from construction onward. Indexing outside the grid panics, callers that
/// take untrusted coordinates go through [`crate::Simulation`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize> {
    cells: TGrid<N>,
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Grid<N> {
    /// All-dead grid.
    pub fn new() -> Self {
        const { assert!(N > 0, "grid dimension must be positive") };
        Self { cells: [[false; N]; N] }
    }

    pub fn from_cells(cells: TGrid<N>) -> Self {
        const { assert!(N > 0, "grid dimension must be positive") };
        Self { cells }
    }

    pub const fn size(&self) -> usize {
        N
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < N && col < N
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    /// Deep copy of the cells; later writes to the grid never show through.
    pub fn snapshot(&self) -> TGrid<N> {
        self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&alive| !alive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_fully_dead() {
        let grid = Grid::<GRID_SIZE>::new();
        assert!(grid.is_empty());
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.snapshot(), [[false; GRID_SIZE]; GRID_SIZE]);
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::<4>::new();
        grid.set(3, 1, true);
        assert!(grid.get(3, 1));
        assert!(!grid.get(1, 3));
        assert_eq!(grid.live_count(), 1);

        grid.set(3, 1, false);
        assert!(grid.is_empty());
    }

    #[test]
    fn snapshot_does_not_alias() {
        let mut grid = Grid::<3>::new();
        let before = grid.snapshot();
        grid.set(1, 1, true);
        assert!(!before[1][1], "snapshot taken before the write must not change");
        assert!(grid.snapshot()[1][1]);
    }

    #[test]
    fn contains_is_half_open() {
        let grid = Grid::<5>::new();
        assert!(grid.contains(0, 0));
        assert!(grid.contains(4, 4));
        assert!(!grid.contains(5, 0));
        assert!(!grid.contains(0, 5));
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let grid = Grid::<2>::new();
        let _ = grid.get(2, 0);
    }
}
