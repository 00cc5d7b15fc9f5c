// patterns.rs - Seed patterns sized for the default 5x5 grid

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// The canonical seed: a plus-shaped cluster around the centre cell.
pub const PLUS: Pattern = Pattern {
    name: "Plus",
    cells: &[(2, 1), (2, 2), (2, 3), (1, 2), (3, 2)],
};

/// Pattern applied by [`crate::Simulation::apply_preset`].
pub const PRESET: &Pattern = &PLUS;

pub const PATTERNS: &[Pattern] = &[
    PLUS,
    Pattern {
        name: "Blinker",
        cells: &[(2, 1), (2, 2), (2, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name.trim()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|pattern| pattern.name)
}
