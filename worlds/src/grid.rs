//! Orthogonal moves shared by the grid worlds.

use std::fmt;

/// One orthogonal step. Successors are always enumerated in [`Direction::ALL`]
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Step from `(row, col)` inside a `rows x cols` grid.
    #[must_use]
    pub fn step(self, row: usize, col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            Self::Up => row.checked_sub(1).map(|r| (r, col)),
            Self::Down => (row + 1 < rows).then_some((row + 1, col)),
            Self::Left => col.checked_sub(1).map(|c| (row, c)),
            Self::Right => (col + 1 < cols).then_some((row, col + 1)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
