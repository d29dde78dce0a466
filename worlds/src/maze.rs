//! `Maze`: a rectangular text grid searched cell by cell.
//!
//! `#` is a wall, `S` the start, `E` the exit; every other character is
//! open floor. Moves are single orthogonal steps onto open cells, enumerated
//! Up, Down, Left, Right.

use std::str::FromStr;

use lodestar_kernel::hash::IdentityBytes;
use lodestar_search::contract::SearchWorld;
use lodestar_search::heuristic::Heuristic;

use crate::error::WorldError;
use crate::grid::Direction;

const WALL: char = '#';
const START: char = 'S';
const EXIT: char = 'E';

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn manhattan(self, other: Cell) -> u64 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u64
    }
}

impl IdentityBytes for Cell {
    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);
        bytes.extend_from_slice(&(self.row as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.col as u64).to_le_bytes());
        bytes
    }
}

/// A parsed maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<Vec<bool>>,
    rows: usize,
    cols: usize,
    start: Cell,
    exit: Cell,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// Surrounding whitespace is trimmed; every remaining line is a row and
    /// all rows must have the same number of characters.
    ///
    /// # Errors
    ///
    /// - [`WorldError::EmptyGrid`] if no rows remain.
    /// - [`WorldError::RaggedGrid`] if row lengths differ.
    /// - [`WorldError::MissingMarker`] / [`WorldError::DuplicateMarker`] unless
    ///   exactly one `S` and one `E` are present.
    pub fn parse(text: &str) -> Result<Self, WorldError> {
        let lines: Vec<&str> = text.trim().lines().collect();
        let Some(first) = lines.first() else {
            return Err(WorldError::EmptyGrid);
        };
        let cols = first.chars().count();
        if cols == 0 {
            return Err(WorldError::EmptyGrid);
        }

        let mut walls = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut exit = None;
        for (row, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != cols {
                return Err(WorldError::RaggedGrid {
                    row,
                    expected: cols,
                    actual,
                });
            }
            let mut row_walls = Vec::with_capacity(cols);
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    START => place_marker(&mut start, START, Cell::new(row, col))?,
                    EXIT => place_marker(&mut exit, EXIT, Cell::new(row, col))?,
                    _ => {}
                }
                row_walls.push(ch == WALL);
            }
            walls.push(row_walls);
        }

        Ok(Self {
            rows: walls.len(),
            walls,
            cols,
            start: start.ok_or(WorldError::MissingMarker { marker: START })?,
            exit: exit.ok_or(WorldError::MissingMarker { marker: EXIT })?,
        })
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[must_use]
    pub fn exit(&self) -> Cell {
        self.exit
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells outside the grid count as walls.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or(true)
    }

    /// Manhattan distance to the exit. Admissible: walls only lengthen paths.
    #[must_use]
    pub fn exit_distance(&self) -> ExitDistance {
        ExitDistance { exit: self.exit }
    }
}

fn place_marker(slot: &mut Option<Cell>, marker: char, cell: Cell) -> Result<(), WorldError> {
    if slot.is_some() {
        return Err(WorldError::DuplicateMarker { marker });
    }
    *slot = Some(cell);
    Ok(())
}

impl FromStr for Maze {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl SearchWorld for Maze {
    type State = Cell;
    type Action = Direction;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "maze"
    }

    fn successors(&self, state: &Cell) -> Vec<(Direction, Cell)> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| {
                let (row, col) = dir.step(state.row, state.col, self.rows, self.cols)?;
                let next = Cell::new(row, col);
                (!self.is_wall(next)).then_some((dir, next))
            })
            .collect()
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.exit
    }
}

/// Manhattan distance from a cell to a fixed exit.
#[derive(Debug, Clone, Copy)]
pub struct ExitDistance {
    exit: Cell,
}

impl Heuristic<Cell> for ExitDistance {
    fn estimate(&self, state: &Cell) -> u64 {
        state.manhattan(self.exit)
    }
}
