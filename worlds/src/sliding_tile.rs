//! `SlidingPuzzle`: the n-puzzle on a square board.
//!
//! Tiles are numbered `1..width * width`, the blank is `0`. A move slides
//! the blank one cell Up, Down, Left or Right, swapping it with the tile
//! there. The 8-puzzle is width 3.

use lodestar_kernel::hash::IdentityBytes;
use lodestar_search::contract::SearchWorld;
use lodestar_search::heuristic::Heuristic;

use crate::error::WorldError;
use crate::grid::Direction;

const BLANK: u8 = 0;

/// Tile values are bytes, so `width * width` must fit in `0..=u8::MAX + 1`.
const MAX_WIDTH: usize = 16;

/// A board layout in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    width: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// # Errors
    ///
    /// - [`WorldError::InvalidBoardSize`] unless `2 <= width <= 16`.
    /// - [`WorldError::InvalidTileLayout`] unless `tiles` is a permutation of
    ///   `0..width * width`.
    pub fn new(width: usize, tiles: Vec<u8>) -> Result<Self, WorldError> {
        if !(2..=MAX_WIDTH).contains(&width) {
            return Err(WorldError::InvalidBoardSize { size: width });
        }
        let area = width * width;
        if tiles.len() != area {
            return Err(WorldError::InvalidTileLayout {
                detail: format!("expected {area} tiles, found {}", tiles.len()),
            });
        }
        let mut seen = vec![false; area];
        for &tile in &tiles {
            let index = usize::from(tile);
            if index >= area {
                return Err(WorldError::InvalidTileLayout {
                    detail: format!("tile {tile} is out of range for width {width}"),
                });
            }
            if seen[index] {
                return Err(WorldError::InvalidTileLayout {
                    detail: format!("tile {tile} appears more than once"),
                });
            }
            seen[index] = true;
        }
        Ok(Self { width, tiles })
    }

    /// Build from rows; the width is the number of rows.
    ///
    /// # Errors
    ///
    /// [`WorldError::RaggedGrid`] if a row's length is not the row count,
    /// plus everything [`Board::new`] rejects.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, WorldError> {
        let width = rows.len();
        let mut tiles = Vec::with_capacity(width * width);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(WorldError::RaggedGrid {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            tiles.extend_from_slice(cells);
        }
        Self::new(width, tiles)
    }

    /// Tiles in order with the blank last.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidBoardSize`] unless `2 <= width <= 16`.
    pub fn solved(width: usize) -> Result<Self, WorldError> {
        if !(2..=MAX_WIDTH).contains(&width) {
            return Err(WorldError::InvalidBoardSize { size: width });
        }
        let area = width * width;
        let tiles = (1..area)
            .chain(std::iter::once(0))
            .map(|tile| u8::try_from(tile).unwrap_or(BLANK))
            .collect();
        Self::new(width, tiles)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<u8> {
        if col >= self.width {
            return None;
        }
        self.tiles.get(row * self.width + col).copied()
    }

    /// Row-major index of the blank.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .unwrap_or_default()
    }

    /// The board after sliding the blank one cell, if that stays on the board.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let blank = self.blank_index();
        let (row, col) = (blank / self.width, blank % self.width);
        let (next_row, next_col) = direction.step(row, col, self.width, self.width)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(blank, next_row * self.width + next_col);
        Some(Board {
            width: self.width,
            tiles,
        })
    }

    /// Every legal slide, in [`Direction::ALL`] order.
    #[must_use]
    pub fn moves(&self) -> Vec<(Direction, Board)> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.slide(dir).map(|board| (dir, board)))
            .collect()
    }

    /// Parity of the permutation taking `self` to `goal`, blank included.
    ///
    /// Each slide is one transposition, so this parity flips on every move.
    fn permutation_parity(&self, goal: &Board) -> bool {
        let mut goal_index = vec![0usize; goal.tiles.len()];
        for (index, &tile) in goal.tiles.iter().enumerate() {
            goal_index[usize::from(tile)] = index;
        }
        let mapping: Vec<usize> = self
            .tiles
            .iter()
            .map(|&tile| goal_index[usize::from(tile)])
            .collect();

        let mut visited = vec![false; mapping.len()];
        let mut cycles = 0;
        for start in 0..mapping.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut at = start;
            while !visited[at] {
                visited[at] = true;
                at = mapping[at];
            }
        }
        (mapping.len() - cycles) % 2 == 1
    }
}

impl IdentityBytes for Board {
    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.tiles.len());
        bytes.push(u8::try_from(self.width).unwrap_or(u8::MAX));
        bytes.extend_from_slice(&self.tiles);
        bytes
    }
}

/// Search world for one goal layout.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    initial: Board,
    goal: Board,
}

impl SlidingPuzzle {
    /// # Errors
    ///
    /// [`WorldError::MismatchedBoards`] if the widths differ.
    pub fn new(initial: Board, goal: Board) -> Result<Self, WorldError> {
        if initial.width != goal.width {
            return Err(WorldError::MismatchedBoards {
                initial: initial.width,
                goal: goal.width,
            });
        }
        Ok(Self { initial, goal })
    }

    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Whether any sequence of slides reaches the goal.
    ///
    /// A slide flips the permutation parity and moves the blank one step,
    /// so the two parities stay in lockstep. The converse holds for every
    /// width >= 2.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let width = self.goal.width;
        let (from, to) = (self.initial.blank_index(), self.goal.blank_index());
        let blank_distance =
            (from / width).abs_diff(to / width) + (from % width).abs_diff(to % width);
        self.initial.permutation_parity(&self.goal) == (blank_distance % 2 == 1)
    }

    #[must_use]
    pub fn misplaced_tiles(&self) -> MisplacedTiles {
        MisplacedTiles {
            goal: self.goal.tiles.clone(),
        }
    }

    #[must_use]
    pub fn manhattan_distance(&self) -> ManhattanDistance {
        let mut goal_positions = vec![0; self.goal.tiles.len()];
        for (index, &tile) in self.goal.tiles.iter().enumerate() {
            goal_positions[usize::from(tile)] = index;
        }
        ManhattanDistance {
            width: self.goal.width,
            goal_positions,
        }
    }
}

impl SearchWorld for SlidingPuzzle {
    type State = Board;
    type Action = Direction;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "sliding_tile"
    }

    fn successors(&self, state: &Board) -> Vec<(Direction, Board)> {
        state.moves()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }
}

/// Number of non-blank tiles out of place.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Vec<u8>,
}

impl Heuristic<Board> for MisplacedTiles {
    fn estimate(&self, state: &Board) -> u64 {
        let misplaced = state
            .tiles
            .iter()
            .zip(&self.goal)
            .filter(|(tile, goal)| **tile != BLANK && tile != goal)
            .count();
        misplaced as u64
    }
}

/// Sum over non-blank tiles of the grid distance to their goal cell.
#[derive(Debug, Clone)]
pub struct ManhattanDistance {
    width: usize,
    goal_positions: Vec<usize>,
}

impl Heuristic<Board> for ManhattanDistance {
    fn estimate(&self, state: &Board) -> u64 {
        let width = self.width;
        let total: usize = state
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .filter_map(|(index, &tile)| {
                let goal = *self.goal_positions.get(usize::from(tile))?;
                Some(
                    (index / width).abs_diff(goal / width)
                        + (index % width).abs_diff(goal % width),
                )
            })
            .sum();
        total as u64
    }
}
