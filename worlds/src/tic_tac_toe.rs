//! `TicTacToe`: a 3x3 board for the minimax evaluator.
//!
//! Cells are numbered 0..9 in row-major order. A winner is recorded only
//! when the move just played completes a line through its own cell, so the
//! check costs at most four line scans.

use std::fmt;

use lodestar_kernel::hash::IdentityBytes;
use lodestar_search::minimax::AdversarialGame;

use crate::error::WorldError;

pub const CELLS: usize = 9;
const SIDE: usize = 3;

const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    const fn code(self) -> u8 {
        match self {
            Self::X => 1,
            Self::O => 2,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// Board state plus the recorded winner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    cells: [Option<Mark>; CELLS],
    winner: Option<Mark>,
}

impl TicTacToe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `mark` at `position`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::GameOver`] if the game already has a winner or no
    ///   empty cell.
    /// - [`WorldError::PositionOutOfRange`] unless `position < 9`.
    /// - [`WorldError::CellOccupied`] if the cell holds a mark.
    pub fn play(&mut self, position: usize, mark: Mark) -> Result<(), WorldError> {
        if self.winner.is_some() || self.is_full() {
            return Err(WorldError::GameOver);
        }
        match self.cells.get(position) {
            None => Err(WorldError::PositionOutOfRange { position }),
            Some(Some(_)) => Err(WorldError::CellOccupied { position }),
            Some(None) => {
                self.place(position, mark);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn cell(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied().flatten()
    }

    /// Empty cells in increasing order.
    #[must_use]
    pub fn available_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&pos| self.cells[pos].is_none()).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    fn place(&mut self, position: usize, mark: Mark) {
        self.cells[position] = Some(mark);
        if self.completes_line(position, mark) {
            self.winner = Some(mark);
        }
    }

    fn completes_line(&self, position: usize, mark: Mark) -> bool {
        let owns = |cells: &[usize]| cells.iter().all(|&pos| self.cells[pos] == Some(mark));

        let row = position / SIDE * SIDE;
        if owns(&[row, row + 1, row + 2]) {
            return true;
        }
        let col = position % SIDE;
        if owns(&[col, col + SIDE, col + 2 * SIDE]) {
            return true;
        }
        // Corners and the centre are the even cells; only they sit on a diagonal.
        position % 2 == 0 && (owns(&MAIN_DIAGONAL) || owns(&ANTI_DIAGONAL))
    }
}

impl AdversarialGame for TicTacToe {
    type Move = usize;
    type Player = Mark;

    fn legal_moves(&self) -> Vec<usize> {
        self.available_moves()
    }

    fn apply(&mut self, mv: usize, player: Mark) {
        self.place(mv, player);
    }

    fn undo(&mut self, mv: usize) {
        self.cells[mv] = None;
        self.winner = None;
    }

    fn winner(&self) -> Option<Mark> {
        self.winner
    }

    fn is_full(&self) -> bool {
        TicTacToe::is_full(self)
    }

    fn opponent(&self, player: Mark) -> Mark {
        player.opponent()
    }

    fn remaining_moves(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl IdentityBytes for TicTacToe {
    fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self
            .cells
            .iter()
            .map(|cell| cell.map_or(0, Mark::code))
            .collect();
        bytes.push(self.winner.map_or(0, Mark::code));
        bytes
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..SIDE {
                match self.cells[row * SIDE + col] {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}
