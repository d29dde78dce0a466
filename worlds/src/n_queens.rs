//! `NQueens`: place n non-attacking queens, one per column.
//!
//! Variable `c` is the row of the queen in column `c`. Columns are filled
//! left to right and rows tried from 0 upward, so the first solution found
//! is fixed for each `n`.

use lodestar_search::csp::{self, Assignment, BacktrackResult, ConstraintProblem, SolutionSet};

use crate::error::WorldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    /// # Errors
    ///
    /// [`WorldError::InvalidBoardSize`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self, WorldError> {
        if n == 0 {
            return Err(WorldError::InvalidBoardSize { size: n });
        }
        Ok(Self { n })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// First placement in column-then-row order. `None` for n = 2 and n = 3.
    #[must_use]
    pub fn solve(&self) -> BacktrackResult<usize> {
        csp::solve(self)
    }

    #[must_use]
    pub fn solve_all(&self, limit: Option<usize>) -> SolutionSet<usize> {
        csp::solve_all(self, limit)
    }
}

fn attacks(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> bool {
    row_a == row_b || row_a.abs_diff(row_b) == col_a.abs_diff(col_b)
}

impl ConstraintProblem for NQueens {
    type Value = usize;

    fn variable_count(&self) -> usize {
        self.n
    }

    fn domain(&self, _var: usize) -> Vec<usize> {
        (0..self.n).collect()
    }

    fn consistent(&self, assignment: &Assignment<usize>, var: usize, value: &usize) -> bool {
        assignment
            .assigned()
            .take_while(|&(col, _)| col < var)
            .all(|(col, &row)| !attacks(col, row, var, *value))
    }
}

/// Whether `rows` (indexed by column) is a full non-attacking placement.
#[must_use]
pub fn is_valid_placement(rows: &[usize]) -> bool {
    let n = rows.len();
    if rows.iter().any(|&row| row >= n) {
        return false;
    }
    (0..n).all(|a| (a + 1..n).all(|b| !attacks(a, rows[a], b, rows[b])))
}
