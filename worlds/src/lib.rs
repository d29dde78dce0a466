//! Lodestar Worlds: concrete problems for the search engines.
//!
//! Worlds supply states, successors, goal tests and heuristics. They do NOT
//! implement search, ordering or bookkeeping; those belong to
//! `lodestar_search`.
//!
//! - [`maze::Maze`]: text grid, breadth-first and depth-first search
//! - [`sliding_tile::SlidingPuzzle`]: n-puzzle with two heuristics
//! - [`tic_tac_toe::TicTacToe`]: minimax game contract
//! - [`n_queens::NQueens`]: constraint backtracking

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grid;
pub mod maze;
pub mod n_queens;
pub mod runner;
pub mod sliding_tile;
pub mod tic_tac_toe;
