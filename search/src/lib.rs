//! Lodestar Search: deterministic state-space search, minimax and backtracking.
//!
//! The crate depends only on `lodestar_kernel`; concrete worlds live in
//! `lodestar_worlds`.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestar_kernel  ←  lodestar_search  ←  lodestar_worlds
//! (hashing, canon)    (engines)           (maze, puzzle, games)
//! ```
//!
//! # Key types
//!
//! - [`SearchWorld`](contract::SearchWorld): successors, goal test, step cost
//! - [`SearchPolicy`](policy::SearchPolicy): strategy and budgets
//! - [`Frontier`](frontier::Frontier): FIFO, LIFO or priority ordering
//!   with insertion-order tie-breaking
//! - [`search`](search::search): the shared expansion loop
//! - [`best_move`](minimax::best_move): exhaustive minimax with apply/undo
//! - [`solve`](csp::solve): sequential constraint backtracking

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod csp;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod minimax;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod stats;
