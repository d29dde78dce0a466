//! Shared instances for the lodestar benchmark suites.
//!
//! Each helper builds a fixed problem so runs are comparable across
//! machines and commits.

use lodestar_search::node::SearchNode;
use lodestar_worlds::maze::Maze;
use lodestar_worlds::sliding_tile::{Board, SlidingPuzzle};

/// A solvable mid-depth 8-puzzle instance and its world.
///
/// # Panics
///
/// Never; both layouts are fixed valid permutations of equal width.
#[must_use]
pub fn eight_puzzle() -> (SlidingPuzzle, Board) {
    let start = Board::new(3, vec![8, 1, 3, 4, 0, 2, 7, 6, 5]).unwrap();
    let goal = Board::solved(3).unwrap();
    (SlidingPuzzle::new(start.clone(), goal).unwrap(), start)
}

/// An open `size x size` room with the exit in the far corner.
///
/// # Panics
///
/// Panics if `size < 2`.
#[must_use]
pub fn open_room(size: usize) -> Maze {
    assert!(size >= 2, "room needs two cells");
    let mut text = String::with_capacity(size * (size + 1));
    for row in 0..size {
        for col in 0..size {
            text.push(match (row, col) {
                (0, 0) => 'S',
                (r, c) if r == size - 1 && c == size - 1 => 'E',
                _ => '.',
            });
        }
        text.push('\n');
    }
    Maze::parse(&text).unwrap()
}

/// `n` nodes with pseudo-random priorities for frontier throughput runs.
#[must_use]
pub fn frontier_nodes(n: u64) -> Vec<SearchNode<u64, ()>> {
    (0..n)
        .map(|i| {
            let priority = i.wrapping_mul(2_654_435_761) % 997;
            SearchNode {
                node_id: usize::try_from(i).unwrap_or(usize::MAX),
                parent_id: None,
                state: i,
                action: None,
                depth: 0,
                g_cost: 0,
                h_cost: priority,
                priority: Some(priority),
                creation_order: i,
            }
        })
        .collect()
}
