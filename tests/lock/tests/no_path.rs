//! Unreachable goals end in a normal "no result", never an error.

use lock_tests::{bfs_distances, eight_puzzle_goal};
use lodestar_search::heuristic::Heuristic;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::search::search;
use lodestar_search::stats::TerminationReason;
use lodestar_worlds::maze::{Cell, Maze};
use lodestar_worlds::sliding_tile::{Board, SlidingPuzzle};

const SEALED: &str = "
S..#...
.#.#.#.
...#..E
";

#[test]
fn sealed_exit_exhausts_every_strategy() {
    let maze = Maze::parse(SEALED).unwrap();
    let reachable = bfs_distances(&maze, maze.start()).len() as u64;
    let h = maze.exit_distance();

    for policy in [
        SearchPolicy::breadth_first(),
        SearchPolicy::depth_first(),
        SearchPolicy::greedy(),
        SearchPolicy::astar(),
    ] {
        let heuristic: Option<&dyn Heuristic<Cell>> = if policy.strategy.is_informed() {
            Some(&h)
        } else {
            None
        };
        let result = search(&maze, maze.start(), &policy, heuristic).unwrap();
        assert!(result.path.is_none(), "{}", policy.strategy);
        assert_eq!(
            result.stats.termination_reason,
            TerminationReason::FrontierExhausted,
            "{}",
            policy.strategy
        );
        // Informed strategies may re-expand a state reached more cheaply.
        if policy.strategy.is_informed() {
            assert!(result.nodes_expanded() >= reachable, "{}", policy.strategy);
        } else {
            assert_eq!(result.nodes_expanded(), reachable, "{}", policy.strategy);
        }
    }
}

#[test]
fn odd_parity_puzzle_exhausts_its_component() {
    let goal = eight_puzzle_goal();
    let swapped = Board::new(3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    let puzzle = SlidingPuzzle::new(swapped.clone(), goal).unwrap();
    assert!(!puzzle.is_solvable());

    let h = puzzle.manhattan_distance();
    let result = search(&puzzle, swapped, &SearchPolicy::astar(), Some(&h)).unwrap();
    assert!(result.path.is_none());
    assert_eq!(
        result.stats.termination_reason,
        TerminationReason::FrontierExhausted
    );
    // 9! / 2 layouts share the swapped board's parity.
    assert!(result.nodes_expanded() >= 181_440);
}

#[test]
fn budget_stop_is_not_exhaustion() {
    let maze = Maze::parse(SEALED).unwrap();
    let policy = SearchPolicy::breadth_first().with_max_expansions(3);
    let result = search(&maze, maze.start(), &policy, None).unwrap();
    assert!(result.path.is_none());
    assert_eq!(
        result.stats.termination_reason,
        TerminationReason::ExpansionBudgetExceeded
    );
    assert_eq!(result.nodes_expanded(), 3);
}
