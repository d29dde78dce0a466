//! Identical inputs produce identical traversals, statistics and reports.

use lock_tests::{eight_puzzle_goal, scramble};
use lodestar_search::heuristic::Heuristic;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::search::search;
use lodestar_worlds::maze::Maze;
use lodestar_worlds::runner::RunReport;
use lodestar_worlds::sliding_tile::{Board, SlidingPuzzle};

const ROOMS: &str = "
S..........
.##.#.####.
.#..#....#.
.#.###.#.#.
...#...#..E
";

fn policies() -> [SearchPolicy; 4] {
    [
        SearchPolicy::breadth_first(),
        SearchPolicy::depth_first(),
        SearchPolicy::greedy(),
        SearchPolicy::astar(),
    ]
}

#[test]
fn puzzle_runs_are_byte_identical() {
    let start = scramble(&eight_puzzle_goal(), &[0, 3, 1, 2, 2, 0, 1, 3, 0, 2, 1, 1, 3, 0]);
    let puzzle = SlidingPuzzle::new(start.clone(), eight_puzzle_goal()).unwrap();
    let h = puzzle.manhattan_distance();

    for policy in policies() {
        let heuristic: Option<&dyn Heuristic<Board>> = if policy.strategy.is_informed() {
            Some(&h)
        } else {
            None
        };
        let first = search(&puzzle, start.clone(), &policy, heuristic).unwrap();
        let first_bytes = first.stats.to_canonical_json_bytes().unwrap();
        let first_report = RunReport::from_search(&first).digest().unwrap();

        for _ in 1..5 {
            let other = search(&puzzle, start.clone(), &policy, heuristic).unwrap();
            assert_eq!(
                first_bytes,
                other.stats.to_canonical_json_bytes().unwrap(),
                "stats bytes differ for {}",
                policy.strategy
            );
            assert_eq!(first.nodes, other.nodes, "node arena differs for {}", policy.strategy);
            assert_eq!(first.path, other.path);
            assert_eq!(first_report, RunReport::from_search(&other).digest().unwrap());
        }
    }
}

#[test]
fn maze_digests_are_stable_and_distinct_per_strategy() {
    let maze = Maze::parse(ROOMS).unwrap();
    let h = maze.exit_distance();
    let mut digests = Vec::new();
    for policy in policies() {
        let heuristic: Option<&dyn Heuristic<_>> = if policy.strategy.is_informed() {
            Some(&h)
        } else {
            None
        };
        let a = search(&maze, maze.start(), &policy, heuristic).unwrap();
        let b = search(&maze, maze.start(), &policy, heuristic).unwrap();
        assert_eq!(a.stats.digest().unwrap(), b.stats.digest().unwrap());
        digests.push(a.stats.digest().unwrap());
    }
    // The strategy name is part of the canonical bytes.
    for (i, a) in digests.iter().enumerate() {
        for b in &digests[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn parent_links_always_point_backwards() {
    let maze = Maze::parse(ROOMS).unwrap();
    for policy in policies() {
        let h = maze.exit_distance();
        let heuristic: Option<&dyn Heuristic<_>> = if policy.strategy.is_informed() {
            Some(&h)
        } else {
            None
        };
        let result = search(&maze, maze.start(), &policy, heuristic).unwrap();
        for node in &result.nodes {
            if let Some(parent) = node.parent_id {
                assert!(parent < node.node_id);
                assert_eq!(result.nodes[parent].depth + 1, node.depth);
            }
        }
    }
}
