//! Breadth-first search returns minimum-length routes.

use lock_tests::{bfs_distances, maze_text};
use lodestar_search::contract::SearchWorld;
use lodestar_search::search::{breadth_first, depth_first};
use lodestar_search::stats::TerminationReason;
use lodestar_worlds::grid::Direction;
use lodestar_worlds::maze::{Cell, Maze};
use proptest::prelude::*;

const CORRIDORS: &str = "
S.#.....
.##.###.
....#...
.##...#.
...##.#E
";

// ---------------------------------------------------------------------------
// Fixed mazes
// ---------------------------------------------------------------------------

#[test]
fn open_room_route_is_manhattan_length() {
    let maze = Maze::parse(&maze_text(4, 6, &[false; 24])).unwrap();
    let path = breadth_first(&maze, maze.start()).unwrap().path.unwrap();
    assert_eq!(path.len(), 3 + 5);
    // Up and Left are never useful; Down is tried before Right.
    assert_eq!(&path.actions[..3], &[Direction::Down; 3]);
}

#[test]
fn corridor_route_matches_flood_fill() {
    let maze = Maze::parse(CORRIDORS).unwrap();
    let distances = bfs_distances(&maze, maze.start());
    let result = breadth_first(&maze, maze.start()).unwrap();
    let path = result.path.unwrap();
    assert_eq!(path.len() as u64, distances[&maze.exit()]);
    assert_eq!(path.cost, distances[&maze.exit()]);
    assert!(matches!(
        result.stats.termination_reason,
        TerminationReason::GoalReached { .. }
    ));
}

#[test]
fn depth_first_route_is_never_shorter() {
    let maze = Maze::parse(CORRIDORS).unwrap();
    let bfs = breadth_first(&maze, maze.start()).unwrap().path.unwrap();
    let dfs = depth_first(&maze, maze.start()).unwrap().path.unwrap();
    assert!(dfs.len() >= bfs.len());
    assert_eq!(dfs.goal_state(), Some(&maze.exit()));
}

#[test]
fn start_on_exit_is_an_empty_route() {
    let maze = Maze::parse(CORRIDORS).unwrap();
    let result = breadth_first(&maze, maze.exit()).unwrap();
    let path = result.path.as_ref().unwrap();
    assert!(path.is_empty());
    assert_eq!(result.nodes_expanded(), 1);
}

// ---------------------------------------------------------------------------
// Random mazes
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn breadth_first_length_equals_true_distance(
        rows in 2usize..8,
        cols in 2usize..8,
        walls in prop::collection::vec(prop::bool::weighted(0.3), 64),
    ) {
        let maze = Maze::parse(&maze_text(rows, cols, &walls)).unwrap();
        let distances = bfs_distances(&maze, maze.start());
        let result = breadth_first(&maze, maze.start()).unwrap();

        match (distances.get(&maze.exit()), result.path) {
            (Some(&distance), Some(path)) => {
                prop_assert_eq!(path.len() as u64, distance);
                let mut at = maze.start();
                for (action, state) in path.actions.iter().zip(&path.states) {
                    prop_assert!(maze.successors(&at).contains(&(*action, *state)));
                    at = *state;
                }
                prop_assert_eq!(at, maze.exit());
            }
            (None, None) => {
                prop_assert_eq!(
                    result.stats.termination_reason,
                    TerminationReason::FrontierExhausted
                );
            }
            (expected, found) => {
                prop_assert!(
                    false,
                    "reachability disagrees: {:?} vs {:?}",
                    expected,
                    found.map(|p| p.len())
                );
            }
        }
    }

    #[test]
    fn every_cell_on_route_is_open(
        walls in prop::collection::vec(prop::bool::weighted(0.25), 36),
    ) {
        let maze = Maze::parse(&maze_text(6, 6, &walls)).unwrap();
        if let Some(path) = depth_first(&maze, maze.start()).unwrap().path {
            for cell in &path.states {
                prop_assert!(!maze.is_wall(*cell));
            }
            prop_assert_eq!(path.goal_state(), Some(&Cell::new(5, 5)));
        }
    }
}
