//! A* with an admissible heuristic matches breadth-first path length;
//! greedy search is allowed to be longer but never shorter.

use lock_tests::{eight_puzzle_goal, scramble};
use lodestar_search::search::{astar, breadth_first, greedy};
use lodestar_worlds::sliding_tile::{Board, SlidingPuzzle};
use proptest::prelude::*;

fn puzzle_for(start: &Board) -> SlidingPuzzle {
    SlidingPuzzle::new(start.clone(), eight_puzzle_goal()).unwrap()
}

#[test]
fn reference_instance_solves_in_three() {
    let start = Board::new(3, vec![1, 2, 3, 0, 4, 6, 7, 5, 8]).unwrap();
    let puzzle = puzzle_for(&start);
    for result in [
        astar(&puzzle, start.clone(), &puzzle.manhattan_distance()).unwrap(),
        astar(&puzzle, start.clone(), &puzzle.misplaced_tiles()).unwrap(),
        greedy(&puzzle, start.clone(), &puzzle.manhattan_distance()).unwrap(),
    ] {
        let path = result.path.unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.goal_state(), Some(&eight_puzzle_goal()));
    }
}

#[test]
fn better_heuristic_expands_no_more_nodes() {
    let start = Board::new(3, vec![8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
    let puzzle = puzzle_for(&start);
    assert!(puzzle.is_solvable());

    let shortest = breadth_first(&puzzle, start.clone()).unwrap().path.unwrap().len();
    let manhattan = astar(&puzzle, start.clone(), &puzzle.manhattan_distance()).unwrap();
    let misplaced = astar(&puzzle, start.clone(), &puzzle.misplaced_tiles()).unwrap();
    assert_eq!(manhattan.path.as_ref().unwrap().len(), shortest);
    assert_eq!(misplaced.path.as_ref().unwrap().len(), shortest);
    assert!(manhattan.nodes_expanded() <= misplaced.nodes_expanded());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn astar_length_equals_breadth_first_length(
        picks in prop::collection::vec(0usize..4, 0..18),
    ) {
        let start = scramble(&eight_puzzle_goal(), &picks);
        let puzzle = puzzle_for(&start);

        let shortest = breadth_first(&puzzle, start.clone()).unwrap().path.unwrap();
        prop_assert!(shortest.len() <= picks.len());

        let by_manhattan = astar(&puzzle, start.clone(), &puzzle.manhattan_distance())
            .unwrap()
            .path
            .unwrap();
        let by_misplaced = astar(&puzzle, start.clone(), &puzzle.misplaced_tiles())
            .unwrap()
            .path
            .unwrap();
        prop_assert_eq!(by_manhattan.len(), shortest.len());
        prop_assert_eq!(by_misplaced.len(), shortest.len());
        prop_assert_eq!(by_manhattan.cost, shortest.len() as u64);

        let quick = greedy(&puzzle, start.clone(), &puzzle.manhattan_distance())
            .unwrap()
            .path
            .unwrap();
        prop_assert!(quick.len() >= shortest.len());
        prop_assert_eq!(quick.goal_state(), Some(&eight_puzzle_goal()));
    }

    #[test]
    fn path_replays_to_goal(picks in prop::collection::vec(0usize..4, 0..24)) {
        let start = scramble(&eight_puzzle_goal(), &picks);
        let puzzle = puzzle_for(&start);
        let path = astar(&puzzle, start.clone(), &puzzle.manhattan_distance())
            .unwrap()
            .path
            .unwrap();

        let mut board = start;
        for (direction, expected) in path.actions.iter().zip(&path.states) {
            board = board.slide(*direction).unwrap();
            prop_assert_eq!(&board, expected);
        }
        prop_assert_eq!(board, eight_puzzle_goal());
    }
}
