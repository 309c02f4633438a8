// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The original game cards, solved end to end.

use parking_escape::{
    BestFirstSolver, BlockingHeuristic, Board, BreadthFirstSolver, Direction, Heuristic, Move,
    NullHeuristic, Orientation, SolveResult, Solution, Solver, Vehicle, VehicleKind,
    boards_from_json, boards_to_json, difficulty, records_from_json,
};
use std::error::Error;

const CARDS: &str = include_str!("data/cards.json");

fn cards() -> Vec<Board<u8>> {
    boards_from_json(CARDS).unwrap()
}

/// Expand run-length notation such as `["CL3", "XR2"]` into unit moves.
fn expand(runs: &[&str]) -> Solution {
    runs.iter()
        .flat_map(|run| {
            let mut chars = run.chars();
            let identity = chars.next().unwrap();
            let direction = match chars.next().unwrap() {
                'U' => Direction::Up,
                'D' => Direction::Down,
                'L' => Direction::Left,
                'R' => Direction::Right,
                c => panic!("unknown direction {c}"),
            };
            let count: usize = chars.as_str().parse().unwrap();
            std::iter::repeat_n(Move::new(identity, direction), count)
        })
        .collect()
}

#[test]
fn collection_loads() -> Result<(), Box<dyn Error>> {
    let boards = cards();
    assert_eq!(5, boards.len());
    for board in &boards {
        assert!(board.target().is_some());
        assert!(!board.is_solved());
    }

    let reloaded = boards_from_json::<u8>(&boards_to_json(&boards)?)?;
    assert_eq!(boards, reloaded);

    let records = records_from_json::<u8>(CARDS)?;
    assert!(records.iter().all(|r| r.min_steps.is_none()));
    Ok(())
}

#[test]
fn known_solutions_replay() -> Result<(), Box<dyn Error>> {
    let boards = cards();

    let first = expand(&["CL3", "OD3", "AR1", "PU1", "BU1", "RL2", "QD2", "XR3"]);
    assert_eq!(16, first.steps());
    assert_eq!(8, first.runs().len());
    assert_eq!("CL3 OD3 AR1 PU1 BU1 RL2 QD2 XR3", first.to_string());
    assert!(first.replay(&boards[0])?.is_solved());

    let second = expand(&["EL1", "PD2", "XR1", "AD1", "OL3", "CU2", "BU1", "XR3"]);
    assert_eq!(14, second.steps());
    assert!(second.replay(&boards[1])?.is_solved());

    // the solutions are not interchangeable
    assert!(
        first
            .replay(&boards[1])
            .map_or(true, |board| !board.is_solved())
    );

    let mut solver = BreadthFirstSolver::new();
    assert!(solver.solve(&boards[0]).unwrap().steps() <= first.steps());
    assert!(solver.solve(&boards[1]).unwrap().steps() <= second.steps());
    Ok(())
}

#[test]
fn every_card_is_solved() -> Result<(), Box<dyn Error>> {
    for (i, board) in cards().iter().enumerate() {
        let shortest = BreadthFirstSolver::new().solve(board).unwrap();
        let guided = BestFirstSolver::new().solve(board).unwrap();
        let uniform = BestFirstSolver::with_heuristic(NullHeuristic)
            .solve(board)
            .unwrap();
        println!("card {}: {} ({} steps)", i + 1, shortest, shortest.steps());

        for solution in [&shortest, &guided, &uniform] {
            let end = solution.replay(board)?;
            assert!(end.is_solved());
        }
        assert!(shortest.steps() <= guided.steps());
        assert_eq!(shortest.steps(), uniform.steps());
        assert!(BlockingHeuristic.estimate(board) > 0);
    }
    Ok(())
}

#[test]
fn difficulty_of_cards() {
    let boards = cards();
    assert_eq!(Some(2), difficulty(&boards[0]));
    // X -> O -> C -> P
    assert_eq!(Some(3), difficulty(&boards[2]));
    assert!(boards.iter().all(|board| difficulty(board).is_some()));
}

#[test]
fn scenarios() -> Result<(), Box<dyn Error>> {
    let mut board = Board::<u8>::empty((6u8, 6))?;
    board.add_vehicle(Vehicle::target(), (2, 3))?;
    let solution = BreadthFirstSolver::new().solve(&board).unwrap();
    assert_eq!("XR1", solution.to_string());

    let mut board = board.clone();
    assert!(board.move_vehicle('X', Direction::Right));
    assert!(BreadthFirstSolver::new().solve(&board).unwrap().is_empty());
    assert!(BestFirstSolver::new().solve(&board).unwrap().is_empty());

    let mut board = Board::<u8>::empty((6u8, 6))?;
    board.add_vehicle(Vehicle::target(), (2, 0))?;
    for (identity, row) in [('O', 0), ('P', 3)] {
        let truck = Vehicle::new(VehicleKind::Truck, identity, Orientation::Vertical).unwrap();
        board.add_vehicle(truck, (row, 5))?;
    }
    assert_eq!(SolveResult::Impossible, BreadthFirstSolver::new().search(&board));
    assert_eq!(SolveResult::Impossible, BestFirstSolver::new().search(&board));
    Ok(())
}
