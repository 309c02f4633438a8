// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

use crate::board::Board;
use crate::{BoardValue, Direction};

/// Estimates the number of moves still needed to solve a board.
pub trait Heuristic {
    /// Estimated remaining moves for `board`.
    fn estimate<V: BoardValue>(&self, board: &Board<V>) -> usize;
}

/// Always estimates zero, turning a [`BestFirstSolver`](super::BestFirstSolver) into a
/// uniform-cost search which finds shortest solutions.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHeuristic;

impl Heuristic for NullHeuristic {
    fn estimate<V: BoardValue>(&self, _board: &Board<V>) -> usize {
        0
    }
}

/// The distance from the target vehicle to the exit, plus the number of distinct vehicles
/// standing in between.
///
/// This is not admissible: one blocker may need several moves, but one move may also clear the
/// way for the target more than once, so it can overestimate. Boards without a target estimate
/// zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct BlockingHeuristic;

impl Heuristic for BlockingHeuristic {
    fn estimate<V: BoardValue>(&self, board: &Board<V>) -> usize {
        let Some(target) = board.target() else {
            return 0;
        };
        let columns: usize = (*board.dimensions().columns()).into();
        let column: usize = (*target.position().column()).into();
        let length: usize = (*target.length()).into();
        let distance = columns.saturating_sub(column + length);

        let mut blockers = 0;
        let mut previous = None;
        let mut cell = target.position().shift(Direction::Right, *target.length());
        while let Some(position) = cell {
            let Some(occupant) = board.get(position) else {
                break;
            };
            if occupant.is_some() && occupant != previous {
                blockers += 1;
            }
            previous = occupant;
            cell = position.shift(Direction::Right, V::one());
        }

        distance + blockers
    }
}

#[cfg(test)]
mod test {
    use super::{BlockingHeuristic, Heuristic, NullHeuristic};
    use crate::solver::fixtures::{card_one, lone_target};
    use crate::{Board, Orientation, Vehicle, VehicleKind};
    use alloc::boxed::Box;
    use core::error::Error;

    #[test]
    fn distance_only() {
        assert_eq!(4, BlockingHeuristic.estimate(&lone_target(0)));
        assert_eq!(1, BlockingHeuristic.estimate(&lone_target(3)));
        assert_eq!(0, BlockingHeuristic.estimate(&lone_target(4)));
        assert_eq!(0, NullHeuristic.estimate(&lone_target(0)));
    }

    #[test]
    fn distinct_blockers() -> Result<(), Box<dyn Error>> {
        let mut board = lone_target(0);
        board.add_vehicle(
            Vehicle::new(VehicleKind::Truck, 'A', Orientation::Horizontal).unwrap(),
            (2, 2),
        )?;
        // three cells, one vehicle
        assert_eq!(5, BlockingHeuristic.estimate(&board));

        board.add_vehicle(
            Vehicle::new(VehicleKind::Car, 'B', Orientation::Vertical).unwrap(),
            (1, 5),
        )?;
        assert_eq!(6, BlockingHeuristic.estimate(&board));

        assert_eq!(5, BlockingHeuristic.estimate(&card_one()));
        assert_eq!(0, BlockingHeuristic.estimate(&Board::<u8>::empty((6u8, 6))?));
        Ok(())
    }
}
