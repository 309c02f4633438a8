// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! A structural difficulty score, used to classify puzzles without solving them.

use crate::board::Board;
use crate::vehicle::Vehicle;
use crate::{BoardValue, FxHashSet};

/// The blocking depth of `board`, or `None` if it has no target vehicle.
///
/// Starting from the target vehicle, find the first vehicle in its way towards the exit; it scores
/// one point, and then its own first blocker (looking right for horizontal vehicles and down for
/// vertical ones) is scored the same way, and so on. Each vehicle is scored at most once. Only the
/// *first* blocker at each level counts: vehicles further along the same lane are ignored even if
/// they would also need to move.
pub fn difficulty<V: BoardValue>(board: &Board<V>) -> Option<usize> {
    let target = board.target()?;
    let mut visited = FxHashSet::default();
    Some(blocking_depth(board, target, &mut visited))
}

fn blocking_depth<V: BoardValue>(
    board: &Board<V>,
    vehicle: &Vehicle<V>,
    visited: &mut FxHashSet<char>,
) -> usize {
    visited.insert(vehicle.identity());

    let [_, forward] = vehicle.orientation().directions();
    let mut cell = vehicle.position().shift(forward, *vehicle.length());
    while let Some(position) = cell {
        match board.get(position) {
            None => break,
            Some(None) => cell = position.shift(forward, V::one()),
            Some(Some(identity)) => {
                if visited.contains(&identity) {
                    return 0;
                }
                return match board.get_vehicle(identity) {
                    Some(blocker) => 1 + blocking_depth(board, blocker, visited),
                    None => 0,
                };
            }
        }
    }
    0
}
