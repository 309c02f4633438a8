// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Moves and solutions, as produced by the solvers.

use crate::board::{Board, InvalidMoveError};
use crate::{BoardValue, Direction};
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use core::ops::Deref;
use serde::{Deserialize, Serialize};

/// A single unit slide of one vehicle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Move {
    identity: char,
    direction: Direction,
}

impl Move {
    /// A move of the vehicle `identity` one cell towards `direction`.
    pub fn new(identity: char, direction: Direction) -> Self {
        Self {
            identity,
            direction,
        }
    }

    /// The vehicle being moved.
    pub fn identity(&self) -> char {
        self.identity
    }

    /// The direction of the move.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.identity, self.direction.initial())
    }
}

impl From<(char, Direction)> for Move {
    fn from((identity, direction): (char, Direction)) -> Self {
        Self::new(identity, direction)
    }
}

/// A run of identical consecutive moves, written e.g. `XR3`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Run {
    step: Move,
    count: usize,
}

impl Run {
    /// The repeated move.
    pub fn step(&self) -> Move {
        self.step
    }

    /// How many times it is repeated.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.step, self.count)
    }
}

/// An ordered sequence of moves which takes a board to a solved state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Solution(Vec<Move>);

impl Solution {
    /// The number of unit moves.
    pub fn steps(&self) -> usize {
        self.0.len()
    }

    /// The moves grouped into runs of the same vehicle moving the same way. A board game player
    /// would count each run as one move.
    pub fn runs(&self) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();
        for &step in &self.0 {
            match runs.last_mut() {
                Some(run) if run.step == step => run.count += 1,
                _ => runs.push(Run { step, count: 1 }),
            }
        }
        runs
    }

    /// Play the solution on a copy of `board`, returning the final board.
    pub fn replay<V: BoardValue>(&self, board: &Board<V>) -> Result<Board<V>, InvalidMoveError<V>> {
        let mut board = board.clone();
        for step in &self.0 {
            board.shift_vehicle(step.identity(), step.direction())?;
        }
        Ok(board)
    }

    /// The moves, as a vector.
    pub fn into_moves(self) -> Vec<Move> {
        self.0
    }
}

impl Deref for Solution {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Move>> for Solution {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Solution {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Solution {
    type Item = Move;
    type IntoIter = alloc::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Move;
    type IntoIter = core::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, run) in self.runs().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}
