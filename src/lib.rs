// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! parking-escape: solving "escape" puzzles in the style of Thinkfun's "Rush Hour".
//!
//! A [`Board`] is a rectangular grid holding rectangular [`Vehicle`]s of length two or three.
//! Every vehicle has a fixed orientation and may only slide forwards and backwards along it, one
//! cell at a time, without leaving the board or overlapping another vehicle. One vehicle is the
//! distinguished *target*: it lives on the exit row, and the puzzle is solved once it touches the
//! exit on the right-hand edge of the board.
//!
//! On top of the movement rules, this library provides:
//!
//!  - [`BreadthFirstSolver`], an exhaustive search which always returns a shortest solution;
//!  - [`BestFirstSolver`], a search ordered by moves-so-far plus a [`Heuristic`] estimate, which
//!    is usually much faster but does not guarantee a shortest solution;
//!  - [`difficulty`], a structural score counting chains of blocking vehicles;
//!  - [`BoardRecord`], the JSON record format used to exchange boards with other tools.
//!
//! The library is `no_std` (it only needs `alloc`).

#![no_std]

use core::error::Error;
use core::fmt::{Debug, Display, Formatter};
use core::num::IntErrorKind;
use core::ops::{Add, Neg, Sub};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Unsigned, Zero};
use rustc_hash::FxBuildHasher;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

extern crate alloc;

pub mod board;
pub mod difficulty;
pub mod record;
pub mod solution;
pub mod solver;
pub mod vehicle;

pub use board::{Board, InvalidMoveError, InvalidMoveType, InvalidStateError, InvalidStateType};
pub use difficulty::difficulty;
pub use record::{
    BoardRecord, DecodeError, VehicleRecord, boards_from_json, boards_to_json, records_from_json,
};
pub use solution::{Move, Run, Solution};
pub use solver::{
    BestFirstSolver, BlockingHeuristic, BreadthFirstSolver, Heuristic, NullHeuristic,
    SearchStats, SolveResult, Solver,
};
pub use vehicle::{PossibleMoves, TARGET_IDENTITY, Vehicle, VehicleKind};

pub(crate) type FxHashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;
pub(crate) type FxHashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// An orientation for a vehicle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The vehicle may only move left and right.
    Horizontal,
    /// The vehicle may only move up and down.
    Vertical,
}

impl Orientation {
    /// The two directions a vehicle with this orientation may move in, backward first.
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }

    /// Whether a vehicle with this orientation may move in `dir` at all.
    pub fn allows(self, dir: Direction) -> bool {
        self.directions().contains(&dir)
    }

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The offset between two consecutive cells of a vehicle with this orientation.
    pub fn unit<V: BoardValue>(self) -> Position<V> {
        match self {
            Orientation::Horizontal => Position {
                row: V::zero(),
                column: V::one(),
            },
            Orientation::Vertical => Position {
                row: V::one(),
                column: V::zero(),
            },
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

/// A direction for a move. A direction may be flipped with [`Neg`] (i.e. `-`).
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Upward movement.
    Up,
    /// Downward movement.
    Down,
    /// Leftward movement.
    Left,
    /// Rightward movement.
    Right,
}

impl Direction {
    /// The single-letter abbreviation of this direction (`U`, `D`, `L` or `R`).
    pub fn initial(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Marker trait: specifies that a value may be used for board definitions.
pub trait BoardValue:
    One
    + Ord
    + Add<Output = Self>
    + CheckedAdd
    + Sub<Output = Self>
    + CheckedSub
    + Copy
    + Into<usize>
    + TryFrom<usize>
    + Zero
    + CheckedMul
    + Debug
    + Display
    + Unsigned
    + DeserializeOwned
    + Serialize
    + 'static
{
}

impl<V> BoardValue for V where
    V: One
        + Ord
        + Add<Output = Self>
        + CheckedAdd
        + Sub<Output = Self>
        + CheckedSub
            + Copy
        + Into<usize>
        + TryFrom<usize>
        + Zero
        + CheckedMul
        + Debug
        + Display
        + Unsigned
        + DeserializeOwned
        + Serialize
        + 'static
{
}

/// A position in the board (eff., a coordinate pair).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Position<V> {
    row: V,
    column: V,
}

impl<V> Position<V> {
    /// The row of the position.
    pub fn row(&self) -> &V {
        &self.row
    }

    /// The column of the position.
    pub fn column(&self) -> &V {
        &self.column
    }
}

impl<V> Add for Position<V>
where
    V: BoardValue,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row + rhs.row,
            column: self.column + rhs.column,
        }
    }
}

impl<V> CheckedAdd for Position<V>
where
    V: BoardValue,
{
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(&rhs.row)?,
            column: self.column.checked_add(&rhs.column)?,
        })
    }
}

impl<V> Sub for Position<V>
where
    V: BoardValue,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row - rhs.row,
            column: self.column - rhs.column,
        }
    }
}

impl<V> CheckedSub for Position<V>
where
    V: BoardValue,
{
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(Self {
            row: self.row.checked_sub(&rhs.row)?,
            column: self.column.checked_sub(&rhs.column)?,
        })
    }
}

impl<V> Position<V>
where
    V: BoardValue,
{
    /// The position encoded as an index into an board with the provided dimensions.
    pub fn as_index(&self, dim: &Dimensions<V>) -> Option<usize> {
        if self.row >= dim.rows || self.column >= dim.columns {
            return None;
        }
        let row = self.row.into();
        let column = self.column.into();
        Some(row * dim.columns.into() + column)
    }

    /// Get the position `by` units away from this position in the provided direction `dir`, or
    /// `None` if the position would not be representable.
    pub fn shift(&self, dir: Direction, by: V) -> Option<Self> {
        match dir {
            Direction::Up => self.checked_sub(&Self::from((by, V::zero()))),
            Direction::Down => self.checked_add(&Self::from((by, V::zero()))),
            Direction::Left => self.checked_sub(&Self::from((V::zero(), by))),
            Direction::Right => self.checked_add(&Self::from((V::zero(), by))),
        }
    }
}

impl<V> From<(V, V)> for Position<V> {
    fn from((row, column): (V, V)) -> Self {
        Self { row, column }
    }
}

impl<V> Display for Position<V>
where
    V: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The dimensions of a board in terms of rows and columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Dimensions<V> {
    rows: V,
    columns: V,
}

impl<V> Dimensions<V> {
    /// The number of rows.
    pub fn rows(&self) -> &V {
        &self.rows
    }

    /// The number of columns.
    pub fn columns(&self) -> &V {
        &self.columns
    }
}

impl<V> Dimensions<V>
where
    V: BoardValue,
{
    /// The number of cells in a board of these dimensions.
    pub fn area(&self) -> usize {
        self.rows.into() * self.columns.into()
    }
}

/// An error associated with the creation of the dimensions.
#[derive(Debug)]
pub struct DimensionError(IntErrorKind);

impl Display for DimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let reason = match self.0 {
            IntErrorKind::PosOverflow => "the dimensions were too large",
            IntErrorKind::Zero => "the dimensions have zero area",
            _ => unreachable!(),
        };
        f.write_fmt(format_args!("dimensions could not be used: {reason}"))
    }
}

impl Error for DimensionError {}

impl<V> TryFrom<(V, V)> for Dimensions<V>
where
    V: BoardValue,
{
    type Error = DimensionError;

    fn try_from((rows, columns): (V, V)) -> Result<Self, Self::Error> {
        if let Some(size) = rows.checked_mul(&columns) {
            if size.is_zero() {
                Err(DimensionError(IntErrorKind::Zero))
            } else {
                Ok(Self { rows, columns })
            }
        } else {
            Err(DimensionError(IntErrorKind::PosOverflow))
        }
    }
}
