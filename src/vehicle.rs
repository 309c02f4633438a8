// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Vehicles, the rectangular occupants of a [`Board`].

use crate::board::Board;
use crate::{BoardValue, Direction, Orientation, Position};
use core::fmt::{Display, Formatter};
use core::iter::{Flatten, successors};
use num_traits::CheckedAdd;
use serde::{Deserialize, Serialize};

/// The identity conventionally given to the target vehicle.
pub const TARGET_IDENTITY: char = 'X';

/// The character used for empty cells when a board is displayed; no vehicle may use it.
pub(crate) const EMPTY_CELL: char = '.';

/// The kind of a vehicle, which determines its length.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// A vehicle of length two.
    Car,
    /// A vehicle of length three.
    Truck,
    /// The vehicle which must reach the exit; it has length two.
    Target,
}

impl VehicleKind {
    /// The number of cells occupied by a vehicle of this kind.
    pub fn length(self) -> usize {
        match self {
            VehicleKind::Car | VehicleKind::Target => 2,
            VehicleKind::Truck => 3,
        }
    }
}

impl Display for VehicleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            VehicleKind::Car => "car",
            VehicleKind::Truck => "truck",
            VehicleKind::Target => "target",
        })
    }
}

/// A vehicle, generic over the numeric type which backs its position.
///
/// The shape of a vehicle (kind, length, orientation) and its identity are fixed once created;
/// its position is assigned when it is added to a [`Board`] and afterwards only changes through
/// board moves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Vehicle<V> {
    kind: VehicleKind,
    identity: char,
    length: V,
    orientation: Orientation,
    position: Position<V>,
}

impl<V> Vehicle<V> {
    /// The kind of the vehicle.
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// The character which identifies the vehicle on its board.
    pub fn identity(&self) -> char {
        self.identity
    }

    /// The length of the vehicle.
    pub fn length(&self) -> &V {
        &self.length
    }

    /// The orientation of the vehicle.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The top-left cell of the vehicle.
    pub fn position(&self) -> &Position<V> {
        &self.position
    }

    /// Whether this is the target vehicle.
    pub fn is_target(&self) -> bool {
        self.kind == VehicleKind::Target
    }

    /// Flip the orientation of the vehicle. Only meaningful before the vehicle is placed; boards
    /// never expose their vehicles mutably.
    pub fn change_orientation(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    pub(crate) fn set_position(&mut self, position: Position<V>) {
        self.position = position;
    }
}

impl<V> Vehicle<V>
where
    V: BoardValue,
{
    /// Create a new, not yet placed, vehicle. Returns `None` if `identity` cannot be displayed as
    /// a vehicle (whitespace or `.`).
    pub fn new(kind: VehicleKind, identity: char, orientation: Orientation) -> Option<Self> {
        if identity == EMPTY_CELL || identity.is_whitespace() || identity.is_control() {
            return None;
        }
        Some(Self {
            kind,
            identity,
            length: V::try_from(kind.length()).ok()?,
            orientation,
            position: Position::from((V::zero(), V::zero())),
        })
    }

    /// The standard target vehicle: a horizontal car named [`TARGET_IDENTITY`].
    pub fn target() -> Self {
        Self {
            kind: VehicleKind::Target,
            identity: TARGET_IDENTITY,
            length: V::one() + V::one(),
            orientation: Orientation::Horizontal,
            position: Position::from((V::zero(), V::zero())),
        }
    }

    /// The cells this vehicle would occupy if its top-left cell were `position`. Stops early if a
    /// cell is not representable in `V`.
    pub fn footprint_at(&self, position: Position<V>) -> impl Iterator<Item = Position<V>> {
        let offset = self.orientation.unit::<V>();
        successors(Some(position), move |base| base.checked_add(&offset)).take(self.length.into())
    }

    /// The cells currently occupied by this vehicle.
    pub fn footprint(&self) -> impl Iterator<Item = Position<V>> {
        self.footprint_at(self.position)
    }

    /// The moves this vehicle may currently make on `board`: a move is possible iff the cell just
    /// beyond the vehicle in that direction exists and is empty.
    pub fn possible_moves(&self, board: &Board<V>) -> PossibleMoves {
        let [backward, forward] = self.orientation.directions();
        let behind = self.position.shift(backward, V::one());
        let ahead = self.position.shift(forward, self.length);
        PossibleMoves {
            moves: [
                behind
                    .is_some_and(|cell| board.is_vacant(cell))
                    .then_some(backward),
                ahead
                    .is_some_and(|cell| board.is_vacant(cell))
                    .then_some(forward),
            ],
        }
    }
}

/// The set of directions a vehicle may currently move in: at most its backward and its forward
/// direction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PossibleMoves {
    moves: [Option<Direction>; 2],
}

impl PossibleMoves {
    /// Whether `dir` is among the possible moves.
    pub fn contains(&self, dir: Direction) -> bool {
        self.moves.contains(&Some(dir))
    }

    /// Whether the vehicle is stuck.
    pub fn is_empty(&self) -> bool {
        self.moves == [None, None]
    }

    /// The number of possible moves.
    pub fn len(&self) -> usize {
        self.moves.iter().flatten().count()
    }

    /// The possible directions, backward first.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().flatten().copied()
    }
}

impl IntoIterator for PossibleMoves {
    type Item = Direction;
    type IntoIter = Flatten<core::array::IntoIter<Option<Direction>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().flatten()
    }
}
