// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The board: vehicles plus the occupancy grid derived from them.

use crate::solution::Move;
use crate::vehicle::{EMPTY_CELL, Vehicle};
use crate::{BoardValue, Dimensions, Direction, Orientation, Position};
use alloc::vec;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use core::hash::{Hash, Hasher};
use rustc_hash::FxHasher;

/// A type of invalid state, associated with an [`InvalidStateError`].
#[derive(Debug, Eq, PartialEq)]
pub enum InvalidStateType {
    /// The vehicle with the provided identity would leave the board.
    InvalidPosition(char),
    /// The vehicles with the provided identities would overlap.
    Overlap(char, char),
    /// A vehicle with the provided identity is already on the board.
    DuplicateIdentity(char),
    /// The board already holds a target vehicle, which has the provided identity.
    DuplicateTarget(char),
    /// The target vehicle with the provided identity is not horizontal on the exit row.
    MisplacedTarget(char),
}

/// An error which denotes that a vehicle could not be added to a board.
#[derive(Debug)]
pub struct InvalidStateError<V> {
    position: Position<V>,
    variant: InvalidStateType,
}

impl<V> InvalidStateError<V> {
    /// The position at which the problem was found.
    pub fn position(&self) -> &Position<V> {
        &self.position
    }

    /// What was wrong.
    pub fn variant(&self) -> &InvalidStateType {
        &self.variant
    }
}

impl<V> Display for InvalidStateError<V>
where
    V: BoardValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.variant {
            InvalidStateType::InvalidPosition(id) => f.write_fmt(format_args!(
                "vehicle {id} would be located at an invalid position {}",
                self.position
            )),
            InvalidStateType::Overlap(existing, id) => f.write_fmt(format_args!(
                "vehicle {existing} and vehicle {id} would overlap at position {}",
                self.position
            )),
            InvalidStateType::DuplicateIdentity(id) => f.write_fmt(format_args!(
                "vehicle {id} is already on the board (placing at {})",
                self.position
            )),
            InvalidStateType::DuplicateTarget(existing) => f.write_fmt(format_args!(
                "the board already has a target vehicle ({existing}); cannot place another at {}",
                self.position
            )),
            InvalidStateType::MisplacedTarget(id) => f.write_fmt(format_args!(
                "target vehicle {id} must be horizontal on the exit row, not at {}",
                self.position
            )),
        }
    }
}

impl<V> Error for InvalidStateError<V> where V: BoardValue {}

/// The type of invalid move that was observed in an [`InvalidMoveError`].
#[derive(Debug, Eq, PartialEq)]
pub enum InvalidMoveType<V> {
    /// The vehicle that was designated to be moved doesn't exist.
    InvalidVehicle,
    /// The direction that was used isn't valid for the provided vehicle.
    InvalidDirection,
    /// The final position of the vehicle is out of bounds.
    InvalidFinalPosition,
    /// After moving the vehicle, it would intersect the vehicle with the provided identity at the
    /// provided position.
    Intersects(Position<V>, char),
}

/// An error which describes an attempted invalid move.
#[derive(Debug)]
pub struct InvalidMoveError<V> {
    vehicle: char,
    dir: Direction,
    variant: InvalidMoveType<V>,
}

impl<V> InvalidMoveError<V> {
    /// The vehicle that was asked to move.
    pub fn vehicle(&self) -> char {
        self.vehicle
    }

    /// The requested direction.
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Why the move was refused.
    pub fn variant(&self) -> &InvalidMoveType<V> {
        &self.variant
    }
}

impl<V> Display for InvalidMoveError<V>
where
    V: BoardValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match &self.variant {
            InvalidMoveType::InvalidVehicle => f.write_fmt(format_args!("cannot move vehicle {} {} because it doesn't exist", self.vehicle, self.dir)),
            InvalidMoveType::InvalidDirection => f.write_fmt(format_args!("cannot move vehicle {} {} because its orientation does not allow for movement in that direction", self.vehicle, self.dir)),
            InvalidMoveType::InvalidFinalPosition => f.write_fmt(format_args!("cannot move vehicle {} {} because it enters an invalid position", self.vehicle, self.dir)),
            InvalidMoveType::Intersects(pos, other) => f.write_fmt(format_args!("cannot move vehicle {} {} because it would intersect with vehicle {} at {}", self.vehicle, self.dir, other, pos)),
        }
    }
}

impl<V> Error for InvalidMoveError<V> where V: BoardValue {}

/// A puzzle board: its dimensions, the vehicles on it, and the occupancy grid.
///
/// The grid is always exactly the union of the vehicles' footprints. This is guaranteed as long as
/// the board is constructed with [`Board::empty`] and manipulated via its own operations. Cloning
/// a board produces a fully independent copy.
#[derive(Clone, Debug)]
pub struct Board<V> {
    dim: Dimensions<V>,
    vehicles: Vec<Vehicle<V>>,
    concrete: Vec<Option<char>>,
    target: Option<usize>,
}

impl<V> Board<V> {
    /// The dimensions of this board.
    pub fn dimensions(&self) -> &Dimensions<V> {
        &self.dim
    }

    /// The vehicles on this board, in placement order.
    pub fn vehicles(&self) -> &[Vehicle<V>] {
        &self.vehicles
    }

    /// The occupancy grid in row-major order: the identity of the vehicle in each cell, if any.
    pub fn concrete(&self) -> &[Option<char>] {
        &self.concrete
    }

    /// The target vehicle, if the board has one.
    pub fn target(&self) -> Option<&Vehicle<V>> {
        self.target.map(|idx| &self.vehicles[idx])
    }

    /// Look up a vehicle by its identity.
    pub fn get_vehicle(&self, identity: char) -> Option<&Vehicle<V>> {
        self.vehicles.iter().find(|v| v.identity() == identity)
    }

    fn index_of(&self, identity: char) -> Option<usize> {
        self.vehicles.iter().position(|v| v.identity() == identity)
    }

    /// Every move of every vehicle along its axis, two per vehicle in placement order,
    /// irrespective of whether the move is currently legal.
    pub fn all_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.vehicles.iter().flat_map(|v| {
            v.orientation()
                .directions()
                .map(|dir| Move::new(v.identity(), dir))
        })
    }

    /// A deterministic hash of the occupancy grid. Boards with the same cell contents hash
    /// identically, whatever order their vehicles were placed in.
    pub fn canonical_hash(&self) -> u64
    where
        V: BoardValue,
    {
        let mut hasher = FxHasher::default();
        hasher.write_usize((*self.dim.rows()).into());
        hasher.write_usize((*self.dim.columns()).into());
        for cell in &self.concrete {
            hasher.write_u32(cell.map_or(0, u32::from));
        }
        hasher.finish()
    }
}

impl<V> Board<V>
where
    V: BoardValue,
{
    /// Produce an empty board (i.e., one with no vehicles) with the provided dimensions.
    pub fn empty<D: TryInto<Dimensions<V>>>(dim: D) -> Result<Self, D::Error> {
        let dim = dim.try_into()?;
        Ok(Self {
            concrete: vec![None; dim.area()],
            dim,
            vehicles: Vec::new(),
            target: None,
        })
    }

    /// Fetches the identity occupying the requested position. [`None`] if the position doesn't
    /// exist in the board, [`Some`]`(`[`None`]`)` if the position exists, but is empty, and
    /// [`Some`]`(`[`Some`]`(id))` with `id` as the vehicle that occupies that position.
    pub fn get<P: Into<Position<V>>>(&self, position: P) -> Option<Option<char>> {
        position
            .into()
            .as_index(&self.dim)
            .and_then(|p| self.concrete.get(p).copied())
    }

    /// Whether the position exists on the board and is empty.
    pub fn is_vacant<P: Into<Position<V>>>(&self, position: P) -> bool {
        self.get(position) == Some(None)
    }

    /// The row the target vehicle escapes along: the middle row, rounding up.
    pub fn exit_row(&self) -> V {
        let two = V::one() + V::one();
        (*self.dim.rows() - V::one()) / two
    }

    /// The exit: the right-hand cell of the exit row. The puzzle is solved once the target
    /// vehicle occupies it.
    pub fn exit(&self) -> Position<V> {
        Position::from((self.exit_row(), *self.dim.columns() - V::one()))
    }

    /// Whether the target vehicle has reached the exit.
    pub fn is_solved(&self) -> bool {
        self.target()
            .is_some_and(|target| self.get(self.exit()) == Some(Some(target.identity())))
    }

    /// Whether `vehicle` could be placed with its top-left cell at `position`: every cell of its
    /// footprint must exist and be empty. With `enforce_uniqueness`, a horizontal vehicle is also
    /// refused on a row which already holds a horizontal vehicle, and a vertical one in a column
    /// which already holds a vertical vehicle.
    pub fn check_placement<P: Into<Position<V>>>(
        &self,
        vehicle: &Vehicle<V>,
        position: P,
        enforce_uniqueness: bool,
    ) -> bool {
        let position = position.into();
        if enforce_uniqueness
            && self.vehicles.iter().any(|other| {
                other.orientation() == vehicle.orientation()
                    && match vehicle.orientation() {
                        Orientation::Horizontal => other.position().row() == position.row(),
                        Orientation::Vertical => other.position().column() == position.column(),
                    }
            })
        {
            return false;
        }
        let length: usize = (*vehicle.length()).into();
        let mut cells = 0;
        for cell in vehicle.footprint_at(position) {
            if !self.is_vacant(cell) {
                return false;
            }
            cells += 1;
        }
        cells == length
    }

    /// Add a vehicle to the board with its top-left cell at `position`, returning its index in
    /// [`Board::vehicles`]. The board is left untouched if the vehicle does not fit, if its
    /// identity is already taken, or if it is a target vehicle which is not horizontal on the exit
    /// row (or the board already has one).
    pub fn add_vehicle<P: Into<Position<V>>>(
        &mut self,
        mut vehicle: Vehicle<V>,
        position: P,
    ) -> Result<usize, InvalidStateError<V>> {
        let position = position.into();
        let error = |variant| InvalidStateError { position, variant };
        let identity = vehicle.identity();
        if self.index_of(identity).is_some() {
            return Err(error(InvalidStateType::DuplicateIdentity(identity)));
        }
        if vehicle.is_target() {
            if let Some(existing) = self.target() {
                return Err(error(InvalidStateType::DuplicateTarget(existing.identity())));
            }
            if vehicle.orientation() != Orientation::Horizontal
                || *position.row() != self.exit_row()
            {
                return Err(error(InvalidStateType::MisplacedTarget(identity)));
            }
        }

        let length: usize = (*vehicle.length()).into();
        let mut cells = Vec::with_capacity(length);
        for cell in vehicle.footprint_at(position) {
            match cell.as_index(&self.dim) {
                None => {
                    return Err(InvalidStateError {
                        position: cell,
                        variant: InvalidStateType::InvalidPosition(identity),
                    });
                }
                Some(idx) => {
                    if let Some(existing) = self.concrete[idx] {
                        return Err(InvalidStateError {
                            position: cell,
                            variant: InvalidStateType::Overlap(existing, identity),
                        });
                    }
                    cells.push(idx);
                }
            }
        }
        if cells.len() != length {
            return Err(error(InvalidStateType::InvalidPosition(identity)));
        }
        for idx in cells {
            self.concrete[idx] = Some(identity);
        }

        vehicle.set_position(position);
        let idx = self.vehicles.len();
        if vehicle.is_target() {
            self.target = Some(idx);
        }
        self.vehicles.push(vehicle);
        Ok(idx)
    }

    /// Shift the vehicle with the provided identity one space in the designated direction,
    /// returning its new top-left cell. Only the vacated and the newly entered cell of the grid
    /// are touched.
    pub fn shift_vehicle(
        &mut self,
        identity: char,
        dir: Direction,
    ) -> Result<Position<V>, InvalidMoveError<V>> {
        let error = |variant| InvalidMoveError {
            vehicle: identity,
            dir,
            variant,
        };
        let Some(idx) = self.index_of(identity) else {
            return Err(error(InvalidMoveType::InvalidVehicle));
        };
        let actual = self.vehicles[idx];
        let pos = *actual.position();
        let (deleted, inserted) = match (dir, actual.orientation()) {
            (Direction::Up, Orientation::Vertical) | (Direction::Left, Orientation::Horizontal) => {
                (
                    pos.shift(-dir, *actual.length() - V::one()),
                    pos.shift(dir, V::one()),
                )
            }
            (Direction::Down, Orientation::Vertical)
            | (Direction::Right, Orientation::Horizontal) => {
                (Some(pos), pos.shift(dir, *actual.length()))
            }
            _ => return Err(error(InvalidMoveType::InvalidDirection)),
        };
        if let (Some(deleted_pos), Some(inserted_pos)) = (deleted, inserted) {
            let deleted = deleted_pos
                .as_index(&self.dim)
                .ok_or(error(InvalidMoveType::InvalidFinalPosition))?;
            let inserted = inserted_pos
                .as_index(&self.dim)
                .ok_or(error(InvalidMoveType::InvalidFinalPosition))?;
            if let Ok([deleted, inserted]) = self.concrete.get_disjoint_mut([deleted, inserted]) {
                return if let Some(other) = inserted {
                    Err(error(InvalidMoveType::Intersects(inserted_pos, *other)))
                } else {
                    *inserted = deleted.take();
                    let new = pos.shift(dir, V::one()).unwrap_or(inserted_pos);
                    self.vehicles[idx].set_position(new);
                    Ok(new)
                };
            }
        }
        Err(error(InvalidMoveType::InvalidFinalPosition))
    }

    /// Move the vehicle with the provided identity one space in the designated direction. Returns
    /// `false`, leaving the board untouched, unless the direction is among the vehicle's
    /// [possible moves](Vehicle::possible_moves).
    pub fn move_vehicle(&mut self, identity: char, dir: Direction) -> bool {
        self.shift_vehicle(identity, dir).is_ok()
    }

    /// The moves which are currently legal, in the same order as [`Board::all_moves`].
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.vehicles.iter().flat_map(move |v| {
            v.possible_moves(self)
                .into_iter()
                .map(move |dir| Move::new(v.identity(), dir))
        })
    }
}

impl<V> PartialEq for Board<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim
            && self.concrete == other.concrete
            && self.vehicles.len() == other.vehicles.len()
    }
}

impl<V> Eq for Board<V> where V: Eq {}

impl<V> Hash for Board<V>
where
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dim.hash(state);
        self.concrete.hash(state);
        self.vehicles.len().hash(state);
    }
}

impl<V> Display for Board<V>
where
    V: BoardValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let columns: usize = (*self.dim.columns()).into();
        let exit_row: usize = self.exit_row().into();
        writeln!(f, "{:#>1$}", "", columns + 2)?;
        for (row, cells) in self.concrete.chunks(columns).enumerate() {
            write!(f, "#")?;
            for cell in cells {
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
            writeln!(f, "{}", if row == exit_row { '>' } else { '#' })?;
        }
        writeln!(f, "{:#>1$}", "", columns + 2)
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use crate::{
        Board, Direction, InvalidMoveError, InvalidMoveType, InvalidStateError, InvalidStateType,
        Move, Orientation, Position, TARGET_IDENTITY, Vehicle, VehicleKind,
    };
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::error::Error;
    use std::println;

    fn car(identity: char, orientation: Orientation) -> Vehicle<u8> {
        Vehicle::new(VehicleKind::Car, identity, orientation).unwrap()
    }

    fn truck(identity: char, orientation: Orientation) -> Vehicle<u8> {
        Vehicle::new(VehicleKind::Truck, identity, orientation).unwrap()
    }

    #[test]
    fn simple_board() -> Result<(), Box<dyn Error>> {
        let mut board = Board::empty((3u8, 3))?;
        println!("{board}");
        let idx = board.add_vehicle(Vehicle::target(), (1, 0))?;
        assert_eq!(0, idx);
        println!("{board}");
        assert_eq!(Some(Some(TARGET_IDENTITY)), board.get((1, 1)));
        assert_eq!(Some(None), board.get((1, 2)));
        assert_eq!(None, board.get((3, 0)));

        match board.add_vehicle(car('A', Orientation::Vertical), (2, 0)) {
            Err(InvalidStateError {
                position,
                variant: InvalidStateType::InvalidPosition('A'),
            }) => {
                assert_eq!(Position::from((3, 0)), position);
            }
            s => unreachable!("Should error here, got {s:?}"),
        }

        match board.add_vehicle(car('A', Orientation::Vertical), (0, 1)) {
            Err(InvalidStateError {
                position,
                variant: InvalidStateType::Overlap(TARGET_IDENTITY, 'A'),
            }) => {
                assert_eq!(Position::from((1, 1)), position);
            }
            s => unreachable!("Should error here, got {s:?}"),
        }
        assert_eq!(1, board.vehicles().len());

        board.shift_vehicle(TARGET_IDENTITY, Direction::Right)?;
        assert_eq!(Some(Some(TARGET_IDENTITY)), board.get((1, 2)));
        assert_eq!(Some(None), board.get((1, 0)));
        assert!(board.is_solved());
        println!("{board}");

        board.shift_vehicle(TARGET_IDENTITY, Direction::Left)?;
        assert_eq!(Some(Some(TARGET_IDENTITY)), board.get((1, 0)));
        assert_eq!(Some(None), board.get((1, 2)));
        assert!(!board.is_solved());

        let idx = board.add_vehicle(car('A', Orientation::Vertical), (0, 2))?;
        assert_eq!(1, idx);
        println!("{board}");

        board.shift_vehicle('A', Direction::Down)?;
        assert_eq!(Some(Some('A')), board.get((2, 2)));
        assert_eq!(Some(None), board.get((0, 2)));

        board.shift_vehicle('A', Direction::Up)?;
        assert_eq!(Some(Some('A')), board.get((0, 2)));
        assert_eq!(Some(None), board.get((2, 2)));

        match board.shift_vehicle('Z', Direction::Right) {
            Err(InvalidMoveError {
                variant: InvalidMoveType::InvalidVehicle,
                vehicle,
                dir,
            }) => {
                assert_eq!('Z', vehicle);
                assert_eq!(Direction::Right, dir);
            }
            s => unreachable!("Expected another error, got {s:?}"),
        }

        match board.shift_vehicle('A', Direction::Up) {
            Err(InvalidMoveError {
                variant: InvalidMoveType::InvalidFinalPosition,
                ..
            }) => {}
            s => unreachable!("Expected another error, got {s:?}"),
        }

        match board.shift_vehicle('A', Direction::Right) {
            Err(InvalidMoveError {
                variant: InvalidMoveType::InvalidDirection,
                ..
            }) => {}
            s => unreachable!("Expected another error, got {s:?}"),
        }

        match board.shift_vehicle(TARGET_IDENTITY, Direction::Right) {
            Err(InvalidMoveError {
                variant: InvalidMoveType::Intersects(at, with),
                ..
            }) => {
                assert_eq!('A', with);
                assert_eq!(Position::from((1, 2)), at);
            }
            s => unreachable!("Expected another error, got {s:?}"),
        }

        assert!(!board.move_vehicle(TARGET_IDENTITY, Direction::Right));
        assert!(!board.move_vehicle(TARGET_IDENTITY, Direction::Left));
        assert!(board.move_vehicle('A', Direction::Down));

        Ok(())
    }

    #[test]
    fn target_rules() -> Result<(), Box<dyn Error>> {
        let mut board = Board::empty((6u8, 6))?;
        assert_eq!(2, board.exit_row());
        assert_eq!(Position::from((2, 5)), board.exit());
        assert!(!board.is_solved());

        match board.add_vehicle(Vehicle::target(), (1, 0)) {
            Err(InvalidStateError {
                variant: InvalidStateType::MisplacedTarget(TARGET_IDENTITY),
                ..
            }) => {}
            s => unreachable!("Should error here, got {s:?}"),
        }
        let mut vertical = Vehicle::target();
        vertical.change_orientation();
        assert!(board.add_vehicle(vertical, (2, 0)).is_err());

        board.add_vehicle(Vehicle::target(), (2, 4))?;
        assert!(board.is_solved());

        let other = Vehicle::new(VehicleKind::Target, 'Y', Orientation::Horizontal).unwrap();
        match board.add_vehicle(other, (2, 0)) {
            Err(InvalidStateError {
                variant: InvalidStateType::DuplicateTarget(TARGET_IDENTITY),
                ..
            }) => {}
            s => unreachable!("Should error here, got {s:?}"),
        }

        match board.add_vehicle(car(TARGET_IDENTITY, Orientation::Vertical), (3, 0)) {
            Err(InvalidStateError {
                variant: InvalidStateType::DuplicateIdentity(TARGET_IDENTITY),
                ..
            }) => {}
            s => unreachable!("Should error here, got {s:?}"),
        }

        Ok(())
    }

    #[test]
    fn placement() -> Result<(), Box<dyn Error>> {
        let mut board = Board::empty((6u8, 6))?;
        board.add_vehicle(truck('O', Orientation::Vertical), (0, 5))?;
        board.add_vehicle(car('A', Orientation::Horizontal), (0, 0))?;

        assert!(board.check_placement(&car('B', Orientation::Vertical), (1, 0), false));
        assert!(!board.check_placement(&car('B', Orientation::Vertical), (5, 0), false));
        assert!(!board.check_placement(&car('B', Orientation::Horizontal), (0, 1), false));
        assert!(!board.check_placement(&car('B', Orientation::Horizontal), (3, 5), false));

        assert!(board.check_placement(&car('B', Orientation::Horizontal), (0, 2), false));
        assert!(!board.check_placement(&car('B', Orientation::Horizontal), (0, 2), true));
        assert!(board.check_placement(&car('B', Orientation::Horizontal), (1, 2), true));
        assert!(board.check_placement(&car('B', Orientation::Vertical), (4, 5), false));
        assert!(!board.check_placement(&car('B', Orientation::Vertical), (4, 5), true));
        assert!(board.check_placement(&truck('B', Orientation::Vertical), (3, 4), true));

        Ok(())
    }

    #[test]
    fn moves_listing() -> Result<(), Box<dyn Error>> {
        let mut board = Board::empty((6u8, 6))?;
        board.add_vehicle(Vehicle::target(), (2, 0))?;
        board.add_vehicle(car('A', Orientation::Vertical), (0, 3))?;

        let all: Vec<_> = board.all_moves().collect();
        assert_eq!(
            [
                Move::new(TARGET_IDENTITY, Direction::Left),
                Move::new(TARGET_IDENTITY, Direction::Right),
                Move::new('A', Direction::Up),
                Move::new('A', Direction::Down),
            ]
            .as_slice(),
            all.as_slice()
        );

        let legal: Vec<_> = board.legal_moves().collect();
        assert_eq!(
            [
                Move::new(TARGET_IDENTITY, Direction::Right),
                Move::new('A', Direction::Down),
            ]
            .as_slice(),
            legal.as_slice()
        );

        Ok(())
    }

    #[test]
    fn hashing() -> Result<(), Box<dyn Error>> {
        let mut first = Board::empty((6u8, 6))?;
        first.add_vehicle(Vehicle::target(), (2, 0))?;
        first.add_vehicle(car('A', Orientation::Vertical), (0, 3))?;
        first.add_vehicle(truck('B', Orientation::Horizontal), (5, 0))?;

        let mut second = Board::empty((6u8, 6))?;
        second.add_vehicle(truck('B', Orientation::Horizontal), (5, 0))?;
        second.add_vehicle(car('A', Orientation::Vertical), (0, 3))?;
        second.add_vehicle(Vehicle::target(), (2, 0))?;

        assert_eq!(first.canonical_hash(), second.canonical_hash());
        assert_eq!(first, second);

        let before = first.canonical_hash();
        assert!(first.move_vehicle('A', Direction::Down));
        assert_ne!(before, first.canonical_hash());
        assert!(first.move_vehicle('A', Direction::Up));
        assert_eq!(before, first.canonical_hash());

        let mut branch = first.clone();
        assert!(branch.move_vehicle('B', Direction::Right));
        assert_eq!(Some(Some('B')), first.get((5, 0)));
        assert_eq!(Some(None), branch.get((5, 0)));
        assert_eq!(Position::from((5, 0)), *first.get_vehicle('B').unwrap().position());

        Ok(())
    }

    #[test]
    fn display() -> Result<(), Box<dyn Error>> {
        let mut board = Board::empty((3u8, 4))?;
        board.add_vehicle(Vehicle::target(), (1, 0))?;
        board.add_vehicle(car('A', Orientation::Vertical), (1, 3))?;
        assert_eq!("######\n#....#\n#XX.A>\n#...A#\n######\n", board.to_string());
        Ok(())
    }
}
