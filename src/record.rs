// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! The record format used to exchange boards with other tools.
//!
//! A board is stored as its dimensions and the placement of each of its vehicles:
//!
//! ```json
//! {
//!   "rows": 6, "cols": 6,
//!   "vehicles": [
//!     { "kind": "target", "identity": "X", "row": 2, "col": 1, "orientation": "horizontal" },
//!     { "kind": "truck", "identity": "O", "row": 0, "col": 5, "orientation": "vertical" }
//!   ]
//! }
//! ```
//!
//! A collection is a JSON array of such records. Records may also carry the optional
//! `min_steps` and `heuristic` annotations, which are ignored when building a [`Board`].

use crate::board::{Board, InvalidStateError};
use crate::vehicle::{Vehicle, VehicleKind};
use crate::{BoardValue, DimensionError, Orientation};
use alloc::string::String;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// The placement of one vehicle in a [`BoardRecord`].
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct VehicleRecord<V> {
    /// The kind of the vehicle.
    pub kind: VehicleKind,
    /// The identity of the vehicle; a single character.
    pub identity: char,
    /// The row of the top-left cell.
    pub row: V,
    /// The column of the top-left cell.
    pub col: V,
    /// The orientation of the vehicle.
    pub orientation: Orientation,
}

/// A board in record form.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct BoardRecord<V> {
    /// The number of rows.
    pub rows: V,
    /// The number of columns.
    pub cols: V,
    /// The vehicles, in placement order.
    pub vehicles: Vec<VehicleRecord<V>>,
    /// The length of a shortest solution, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_steps: Option<usize>,
    /// The heuristic estimate of the initial board, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<usize>,
}

/// An error raised when a record cannot be turned into a board.
#[derive(Debug)]
pub enum DecodeError<V> {
    /// The input was not valid JSON, or did not have the shape of a record (missing fields,
    /// unknown vehicle kinds, identities longer than one character, ...).
    Json(serde_json::Error),
    /// The dimensions were unusable.
    Dimensions(DimensionError),
    /// The identity cannot be used for a vehicle.
    Identity(char),
    /// A vehicle could not be placed.
    Placement(InvalidStateError<V>),
}

impl<V> Display for DecodeError<V>
where
    V: BoardValue,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::Json(e) => write!(f, "malformed board record: {e}"),
            DecodeError::Dimensions(e) => write!(f, "invalid board record: {e}"),
            DecodeError::Identity(id) => {
                write!(f, "invalid board record: {id:?} cannot identify a vehicle")
            }
            DecodeError::Placement(e) => write!(f, "invalid board record: {e}"),
        }
    }
}

impl<V> Error for DecodeError<V>
where
    V: BoardValue,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Json(_) | DecodeError::Identity(_) => None,
            DecodeError::Dimensions(e) => Some(e),
            DecodeError::Placement(e) => Some(e),
        }
    }
}

impl<V> From<serde_json::Error> for DecodeError<V> {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e)
    }
}

impl<V> From<DimensionError> for DecodeError<V> {
    fn from(e: DimensionError) -> Self {
        DecodeError::Dimensions(e)
    }
}

impl<V> From<InvalidStateError<V>> for DecodeError<V> {
    fn from(e: InvalidStateError<V>) -> Self {
        DecodeError::Placement(e)
    }
}

impl<V> Board<V>
where
    V: BoardValue,
{
    /// The record describing this board. Vehicles are listed in placement order, so
    /// [`Board::from_record`] rebuilds an equal board.
    pub fn to_record(&self) -> BoardRecord<V> {
        BoardRecord {
            rows: *self.dimensions().rows(),
            cols: *self.dimensions().columns(),
            vehicles: self
                .vehicles()
                .iter()
                .map(|v| VehicleRecord {
                    kind: v.kind(),
                    identity: v.identity(),
                    row: *v.position().row(),
                    col: *v.position().column(),
                    orientation: v.orientation(),
                })
                .collect(),
            min_steps: None,
            heuristic: None,
        }
    }

    /// Build a board from its record, placing the vehicles in order.
    pub fn from_record(record: &BoardRecord<V>) -> Result<Self, DecodeError<V>> {
        let mut board = Board::empty((record.rows, record.cols))?;
        for v in &record.vehicles {
            let vehicle = Vehicle::new(v.kind, v.identity, v.orientation)
                .ok_or(DecodeError::Identity(v.identity))?;
            board.add_vehicle(vehicle, (v.row, v.col))?;
        }
        Ok(board)
    }

    /// Parse a board from a JSON record.
    pub fn from_json(json: &str) -> Result<Self, DecodeError<V>> {
        let record: BoardRecord<V> = serde_json::from_str(json)?;
        Self::from_record(&record)
    }

    /// This board as a JSON record.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }
}

/// Parse a JSON collection (an array of records) into records, without building boards.
pub fn records_from_json<V: BoardValue>(json: &str) -> Result<Vec<BoardRecord<V>>, DecodeError<V>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON collection into independent boards. Fails on the first malformed record.
pub fn boards_from_json<V: BoardValue>(json: &str) -> Result<Vec<Board<V>>, DecodeError<V>> {
    records_from_json(json)?
        .iter()
        .map(Board::from_record)
        .collect()
}

/// Write boards as a JSON collection.
pub fn boards_to_json<V: BoardValue>(boards: &[Board<V>]) -> Result<String, serde_json::Error> {
    let records: Vec<_> = boards.iter().map(Board::to_record).collect();
    serde_json::to_string(&records)
}
