// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors used by the [`Grid`][crate::board::Grid] and the placement engine.

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would extend past the edge of the grid.
    #[error("the ship does not fit inside the grid")]
    InvalidBounds,
    /// One or more of the ship's cells was not empty.
    #[error("the requested position was already occupied")]
    Overlap,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not place ship {ship}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(crate) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship whose placement was attempted.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Error returned when reading a cell outside the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord} is out of range for a {size}x{size} grid")]
pub struct OutOfBoundsError {
    /// The coordinate that was requested.
    coord: Coordinate,
    /// Side length of the grid.
    size: usize,
}

impl OutOfBoundsError {
    pub(crate) fn new(coord: Coordinate, size: usize) -> Self {
        Self { coord, size }
    }

    /// Get the coordinate that was out of range.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
