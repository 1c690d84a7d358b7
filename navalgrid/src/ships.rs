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
//! Types used for describing ships and the lines they cover.
use std::{convert::TryFrom, fmt, str::FromStr};

use enumflags2::BitFlags;
use thiserror::Error;

use crate::{
    board::{Coordinate, Dimensions},
    config::SHIP_LENGTH,
};

pub use self::linear::{bounds_ok, ship_cells};

mod linear;

/// Projection of a shape onto the grid. This is a simple typedef of a `Vec`, ordered from
/// the shape's origin outward.
pub type ShapeProjection = Vec<Coordinate>;

/// Direction a ship extends in from its origin.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Extends to the right along a row.
    Horizontal = 0b0001,
    /// Extends downward along a column.
    Vertical = 0b0010,
    /// Extends down and to the right.
    DiagonalDown = 0b0100,
    /// Extends down and to the left.
    DiagonalUp = 0b1000,
}

impl Orientation {
    /// All orientations, in declaration order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Row and column step taken for each cell along this orientation.
    pub fn deltas(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }

    /// One-letter code for this orientation.
    pub fn code(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
            Orientation::DiagonalDown => 'D',
            Orientation::DiagonalUp => 'A',
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
            Orientation::DiagonalDown => "Diagonal Down",
            Orientation::DiagonalUp => "Diagonal Up",
        }
    }

    /// Look up an orientation by its one-letter code. Codes are case-insensitive.
    pub fn from_code(code: char) -> Result<Self, ParseOrientationError> {
        match code.to_ascii_uppercase() {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            'D' => Ok(Orientation::DiagonalDown),
            'A' => Ok(Orientation::DiagonalUp),
            _ => Err(ParseOrientationError::new(code.to_string())),
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = ParseOrientationError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Accepts either the one-letter code or the full name. Spaces, dashes and underscores
    /// in names are ignored, so `diagonal-down` and `DiagonalDown` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Self::from_code(code);
        }
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            "diagonaldown" => Ok(Orientation::DiagonalDown),
            "diagonalup" => Ok(Orientation::DiagonalUp),
            _ => Err(ParseOrientationError::new(s.to_owned())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when an orientation code or name is not recognized.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid orientation {input:?}, expected one of H, V, D, or A")]
pub struct ParseOrientationError {
    input: String,
}

impl ParseOrientationError {
    fn new(input: String) -> Self {
        Self { input }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A ship descriptor: where it starts and which way it points. Every ship is
/// [`SHIP_LENGTH`] cells long.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    origin: Coordinate,
    orientation: Orientation,
}

impl Ship {
    /// Construct a ship starting at `origin` and extending along `orientation`.
    pub const fn new(origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }

    /// Cell the ship starts from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Direction the ship extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        SHIP_LENGTH
    }

    /// Cells covered by this ship, starting at the origin.
    pub fn cells(&self) -> ShapeProjection {
        ship_cells(self)
    }

    /// Returns true if the whole ship lies inside the given dimensions.
    pub fn fits(&self, dim: &Dimensions) -> bool {
        bounds_ok(self, dim)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for &orientation in Orientation::ALL.iter() {
            assert_eq!(Orientation::from_code(orientation.code()), Ok(orientation));
        }
        assert_eq!(Orientation::try_from('d'), Ok(Orientation::DiagonalDown));
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = Orientation::from_code('X').unwrap_err();
        assert_eq!(err.input(), "X");
        assert!("sideways".parse::<Orientation>().is_err());
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn names_parse_loosely() {
        assert_eq!("diagonal-down".parse(), Ok(Orientation::DiagonalDown));
        assert_eq!("Diagonal Up".parse(), Ok(Orientation::DiagonalUp));
        assert_eq!("VERTICAL".parse(), Ok(Orientation::Vertical));
        assert_eq!("h".parse(), Ok(Orientation::Horizontal));
    }

    #[test]
    fn orientations_collect_into_flags() {
        let flags: BitFlags<Orientation> = Orientation::Horizontal | Orientation::DiagonalUp;
        assert!(flags.contains(Orientation::DiagonalUp));
        assert!(!flags.contains(Orientation::Vertical));
    }
}
