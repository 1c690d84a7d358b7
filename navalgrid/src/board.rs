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
//! Types that make up the game board.

use enumflags2::BitFlags;

use crate::{
    abilities::{kinds_used, Ability, AbilityKind},
    ships::{Orientation, ShapeProjection, Ship},
};

pub use self::{
    compositor::{apply_ability, apply_stencil},
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{CannotPlaceReason, OutOfBoundsError, PlaceError},
    grid::{CellState, Grid},
    placement::{check_placement, try_place},
    setup::BoardSetup,
};

mod compositor;
mod coordinate;
pub(crate) mod dimensions;
mod errors;
mod grid;
mod placement;
pub mod setup;

/// A ship that was committed to the grid, along with the cells it covers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlacedShip {
    ship: Ship,
    cells: ShapeProjection,
}

impl PlacedShip {
    pub(crate) fn new(ship: Ship, cells: ShapeProjection) -> Self {
        Self { ship, cells }
    }

    /// The descriptor the ship was placed from.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Cells covered by the ship, starting at its origin.
    pub fn resolved_cells(&self) -> &[Coordinate] {
        &self.cells
    }
}

/// An ability that was stamped onto the grid, along with how many cells it marked.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AppliedAbility {
    ability: Ability,
    applied: usize,
}

impl AppliedAbility {
    pub(crate) fn new(ability: Ability, applied: usize) -> Self {
        Self { ability, applied }
    }

    pub fn ability(&self) -> &Ability {
        &self.ability
    }

    /// Number of cells this ability marked as affected. Cells that were clipped or that
    /// were under a ship are not counted.
    pub fn applied_cell_count(&self) -> usize {
        self.applied
    }
}

/// Finished board. Holds the final grid and everything that was placed on it, and cannot
/// be modified further.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cell states.
    grid: Grid,

    /// Ships in the order they were placed.
    ships: Vec<PlacedShip>,

    /// Abilities in the order they were applied.
    abilities: Vec<AppliedAbility>,
}

impl Board {
    pub(crate) fn new(grid: Grid, ships: Vec<PlacedShip>, abilities: Vec<AppliedAbility>) -> Self {
        Self {
            grid,
            ships,
            abilities,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        self.grid.dimensions()
    }

    /// Get the state of the cell at the given coordinate.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellState, OutOfBoundsError> {
        self.grid.cell_at(coord)
    }

    /// The final grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the cells
    /// of that row.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        self.grid.rows()
    }

    /// Ships on the board, in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Abilities on the board, in application order.
    pub fn abilities(&self) -> &[AppliedAbility] {
        &self.abilities
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.grid.count(state)
    }

    /// Set of orientations used by the placed ships.
    pub fn orientations(&self) -> BitFlags<Orientation> {
        self.ships
            .iter()
            .fold(BitFlags::empty(), |used, placed| used | placed.ship().orientation())
    }

    /// Set of ability kinds applied to the board.
    pub fn ability_kinds(&self) -> BitFlags<AbilityKind> {
        kinds_used(self.abilities.iter().map(|applied| applied.ability()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_reports_orientations_in_use() {
        let mut setup = BoardSetup::default();
        setup
            .place_ship(Ship::new(Coordinate::new(1, 2), Orientation::Horizontal))
            .unwrap();
        setup
            .place_ship(Ship::new(Coordinate::new(2, 7), Orientation::DiagonalUp))
            .unwrap();
        let board = setup.finish();
        assert_eq!(
            board.orientations(),
            Orientation::Horizontal | Orientation::DiagonalUp
        );
        assert!(board.ability_kinds().is_empty());
        assert_eq!(board.count(CellState::Occupied), 6);
        assert!(board.cell_at(Coordinate::new(0, 10)).is_err());
    }
}
