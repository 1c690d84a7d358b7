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
//! Implements the setup phase of the board.
use log::{debug, trace};

use crate::{
    abilities::Ability,
    board::{
        compositor, placement, AppliedAbility, Board, Dimensions, Grid, PlaceError, PlacedShip,
    },
    ships::Ship,
};

/// Setup phase for a [`Board`]. Owns the grid while ships and abilities are added, and
/// records them in the order they were committed.
#[derive(Debug)]
pub struct BoardSetup {
    /// Grid for placement of ships and abilities.
    grid: Grid,

    /// Ships committed so far, in placement order.
    ships: Vec<PlacedShip>,

    /// Abilities applied so far, in application order.
    abilities: Vec<AppliedAbility>,
}

impl BoardSetup {
    /// Begin setup by constructing an empty grid with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            abilities: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of the grid being set up.
    pub fn dimensions(&self) -> &Dimensions {
        self.grid.dimensions()
    }

    /// Read-only view of the grid in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships placed so far.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Abilities applied so far.
    pub fn abilities(&self) -> &[AppliedAbility] {
        &self.abilities
    }

    /// Attempt to place the ship. Later ships see the cells of earlier ones, so order
    /// matters. On failure nothing is recorded and the grid is unchanged.
    pub fn place_ship(&mut self, ship: Ship) -> Result<&PlacedShip, PlaceError> {
        match placement::try_place(&mut self.grid, ship) {
            Ok(placed) => {
                debug!("placed ship {} on {:?}", ship, placed.resolved_cells());
                self.ships.push(placed);
                Ok(&self.ships[self.ships.len() - 1])
            }
            Err(err) => {
                debug!("rejected ship {}: {}", ship, err.reason());
                Err(err)
            }
        }
    }

    /// Stamp the ability onto the grid. Cells outside the grid or under a ship are skipped,
    /// so this always succeeds.
    pub fn apply_ability(&mut self, ability: Ability) -> &AppliedAbility {
        let applied = compositor::apply_ability(&mut self.grid, &ability);
        trace!("applied {} to {} cells", ability, applied);
        self.abilities.push(AppliedAbility::new(ability, applied));
        &self.abilities[self.abilities.len() - 1]
    }

    /// Finish setup, producing the immutable [`Board`] snapshot.
    pub fn finish(self) -> Board {
        Board::new(self.grid, self.ships, self.abilities)
    }
}

impl Default for BoardSetup {
    /// Setup for the standard 10x10 grid.
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abilities::AbilityKind,
        board::{CannotPlaceReason, CellState, Coordinate},
        ships::Orientation,
    };

    #[test]
    fn records_only_successful_ships() {
        let mut setup = BoardSetup::default();
        setup
            .place_ship(Ship::new(Coordinate::new(1, 2), Orientation::Horizontal))
            .unwrap();
        let err = setup
            .place_ship(Ship::new(Coordinate::new(0, 3), Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert_eq!(setup.ships().len(), 1);
        assert_eq!(setup.grid().count(CellState::Occupied), 3);
    }

    #[test]
    fn finish_keeps_order_and_counts() {
        let mut setup = BoardSetup::default();
        setup
            .place_ship(Ship::new(Coordinate::new(0, 0), Orientation::Vertical))
            .unwrap();
        let applied = setup
            .apply_ability(Ability::new(AbilityKind::Cross, Coordinate::new(0, 0)))
            .applied_cell_count();
        // Center and the downward arm are under the ship.
        assert_eq!(applied, 2);
        setup.apply_ability(Ability::new(AbilityKind::Diamond, Coordinate::new(7, 7)));

        let board = setup.finish();
        assert_eq!(board.ships().len(), 1);
        assert_eq!(board.abilities().len(), 2);
        assert_eq!(board.abilities()[0].ability().kind(), AbilityKind::Cross);
        assert_eq!(board.abilities()[1].applied_cell_count(), 13);
    }
}
