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
//! Runs a whole batch of placements: every ship in order, then every ability.
use log::{debug, warn};
use thiserror::Error;

use crate::{
    abilities::Ability,
    board::{Board, BoardSetup, Dimensions, PlaceError},
    config::{STANDARD_ABILITIES, STANDARD_FLEET},
    ships::Ship,
};

/// Ordered ship and ability descriptors for one batch.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scenario {
    ships: Vec<Ship>,
    abilities: Vec<Ability>,
}

impl Scenario {
    /// Create a scenario from the given ships and abilities. They are placed in the order
    /// given.
    pub fn new(ships: Vec<Ship>, abilities: Vec<Ability>) -> Self {
        Self { ships, abilities }
    }

    /// The standard fleet and abilities from [`config`][crate::config].
    pub fn standard() -> Self {
        Self::new(STANDARD_FLEET.to_vec(), STANDARD_ABILITIES.to_vec())
    }

    /// Replace the ships, keeping the abilities.
    pub fn with_ships(self, ships: Vec<Ship>) -> Self {
        Self { ships, ..self }
    }

    /// Replace the abilities, keeping the ships.
    pub fn with_abilities(self, abilities: Vec<Ability>) -> Self {
        Self { abilities, ..self }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Run the scenario on the standard grid. See [`deploy_on`][Self::deploy_on].
    pub fn deploy(&self) -> Result<Board, DeploymentError> {
        self.deploy_on(Dimensions::default())
    }

    /// Place every ship, then apply every ability, on a fresh grid of the given dimensions.
    ///
    /// Every ship is required. If any is rejected, the remaining ships are still attempted
    /// so that all rejections are reported, the abilities are skipped, and the error
    /// carries the partial board.
    pub fn deploy_on(&self, dim: Dimensions) -> Result<Board, DeploymentError> {
        let mut setup = BoardSetup::new(dim);
        let mut rejected = Vec::new();
        for &ship in self.ships.iter() {
            if let Err(err) = setup.place_ship(ship) {
                warn!("{}", err);
                rejected.push(err);
            }
        }
        if !rejected.is_empty() {
            return Err(DeploymentError {
                attempted: self.ships.len(),
                rejected,
                board: setup.finish(),
            });
        }
        for &ability in self.abilities.iter() {
            setup.apply_ability(ability);
        }
        let board = setup.finish();
        debug!(
            "deployed {} ships and {} abilities",
            board.ships().len(),
            board.abilities().len()
        );
        Ok(board)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::standard()
    }
}

/// Error returned when one or more ships of a scenario could not be placed.
#[derive(Debug, Error)]
#[error("{} of {attempted} ships could not be placed", .rejected.len())]
pub struct DeploymentError {
    /// Number of ships the scenario tried to place.
    attempted: usize,
    /// Rejections, in the order the ships were attempted.
    rejected: Vec<PlaceError>,
    /// Board holding the ships that did get placed.
    board: Board,
}

impl DeploymentError {
    /// Number of ships the scenario tried to place.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Rejections, in the order the ships were attempted.
    pub fn rejected(&self) -> &[PlaceError] {
        &self.rejected
    }

    /// Board holding the ships that were placed before and after the rejections.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Extract the partial board from this error.
    pub fn into_board(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::{CannotPlaceReason, CellState, Coordinate},
        ships::Orientation,
    };

    #[test]
    fn rejection_skips_abilities_but_tries_every_ship() {
        let scenario = Scenario::standard().with_ships(vec![
            Ship::new(Coordinate::new(1, 2), Orientation::Horizontal),
            Ship::new(Coordinate::new(0, 3), Orientation::Vertical),
            Ship::new(Coordinate::new(9, 0), Orientation::Vertical),
            Ship::new(Coordinate::new(6, 1), Orientation::DiagonalDown),
        ]);
        let err = scenario.deploy().unwrap_err();
        assert_eq!(err.attempted(), 4);
        let reasons: Vec<_> = err.rejected().iter().map(|e| e.reason()).collect();
        assert_eq!(
            reasons,
            vec![CannotPlaceReason::Overlap, CannotPlaceReason::InvalidBounds]
        );
        assert_eq!(err.to_string(), "2 of 4 ships could not be placed");
        let board = err.into_board();
        assert_eq!(board.ships().len(), 2);
        assert!(board.abilities().is_empty());
        assert_eq!(board.count(CellState::Affected), 0);
    }

    #[test]
    fn empty_abilities_are_allowed() {
        let board = Scenario::standard()
            .with_abilities(Vec::new())
            .deploy()
            .unwrap();
        assert_eq!(board.count(CellState::Occupied), 12);
        assert_eq!(board.count(CellState::Affected), 0);
    }
}
