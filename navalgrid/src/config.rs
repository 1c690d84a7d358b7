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
//! Fixed sizes and the standard scenario.
use crate::{
    abilities::{Ability, AbilityKind},
    board::Coordinate,
    ships::{Orientation, Ship},
};

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Number of cells every ship covers.
pub const SHIP_LENGTH: usize = 3;

/// Number of ships in a fleet.
pub const SHIP_COUNT: usize = 4;

/// Side length of every ability stencil. Must be odd.
pub const STENCIL_SIZE: usize = 5;

/// The standard fleet, one ship per orientation.
pub const STANDARD_FLEET: [Ship; SHIP_COUNT] = [
    Ship::new(Coordinate::new(1, 2), Orientation::Horizontal),
    Ship::new(Coordinate::new(4, 8), Orientation::Vertical),
    Ship::new(Coordinate::new(6, 1), Orientation::DiagonalDown),
    Ship::new(Coordinate::new(2, 7), Orientation::DiagonalUp),
];

/// The standard abilities, one of each kind.
pub const STANDARD_ABILITIES: [Ability; 3] = [
    Ability::new(AbilityKind::Cone, Coordinate::new(2, 2)),
    Ability::new(AbilityKind::Cross, Coordinate::new(5, 5)),
    Ability::new(AbilityKind::Diamond, Coordinate::new(7, 7)),
];
