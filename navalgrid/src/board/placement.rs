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
//! Validates ship placements and commits them into the grid.

use crate::{
    board::{CannotPlaceReason, CellState, Grid, PlaceError, PlacedShip},
    ships::{bounds_ok, ship_cells, ShapeProjection, Ship},
};

/// Check whether `ship` could be placed on `grid` without modifying it. Returns the cells
/// the ship would cover.
///
/// Any cell that is not [`Empty`][CellState::Empty] blocks placement, including cells
/// already covered by an ability.
pub fn check_placement(grid: &Grid, ship: &Ship) -> Result<ShapeProjection, CannotPlaceReason> {
    if !bounds_ok(ship, grid.dimensions()) {
        return Err(CannotPlaceReason::InvalidBounds);
    }
    let cells = ship_cells(ship);
    for coord in cells.iter() {
        match grid.get(coord) {
            // bounds_ok covers this, but don't trust it.
            None => return Err(CannotPlaceReason::InvalidBounds),
            Some(CellState::Empty) => {}
            Some(_) => return Err(CannotPlaceReason::Overlap),
        }
    }
    Ok(cells)
}

/// Attempt to place `ship` on `grid`. Either every cell of the ship becomes
/// [`Occupied`][CellState::Occupied], or the grid is left untouched and the reason is
/// returned.
pub fn try_place(grid: &mut Grid, ship: Ship) -> Result<PlacedShip, PlaceError> {
    let cells = check_placement(grid, &ship).map_err(|reason| PlaceError::new(reason, ship))?;
    for &coord in cells.iter() {
        // Already ensured that every position is valid and empty.
        if grid.set_cell(coord, CellState::Occupied).is_err() {
            unreachable!("checked placement left the grid at {}", coord);
        }
    }
    Ok(PlacedShip::new(ship, cells))
}
