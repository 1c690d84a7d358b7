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
//! Stamps ability stencils onto the grid.

use crate::{
    abilities::{Ability, Stencil},
    board::{CellState, Coordinate, Grid},
};

/// Stamp the ability's stencil onto `grid`, centered on the ability's origin. Returns the
/// number of cells marked [`Affected`][CellState::Affected].
pub fn apply_ability(grid: &mut Grid, ability: &Ability) -> usize {
    apply_stencil(grid, ability.stencil(), ability.origin())
}

/// Stamp `stencil` onto `grid` so that its center lands on `origin`.
///
/// Stencil cells that fall outside the grid are dropped, and cells that are
/// [`Occupied`][CellState::Occupied] keep their state. Every other covered cell becomes
/// [`Affected`][CellState::Affected], including cells that already were. Never fails.
pub fn apply_stencil(grid: &mut Grid, stencil: &Stencil, origin: Coordinate) -> usize {
    let center = stencil.center() as isize;
    let dim = *grid.dimensions();
    let mut applied = 0;
    for (i, j) in stencil.iter_set() {
        let target = match dim.offset(origin, i as isize - center, j as isize - center) {
            Some(target) => target,
            None => continue,
        };
        match grid.get(target) {
            Some(CellState::Occupied) | None => {}
            Some(_) => {
                if grid.set_cell(target, CellState::Affected).is_ok() {
                    applied += 1;
                }
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abilities::{generate_stencil, AbilityKind},
        board::Dimensions,
    };

    #[test]
    fn cross_at_corner_is_clipped() {
        let mut grid = Grid::new(Dimensions::new(10));
        let cross = Ability::new(AbilityKind::Cross, Coordinate::new(0, 0));
        // Only the center and the two arms pointing into the grid remain.
        assert_eq!(apply_ability(&mut grid, &cross), 5);
        for coord in &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
            assert_eq!(grid[Coordinate::from(*coord)], CellState::Affected);
        }
        assert_eq!(grid.count(CellState::Affected), 5);
    }

    #[test]
    fn occupied_cells_take_precedence() {
        let mut grid = Grid::new(Dimensions::new(10));
        grid.set_cell(Coordinate::new(0, 1), CellState::Occupied)
            .unwrap();
        let cross = Ability::new(AbilityKind::Cross, Coordinate::new(0, 0));
        assert_eq!(apply_ability(&mut grid, &cross), 4);
        assert_eq!(grid[Coordinate::new(0, 1)], CellState::Occupied);
    }

    #[test]
    fn stencil_is_centered_on_origin() {
        let mut grid = Grid::new(Dimensions::new(10));
        let diamond = generate_stencil(AbilityKind::Diamond, 5);
        assert_eq!(apply_stencil(&mut grid, &diamond, Coordinate::new(5, 5)), 13);
        assert_eq!(grid[Coordinate::new(3, 5)], CellState::Affected);
        assert_eq!(grid[Coordinate::new(5, 7)], CellState::Affected);
        assert_eq!(grid[Coordinate::new(4, 4)], CellState::Affected);
        assert_eq!(grid[Coordinate::new(3, 4)], CellState::Empty);
    }

    #[test]
    fn reapplying_counts_already_affected_cells() {
        let mut grid = Grid::new(Dimensions::new(10));
        let cone = Ability::new(AbilityKind::Cone, Coordinate::new(5, 5));
        assert_eq!(apply_ability(&mut grid, &cone), 9);
        let before = grid.clone();
        assert_eq!(apply_ability(&mut grid, &cone), 9);
        assert_eq!(grid, before);
    }
}
