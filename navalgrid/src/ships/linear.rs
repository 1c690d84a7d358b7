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
use crate::{
    board::{dimensions::offset_index, Coordinate, Dimensions},
    ships::{ShapeProjection, Ship},
};

/// Compute the cells a ship covers, in order from its origin. Cell `i` is the origin
/// moved `i` steps along the orientation's deltas.
///
/// Does not check the grid. Callers are expected to check [`bounds_ok`] first; a ship
/// whose line would cross below row or column 0 yields only the cells before that point.
pub fn ship_cells(ship: &Ship) -> ShapeProjection {
    let origin = ship.origin();
    let (drow, dcol) = ship.orientation().deltas();
    (0..ship.len())
        .map_while(|i| step(origin, drow, dcol, i))
        .collect()
}

/// Returns true if both the origin and the last cell of the ship are inside `dim`.
/// Since ships are straight lines, every cell between them is then in bounds too.
pub fn bounds_ok(ship: &Ship, dim: &Dimensions) -> bool {
    let origin = ship.origin();
    if !dim.contains(&origin) {
        return false;
    }
    let (drow, dcol) = ship.orientation().deltas();
    let last = ship.len() - 1;
    match step(origin, drow, dcol, last) {
        Some(end) => dim.contains(&end),
        None => false,
    }
}

/// Move `origin` by `steps` multiples of the given deltas, without any upper bound check.
fn step(origin: Coordinate, drow: isize, dcol: isize, steps: usize) -> Option<Coordinate> {
    let steps = steps as isize;
    let row = offset_index(origin.row, drow * steps)?;
    let col = offset_index(origin.col, dcol * steps)?;
    Some(Coordinate::new(row, col))
}
