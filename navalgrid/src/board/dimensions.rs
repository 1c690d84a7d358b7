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
//! Dimensions of the square grid.
use std::borrow::Borrow;

use crate::{board::Coordinate, config::BOARD_SIZE};

/// Dimensions of a square grid. Rows and columns both range over `[0, size)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows, which is also the number of columns.
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the given side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::MAX`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero, got {}x{}", size, size),
            None => panic!(
                "Dimensions too large: {} * {} > {}",
                size,
                size,
                usize::MAX
            ),
        }
    }

    /// Create new [`Dimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or if `size * size` exceeds `usize::MAX`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells covered by these dimensions.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies inside the grid.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Panics if the coordinate is out of range for the dimension.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.size + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`]. The index is not checked against
    /// [`total_size`][Self::total_size].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.size,
            col: idx % self.size,
        }
    }

    /// Move `coord` by the signed row and column deltas. Returns `None` if the result
    /// would leave the grid on any side.
    pub fn offset(&self, coord: Coordinate, drow: isize, dcol: isize) -> Option<Coordinate> {
        let row = offset_index(coord.row, drow)?;
        let col = offset_index(coord.col, dcol)?;
        self.check_bounds(Coordinate { row, col })
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate { row, col }))
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`]. If so, return
    /// it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.size && c.col < self.size {
            Some(coord)
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    /// Construct the standard 10x10 dimensions.
    fn default() -> Self {
        Self { size: BOARD_SIZE }
    }
}

/// Apply a signed delta to an unsigned index, returning `None` on underflow or overflow.
pub(crate) fn offset_index(base: usize, delta: isize) -> Option<usize> {
    if delta >= 0 {
        base.checked_add(delta as usize)
    } else {
        base.checked_sub(delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_round_trips_every_cell() {
        let dim = Dimensions::new(4);
        for (i, coord) in dim.iter_coordinates().flatten().enumerate() {
            assert_eq!(dim.linearize(&coord), i);
            assert_eq!(dim.un_linearize(i), coord);
        }
    }

    #[test]
    fn offset_rejects_leaving_any_edge() {
        let dim = Dimensions::new(10);
        let origin = Coordinate::new(0, 9);
        assert_eq!(dim.offset(origin, -1, 0), None);
        assert_eq!(dim.offset(origin, 0, 1), None);
        assert_eq!(dim.offset(origin, 9, -9), Some(Coordinate::new(9, 0)));
        assert_eq!(dim.offset(origin, 10, 0), None);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Dimensions::try_new(0), None);
        assert_eq!(Dimensions::default().size(), 10);
        assert_eq!(Dimensions::default().total_size(), 100);
    }
}
