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
//! Square boolean masks describing the area an ability covers.

use crate::abilities::AbilityKind;

/// Square boolean mask of odd side length, centered on the middle cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Stencil {
    size: usize,
    /// Mask cells in row-major order.
    mask: Box<[bool]>,
}

impl Stencil {
    /// Build a stencil by evaluating `f(row, col)` for every cell.
    fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mask = (0..size * size).map(|i| f(i / size, i % size)).collect();
        Self { size, mask }
    }

    /// Side length of the stencil.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the middle row and column.
    pub fn center(&self) -> usize {
        self.size / 2
    }

    /// Whether the cell at `(row, col)` is set. Cells outside the stencil are unset.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.mask[row * self.size + col]
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&set| set).count()
    }

    /// Iterate the `(row, col)` positions of set cells in row-major order.
    pub fn iter_set<'a>(&'a self) -> impl 'a + Iterator<Item = (usize, usize)> {
        let size = self.size;
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Iterate the rows of the mask, for display.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = &'a [bool]> {
        self.mask.chunks(self.size)
    }
}

/// Generate the mask for `kind` in a `size` by `size` square, with `c = size / 2` as the
/// center index:
///
/// - Cone: `(i, j)` is set iff `|j - c| < i + 1` and `i + 1 <= c + 1`. A point on the top
///   row that widens by one on each side per row, stopping once it spans the full width.
/// - Cross: `(i, j)` is set iff `i == c` or `j == c`.
/// - Diamond: `(i, j)` is set iff `|i - c| + |j - c| <= c`.
///
/// Panics if `size` is even.
pub fn generate_stencil(kind: AbilityKind, size: usize) -> Stencil {
    assert!(size % 2 == 1, "stencil size must be odd, got {}", size);
    let c = size / 2;
    match kind {
        AbilityKind::Cone => Stencil::from_fn(size, |i, j| {
            let width = i + 1;
            distance(j, c) < width && width <= c + 1
        }),
        AbilityKind::Cross => Stencil::from_fn(size, |i, j| i == c || j == c),
        AbilityKind::Diamond => Stencil::from_fn(size, |i, j| distance(i, c) + distance(j, c) <= c),
    }
}

fn distance(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}
