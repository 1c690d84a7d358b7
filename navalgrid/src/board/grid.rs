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
//! Defines the cell store shared between [`BoardSetup`][crate::board::BoardSetup] and
//! [`Board`][crate::board::Board].

use std::{borrow::Borrow, ops::Index};

use crate::board::{Coordinate, Dimensions, OutOfBoundsError};

/// State of a single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water.
    Empty,
    /// Part of a placed ship.
    Occupied,
    /// Covered by an ability stencil.
    Affected,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Square grid of [`CellState`]s.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Dimensions of this grid.
    dim: Dimensions,
    /// Cells that make up this grid, in row-major order.
    cells: Box<[CellState]>,
}

impl Grid {
    /// Construct an all-[`Empty`][CellState::Empty] grid with the given dimensions.
    pub fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get the [`Dimensions`] of this [`Grid`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellState, OutOfBoundsError> {
        self.get(&coord)
            .ok_or_else(|| OutOfBoundsError::new(coord, self.dim.size()))
    }

    /// Get the state of the cell at the given [`Coordinate`], or `None` if it is out of
    /// bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Overwrite the state of the cell at the given [`Coordinate`].
    pub(crate) fn set_cell(
        &mut self,
        coord: Coordinate,
        state: CellState,
    ) -> Result<(), OutOfBoundsError> {
        let size = self.dim.size();
        match self
            .dim
            .try_linearize(&coord)
            .and_then(|i| self.cells.get_mut(i))
        {
            Some(cell) => {
                *cell = state;
                Ok(())
            }
            None => Err(OutOfBoundsError::new(coord, size)),
        }
    }

    /// Count the cells currently in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Get an iterator over the rows of this grid. Each row is an iterator over the cell
    /// states of that row, left to right.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        self.cells.chunks(self.dim.size()).map(|row| row.iter().copied())
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = CellState;

    fn index(&self, coord: B) -> &Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &self.cells[idx]
    }
}
