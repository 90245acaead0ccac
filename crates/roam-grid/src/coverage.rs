//! Monotone record of which cells have ever held an agent.

use crate::occupancy::OccupancyGrid;
use roam_core::{Cell, GridError};
use roam_space::{Dims, PHYSICAL_CELLS};

/// Per-cell "has ever been occupied" flags.
///
/// Only [`clear_all`](Self::clear_all), [`resize`](Self::resize), and an
/// explicit [`set_visited`](Self::set_visited) with `false` can reset a flag.
/// The number of uncovered in-window cells is cached so that
/// [`is_fully_covered`](Self::is_fully_covered) is O(1).
#[derive(Clone, Debug)]
pub struct CoverageGrid {
    dims: Dims,
    visited: Vec<bool>,
    uncovered: usize,
}

impl CoverageGrid {
    /// A grid over `dims` with nothing covered.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            visited: vec![false; PHYSICAL_CELLS],
            uncovered: dims.cell_count(),
        }
    }

    /// The current logical window.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Adopt a new window and clear every flag.
    pub fn resize(&mut self, dims: Dims) {
        self.dims = dims;
        self.clear_all();
    }

    /// Reset every physical flag to uncovered.
    pub fn clear_all(&mut self) {
        self.visited.fill(false);
        self.uncovered = self.dims.cell_count();
    }

    /// Whether `(x, y)` has ever been occupied.
    pub fn is_covered_at(&self, x: usize, y: usize) -> Result<bool, GridError> {
        let cell = self.dims.check(x, y)?;
        Ok(self.visited[Dims::index(cell)])
    }

    /// Flag for an in-window cell.
    pub fn is_covered(&self, cell: Cell) -> bool {
        self.visited[Dims::index(cell)]
    }

    /// Mark `(x, y)` covered. Returns `true` if the flag was newly set.
    pub fn mark_covered(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let cell = self.dims.check(x, y)?;
        Ok(self.mark_cell(cell))
    }

    pub(crate) fn mark_cell(&mut self, cell: Cell) -> bool {
        let slot = &mut self.visited[Dims::index(cell)];
        if *slot {
            return false;
        }
        *slot = true;
        self.uncovered -= 1;
        true
    }

    /// Force the flag at `(x, y)`, in either direction.
    pub fn set_visited(&mut self, x: usize, y: usize, visited: bool) -> Result<(), GridError> {
        let cell = self.dims.check(x, y)?;
        let slot = &mut self.visited[Dims::index(cell)];
        match (*slot, visited) {
            (false, true) => self.uncovered -= 1,
            (true, false) => self.uncovered += 1,
            _ => {}
        }
        *slot = visited;
        Ok(())
    }

    /// Every in-window cell has been covered.
    pub fn is_fully_covered(&self) -> bool {
        self.uncovered == 0
    }

    /// Number of covered in-window cells.
    pub fn covered_count(&self) -> usize {
        self.dims.cell_count() - self.uncovered
    }

    /// Number of in-window cells.
    pub fn cell_count(&self) -> usize {
        self.dims.cell_count()
    }

    /// Mark every currently occupied cell of `occupancy` covered.
    ///
    /// Returns how many cells were newly covered.
    pub fn absorb(&mut self, occupancy: &OccupancyGrid) -> usize {
        occupancy
            .frozen()
            .occupied()
            .filter(|&(cell, _)| self.mark_cell(cell))
            .count()
    }

    /// Covered in-window cells in row-major order.
    pub fn covered_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.dims
            .cells()
            .filter(move |&c| self.is_covered(c))
    }
}
