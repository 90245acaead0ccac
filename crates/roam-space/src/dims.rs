//! Logical grid window over the fixed physical store.

use crate::bounds::{GridBounds, MAX_DIM};
use crate::direction::Direction;
use roam_core::{Cell, GridError};
use smallvec::SmallVec;

/// A logical window `[0, width) x [0, height)` with both sides in
/// `[MIN_DIM, MAX_DIM]`.
///
/// Storage is laid out row-major with a fixed stride of `MAX_DIM`, so a
/// cell keeps the same physical slot whatever the current window is.
///
/// # Examples
///
/// ```
/// use roam_space::Dims;
/// use roam_core::Cell;
///
/// let dims = Dims::clamped(1, 50);
/// assert_eq!((dims.width(), dims.height()), (3, 20));
/// assert_eq!(dims.center(), Cell::new(1, 10));
/// assert_eq!(dims.neighbours(Cell::new(0, 0)).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    width: usize,
    height: usize,
}

impl Dims {
    /// Build a window from raw requested sides, clamping each.
    pub fn clamped(width: i64, height: i64) -> Self {
        Self {
            width: GridBounds::clamp(width),
            height: GridBounds::clamp(height),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the logical window.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The seeding cell `(width / 2, height / 2)`.
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Whether the signed coordinate lies inside the window.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Validate `(x, y)` against the window.
    pub fn check(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::CoordOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Cell::new(x, y))
    }

    /// Physical slot of `cell` in a `MAX_DIM x MAX_DIM` store.
    pub fn index(cell: Cell) -> usize {
        cell.y * MAX_DIM + cell.x
    }

    /// The cell one step from `cell` in `dir`, or `None` if it leaves the
    /// window.
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.offset_2d();
        let nx = cell.x as i64 + dx;
        let ny = cell.y as i64 + dy;
        self.contains(nx, ny)
            .then(|| Cell::new(nx as usize, ny as usize))
    }

    /// In-window 4-connected neighbours of `cell`, in [`Direction::ALL`]
    /// order. Corners have 2, edges 3, interior cells 4.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.step(cell, d))
            .collect()
    }

    /// Row-major canonical ordering: `(0,0), (1,0), ..., (width-1, height-1)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Dims {
    fn default() -> Self {
        Self::clamped(10, 10)
    }
}
