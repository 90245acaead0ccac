//! Strongly-typed identifiers and the [`Cell`] coordinate.

use std::fmt;

/// A cell coordinate in the logical grid window.
///
/// `x` is the column and `y` is the row, both 0-indexed, so `(4, 0)` is
/// the fifth cell of the first row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Cell {
    /// Construct a cell from `(x, y)`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Number of ticks taken since the last full reset.
///
/// Incremented exactly once per tick and never decremented by the engine;
/// only a full reset (or an explicit editor override) moves it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The counter value after a reset.
    pub const ZERO: StepId = StepId(0);

    /// The following step id.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 4);
        let b = Cell::new(3, 1);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn step_id_next_increments() {
        assert_eq!(StepId::ZERO.next(), StepId(1));
        assert_eq!(StepId(u64::MAX).next(), StepId(u64::MAX));
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
    }
}
