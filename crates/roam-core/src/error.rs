//! Error types for the Roam engine.
//!
//! User-facing edits favour clamping and no-ops over errors, so the failure
//! categories here are few. [`GridError`] covers bad edits and lookups;
//! [`StepError`] covers an exhausted resample budget during a tick.

use std::error::Error;
use std::fmt;

/// Errors from coordinate-based grid operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// `(x, y)` lies outside `[0, width) x [0, height)`.
    CoordOutOfRange {
        /// Offending column.
        x: usize,
        /// Offending row.
        y: usize,
        /// Logical width at the time of the call.
        width: usize,
        /// Logical height at the time of the call.
        height: usize,
    },
    /// The edit at `(x, y)` would push the grid's agent total past
    /// `u64::MAX`. Nothing was written.
    CountOverflow {
        /// Column of the rejected edit.
        x: usize,
        /// Row of the rejected edit.
        y: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({x}, {y}) out of range: [0, {width}) x [0, {height})"
            ),
            Self::CountOverflow { x, y } => {
                write!(f, "edit at ({x}, {y}) would overflow the agent total")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from a single simulation tick.
///
/// A failed tick is discarded whole: occupancy, coverage, and the step
/// counter are left exactly as they were before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// No in-window direction was drawn within the resample budget.
    ///
    /// Every cell of a grid at least 3x3 has two or more legal moves, so
    /// this only fires if the budget is absurdly small.
    NoLegalMove {
        /// Column of the agent that could not move.
        x: usize,
        /// Row of the agent that could not move.
        y: usize,
        /// Draws attempted before giving up.
        attempts: u32,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLegalMove { x, y, attempts } => write!(
                f,
                "agent at ({x}, {y}) found no legal move after {attempts} draws"
            ),
        }
    }
}

impl Error for StepError {}
