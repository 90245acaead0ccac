//! Bordered text rendering of the grid and where it gets sent.
//!
//! The layout is fixed and must stay byte-for-byte stable, because saved
//! console logs are compared against it:
//!
//! ```text
//! |---|
//! |x  |
//! | 1 |
//! |   |
//! |---|
//! Step: 1
//!
//! ```
//!
//! Rows are printed from `y = 0` down. A cell shows `Z` for more than nine
//! agents, the digit for one to nine, `x` for an empty covered cell, and a
//! space otherwise.

use std::fmt;

use roam_core::{Cell, StepId};
use roam_grid::{CoverageGrid, OccupancyGrid};

/// Borrowed view that formats as the text snapshot.
#[derive(Clone, Copy, Debug)]
pub struct TextSnapshot<'a> {
    occupancy: &'a OccupancyGrid,
    coverage: &'a CoverageGrid,
    step: StepId,
}

impl<'a> TextSnapshot<'a> {
    /// Pair the two grids with the step counter to print under them.
    pub fn new(occupancy: &'a OccupancyGrid, coverage: &'a CoverageGrid, step: StepId) -> Self {
        Self {
            occupancy,
            coverage,
            step,
        }
    }

    fn glyph(&self, cell: Cell) -> char {
        match self.occupancy.frozen().count(cell) {
            0 if self.coverage.is_covered(cell) => 'x',
            0 => ' ',
            k @ 1..=9 => char::from(b'0' + k as u8),
            _ => 'Z',
        }
    }
}

impl fmt::Display for TextSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.occupancy.dims();
        let border = "-".repeat(dims.width());

        writeln!(f, "|{border}|")?;
        for y in 0..dims.height() {
            f.write_str("|")?;
            for x in 0..dims.width() {
                write!(f, "{}", self.glyph(Cell::new(x, y)))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "|{border}|")?;
        write!(f, "Step: {}\n\n", self.step)
    }
}

// ── TraceSink ──────────────────────────────────────────────────────

/// Destination for snapshots produced by traced ticks.
pub trait TraceSink: Send {
    /// Receive one rendered snapshot, trailing blank line included.
    fn emit(&mut self, snapshot: &str);
}

/// Writes snapshots to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, snapshot: &str) {
        print!("{snapshot}");
    }
}

impl TraceSink for Vec<String> {
    fn emit(&mut self, snapshot: &str) {
        self.push(snapshot.to_owned());
    }
}
