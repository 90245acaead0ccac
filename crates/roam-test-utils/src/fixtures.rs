//! Simulation builders and invariant assertions.
//!
//! - [`SimBuilder`] builds a seeded [`Simulation`] with optional manual
//!   edits applied on top of the initial reset.
//! - [`assert_valid`] checks the invariants that hold after any operation.
//! - [`assert_moves_legal`] checks that one tick only moved agents to
//!   neighbouring cells.

use indexmap::IndexMap;
use roam_core::Cell;
use roam_engine::Simulation;
use roam_space::GridBounds;

use crate::{covered_set, seeded_config, CaptureSink};

/// Builder for seeded test simulations.
#[derive(Clone, Debug)]
pub struct SimBuilder {
    width: i64,
    height: i64,
    agents: i64,
    seed: u64,
    placed: Vec<(usize, usize, i64)>,
    max_resample_attempts: u32,
}

impl SimBuilder {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            agents: 0,
            seed: 0,
            placed: Vec::new(),
            max_resample_attempts: 64,
        }
    }

    /// Agents seeded at the center by the initial reset.
    pub fn agents(mut self, n: i64) -> Self {
        self.agents = n;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overwrite the count at `(x, y)` after the reset. Does not mark
    /// coverage.
    pub fn place(mut self, x: usize, y: usize, count: i64) -> Self {
        self.placed.push((x, y, count));
        self
    }

    pub fn max_resample_attempts(mut self, n: u32) -> Self {
        self.max_resample_attempts = n;
        self
    }

    /// Build the simulation.
    ///
    /// # Panics
    ///
    /// Panics if the configuration or a placement is invalid.
    pub fn build(self) -> Simulation {
        let mut config = seeded_config(self.width, self.height, self.agents, self.seed);
        config.max_resample_attempts = self.max_resample_attempts;
        let mut sim = Simulation::new(config).expect("valid test config");
        for (x, y, n) in self.placed {
            sim.set_count_at(x, y, n).expect("placement inside the grid");
        }
        sim
    }

    /// Build with a [`CaptureSink`] installed, returning a handle to it.
    pub fn build_captured(self) -> (Simulation, CaptureSink) {
        let mut sim = self.build();
        let sink = CaptureSink::new();
        sim.set_trace_sink(Box::new(sink.clone()));
        (sim, sink)
    }
}

/// Assert the invariants that hold after any operation.
///
/// Dimensions are legal, the cached coverage count matches a scan, and the
/// phase agrees with the totals.
pub fn assert_valid(sim: &Simulation) {
    assert!(GridBounds::contains(sim.width()), "width {}", sim.width());
    assert!(GridBounds::contains(sim.height()), "height {}", sim.height());
    assert_eq!(
        covered_set(sim).len(),
        sim.covered_count(),
        "cached coverage count disagrees with a full scan"
    );
    assert_eq!(
        sim.is_fully_covered(),
        sim.covered_count() == sim.cell_count()
    );
    let summed: u64 = sim
        .dims()
        .cells()
        .map(|c| sim.count_at(c.x, c.y).expect("in-window cell"))
        .sum();
    assert_eq!(summed, sim.total());
}

/// Assert that `after` could have come from `before` in one tick: the
/// total is conserved and every occupied cell borders a cell that was
/// occupied before.
pub fn assert_moves_legal(before: &IndexMap<Cell, u64>, after: &IndexMap<Cell, u64>) {
    let total_before: u64 = before.values().sum();
    let total_after: u64 = after.values().sum();
    assert_eq!(total_before, total_after, "agents were created or lost");
    for &dest in after.keys() {
        assert!(
            before.keys().any(|&src| src.manhattan(dest) == 1),
            "agent at {dest} has no occupied neighbour in the previous tick"
        );
    }
}
