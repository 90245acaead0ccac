//! Test fixtures and invariant checks for Roam development.
//!
//! Provides a [`SimBuilder`] for seeded simulations, a [`CaptureSink`] that
//! keeps traced snapshots for inspection, and helpers that pull occupancy
//! and coverage out of a [`Simulation`] as plain collections.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex, PoisonError};

use indexmap::{IndexMap, IndexSet};
use roam_core::Cell;
use roam_engine::{SimConfig, Simulation, TraceSink};

pub use fixtures::{assert_moves_legal, assert_valid, SimBuilder};

/// Trace sink that can be cloned out before handing it to a simulation.
///
/// All clones share one buffer, so the test keeps a handle while the
/// simulation owns the boxed copy.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, oldest first.
    pub fn snapshots(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TraceSink for CaptureSink {
    fn emit(&mut self, snapshot: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.to_owned());
    }
}

/// Covered cells in row-major order.
pub fn covered_set(sim: &Simulation) -> IndexSet<Cell> {
    sim.coverage().covered_cells().collect()
}

/// Occupied cells and their counts, in row-major order.
pub fn occupancy_map(sim: &Simulation) -> IndexMap<Cell, u64> {
    sim.occupancy().frozen().occupied().collect()
}

/// A seeded config over `width x height` with `agents` at the center.
pub fn seeded_config(width: i64, height: i64, agents: i64, seed: u64) -> SimConfig {
    SimConfig {
        width,
        height,
        initial_agents: agents,
        seed: Some(seed),
        ..SimConfig::default()
    }
}
