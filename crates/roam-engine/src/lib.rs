//! Random-walk step engine and simulation controller for Roam.
//!
//! [`Simulation`] drives a population of indistinguishable agents over a
//! bounded grid. Each tick every agent moves exactly one cell in a uniformly
//! drawn cardinal direction, redrawing whenever the move would leave the
//! grid, and every cell an agent lands on is marked covered. A run ends
//! when every cell has been covered.
//!
//! The engine is single-threaded and synchronous. Ticks are all-or-nothing:
//! moves are computed from a frozen copy of the grid into a staging buffer,
//! which is swapped in only if every agent found a legal move.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod metrics;
pub mod snapshot;
pub mod step;

pub use config::{ConfigError, SimConfig};
pub use controller::{Phase, Simulation};
pub use error::SimError;
pub use metrics::{RunSummary, StepMetrics};
pub use snapshot::{StdoutSink, TextSnapshot, TraceSink};
pub use step::{StepEngine, TickOutcome};
