//! Roam: bounded-grid random walks with coverage tracking.
//!
//! Indistinguishable agents walk one cell per tick on a small grid until
//! every cell has been visited. This crate gathers the engine, storage and
//! geometry crates behind one dependency and a [`prelude`]. Every fallible
//! call on [`Simulation`](engine::Simulation) reports a
//! [`SimError`](engine::SimError).
//!
//! # Quick start
//!
//! ```rust
//! use roam::prelude::*;
//!
//! let mut sim = Simulation::new(SimConfig {
//!     width: 3,
//!     height: 3,
//!     initial_agents: 1,
//!     seed: Some(42),
//!     ..SimConfig::default()
//! })
//! .unwrap();
//! assert_eq!(sim.phase(), Phase::Active);
//!
//! // Print exactly what a traced step would emit.
//! sim.set_step_count(1);
//! assert_eq!(
//!     sim.snapshot(),
//!     "|---|\n|   |\n| 1 |\n|   |\n|---|\nStep: 1\n\n"
//! );
//!
//! let summary = sim.run_to_completion(false).unwrap();
//! assert!(summary.completed);
//! assert_eq!(sim.covered_count(), 9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `roam-core` | `Cell`, `StepId`, grid and step errors |
//! | [`space`] | `roam-space` | Dimension clamping, logical windows, directions |
//! | [`grid`] | `roam-grid` | Occupancy and coverage storage |
//! | [`engine`] | `roam-engine` | Step engine, simulation controller, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, step ids, and error types (`roam-core`).
pub use roam_core as types;

/// Dimension clamping, logical windows, and directions (`roam-space`).
///
/// [`space::GridBounds`] clamps requested sizes; [`space::Dims`] maps cells
/// to storage and enumerates neighbours.
pub use roam_space as space;

/// Occupancy and coverage storage (`roam-grid`).
pub use roam_grid as grid;

/// Step engine and simulation controller (`roam-engine`).
///
/// [`engine::Simulation`] is the entry point; [`engine::TraceSink`] receives
/// traced snapshots.
pub use roam_engine as engine;

/// Common imports for typical Roam usage.
///
/// ```rust
/// use roam::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use roam_core::{Cell, GridError, StepError, StepId};

    // Space
    pub use roam_space::{Dims, Direction, GridBounds};

    // Engine
    pub use roam_engine::{
        ConfigError, Phase, RunSummary, SimConfig, SimError, Simulation, StepMetrics,
        StdoutSink, TraceSink,
    };
}
