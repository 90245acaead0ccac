//! Per-cell storage for the Roam random-walk engine.
//!
//! Both grids live in fixed `MAX_DIM x MAX_DIM` physical stores with a
//! smaller logical window on top:
//!
//! ```text
//! OccupancyGrid
//! ├── published: Vec<u64>  ←─── state readable between ticks
//! └── staging:   Vec<u64>  ←─── zeroed at tick start, swapped in on success
//! CoverageGrid
//! ├── visited:   Vec<bool> ←─── only reset by clear or an explicit edit
//! └── uncovered: usize     ←─── incremental counter of unvisited window cells
//! ```
//!
//! A tick reads only the frozen published buffer and writes only the staging
//! buffer, so no agent's move can observe another agent's move in the same
//! tick. The swap happens only if the whole tick succeeds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coverage;
pub mod occupancy;

pub use coverage::CoverageGrid;
pub use occupancy::{FrozenView, OccupancyGrid, StagingBuffer};
