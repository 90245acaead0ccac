//! Benchmark profiles for the Roam random-walk engine.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 20x20 grid, the default 4 agents
//! - [`crowded_profile`]: 20x20 grid with 10K agents on the center cell
//! - [`corner_profile`]: 3x3 grid where most draws are rejected

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use roam_engine::SimConfig;

/// Largest grid with the default population.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        width: 20,
        height: 20,
        initial_agents: 4,
        seed: Some(seed),
        ..SimConfig::default()
    }
}

/// Largest grid with 10K agents, so a tick is dominated by agent-moves.
pub fn crowded_profile(seed: u64) -> SimConfig {
    SimConfig {
        initial_agents: 10_000,
        ..reference_profile(seed)
    }
}

/// Smallest grid. Four of the nine cells are corners, so rejection
/// sampling is at its busiest.
pub fn corner_profile(seed: u64) -> SimConfig {
    SimConfig {
        width: 3,
        height: 3,
        initial_agents: 1_000,
        seed: Some(seed),
        ..SimConfig::default()
    }
}
