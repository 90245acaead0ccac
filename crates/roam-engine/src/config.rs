//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for [`Simulation::new`](crate::Simulation::new).
//! Dimensions and agent counts never fail validation: they are clamped, the
//! same as interactive edits. Only engine tuning knobs can be rejected.

use std::error::Error;
use std::fmt;

use roam_space::Dims;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_resample_attempts` is zero, so no agent could ever move.
    ZeroResampleBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResampleBudget => write!(f, "max_resample_attempts must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything needed to build a [`Simulation`](crate::Simulation).
///
/// Fields are public and signed because they usually come straight from
/// sliders or text boxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Requested width. Clamped to `[3, 20]`. Default: 10.
    pub width: i64,
    /// Requested height. Clamped to `[3, 20]`. Default: 10.
    pub height: i64,
    /// Agents seeded at the center on every reset. Negative means 0.
    /// Default: 4.
    pub initial_agents: i64,
    /// Seed for the direction stream. `None` draws one from the thread RNG,
    /// so runs are not reproducible. Default: `None`.
    pub seed: Option<u64>,
    /// Direction draws allowed per agent-move before the tick is abandoned.
    /// Default: 64.
    pub max_resample_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            initial_agents: 4,
            seed: None,
            max_resample_attempts: 64,
        }
    }
}

impl SimConfig {
    /// Check the tuning knobs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_resample_attempts == 0 {
            return Err(ConfigError::ZeroResampleBudget);
        }
        Ok(())
    }

    /// The clamped logical window.
    pub fn dims(&self) -> Dims {
        Dims::clamped(self.width, self.height)
    }

    /// `initial_agents` with negatives treated as zero.
    pub fn seeded_agents(&self) -> u64 {
        agent_count(self.initial_agents)
    }
}

/// A raw agent count with negatives treated as zero.
pub(crate) fn agent_count(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or(0)
}
