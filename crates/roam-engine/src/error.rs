//! Engine-level error union.

use std::error::Error;
use std::fmt;

use roam_core::{GridError, StepError};

use crate::config::ConfigError;

/// Any failure surfaced by [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// A coordinate fell outside the logical window.
    Grid(GridError),
    /// A tick was abandoned.
    Step(StepError),
    /// The configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Step(e) => write!(f, "step: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Step(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<StepError> for SimError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
