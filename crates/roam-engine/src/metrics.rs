//! Per-tick and per-run counters.
//!
//! [`StepMetrics`] describes a single tick; [`RunSummary`] folds a sequence
//! of them together for the run helpers on
//! [`Simulation`](crate::Simulation).

use roam_core::StepId;

use crate::controller::Phase;

/// Counters collected during a single tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Step counter value after this tick.
    pub step: StepId,
    /// Agent-moves performed (equals the agent total).
    pub agents_moved: u64,
    /// Direction draws rejected because they left the window.
    pub rejected_draws: u64,
    /// Cells covered for the first time by this tick.
    pub newly_covered: usize,
    /// Wall-clock time for the tick, in microseconds.
    pub total_us: u64,
}

/// Outcome of a multi-tick run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks taken by this run.
    pub steps: u64,
    /// Whether the run ended with every cell covered.
    pub completed: bool,
    /// Phase after the last tick.
    pub phase: Phase,
    /// Sum of [`StepMetrics::agents_moved`].
    pub agents_moved: u64,
    /// Sum of [`StepMetrics::rejected_draws`].
    pub rejected_draws: u64,
    /// Sum of [`StepMetrics::newly_covered`].
    pub newly_covered: usize,
    /// Sum of [`StepMetrics::total_us`].
    pub total_us: u64,
}

impl RunSummary {
    pub(crate) fn new(phase: Phase) -> Self {
        Self {
            steps: 0,
            completed: phase == Phase::Covered,
            phase,
            agents_moved: 0,
            rejected_draws: 0,
            newly_covered: 0,
            total_us: 0,
        }
    }

    /// Fold one tick into the running totals.
    pub(crate) fn record(&mut self, m: &StepMetrics) {
        self.steps += 1;
        self.agents_moved += m.agents_moved;
        self.rejected_draws += m.rejected_draws;
        self.newly_covered += m.newly_covered;
        self.total_us += m.total_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.step, StepId::ZERO);
        assert_eq!(m.agents_moved, 0);
        assert_eq!(m.rejected_draws, 0);
        assert_eq!(m.newly_covered, 0);
        assert_eq!(m.total_us, 0);
    }

    #[test]
    fn record_accumulates() {
        let mut s = RunSummary::new(Phase::Active);
        assert!(!s.completed);
        for i in 1..=3 {
            s.record(&StepMetrics {
                step: StepId(i),
                agents_moved: 4,
                rejected_draws: 1,
                newly_covered: 2,
                total_us: 10,
            });
        }
        assert_eq!(s.steps, 3);
        assert_eq!(s.agents_moved, 12);
        assert_eq!(s.rejected_draws, 3);
        assert_eq!(s.newly_covered, 6);
        assert_eq!(s.total_us, 30);
    }
}
