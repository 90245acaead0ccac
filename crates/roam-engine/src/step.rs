//! The per-tick movement algorithm.
//!
//! Every agent on the frozen published grid takes exactly one step in a
//! direction drawn uniformly from {East, North, West, South}. Draws that
//! would leave the window are rejected and redrawn; the agent never stays
//! put and never clamps against an edge. All landings go to the staging
//! buffer, which replaces the published grid only after every agent has
//! moved.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use roam_core::{Cell, StepError};
use roam_grid::{CoverageGrid, OccupancyGrid};
use roam_space::{Direction, Dims};

/// Raw counters from one successful tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Agent-moves performed.
    pub agents_moved: u64,
    /// Direction draws rejected for leaving the window.
    pub rejected_draws: u64,
    /// Cells covered for the first time.
    pub newly_covered: usize,
}

/// Owns the direction stream and the resample cap.
#[derive(Clone, Debug)]
pub struct StepEngine {
    rng: ChaCha8Rng,
    seed: u64,
    max_resample_attempts: u32,
}

impl StepEngine {
    /// Build an engine. A `None` seed is drawn from the thread RNG.
    pub fn new(seed: Option<u64>, max_resample_attempts: u32) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            max_resample_attempts,
        }
    }

    /// The seed the direction stream started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws allowed per agent-move.
    pub fn max_resample_attempts(&self) -> u32 {
        self.max_resample_attempts
    }

    /// Advance `occupancy` by one tick and fold the result into `coverage`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NoLegalMove`] if some agent exhausts the resample
    /// cap. Occupancy and coverage are then left exactly as they were.
    pub fn tick(
        &mut self,
        occupancy: &mut OccupancyGrid,
        coverage: &mut CoverageGrid,
    ) -> Result<TickOutcome, StepError> {
        let mut outcome = TickOutcome::default();

        occupancy
            .tick(|frozen, staging| -> Result<(), StepError> {
                let dims = frozen.dims();
                for (cell, k) in frozen.occupied() {
                    for _ in 0..k {
                        let (dest, rejected) = self.draw_move(dims, cell)?;
                        staging.deposit(dest);
                        outcome.agents_moved += 1;
                        outcome.rejected_draws += u64::from(rejected);
                    }
                }
                Ok(())
            })
            .inspect_err(|e| log::warn!("tick abandoned: {e}"))?;

        outcome.newly_covered = coverage.absorb(occupancy);
        Ok(outcome)
    }

    /// Rejection-sample one legal move from `cell`.
    ///
    /// Returns the destination and the number of rejected draws.
    fn draw_move(&mut self, dims: Dims, cell: Cell) -> Result<(Cell, u32), StepError> {
        for attempt in 0..self.max_resample_attempts {
            let dir = Direction::from_index(self.rng.random_range(0..4));
            if let Some(dest) = dims.step(cell, dir) {
                return Ok((dest, attempt));
            }
        }
        Err(StepError::NoLegalMove {
            x: cell.x,
            y: cell.y,
            attempts: self.max_resample_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(w: i64, h: i64) -> (OccupancyGrid, CoverageGrid) {
        let dims = Dims::clamped(w, h);
        (OccupancyGrid::new(dims), CoverageGrid::new(dims))
    }

    #[test]
    fn every_agent_moves_to_a_neighbour() {
        let (mut occ, mut cov) = setup(5, 5);
        occ.set_count(0, 0, 50).unwrap();
        let mut engine = StepEngine::new(Some(11), 64);
        let out = engine.tick(&mut occ, &mut cov).unwrap();

        assert_eq!(out.agents_moved, 50);
        assert_eq!(occ.total(), 50);
        assert_eq!(occ.count_at(0, 0).unwrap(), 0);
        assert_eq!(
            occ.count_at(1, 0).unwrap() + occ.count_at(0, 1).unwrap(),
            50
        );
    }

    #[test]
    fn corner_agents_reject_some_draws() {
        let (mut occ, mut cov) = setup(3, 3);
        occ.set_count(0, 0, 200).unwrap();
        let mut engine = StepEngine::new(Some(3), 64);
        let out = engine.tick(&mut occ, &mut cov).unwrap();
        // Half the directions leave the window from a corner.
        assert!(out.rejected_draws > 0);
    }

    #[test]
    fn empty_grid_tick_is_a_no_op() {
        let (mut occ, mut cov) = setup(4, 4);
        let mut engine = StepEngine::new(Some(0), 64);
        let out = engine.tick(&mut occ, &mut cov).unwrap();
        assert_eq!(out, TickOutcome::default());
        assert_eq!(cov.covered_count(), 0);
    }

    #[test]
    fn tick_marks_destinations_covered() {
        let (mut occ, mut cov) = setup(3, 3);
        occ.set_count(1, 1, 1).unwrap();
        let mut engine = StepEngine::new(Some(5), 64);
        let out = engine.tick(&mut occ, &mut cov).unwrap();
        assert_eq!(out.newly_covered, 1);
        let (cell, _) = occ.frozen().occupied().next().unwrap();
        assert!(cov.is_covered(cell));
        assert_eq!(cell.manhattan(Cell::new(1, 1)), 1);
    }

    #[test]
    fn exhausted_budget_leaves_state_untouched() {
        let (mut occ, mut cov) = setup(3, 3);
        occ.set_count(0, 0, 64).unwrap();
        // One draw per move: about half of 64 corner agents will miss.
        let mut engine = StepEngine::new(Some(9), 1);
        let err = engine.tick(&mut occ, &mut cov).unwrap_err();
        assert_eq!(
            err,
            StepError::NoLegalMove {
                x: 0,
                y: 0,
                attempts: 1
            }
        );
        assert_eq!(occ.count_at(0, 0).unwrap(), 64);
        assert_eq!(occ.total(), 64);
        assert_eq!(cov.covered_count(), 0);
    }

    /// Destination counts after one tick of `n` agents placed at `from`.
    fn spread(w: i64, h: i64, from: Cell, n: i64, seed: u64) -> (OccupancyGrid, TickOutcome) {
        let (mut occ, mut cov) = setup(w, h);
        occ.set_count(from.x, from.y, n).unwrap();
        let mut engine = StepEngine::new(Some(seed), 64);
        let out = engine.tick(&mut occ, &mut cov).unwrap();
        (occ, out)
    }

    fn assert_near(got: u64, want: u64, tolerance: u64) {
        assert!(
            got.abs_diff(want) <= tolerance,
            "got {got}, expected {want} +/- {tolerance}"
        );
    }

    #[test]
    fn interior_moves_are_uniform_over_four_directions() {
        let (occ, out) = spread(5, 5, Cell::new(2, 2), 40_000, 17);
        assert_eq!(out.rejected_draws, 0);
        for (x, y) in [(3, 2), (2, 1), (1, 2), (2, 3)] {
            // sd is about 87 per neighbour.
            assert_near(occ.count_at(x, y).unwrap(), 10_000, 500);
        }
    }

    #[test]
    fn edge_and_corner_moves_are_uniform_over_legal_directions() {
        let (occ, out) = spread(3, 3, Cell::new(0, 0), 40_000, 23);
        assert_near(occ.count_at(1, 0).unwrap(), 20_000, 1_000);
        assert_near(occ.count_at(0, 1).unwrap(), 20_000, 1_000);
        // One rejected draw per move on average from a corner.
        assert_near(out.rejected_draws, 40_000, 2_000);

        let (occ, _) = spread(5, 5, Cell::new(2, 0), 30_000, 29);
        for (x, y) in [(3, 0), (1, 0), (2, 1)] {
            assert_near(occ.count_at(x, y).unwrap(), 10_000, 500);
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = |seed| {
            let (mut occ, mut cov) = setup(7, 7);
            occ.set_count(3, 3, 10).unwrap();
            let mut engine = StepEngine::new(Some(seed), 64);
            for _ in 0..20 {
                engine.tick(&mut occ, &mut cov).unwrap();
            }
            occ.frozen().occupied().collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn unseeded_engine_reports_its_seed() {
        let a = StepEngine::new(None, 64);
        let b = StepEngine::new(Some(a.seed()), 64);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(b.max_resample_attempts(), 64);
    }
}
