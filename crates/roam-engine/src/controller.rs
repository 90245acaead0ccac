//! The simulation controller.
//!
//! [`Simulation`] is the user-facing API. It owns the occupancy and
//! coverage grids, the [`StepEngine`], and the step counter, and exposes
//! the editing operations an interactive front end needs alongside the
//! stepping operations.
//!
//! # Phases
//!
//! ```text
//!           reset(n > 0) / add_agent_at
//!   Idle ────────────────────────────────► Active
//!    ▲                                       │ step / edits
//!    │ clear / reset(0)                      ▼
//!    └──────────────────────────────────── Covered
//! ```
//!
//! `set_visited_at(.., false)` is the only way back from `Covered` that
//! does not go through a reset.
//!
//! # Ownership model
//!
//! Every fallible method reports a [`SimError`].
//!
//! `Simulation` is [`Send`] but not shared: every mutating method takes
//! `&mut self`, and a host with several threads must serialize its calls.

use std::time::Instant;

use roam_core::StepId;
use roam_grid::{CoverageGrid, OccupancyGrid};
use roam_space::Dims;

use crate::config::{agent_count, SimConfig};
use crate::error::SimError;
use crate::metrics::{RunSummary, StepMetrics};
use crate::snapshot::{StdoutSink, TextSnapshot, TraceSink};
use crate::step::StepEngine;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── Phase ──────────────────────────────────────────────────────────

/// Coarse state of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No agents on the grid.
    Idle,
    /// Agents present and at least one cell not yet covered.
    Active,
    /// Every cell has been covered. Takes precedence over `Idle`.
    Covered,
}

// ── Simulation ─────────────────────────────────────────────────────

/// A bounded-grid random walk with coverage tracking.
///
/// # Examples
///
/// ```
/// use roam_engine::{Phase, SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig {
///     width: 6,
///     height: 6,
///     initial_agents: 4,
///     seed: Some(7),
///     ..SimConfig::default()
/// })
/// .unwrap();
/// assert_eq!(sim.count_at(3, 3).unwrap(), 4);
///
/// let summary = sim.run_to_completion(false).unwrap();
/// assert!(summary.completed);
/// assert_eq!(sim.phase(), Phase::Covered);
/// assert_eq!(sim.total(), 4);
/// ```
pub struct Simulation {
    occupancy: OccupancyGrid,
    coverage: CoverageGrid,
    engine: StepEngine,
    steps: StepId,
    initial_agents: u64,
    sink: Box<dyn TraceSink>,
}

impl Simulation {
    /// Build a simulation and apply the initial reset.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    fn build(config: &SimConfig) -> Self {
        let dims = config.dims();
        let mut sim = Self {
            occupancy: OccupancyGrid::new(dims),
            coverage: CoverageGrid::new(dims),
            engine: StepEngine::new(config.seed, config.max_resample_attempts),
            steps: StepId::ZERO,
            initial_agents: config.seeded_agents(),
            sink: Box::new(StdoutSink),
        };
        sim.reseed(dims);
        sim
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    /// Full reset: clamp the dimensions, wipe both grids, seed
    /// `initial_agents` at the center, and zero the step counter.
    pub fn reset(&mut self, width: i64, height: i64, initial_agents: i64) {
        self.initial_agents = agent_count(initial_agents);
        self.reseed(Dims::clamped(width, height));
    }

    /// Clamp and apply a new width, then reset with the current initial
    /// agent count.
    pub fn set_width(&mut self, width: i64) {
        let dims = Dims::clamped(width, self.height() as i64);
        self.reseed(dims);
    }

    /// Clamp and apply a new height, then reset with the current initial
    /// agent count.
    pub fn set_height(&mut self, height: i64) {
        let dims = Dims::clamped(self.width() as i64, height);
        self.reseed(dims);
    }

    /// Remove every agent and all coverage. Dimensions and the step counter
    /// are kept.
    pub fn clear(&mut self) {
        self.occupancy.clear_all();
        self.coverage.clear_all();
        log::debug!("cleared grid at step {}", self.steps);
    }

    fn reseed(&mut self, dims: Dims) {
        self.occupancy.resize(dims);
        self.coverage.resize(dims);
        self.occupancy
            .seed_center(self.initial_agents, &mut self.coverage);
        self.steps = StepId::ZERO;
        log::debug!(
            "reset to {}x{} with {} agents at {}",
            dims.width(),
            dims.height(),
            self.initial_agents,
            dims.center(),
        );
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance one tick. With `trace`, the resulting snapshot goes to the
    /// trace sink.
    ///
    /// Stepping an empty grid is legal: the counter still advances.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Step`] if the resample cap is exhausted. The tick
    /// is then discarded and the counter is not advanced.
    pub fn step(&mut self, trace: bool) -> Result<StepMetrics, SimError> {
        let tick_start = Instant::now();
        let outcome = self.engine.tick(&mut self.occupancy, &mut self.coverage)?;
        self.steps = self.steps.next();

        let metrics = StepMetrics {
            step: self.steps,
            agents_moved: outcome.agents_moved,
            rejected_draws: outcome.rejected_draws,
            newly_covered: outcome.newly_covered,
            total_us: tick_start.elapsed().as_micros() as u64,
        };
        log::trace!(
            "step {}: moved {} agents, {} rejected draws, {} newly covered",
            metrics.step,
            metrics.agents_moved,
            metrics.rejected_draws,
            metrics.newly_covered,
        );

        if trace {
            let text = self.snapshot();
            self.sink.emit(&text);
        }
        Ok(metrics)
    }

    /// Tick until every cell is covered or no agents remain.
    ///
    /// Always takes at least one tick, so an empty grid stops after exactly
    /// one.
    pub fn run_to_completion(&mut self, trace: bool) -> Result<RunSummary, SimError> {
        self.run(None, trace)
    }

    /// Like [`run_to_completion`](Self::run_to_completion), but never takes
    /// more than `max_steps` ticks.
    pub fn run_bounded(&mut self, max_steps: u64, trace: bool) -> Result<RunSummary, SimError> {
        self.run(Some(max_steps), trace)
    }

    fn run(&mut self, limit: Option<u64>, trace: bool) -> Result<RunSummary, SimError> {
        let mut summary = RunSummary::new(self.phase());
        loop {
            if limit.is_some_and(|max| summary.steps >= max) {
                break;
            }
            let metrics = self.step(trace)?;
            summary.record(&metrics);
            if self.total() == 0 || self.is_fully_covered() {
                break;
            }
        }

        summary.phase = self.phase();
        summary.completed = summary.phase == Phase::Covered;
        if summary.completed {
            log::info!(
                "covered {} cells in {} steps ({} total)",
                self.cell_count(),
                summary.steps,
                self.steps,
            );
        } else {
            log::info!(
                "run stopped after {} steps with {}/{} cells covered",
                summary.steps,
                self.covered_count(),
                self.cell_count(),
            );
        }
        Ok(summary)
    }

    // ── Editing ────────────────────────────────────────────────────

    /// Add one agent at `(x, y)` and mark it covered. Returns the new count.
    pub fn add_agent_at(&mut self, x: usize, y: usize) -> Result<u64, SimError> {
        Ok(self.occupancy.add_one(x, y, &mut self.coverage)?)
    }

    /// Remove one agent at `(x, y)`, flooring at zero. Coverage is kept.
    /// Returns the new count.
    pub fn remove_agent_at(&mut self, x: usize, y: usize) -> Result<u64, SimError> {
        Ok(self.occupancy.remove_one(x, y)?)
    }

    /// Overwrite the count at `(x, y)`. Negative counts are ignored, and a
    /// count that would overflow the grid total is refused.
    pub fn set_count_at(&mut self, x: usize, y: usize, count: i64) -> Result<(), SimError> {
        Ok(self.occupancy.set_count(x, y, count)?)
    }

    /// Force the coverage flag at `(x, y)`. Clearing a flag is the one edit
    /// that can take a covered grid back to [`Phase::Active`].
    pub fn set_visited_at(&mut self, x: usize, y: usize, visited: bool) -> Result<(), SimError> {
        Ok(self.coverage.set_visited(x, y, visited)?)
    }

    /// Overwrite the step counter.
    pub fn set_step_count(&mut self, steps: u64) {
        self.steps = steps.into();
    }

    /// Route traced snapshots to `sink` instead of standard output.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = sink;
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Agents at `(x, y)`.
    pub fn count_at(&self, x: usize, y: usize) -> Result<u64, SimError> {
        Ok(self.occupancy.count_at(x, y)?)
    }

    /// Whether `(x, y)` has held an agent since the last reset or clear.
    pub fn is_covered_at(&self, x: usize, y: usize) -> Result<bool, SimError> {
        Ok(self.coverage.is_covered_at(x, y)?)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims().width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims().height()
    }

    /// The logical window.
    pub fn dims(&self) -> Dims {
        self.occupancy.dims()
    }

    /// Ticks taken since the last reset.
    pub fn step_count(&self) -> u64 {
        self.steps.0
    }

    /// Total agents on the grid.
    pub fn total(&self) -> u64 {
        self.occupancy.total()
    }

    /// Whether every cell in the window is covered.
    pub fn is_fully_covered(&self) -> bool {
        self.coverage.is_fully_covered()
    }

    /// Covered cells in the window.
    pub fn covered_count(&self) -> usize {
        self.coverage.covered_count()
    }

    /// Cells in the window.
    pub fn cell_count(&self) -> usize {
        self.coverage.cell_count()
    }

    /// Agents seeded by the next reset or resize.
    pub fn initial_agents(&self) -> u64 {
        self.initial_agents
    }

    /// Seed of the direction stream, for replaying an unseeded run.
    pub fn seed(&self) -> u64 {
        self.engine.seed()
    }

    /// Current phase. `Covered` wins over `Idle` when both apply.
    pub fn phase(&self) -> Phase {
        if self.is_fully_covered() {
            Phase::Covered
        } else if self.total() == 0 {
            Phase::Idle
        } else {
            Phase::Active
        }
    }

    /// Read-only access to the occupancy grid.
    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Read-only access to the coverage grid.
    pub fn coverage(&self) -> &CoverageGrid {
        &self.coverage
    }

    /// Render the current state in the text snapshot format.
    pub fn snapshot(&self) -> String {
        TextSnapshot::new(&self.occupancy, &self.coverage, self.steps).to_string()
    }
}

impl Default for Simulation {
    /// 10x10 with 4 agents and an unseeded direction stream.
    fn default() -> Self {
        Self::build(&SimConfig::default())
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("dims", &self.dims())
            .field("steps", &self.steps)
            .field("total", &self.total())
            .field("covered", &self.covered_count())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
