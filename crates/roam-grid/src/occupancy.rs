//! Double-buffered per-cell agent counts.

use crate::coverage::CoverageGrid;
use roam_core::{Cell, GridError};
use roam_space::{Dims, PHYSICAL_CELLS};

/// Non-negative agent count per cell.
///
/// Counts are unsigned, so the "never negative" invariant holds by
/// construction; decrements floor at zero and negative writes are ignored
/// rather than rejected. The only limit is that the grid total must fit in
/// a `u64`: an edit that would break that is refused with
/// [`GridError::CountOverflow`], and a tick can never break it because
/// ticks conserve the total.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    dims: Dims,
    /// State visible between ticks.
    published: Vec<u64>,
    /// Next-tick buffer. Contents are meaningless outside [`tick`](OccupancyGrid::tick).
    staging: Vec<u64>,
    /// Sum of `published` over the window.
    total: u64,
}

/// Read-only view of the published counts at the start of a tick.
#[derive(Clone, Copy, Debug)]
pub struct FrozenView<'a> {
    dims: Dims,
    counts: &'a [u64],
}

/// Write access to the zeroed staging buffer during a tick.
#[derive(Debug)]
pub struct StagingBuffer<'a> {
    counts: &'a mut [u64],
}

impl OccupancyGrid {
    /// An empty grid over `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            published: vec![0; PHYSICAL_CELLS],
            staging: vec![0; PHYSICAL_CELLS],
            total: 0,
        }
    }

    /// The current logical window.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Zero the whole physical store and adopt a new window.
    pub fn resize(&mut self, dims: Dims) {
        self.dims = dims;
        self.clear_all();
    }

    /// Zero every physical cell, including those outside the window.
    pub fn clear_all(&mut self) {
        self.published.fill(0);
        self.staging.fill(0);
        self.total = 0;
    }

    /// Agent count at `(x, y)`.
    pub fn count_at(&self, x: usize, y: usize) -> Result<u64, GridError> {
        let cell = self.dims.check(x, y)?;
        Ok(self.published[Dims::index(cell)])
    }

    /// Set the count at `(x, y)`. A negative `count` is ignored. Coverage is
    /// not touched.
    pub fn set_count(&mut self, x: usize, y: usize, count: i64) -> Result<(), GridError> {
        let cell = self.dims.check(x, y)?;
        let Ok(count) = u64::try_from(count) else {
            return Ok(());
        };
        let slot = &mut self.published[Dims::index(cell)];
        let total = (self.total - *slot)
            .checked_add(count)
            .ok_or(GridError::CountOverflow { x, y })?;
        *slot = count;
        self.total = total;
        Ok(())
    }

    /// Add one agent at `(x, y)` and mark the cell covered.
    ///
    /// Both grids are validated before either is written. Returns the new
    /// count.
    pub fn add_one(
        &mut self,
        x: usize,
        y: usize,
        coverage: &mut CoverageGrid,
    ) -> Result<u64, GridError> {
        let cell = self.dims.check(x, y)?;
        let total = self
            .total
            .checked_add(1)
            .ok_or(GridError::CountOverflow { x, y })?;
        coverage.mark_covered(x, y)?;
        self.total = total;
        // Never overflows: a cell count is bounded by the total.
        let slot = &mut self.published[Dims::index(cell)];
        *slot += 1;
        Ok(*slot)
    }

    /// Remove one agent at `(x, y)`, flooring at zero. Coverage records
    /// history, so the cell stays covered even when it empties.
    ///
    /// Returns the new count.
    pub fn remove_one(&mut self, x: usize, y: usize) -> Result<u64, GridError> {
        let cell = self.dims.check(x, y)?;
        let slot = &mut self.published[Dims::index(cell)];
        if *slot > 0 {
            *slot -= 1;
            self.total -= 1;
        }
        Ok(*slot)
    }

    /// Place `count` agents on the window center `(width / 2, height / 2)`,
    /// marking it covered when `count > 0`. Expects a freshly cleared grid.
    pub fn seed_center(&mut self, count: u64, coverage: &mut CoverageGrid) {
        let center = self.dims.center();
        let slot = &mut self.published[Dims::index(center)];
        self.total = self.total - *slot + count;
        *slot = count;
        if count > 0 {
            coverage.mark_cell(center);
        }
    }

    /// Sum of all counts over the logical window.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Read-only view of the published counts.
    pub fn frozen(&self) -> FrozenView<'_> {
        FrozenView {
            dims: self.dims,
            counts: &self.published,
        }
    }

    /// Run one double-buffered tick.
    ///
    /// Zeroes the staging buffer, hands `f` the frozen published counts and
    /// the staging buffer, then swaps staging in if `f` succeeds. On error the
    /// published counts are untouched.
    ///
    /// `f` must deposit exactly one agent per agent in the frozen view; the
    /// cached total is carried across the swap unchanged.
    pub fn tick<E>(
        &mut self,
        f: impl FnOnce(FrozenView<'_>, &mut StagingBuffer<'_>) -> Result<(), E>,
    ) -> Result<(), E> {
        self.staging.fill(0);
        let frozen = FrozenView {
            dims: self.dims,
            counts: &self.published,
        };
        let mut staging = StagingBuffer {
            counts: &mut self.staging,
        };
        f(frozen, &mut staging)?;
        std::mem::swap(&mut self.published, &mut self.staging);
        debug_assert_eq!(self.frozen().total(), self.total);
        Ok(())
    }
}

impl<'a> FrozenView<'a> {
    /// The logical window the view covers.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Count at an in-window cell.
    pub fn count(&self, cell: Cell) -> u64 {
        self.counts[Dims::index(cell)]
    }

    /// Occupied cells in row-major order with their counts.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, u64)> + 'a {
        let counts = self.counts;
        let dims = self.dims;
        (0..dims.height())
            .flat_map(move |y| (0..dims.width()).map(move |x| Cell::new(x, y)))
            .filter_map(move |cell| {
                let k = counts[Dims::index(cell)];
                (k > 0).then_some((cell, k))
            })
    }

    /// Sum of counts over the window, by full scan.
    pub fn total(&self) -> u64 {
        self.occupied().map(|(_, k)| k).sum()
    }
}

impl StagingBuffer<'_> {
    /// Land one agent on `cell`.
    ///
    /// Cannot overflow while the tick conserves agents, since no cell can
    /// receive more than the grid total.
    pub fn deposit(&mut self, cell: Cell) {
        self.counts[Dims::index(cell)] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(w: i64, h: i64) -> (OccupancyGrid, CoverageGrid) {
        let dims = Dims::clamped(w, h);
        (OccupancyGrid::new(dims), CoverageGrid::new(dims))
    }

    #[test]
    fn new_grid_is_empty() {
        let (occ, _) = grid(5, 5);
        assert_eq!(occ.total(), 0);
        assert_eq!(occ.frozen().occupied().count(), 0);
    }

    #[test]
    fn set_count_ignores_negative() {
        let (mut occ, _) = grid(5, 5);
        occ.set_count(1, 2, 7).unwrap();
        occ.set_count(1, 2, -3).unwrap();
        assert_eq!(occ.count_at(1, 2).unwrap(), 7);
        occ.set_count(1, 2, 0).unwrap();
        assert_eq!(occ.count_at(1, 2).unwrap(), 0);
        assert_eq!(occ.total(), 0);
    }

    #[test]
    fn counts_above_u32_are_kept_exactly() {
        let (mut occ, mut cov) = grid(3, 3);
        occ.set_count(0, 0, 5_000_000_000).unwrap();
        assert_eq!(occ.count_at(0, 0).unwrap(), 5_000_000_000);
        assert_eq!(occ.add_one(0, 0, &mut cov).unwrap(), 5_000_000_001);
        assert_eq!(occ.total(), 5_000_000_001);
    }

    #[test]
    fn edits_past_the_u64_total_are_refused() {
        let (mut occ, mut cov) = grid(3, 3);
        occ.set_count(0, 0, i64::MAX).unwrap();
        occ.set_count(1, 0, i64::MAX).unwrap();
        assert_eq!(occ.total(), u64::MAX - 1);

        assert_eq!(
            occ.set_count(2, 0, 2),
            Err(GridError::CountOverflow { x: 2, y: 0 })
        );
        assert_eq!(occ.count_at(2, 0).unwrap(), 0);

        assert_eq!(occ.add_one(2, 2, &mut cov).unwrap(), 1);
        assert_eq!(
            occ.add_one(2, 2, &mut cov),
            Err(GridError::CountOverflow { x: 2, y: 2 })
        );
        assert_eq!(occ.count_at(2, 2).unwrap(), 1);
        assert_eq!(occ.total(), u64::MAX);

        // Replacing a count in place only counts the difference.
        occ.set_count(0, 0, i64::MAX - 1).unwrap();
        assert_eq!(occ.total(), u64::MAX - 1);
    }

    #[test]
    fn add_one_marks_coverage() {
        let (mut occ, mut cov) = grid(4, 4);
        assert_eq!(occ.add_one(3, 0, &mut cov).unwrap(), 1);
        assert_eq!(occ.add_one(3, 0, &mut cov).unwrap(), 2);
        assert!(cov.is_covered_at(3, 0).unwrap());
        assert_eq!(cov.covered_count(), 1);
    }

    #[test]
    fn add_one_rejected_by_coverage_writes_nothing() {
        let mut occ = OccupancyGrid::new(Dims::clamped(5, 5));
        let mut cov = CoverageGrid::new(Dims::clamped(3, 3));
        assert!(matches!(
            occ.add_one(4, 4, &mut cov),
            Err(GridError::CoordOutOfRange { x: 4, y: 4, .. })
        ));
        assert_eq!(occ.count_at(4, 4).unwrap(), 0);
        assert_eq!(occ.total(), 0);
        assert_eq!(cov.covered_count(), 0);
    }

    #[test]
    fn remove_one_floors_at_zero_and_keeps_coverage() {
        let (mut occ, mut cov) = grid(4, 4);
        occ.add_one(2, 2, &mut cov).unwrap();
        assert_eq!(occ.remove_one(2, 2).unwrap(), 0);
        assert_eq!(occ.remove_one(2, 2).unwrap(), 0);
        assert_eq!(occ.total(), 0);
        assert!(cov.is_covered_at(2, 2).unwrap());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let (mut occ, mut cov) = grid(3, 3);
        assert!(occ.count_at(3, 0).is_err());
        assert!(occ.set_count(0, 3, 1).is_err());
        assert!(occ.add_one(9, 9, &mut cov).is_err());
        assert!(occ.remove_one(3, 3).is_err());
        assert_eq!(occ.total(), 0);
        assert_eq!(cov.covered_count(), 0);
    }

    #[test]
    fn seed_center_marks_coverage_only_when_populated() {
        let (mut occ, mut cov) = grid(6, 6);
        occ.seed_center(0, &mut cov);
        assert_eq!(cov.covered_count(), 0);
        occ.seed_center(4, &mut cov);
        assert_eq!(occ.count_at(3, 3).unwrap(), 4);
        assert_eq!(occ.total(), 4);
        assert!(cov.is_covered_at(3, 3).unwrap());
    }

    #[test]
    fn tick_swaps_only_on_success() {
        let (mut occ, _) = grid(3, 3);
        occ.set_count(0, 0, 2).unwrap();

        let failed: Result<(), &str> = occ.tick(|_, staging| {
            staging.deposit(Cell::new(2, 2));
            Err("abandon")
        });
        assert!(failed.is_err());
        assert_eq!(occ.count_at(0, 0).unwrap(), 2);
        assert_eq!(occ.count_at(2, 2).unwrap(), 0);

        occ.tick::<()>(|frozen, staging| {
            for (cell, k) in frozen.occupied() {
                for _ in 0..k {
                    staging.deposit(Cell::new(cell.x + 1, cell.y));
                }
            }
            Ok(())
        })
        .unwrap();
        assert_eq!(occ.count_at(0, 0).unwrap(), 0);
        assert_eq!(occ.count_at(1, 0).unwrap(), 2);
        assert_eq!(occ.total(), 2);
    }

    #[test]
    fn tick_reads_frozen_state_not_staging() {
        let (mut occ, _) = grid(3, 3);
        occ.set_count(0, 0, 1).unwrap();
        occ.tick::<()>(|frozen, staging| {
            staging.deposit(Cell::new(1, 0));
            // The deposit above must not be visible through the frozen view.
            assert_eq!(frozen.count(Cell::new(1, 0)), 0);
            assert_eq!(frozen.total(), 1);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn resize_clears_everything() {
        let (mut occ, _) = grid(20, 20);
        occ.set_count(19, 19, 5).unwrap();
        occ.resize(Dims::clamped(3, 3));
        occ.resize(Dims::clamped(20, 20));
        assert_eq!(occ.count_at(19, 19).unwrap(), 0);
        assert_eq!(occ.total(), 0);
    }

    proptest! {
        #[test]
        fn cached_total_matches_scan(
            writes in proptest::collection::vec((0usize..10, 0usize..10, -5i64..50, any::<bool>()), 0..40)
        ) {
            let (mut occ, mut cov) = grid(10, 10);
            let mut expected = vec![0u64; 100];
            for (x, y, n, add) in writes {
                if add {
                    occ.add_one(x, y, &mut cov).unwrap();
                    expected[y * 10 + x] += 1;
                } else {
                    occ.set_count(x, y, n).unwrap();
                    if n >= 0 {
                        expected[y * 10 + x] = n as u64;
                    }
                }
                prop_assert_eq!(occ.total(), occ.frozen().total());
            }
            prop_assert_eq!(occ.total(), expected.iter().sum::<u64>());
        }
    }
}
