//! Dimension limits and clamping.

/// Smallest legal width or height.
pub const MIN_DIM: usize = 3;

/// Largest legal width or height. Physical storage is always
/// `MAX_DIM x MAX_DIM`.
pub const MAX_DIM: usize = 20;

/// Number of cells in the physical backing store.
pub const PHYSICAL_CELLS: usize = MAX_DIM * MAX_DIM;

/// Validates grid dimensions by clamping into `[MIN_DIM, MAX_DIM]`.
///
/// Clamping never fails: callers always receive a usable dimension, which
/// matches the slider-and-textbox input this engine is driven by.
///
/// # Examples
///
/// ```
/// use roam_space::GridBounds;
///
/// assert_eq!(GridBounds::clamp(1), 3);
/// assert_eq!(GridBounds::clamp(12), 12);
/// assert_eq!(GridBounds::clamp(50), 20);
/// assert_eq!(GridBounds::clamp(-7), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds;

impl GridBounds {
    /// Smallest legal dimension.
    pub const MIN_DIM: usize = MIN_DIM;
    /// Largest legal dimension.
    pub const MAX_DIM: usize = MAX_DIM;

    /// `max(MIN_DIM, min(MAX_DIM, value))`.
    pub fn clamp(value: i64) -> usize {
        value.clamp(MIN_DIM as i64, MAX_DIM as i64) as usize
    }

    /// Whether `value` is already a legal dimension.
    pub fn contains(value: usize) -> bool {
        (MIN_DIM..=MAX_DIM).contains(&value)
    }
}
