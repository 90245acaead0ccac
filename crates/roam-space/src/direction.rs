//! Cardinal directions for agent movement.

/// One of the four unit moves an agent can take per tick.
///
/// There is no `Stay`: every agent moves exactly one cell each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// `x + 1`.
    East = 0,
    /// `y + 1`.
    North = 1,
    /// `x - 1`.
    West = 2,
    /// `y - 1`.
    South = 3,
}

impl Direction {
    /// All directions, indexed by their discriminant.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Map a draw in `0..4` to a direction. Values wrap modulo 4.
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset_2d(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }
}
