/// Cardinal movement directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit offset `(dx, dy)` for this direction.
    ///
    /// The grid origin is the top-left corner, so `Up` is negative y.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Buffers direction intents between simulation steps.
///
/// A single pending slot holds the most recent legal request; requests made
/// between two steps overwrite each other, so only the last one before the
/// next step takes effect.
#[derive(Debug, Clone, Copy)]
pub struct DirectionQueue {
    committed: Direction,
    pending: Direction,
}

impl DirectionQueue {
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: initial,
        }
    }

    /// Requests a direction for the next step.
    ///
    /// A request that would reverse the committed direction is dropped
    /// silently, so the snake can never turn back into its own neck within
    /// one step.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.committed.opposite() {
            return;
        }
        self.pending = direction;
    }

    /// Commits and returns the direction for the step being executed.
    ///
    /// The reversal rule is re-checked here: if the pending request turned
    /// illegal since it was buffered, the committed direction is kept.
    /// Called exactly once per step.
    pub fn consume(&mut self) -> Direction {
        if self.pending != self.committed.opposite() {
            self.committed = self.pending;
        }
        self.committed
    }

    /// Direction applied on the most recent step.
    #[must_use]
    pub fn committed(self) -> Direction {
        self.committed
    }
}
