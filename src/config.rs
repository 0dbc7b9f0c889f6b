use std::time::Duration;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

/// Default playfield dimensions.
pub const DEFAULT_GRID: GridSize = GridSize { cols: 24, rows: 24 };

/// Number of cells a freshly spawned snake occupies.
pub const INITIAL_SNAKE_LEN: u16 = 3;

/// Slowest selectable speed level.
pub const SPEED_LEVEL_MIN: u8 = 5;

/// Fastest selectable speed level.
pub const SPEED_LEVEL_MAX: u8 = 20;

/// Speed level used when none is configured.
pub const SPEED_LEVEL_DEFAULT: u8 = 10;

/// Maps a speed level to the fixed simulation step interval.
///
/// Level 5 yields 180 ms per step, level 20 yields 60 ms. Out-of-range
/// levels are clamped to the documented range first; the simulation itself
/// only ever sees the resulting interval.
#[must_use]
pub fn step_interval_for_level(level: u8) -> Duration {
    let level = level.clamp(SPEED_LEVEL_MIN, SPEED_LEVEL_MAX);
    Duration::from_millis(220 - u64::from(level) * 8)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{step_interval_for_level, GridSize, SPEED_LEVEL_MAX, SPEED_LEVEL_MIN};

    #[test]
    fn speed_levels_map_to_documented_intervals() {
        assert_eq!(
            step_interval_for_level(SPEED_LEVEL_MIN),
            Duration::from_millis(180)
        );
        assert_eq!(step_interval_for_level(10), Duration::from_millis(140));
        assert_eq!(
            step_interval_for_level(SPEED_LEVEL_MAX),
            Duration::from_millis(60)
        );
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        assert_eq!(
            step_interval_for_level(0),
            step_interval_for_level(SPEED_LEVEL_MIN)
        );
        assert_eq!(
            step_interval_for_level(200),
            step_interval_for_level(SPEED_LEVEL_MAX)
        );
    }

    #[test]
    fn total_cells_multiplies_both_axes() {
        let grid = GridSize { cols: 24, rows: 24 };
        assert_eq!(grid.total_cells(), 576);
    }
}
