//! Progression - score, level, cleared lines and gravity speed
//!
//! | Rule | Value |
//! |------|-------|
//! | Points per line | `100 x level` (level in force before the clear) |
//! | Level | `1 + floor(lines / 10)` |
//! | Fall interval | `max(100, 1000 - (level - 1) x 100)` ms |
//!
//! A clear event is scored as a whole at the old level; the level and the
//! fall interval are recomputed once afterwards.

use log::debug;

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, LINES_PER_LEVEL, MIN_FALL_INTERVAL_MS,
    POINTS_PER_LINE,
};

/// Gravity interval for a level, clamped at the minimum
pub fn fall_interval_for_level(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_INTERVAL_STEP_MS);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(reduction)
        .max(MIN_FALL_INTERVAL_MS)
}

/// Result of feeding one clear event into the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearScore {
    pub points: u32,
    pub leveled_up: bool,
}

/// Running totals for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionTracker {
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: BASE_FALL_INTERVAL_MS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Account for `count` lines removed by a single lock.
    pub fn on_lines_cleared(&mut self, count: u32) -> ClearScore {
        if count == 0 {
            return ClearScore::default();
        }

        let points = count.saturating_mul(POINTS_PER_LINE).saturating_mul(self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(count);

        let new_level = 1 + self.lines / LINES_PER_LEVEL;
        let leveled_up = new_level > self.level;
        if leveled_up {
            self.level = new_level;
            self.fall_interval_ms = fall_interval_for_level(new_level);
            debug!(
                "level up: level={} fall_interval_ms={}",
                self.level, self.fall_interval_ms
            );
        }

        ClearScore { points, leveled_up }
    }

    /// Back to level 1 with nothing scored
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new()
    }
}
