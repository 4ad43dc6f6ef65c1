//! Scoring module - line clear points, level progression and gravity cadence
//!
//! These are the classic tuning constants of this game:
//! - Line clears score `cleared² × 100 × level`, so multi-line clears pay quadratically.
//! - Level is `1 + lines / 10`.
//! - Gravity fires every `max(5, 50 − 5 × level)` frames.

use crate::types::{
    BASE_DROP_FRAMES, DROP_FRAMES_PER_LEVEL, LINES_PER_LEVEL, LINE_CLEAR_BASE, MIN_DROP_FRAMES,
    SOFT_DROP_POINTS, START_LEVEL,
};

/// Points for clearing `lines` rows at once at `level`
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let lines = lines as u32;
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE)
        .saturating_mul(level)
}

/// Points for a player soft drop of `rows` rows
pub fn soft_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(SOFT_DROP_POINTS)
}

/// Level for a total number of cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    START_LEVEL + total_lines / LINES_PER_LEVEL
}

/// Frames between automatic descents at `level`
pub fn drop_interval_frames(level: u32) -> u32 {
    BASE_DROP_FRAMES
        .saturating_sub(level.saturating_mul(DROP_FRAMES_PER_LEVEL))
        .max(MIN_DROP_FRAMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 400);
        assert_eq!(line_clear_score(3, 1), 900);
        assert_eq!(line_clear_score(4, 1), 1600);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_score(1, 3), 300);
        assert_eq!(line_clear_score(4, 5), 8000);
    }

    #[test]
    fn test_soft_drop_score() {
        assert_eq!(soft_drop_score(0), 0);
        assert_eq!(soft_drop_score(18), 18);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(drop_interval_frames(1), 45);
        assert_eq!(drop_interval_frames(2), 40);
        assert_eq!(drop_interval_frames(8), 10);
        assert_eq!(drop_interval_frames(9), 5);
        assert_eq!(drop_interval_frames(10), 5);
        assert_eq!(drop_interval_frames(1000), 5);
        assert_eq!(drop_interval_frames(u32::MAX), 5);
    }
}
