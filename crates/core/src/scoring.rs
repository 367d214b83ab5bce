//! Scoring module - line-clear points and gravity speed
//!
//! Scoring is flat: every cleared row is worth the same, regardless of how
//! many rows a single settle removes. Speed is a step function of the
//! cumulative score, not of the rows cleared by the latest call.

use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_MIN_MS, FALL_INTERVAL_STEP_MS, SCORE_PER_LINE,
    SCORE_PER_SPEED_TIER,
};

/// Points for clearing `lines` rows in one call
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(SCORE_PER_LINE)
}

/// Speed tier for a cumulative score (0 at the start)
pub fn speed_tier(score: u32) -> u32 {
    score / SCORE_PER_SPEED_TIER
}

/// Gravity interval for a cumulative score
///
/// `max(100, 500 - floor(score / 1000) * 50)` milliseconds.
///
/// ```
/// use termtris_core::scoring::fall_interval_ms;
///
/// assert_eq!(fall_interval_ms(0), 500);
/// assert_eq!(fall_interval_ms(1000), 450);
/// assert_eq!(fall_interval_ms(1_000_000), 100);
/// ```
pub fn fall_interval_ms(score: u32) -> u32 {
    let reduction = speed_tier(score).saturating_mul(FALL_INTERVAL_STEP_MS);
    BASE_FALL_INTERVAL_MS
        .saturating_sub(reduction)
        .max(FALL_INTERVAL_MIN_MS)
}
