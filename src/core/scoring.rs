//! Scoring policy for resolved matches.
//!
//! Policy note:
//! Two scoring variants exist in this game's history: a flat additive streak
//! bonus (+50 per streak step) and a multiplicative streak bonus capped at
//! 3x. This implementation uses the multiplicative policy:
//! - time_bonus = remaining seconds on timed levels, 0 otherwise
//! - multiplier = 1 + 0.2 * streak_before, clamped at 3.0 (streak >= 10)
//! - points = floor((base + time_bonus) * multiplier)
//! The multiplier is computed in tenths so the result is exact integer math.

use crate::types::{BASE_MATCH_POINTS, STREAK_CLAMP, STREAK_STEP_TENTHS};

/// Points for one resolved match.
///
/// `streak_before` is the consecutive-match streak as it stood before this
/// match was resolved: the first match after a mismatch (or at level start)
/// scores with no multiplier.
pub fn points_for_match(
    base_points: u32,
    time_remaining_secs: u32,
    timed: bool,
    streak_before: u32,
) -> u32 {
    let time_bonus = if timed { time_remaining_secs } else { 0 };
    let multiplier_tenths = 10 + STREAK_STEP_TENTHS * streak_before.min(STREAK_CLAMP);
    (base_points + time_bonus) * multiplier_tenths / 10
}

/// Points for one resolved match under the default base points.
pub fn default_points_for_match(time_remaining_secs: u32, timed: bool, streak_before: u32) -> u32 {
    points_for_match(BASE_MATCH_POINTS, time_remaining_secs, timed, streak_before)
}
