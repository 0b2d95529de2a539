//! Scoring module - placement points, line clears, combo and streak bonuses
//!
//! A move that clears `count` lines (rows plus columns) with `streak` previous
//! consecutive clearing moves scores:
//!
//! - `count * 10` line points
//! - `2^count` combo bonus
//! - `streak * 20` streak bonus (zero when `streak` is zero)
//!
//! The streak used here is the value before this move increments it. The flat
//! placement award is separate and applies to every accepted move.

use crate::types::{LINE_POINTS, PLACEMENT_POINTS, STREAK_BONUS};

/// Score breakdown for one clearing move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub line_points: u32,
    pub combo_bonus: u32,
    pub streak_bonus: u32,
    pub total: u32,
}

/// Flat award for any accepted placement
pub fn placement_points() -> u32 {
    PLACEMENT_POINTS
}

/// Combo bonus for clearing `count` lines at once (`2^count`)
pub fn calculate_combo_bonus(count: u32) -> u32 {
    1u32.checked_shl(count).unwrap_or(u32::MAX)
}

/// Streak bonus given the streak before this move
pub fn calculate_streak_bonus(streak: u32) -> u32 {
    streak.saturating_mul(STREAK_BONUS)
}

/// Full clear score. A zero `count` scores nothing.
pub fn calculate_clear_score(count: u32, streak: u32) -> ScoreResult {
    if count == 0 {
        return ScoreResult::default();
    }

    let line_points = count.saturating_mul(LINE_POINTS);
    let combo_bonus = calculate_combo_bonus(count);
    let streak_bonus = calculate_streak_bonus(streak);
    let total = line_points
        .saturating_add(combo_bonus)
        .saturating_add(streak_bonus);

    ScoreResult {
        line_points,
        combo_bonus,
        streak_bonus,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_clear_scores_nothing() {
        assert_eq!(calculate_clear_score(0, 5), ScoreResult::default());
    }

    #[test]
    fn test_first_single_clear() {
        let result = calculate_clear_score(1, 0);
        assert_eq!(result.line_points, 10);
        assert_eq!(result.combo_bonus, 2);
        assert_eq!(result.streak_bonus, 0);
        assert_eq!(result.total, 12);
        assert_eq!(placement_points() + result.total, 17);
    }

    #[test]
    fn test_double_clear_with_streak() {
        let result = calculate_clear_score(2, 3);
        assert_eq!(result.line_points, 20);
        assert_eq!(result.combo_bonus, 4);
        assert_eq!(result.streak_bonus, 60);
        assert_eq!(placement_points() + result.total, 89);
    }

    #[test]
    fn test_combo_bonus_powers() {
        assert_eq!(calculate_combo_bonus(1), 2);
        assert_eq!(calculate_combo_bonus(3), 8);
        // A placement can complete at most 6 lines; larger values only check saturation.
        assert_eq!(calculate_combo_bonus(16), 65536);
        assert_eq!(calculate_combo_bonus(40), u32::MAX);
    }
}
