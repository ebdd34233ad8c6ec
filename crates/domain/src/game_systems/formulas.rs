//! Derived-statistic formulas.
//!
//! Every function here is total over `i32`: out-of-range scores produce
//! unusual numbers, never errors or overflow. Intermediates are computed in
//! `i64` and saturated back. Range enforcement belongs to the boundary.

use crate::value_objects::{ProficiencyLevel, ATTRIBUTE_BASELINE};

/// Flat hit points granted by the body-only policy.
pub const BODY_ONLY_HP_BONUS: i32 = 8;
/// Hit points per point of body.
pub const HP_PER_BODY: i32 = 5;
/// Hit points per point of endurance under the body-plus-endurance policy.
pub const HP_PER_ENDURANCE: i32 = 2;

/// `floor((score - 10) / 2)`, rounding toward negative infinity.
///
/// Rust's `/` truncates toward zero, so a score of 9 would give 0 instead of -1.
pub const fn attribute_bonus(score: i32) -> i32 {
    saturate((score as i64 - ATTRIBUTE_BASELINE as i64).div_euclid(2))
}

/// Total bonus of a skill.
///
/// `attribute_bonus(attribute_score) + flat_bonus + skill_base * multiplier(level)`
pub const fn skill_bonus(
    attribute_score: i32,
    skill_base: i32,
    flat_bonus: i32,
    level: ProficiencyLevel,
) -> i32 {
    saturate(
        attribute_bonus(attribute_score) as i64
            + flat_bonus as i64
            + skill_base as i64 * level.multiplier() as i64,
    )
}

/// `body * 5 + 8`
pub const fn max_hp_body_only(body: i32) -> i32 {
    saturate(body as i64 * HP_PER_BODY as i64 + BODY_ONLY_HP_BONUS as i64)
}

/// `body * 5 + endurance * 2`
pub const fn max_hp_body_plus_endurance(body: i32, endurance: i32) -> i32 {
    saturate(body as i64 * HP_PER_BODY as i64 + endurance as i64 * HP_PER_ENDURANCE as i64)
}

/// Clamp a widened intermediate back into `i32`.
pub(crate) const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

/// Bonus with an explicit sign: `+3`, `+0`, `-2`.
pub fn format_signed(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Share of hit points remaining, clamped to `0..=100` for display.
pub fn hp_percent(current_hp: i32, max_hp: i32) -> u8 {
    if max_hp <= 0 {
        return 0;
    }
    let percent = (i64::from(current_hp) * 100 / i64::from(max_hp)).clamp(0, 100);
    u8::try_from(percent).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_bonus_floors_toward_negative_infinity() {
        assert_eq!(attribute_bonus(10), 0);
        assert_eq!(attribute_bonus(11), 0);
        assert_eq!(attribute_bonus(12), 1);
        assert_eq!(attribute_bonus(9), -1);
        assert_eq!(attribute_bonus(8), -1);
        assert_eq!(attribute_bonus(7), -2);
        assert_eq!(attribute_bonus(1), -5);
        assert_eq!(attribute_bonus(20), 5);
    }

    #[test]
    fn attribute_bonus_tolerates_out_of_range_scores() {
        assert_eq!(attribute_bonus(0), -5);
        assert_eq!(attribute_bonus(-3), -7);
        assert_eq!(attribute_bonus(40), 15);
    }

    #[test]
    fn skill_bonus_combines_all_terms() {
        // floor((14-10)/2) + 1 + 2*3
        assert_eq!(skill_bonus(14, 2, 1, ProficiencyLevel::Mastered), 9);
    }

    #[test]
    fn untrained_skill_still_gets_the_base_once() {
        assert_eq!(skill_bonus(10, 3, 0, ProficiencyLevel::None), 3);
        assert_eq!(skill_bonus(10, 3, 0, ProficiencyLevel::Supreme), 12);
    }

    #[test]
    fn skill_bonus_can_go_negative() {
        assert_eq!(skill_bonus(3, 0, -1, ProficiencyLevel::None), -5);
    }

    #[test]
    fn hit_point_formulas() {
        assert_eq!(max_hp_body_only(10), 58);
        assert_eq!(max_hp_body_plus_endurance(10, 5), 60);
        assert_eq!(max_hp_body_plus_endurance(10, -2), 46);
    }

    #[test]
    fn extreme_scores_saturate_instead_of_overflowing() {
        assert_eq!(attribute_bonus(i32::MAX), 1_073_741_818);
        assert_eq!(attribute_bonus(i32::MIN), -1_073_741_829);
        assert_eq!(skill_bonus(10, i32::MAX, 0, ProficiencyLevel::Supreme), i32::MAX);
        assert_eq!(skill_bonus(10, i32::MIN, -1, ProficiencyLevel::Trained), i32::MIN);
        assert_eq!(max_hp_body_only(i32::MAX), i32::MAX);
        assert_eq!(max_hp_body_only(i32::MIN), i32::MIN);
        assert_eq!(max_hp_body_plus_endurance(i32::MAX, i32::MIN), i32::MAX);
        assert_eq!(max_hp_body_plus_endurance(i32::MIN, i32::MAX), i32::MIN);
    }

    #[test]
    fn signed_display_never_doubles_the_sign() {
        assert_eq!(format_signed(3), "+3");
        assert_eq!(format_signed(0), "+0");
        assert_eq!(format_signed(-2), "-2");
    }

    #[test]
    fn hp_percent_is_clamped() {
        assert_eq!(hp_percent(25, 50), 50);
        assert_eq!(hp_percent(80, 50), 100);
        assert_eq!(hp_percent(-5, 50), 0);
        assert_eq!(hp_percent(10, 0), 0);
    }
}
