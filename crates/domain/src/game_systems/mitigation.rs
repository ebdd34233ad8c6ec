//! Damage mitigation.
//!
//! Armor (plus the shield while it is raised) and half the endurance bonus
//! form the total armor. When the total armor covers at least half of the
//! incoming damage, damage falls off quadratically,
//! `incoming * incoming / (total_armor * 3)`; otherwise armor is subtracted
//! flat. The jump at the half-damage threshold is intentional and the
//! threshold itself belongs to the heavy branch.
//!
//! The hit-point delta is rounded up.

use serde::{Deserialize, Serialize};

use super::formulas::saturate;

/// Which side of the half-damage threshold a hit landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArmorBranch {
    /// No damage to mitigate.
    NoDamage,
    /// Total armor is at least half the incoming damage.
    Heavy,
    /// Total armor is below half the incoming damage.
    Light,
}

/// Armor and endurance inputs of a mitigation roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defense {
    pub armor_value: i32,
    pub shield_value: i32,
    pub shield_active: bool,
    pub endurance_bonus: i32,
}

impl Defense {
    pub const fn new(
        armor_value: i32,
        shield_value: i32,
        shield_active: bool,
        endurance_bonus: i32,
    ) -> Self {
        Self {
            armor_value,
            shield_value,
            shield_active,
            endurance_bonus,
        }
    }

    /// Armor plus the shield when it is active.
    pub const fn base_armor(&self) -> i32 {
        if self.shield_active {
            self.armor_value.saturating_add(self.shield_value)
        } else {
            self.armor_value
        }
    }

    /// Base armor plus `floor(endurance_bonus / 2)`.
    pub const fn total_armor(&self) -> i32 {
        self.base_armor()
            .saturating_add(self.endurance_bonus.div_euclid(2))
    }
}

/// Outcome of mitigating one hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mitigation {
    pub incoming: i32,
    pub total_armor: i32,
    pub branch: ArmorBranch,
    /// Unrounded damage, for display.
    pub raw_damage: f64,
    /// Hit points to subtract (`raw_damage` rounded up).
    pub hp_delta: i32,
}

/// Mitigate a single hit.
///
/// Non-positive incoming damage is a no-op: mitigation never heals.
pub fn mitigate(incoming: i32, defense: Defense) -> Mitigation {
    let total_armor = defense.total_armor();

    if incoming <= 0 {
        return Mitigation {
            incoming,
            total_armor,
            branch: ArmorBranch::NoDamage,
            raw_damage: 0.0,
            hp_delta: 0,
        };
    }

    let incoming_wide = i64::from(incoming);
    let armor_wide = i64::from(total_armor);

    // total_armor >= incoming / 2, without losing the half
    if 2 * armor_wide >= incoming_wide {
        // incoming > 0 here, so total_armor >= 1
        let divisor = armor_wide * 3;
        let numerator = incoming_wide * incoming_wide;
        let rounded_up = (numerator + divisor - 1) / divisor;
        let raw_damage = f64::from(incoming) * (f64::from(incoming) / (f64::from(total_armor) * 3.0));
        Mitigation {
            incoming,
            total_armor,
            branch: ArmorBranch::Heavy,
            raw_damage,
            hp_delta: saturate(rounded_up),
        }
    } else {
        let delta = saturate((incoming_wide - armor_wide).max(0));
        Mitigation {
            incoming,
            total_armor,
            branch: ArmorBranch::Light,
            raw_damage: f64::from(delta),
            hp_delta: delta,
        }
    }
}

/// Hit points to subtract for one hit.
pub fn apply_damage(
    incoming: i32,
    armor_value: i32,
    shield_value: i32,
    shield_active: bool,
    endurance_bonus: i32,
) -> i32 {
    mitigate(
        incoming,
        Defense::new(armor_value, shield_value, shield_active, endurance_bonus),
    )
    .hp_delta
}

/// New current hit points after losing `hp_delta`, floored at zero.
pub fn reduce_hp(current_hp: i32, hp_delta: i32) -> i32 {
    current_hp.saturating_sub(hp_delta).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_damage_is_a_no_op() {
        for (armor, shield, active, endurance) in
            [(0, 0, false, 0), (50, 10, true, 7), (-5, 0, false, -9)]
        {
            assert_eq!(apply_damage(0, armor, shield, active, endurance), 0);
        }
    }

    #[test]
    fn negative_damage_never_heals() {
        let result = mitigate(-10, Defense::default());
        assert_eq!(result.branch, ArmorBranch::NoDamage);
        assert_eq!(result.hp_delta, 0);
    }

    #[test]
    fn threshold_selects_heavy_branch_and_rounds_up() {
        let result = mitigate(100, Defense::new(50, 0, false, 0));
        assert_eq!(result.total_armor, 50);
        assert_eq!(result.branch, ArmorBranch::Heavy);
        assert!((result.raw_damage - 66.666_666).abs() < 1e-3);
        assert_eq!(result.hp_delta, 67);
    }

    #[test]
    fn odd_incoming_threshold_uses_exact_half() {
        // 25 >= 49 / 2 = 24.5
        assert_eq!(mitigate(49, Defense::new(25, 0, false, 0)).branch, ArmorBranch::Heavy);
        // 24 < 24.5
        assert_eq!(mitigate(49, Defense::new(24, 0, false, 0)).branch, ArmorBranch::Light);
    }

    #[test]
    fn light_branch_subtracts_armor() {
        assert_eq!(apply_damage(100, 10, 0, false, 0), 90);
    }

    #[test]
    fn exact_heavy_results_are_not_bumped() {
        // 60 * 60 / (40 * 3) = 30 exactly
        assert_eq!(apply_damage(60, 40, 0, false, 0), 30);
    }

    #[test]
    fn shield_only_counts_when_active() {
        let raised = mitigate(50, Defense::new(10, 10, true, 0));
        let lowered = mitigate(50, Defense::new(10, 10, false, 0));
        assert_eq!(raised.total_armor, 20);
        assert_eq!(lowered.total_armor, 10);
        assert_eq!(raised.hp_delta, 30);
        assert_eq!(lowered.hp_delta, 40);
    }

    #[test]
    fn half_endurance_bonus_floors() {
        assert_eq!(Defense::new(10, 0, false, 5).total_armor(), 12);
        assert_eq!(Defense::new(10, 0, false, -1).total_armor(), 9);
        assert_eq!(Defense::new(10, 0, false, -4).total_armor(), 8);
    }

    #[test]
    fn endurance_can_tip_into_heavy_branch() {
        // base 9 < 10, but 9 + floor(3/2) = 10 >= 10
        let result = mitigate(20, Defense::new(9, 0, false, 3));
        assert_eq!(result.branch, ArmorBranch::Heavy);
        // 400 / 30 = 13.33 -> 14
        assert_eq!(result.hp_delta, 14);
    }

    #[test]
    fn negative_armor_increases_damage() {
        assert_eq!(apply_damage(10, -5, 0, false, 0), 15);
    }

    #[test]
    fn extreme_armor_saturates() {
        let defense = Defense::new(i32::MAX, i32::MAX, true, i32::MAX);
        assert_eq!(defense.total_armor(), i32::MAX);
        assert_eq!(Defense::new(i32::MIN, -1, true, i32::MIN).total_armor(), i32::MIN);

        assert_eq!(apply_damage(10, i32::MAX, 1, true, 0), 1);
        // armor floors at i32::MIN, so the light branch delta saturates
        assert_eq!(apply_damage(i32::MAX, i32::MIN, 0, false, 0), i32::MAX);
        assert_eq!(apply_damage(i32::MAX, i32::MAX, 0, false, 0), 715_827_883);
    }

    #[test]
    fn current_hp_never_drops_below_zero() {
        let mut hp = 50;
        for _ in 0..10 {
            hp = reduce_hp(hp, apply_damage(30, 2, 0, false, 0));
            assert!(hp >= 0);
        }
        assert_eq!(hp, 0);
        assert_eq!(reduce_hp(i32::MIN + 1, i32::MAX), 0);
    }
}
