//! Pure combat formulas shared by the action resolvers, the policy, and tests.

use crate::core::constants::*;
use rand::Rng;

/// Chance that an attack lands: accuracy scaled by the attacker's share of
/// the combined agility. Two zero-agility combatants split evenly.
pub fn hit_chance(accuracy: f64, attacker_agility: u32, defender_agility: u32) -> f64 {
    let total = attacker_agility + defender_agility;
    let share = if total == 0 {
        0.5
    } else {
        attacker_agility as f64 / total as f64
    };
    accuracy * share
}

/// A roll in [0, 1) hits when it is at most the hit chance.
pub fn is_hit(roll: f64, hit_chance: f64) -> bool {
    roll <= hit_chance
}

pub fn roll_hit(hit_chance: f64, rng: &mut impl Rng) -> bool {
    is_hit(rng.gen::<f64>(), hit_chance)
}

/// `floor((strength + weapon) × multiplier)`.
pub fn raw_damage(strength: u32, weapon_bonus: u32, damage_multiplier: f64) -> u32 {
    ((strength + weapon_bonus) as f64 * damage_multiplier).floor() as u32
}

/// Subtracts the armor item bonus and half the armor attribute, never below 1.
pub fn mitigate_damage(raw_damage: u32, armor_item_bonus: u32, armor: u32) -> u32 {
    raw_damage
        .saturating_sub(armor_item_bonus)
        .saturating_sub(armor / 2)
        .max(1)
}

pub fn clamp_to_arena(x: f64) -> f64 {
    x.clamp(ARENA_MIN_X, ARENA_MAX_X)
}

/// Stamina restored by resting: `max(5, max_stamina / 10) + stamina_stat`.
pub fn rest_recovery(max_stamina: u32, stamina_stat: u32) -> u32 {
    (max_stamina / REST_RECOVERY_DIVISOR).max(MIN_REST_RECOVERY) + stamina_stat
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_equal_agility_halves_accuracy() {
        assert_eq!(hit_chance(0.9, 5, 5), 0.45);
        assert_eq!(hit_chance(0.8, 0, 0), 0.4);
        assert_eq!(hit_chance(1.0, 0, 7), 0.0);
    }

    #[test]
    fn test_hit_boundary_is_inclusive() {
        let chance = hit_chance(0.9, 5, 5);
        assert!(is_hit(0.45, chance));
        assert!(!is_hit(0.450001, chance));
    }

    #[test]
    fn test_roll_hit_with_fixed_rolls() {
        // StepRng(0, 0) always yields 0.0, StepRng(MAX, 0) just below 1.0.
        assert!(roll_hit(0.01, &mut StepRng::new(0, 0)));
        assert!(!roll_hit(0.99, &mut StepRng::new(u64::MAX, 0)));
    }

    #[test]
    fn test_damage_scenario() {
        let raw = raw_damage(5, 5, 0.8);
        assert_eq!(raw, 8);
        assert_eq!(mitigate_damage(raw, 2, 5), 4);
    }

    #[test]
    fn test_mitigation_floor() {
        assert_eq!(mitigate_damage(0, 0, 0), 1);
        assert_eq!(mitigate_damage(8, 100, 0), 1);
        assert_eq!(mitigate_damage(50, 0, 1000), 1);
        assert_eq!(mitigate_damage(50, 3, 4), 45);
    }

    #[test]
    fn test_raw_damage_floors() {
        assert_eq!(raw_damage(7, 3, 1.5), 15);
        assert_eq!(raw_damage(7, 4, 1.3), 14); // 14.3
    }

    #[test]
    fn test_rest_recovery() {
        assert_eq!(rest_recovery(115, 5), 16); // 11 + 5
        assert_eq!(rest_recovery(30, 0), 5);
        assert_eq!(rest_recovery(0, 2), 7);
    }

    #[test]
    fn test_clamp_to_arena() {
        assert_eq!(clamp_to_arena(0.0), ARENA_MIN_X);
        assert_eq!(clamp_to_arena(1e6), ARENA_MAX_X);
        assert_eq!(clamp_to_arena(400.0), 400.0);
    }
}
