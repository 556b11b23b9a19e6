//! Experience, level-ups, and out-of-battle recovery.

use super::attributes::AttributeType;
use super::combatant::Combatant;
use crate::core::constants::*;

/// Result of [`gain_experience`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpReport {
    pub message: String,
    pub leveled_up: bool,
}

/// Adds experience and applies at most one level-up.
///
/// Surplus experience carries over, but even when it would cover another
/// threshold only a single level is gained per call.
pub fn gain_experience(combatant: &mut Combatant, amount: u32) -> LevelUpReport {
    combatant.experience = combatant.experience.saturating_add(amount);
    let mut message = format!("{} gained {} experience!", combatant.name, amount);

    if combatant.experience < combatant.experience_to_level {
        return LevelUpReport {
            message,
            leveled_up: false,
        };
    }

    message.push(' ');
    message.push_str(&level_up(combatant));
    LevelUpReport {
        message,
        leveled_up: true,
    }
}

/// Raises the level by one, grows the threshold, boosts attributes and
/// refills every resource. Returns the announcement text.
pub fn level_up(combatant: &mut Combatant) -> String {
    combatant.level += 1;
    combatant.experience = combatant
        .experience
        .saturating_sub(combatant.experience_to_level);
    combatant.experience_to_level =
        (combatant.experience_to_level as f64 * XP_TO_LEVEL_GROWTH).floor() as u32;

    let attrs = &mut combatant.attributes;
    attrs.raise(AttributeType::Strength, LEVEL_UP_STRENGTH);
    attrs.raise(AttributeType::Agility, LEVEL_UP_AGILITY);
    attrs.raise(AttributeType::Armor, LEVEL_UP_ARMOR);
    attrs.raise(AttributeType::Stamina, LEVEL_UP_STAMINA);
    attrs.raise(AttributeType::Vitality, LEVEL_UP_VITALITY);

    combatant.recompute_and_restore();

    tracing::info!(
        name = %combatant.name,
        level = combatant.level,
        max_health = combatant.max_health,
        max_stamina = combatant.max_stamina,
        "level up"
    );
    format!(
        "{} has reached level {}! Attributes increased!",
        combatant.name, combatant.level
    )
}

/// Arena-menu rest: restores up to half of max health and all stamina.
pub fn recuperate(combatant: &mut Combatant) -> String {
    let restored = combatant.heal(combatant.max_health / 2);
    combatant.stamina = combatant.max_stamina;
    format!(
        "{} takes a rest and recovers {} health and full stamina!",
        combatant.name, restored
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::creation::{create_player, CharacterClass, StatAllocation};

    fn player() -> Combatant {
        create_player("Hero", CharacterClass::Warrior, &StatAllocation::balanced()).unwrap()
    }

    #[test]
    fn test_gain_below_threshold() {
        let mut p = player();
        let report = gain_experience(&mut p, 40);
        assert!(!report.leveled_up);
        assert_eq!(report.message, "Hero gained 40 experience!");
        assert_eq!(p.experience, 40);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_level_up_carries_surplus() {
        let mut p = player();
        p.experience = 90;
        let report = gain_experience(&mut p, 30);
        assert!(report.leveled_up);
        assert!(report.message.contains("has reached level 2"));
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 20);
        assert_eq!(p.experience_to_level, 150);
    }

    #[test]
    fn test_level_up_attribute_increments() {
        let mut p = player();
        let before = p.attributes;
        gain_experience(&mut p, 100);
        assert_eq!(p.attributes.strength(), before.strength() + 2);
        assert_eq!(p.attributes.agility(), before.agility() + 1);
        assert_eq!(p.attributes.armor(), before.armor() + 1);
        assert_eq!(p.attributes.stamina(), before.stamina() + 1);
        assert_eq!(p.attributes.vitality(), before.vitality() + 1);
    }

    #[test]
    fn test_level_up_refills_and_grows_resources() {
        let mut p = player();
        let (max_hp, max_sta, speed) = (p.max_health, p.max_stamina, p.move_speed);
        p.take_damage(60);
        p.spend_stamina(70);

        gain_experience(&mut p, 100);

        assert!(p.max_health > max_hp);
        assert!(p.max_stamina > max_sta);
        assert!(p.move_speed > speed);
        assert_eq!(p.health, p.max_health);
        assert_eq!(p.stamina, p.max_stamina);
    }

    #[test]
    fn test_single_level_per_call() {
        let mut p = player();
        let report = gain_experience(&mut p, 1000);
        assert!(report.leveled_up);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 900);
        // Still above the new threshold; the next call levels again.
        assert!(p.experience >= p.experience_to_level);
        gain_experience(&mut p, 0);
        assert_eq!(p.level, 3);
    }

    #[test]
    fn test_threshold_floors() {
        let mut p = player();
        p.experience_to_level = 101;
        gain_experience(&mut p, 101);
        assert_eq!(p.experience_to_level, 151);
    }

    #[test]
    fn test_recuperate_caps_at_half() {
        let mut p = player();
        let max = p.max_health;
        p.take_damage(max - 1);
        p.spend_stamina(1000);
        let message = recuperate(&mut p);
        assert_eq!(p.health, 1 + max / 2);
        assert_eq!(p.stamina, p.max_stamina);
        assert!(message.contains(&format!("recovers {} health", max / 2)));

        let healed = recuperate(&mut p);
        assert!(healed.contains("Hero takes a rest"));
        assert_eq!(p.health, p.max_health);
    }
}
