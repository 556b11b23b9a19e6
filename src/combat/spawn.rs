//! Enemy generation and defeat rewards.

use crate::character::attributes::Attributes;
use crate::character::combatant::{Combatant, Facing};
use crate::character::equipment::Loadout;
use crate::character::skills::enemy_skills;
use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const ENEMY_NAMES_WEAK: [&str; 4] = ["Goblin", "Bandit", "Wolf", "Skeleton"];
pub const ENEMY_NAMES_SEASONED: [&str; 5] = ["Wolf", "Skeleton", "Orc", "Troll", "Dark Knight"];
pub const ENEMY_NAMES_ELITE: [&str; 4] = ["Troll", "Dark Knight", "Shadow Assassin", "Ogre"];
pub const ENEMY_EPITHETS: [&str; 4] = ["the Strong", "the Fierce", "the Deadly", "the Brutal"];

pub const ENEMY_WEAPON: &str = "Claws";
pub const ENEMY_ARMOR: &str = "Tough Skin";

/// Experience and gold granted for defeating an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounty {
    pub experience: u32,
    pub gold: u32,
}

impl Bounty {
    pub fn for_level(level: u32) -> Self {
        Self {
            experience: ENEMY_BOUNTY_XP_BASE + ENEMY_BOUNTY_XP_PER_LEVEL * level,
            gold: ENEMY_BOUNTY_GOLD_BASE + ENEMY_BOUNTY_GOLD_PER_LEVEL * level,
        }
    }
}

impl Combatant {
    /// Builds an enemy whose attributes, gear and skills scale with `level`.
    /// Enemies stand at the right side of the arena facing left.
    pub fn enemy(name: impl Into<String>, level: u32) -> Self {
        let level = level.max(1);
        let attributes = Attributes::from_values(5 + 2 * level, 5 + level, 2 + level, level, level);
        let loadout = Loadout::new(ENEMY_WEAPON, 3 + level, ENEMY_ARMOR, 1 + level / 2);
        Combatant::new(
            name,
            level,
            attributes,
            loadout,
            enemy_skills(),
            ENEMY_START_X,
            Facing::Left,
        )
    }

    /// Reward for defeating this combatant.
    pub fn bounty(&self) -> Bounty {
        Bounty::for_level(self.level)
    }
}

/// Picks a level near the player's: `player_level - 1` plus a roll in -1..=2,
/// never below 1.
pub fn roll_enemy_level(player_level: u32, rng: &mut impl Rng) -> u32 {
    let level = player_level as i64 - 1 + rng.gen_range(-1i64..=2);
    level.max(1) as u32
}

fn names_for_level(level: u32) -> &'static [&'static str] {
    match level {
        0..=3 => &ENEMY_NAMES_WEAK,
        4..=6 => &ENEMY_NAMES_SEASONED,
        _ => &ENEMY_NAMES_ELITE,
    }
}

/// Generates an opponent scaled to the player's level.
pub fn generate_enemy(player_level: u32, rng: &mut impl Rng) -> Combatant {
    let level = roll_enemy_level(player_level, rng);
    let pool = names_for_level(level);
    let mut name = pool[rng.gen_range(0..pool.len())].to_string();
    if level >= EPITHET_MIN_LEVEL {
        let epithet = ENEMY_EPITHETS[rng.gen_range(0..ENEMY_EPITHETS.len())];
        name = format!("{} {}", name, epithet);
    }

    tracing::debug!(%name, level, player_level, "generated enemy");
    Combatant::enemy(name, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::skills::{FIERCE_ATTACK, POUNCE, STRIKE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_enemy_scaling() {
        let enemy = Combatant::enemy("Orc", 4);
        assert_eq!(enemy.level, 4);
        assert_eq!(enemy.attributes.strength(), 13);
        assert_eq!(enemy.attributes.agility(), 9);
        assert_eq!(enemy.attributes.armor(), 6);
        assert_eq!(enemy.attributes.stamina(), 4);
        assert_eq!(enemy.attributes.vitality(), 4);
        assert_eq!(enemy.loadout.equipped_weapon(), "Claws");
        assert_eq!(enemy.loadout.weapon_bonus(), 7);
        assert_eq!(enemy.loadout.equipped_armor(), "Tough Skin");
        assert_eq!(enemy.loadout.armor_bonus(), 3);
        assert_eq!(enemy.max_health, 120);
        assert_eq!(enemy.health, enemy.max_health);
        assert_eq!(enemy.position.x, ENEMY_START_X);
        assert_eq!(enemy.facing, Facing::Left);
    }

    #[test]
    fn test_enemy_skills() {
        let enemy = Combatant::enemy("Goblin", 1);
        for skill in [STRIKE, FIERCE_ATTACK, POUNCE] {
            assert!(enemy.skill(skill).is_some(), "missing {}", skill);
        }
        assert!(enemy.skill(POUNCE).is_some_and(|s| s.is_leap()));
    }

    #[test]
    fn test_bounty_for_level() {
        assert_eq!(Bounty::for_level(1), Bounty { experience: 30, gold: 15 });
        assert_eq!(Bounty::for_level(5), Bounty { experience: 70, gold: 35 });
        assert_eq!(Combatant::enemy("Ogre", 7).bounty(), Bounty::for_level(7));
    }

    #[test]
    fn test_enemy_level_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let level = roll_enemy_level(5, &mut rng);
            assert!((3..=6).contains(&level), "level {}", level);
        }
        for _ in 0..500 {
            assert!(roll_enemy_level(1, &mut rng) >= 1);
        }
    }

    #[test]
    fn test_generated_names_match_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for player_level in 1..=12 {
            for _ in 0..50 {
                let enemy = generate_enemy(player_level, &mut rng);
                let has_epithet = ENEMY_EPITHETS.iter().any(|e| enemy.name.ends_with(e));
                assert_eq!(has_epithet, enemy.level >= EPITHET_MIN_LEVEL, "{}", enemy.name);

                let base = ENEMY_EPITHETS
                    .iter()
                    .find_map(|e| enemy.name.strip_suffix(&format!(" {}", e)))
                    .unwrap_or(&enemy.name);
                assert!(names_for_level(enemy.level).contains(&base), "{}", enemy.name);
            }
        }
    }

    #[test]
    fn test_generation_reproducible() {
        let a = generate_enemy(4, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generate_enemy(4, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.name, b.name);
        assert_eq!(a.level, b.level);
    }
}
