//! Attack skills and the default skill books.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a skill reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    /// Usable only within melee range.
    Melee,
    /// Usable only outside melee range; closes distance before striking.
    Leap,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub kind: SkillKind,
    /// Multiplier applied to strength + weapon bonus. Always > 0.
    pub damage_multiplier: f64,
    /// Base hit probability in (0, 1].
    pub accuracy: f64,
    pub stamina_cost: u32,
}

impl Skill {
    pub const fn melee(damage_multiplier: f64, accuracy: f64, stamina_cost: u32) -> Self {
        Self {
            kind: SkillKind::Melee,
            damage_multiplier,
            accuracy,
            stamina_cost,
        }
    }

    pub const fn leap(damage_multiplier: f64, accuracy: f64, stamina_cost: u32) -> Self {
        Self {
            kind: SkillKind::Leap,
            damage_multiplier,
            accuracy,
            stamina_cost,
        }
    }

    pub fn is_leap(&self) -> bool {
        self.kind == SkillKind::Leap
    }
}

pub const QUICK_STRIKE: &str = "Quick Strike";
pub const HEAVY_STRIKE: &str = "Heavy Strike";
pub const LUNGE: &str = "Lunge";

pub const STRIKE: &str = "Strike";
pub const FIERCE_ATTACK: &str = "Fierce Attack";
pub const POUNCE: &str = "Pounce";

pub type SkillBook = BTreeMap<String, Skill>;

pub fn player_skills() -> SkillBook {
    BTreeMap::from([
        (QUICK_STRIKE.to_string(), Skill::melee(0.8, 0.9, 10)),
        (HEAVY_STRIKE.to_string(), Skill::melee(1.5, 0.7, 20)),
        (LUNGE.to_string(), Skill::leap(1.0, 0.75, 25)),
    ])
}

pub fn enemy_skills() -> SkillBook {
    BTreeMap::from([
        (STRIKE.to_string(), Skill::melee(1.0, 0.8, 10)),
        (FIERCE_ATTACK.to_string(), Skill::melee(1.3, 0.6, 15)),
        (POUNCE.to_string(), Skill::leap(1.1, 0.7, 20)),
    ])
}
