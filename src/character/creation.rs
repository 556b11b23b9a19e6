//! Character creation: class choice, free stat points, and name validation.

use super::attributes::{AttributeType, Attributes, NUM_ATTRIBUTES};
use super::combatant::{Combatant, Facing};
use super::equipment::Loadout;
use super::skills::player_skills;
use crate::core::constants::*;
use crate::core::error::CreationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Rogue,
    Knight,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Warrior,
        CharacterClass::Rogue,
        CharacterClass::Knight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Rogue => "Rogue",
            Self::Knight => "Knight",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Warrior => "High Strength and Health. Born for battle.",
            Self::Rogue => "High Agility. Masters of evasion and quick strikes.",
            Self::Knight => "High Armor. Well-protected defenders.",
        }
    }

    /// Attribute bonuses granted on top of the base values.
    pub fn bonuses(&self) -> &'static [(AttributeType, u32)] {
        match self {
            Self::Warrior => &[(AttributeType::Strength, 5), (AttributeType::Vitality, 2)],
            Self::Rogue => &[(AttributeType::Agility, 5), (AttributeType::Armor, 2)],
            Self::Knight => &[(AttributeType::Armor, 5), (AttributeType::Strength, 2)],
        }
    }

    /// Case-insensitive lookup by class name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Free points distributed at creation, one counter per attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatAllocation {
    points: [u32; NUM_ATTRIBUTES],
}

impl StatAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spreads `CREATION_STAT_POINTS` as evenly as possible, remainder to the
    /// earliest attributes.
    pub fn balanced() -> Self {
        let mut allocation = Self::new();
        let share = CREATION_STAT_POINTS / NUM_ATTRIBUTES as u32;
        let extra = (CREATION_STAT_POINTS % NUM_ATTRIBUTES as u32) as usize;
        for (i, attr) in AttributeType::all().into_iter().enumerate() {
            let bonus = if i < extra { 1 } else { 0 };
            allocation.points[attr.index()] = share + bonus;
        }
        allocation
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.points[attr.index()]
    }

    pub fn spent(&self) -> u32 {
        self.points.iter().sum()
    }

    pub fn remaining(&self) -> u32 {
        CREATION_STAT_POINTS.saturating_sub(self.spent())
    }

    /// Adds a point if any remain. Returns whether the point was added.
    pub fn increment(&mut self, attr: AttributeType) -> bool {
        if self.remaining() == 0 {
            return false;
        }
        self.points[attr.index()] += 1;
        true
    }

    /// Removes a point if the attribute has any. Returns whether one was removed.
    pub fn decrement(&mut self, attr: AttributeType) -> bool {
        let slot = &mut self.points[attr.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn validate(&self) -> Result<(), CreationError> {
        let spent = self.spent();
        if spent > CREATION_STAT_POINTS {
            return Err(CreationError::Overspent {
                spent,
                available: CREATION_STAT_POINTS,
            });
        }
        if spent < CREATION_STAT_POINTS {
            return Err(CreationError::Unspent {
                remaining: CREATION_STAT_POINTS - spent,
            });
        }
        Ok(())
    }
}

pub fn validate_name(name: &str) -> Result<String, CreationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CreationError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CreationError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(trimmed.to_string())
}

/// Builds a level-1 player from a name, class and fully spent allocation.
pub fn create_player(
    name: &str,
    class: CharacterClass,
    allocation: &StatAllocation,
) -> Result<Combatant, CreationError> {
    let name = validate_name(name)?;
    allocation.validate()?;

    let mut attributes = Attributes::new();
    for attr in AttributeType::all() {
        attributes.raise(attr, allocation.get(attr));
    }
    for &(attr, bonus) in class.bonuses() {
        attributes.raise(attr, bonus);
    }

    let mut player = Combatant::new(
        name,
        1,
        attributes,
        Loadout::new("Rusty Sword", 5, "Cloth Tunic", 2),
        player_skills(),
        PLAYER_START_X,
        Facing::Right,
    );
    player.gold = STARTING_GOLD;

    tracing::debug!(
        name = %player.name,
        class = class.name(),
        max_health = player.max_health,
        max_stamina = player.max_stamina,
        "player created"
    );
    Ok(player)
}
