use crate::core::constants::BASE_ATTRIBUTE_VALUE;
use serde::{Deserialize, Serialize};

pub const NUM_ATTRIBUTES: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Strength,
    Agility,
    Armor,
    Stamina,
    Vitality,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Agility,
            AttributeType::Armor,
            AttributeType::Stamina,
            AttributeType::Vitality,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Agility => 1,
            AttributeType::Armor => 2,
            AttributeType::Stamina => 3,
            AttributeType::Vitality => 4,
        }
    }
}

/// Primary attributes of a combatant. All values are non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    /// Every attribute at the base value.
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn from_values(
        strength: u32,
        agility: u32,
        armor: u32,
        stamina: u32,
        vitality: u32,
    ) -> Self {
        Self {
            values: [strength, agility, armor, stamina, vitality],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    pub fn raise(&mut self, attr: AttributeType, amount: u32) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }

    pub fn strength(&self) -> u32 {
        self.get(AttributeType::Strength)
    }

    pub fn agility(&self) -> u32 {
        self.get(AttributeType::Agility)
    }

    pub fn armor(&self) -> u32 {
        self.get(AttributeType::Armor)
    }

    pub fn stamina(&self) -> u32 {
        self.get(AttributeType::Stamina)
    }

    pub fn vitality(&self) -> u32 {
        self.get(AttributeType::Vitality)
    }

    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}
