use crate::core::error::EquipError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owned weapons and armor with exactly one of each equipped.
///
/// The equipped keys are always present in their maps: the constructor seeds
/// both, and equipping only accepts owned names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    weapons: BTreeMap<String, u32>,
    equipped_weapon: String,
    armor_items: BTreeMap<String, u32>,
    equipped_armor: String,
}

impl Loadout {
    pub fn new(weapon: &str, weapon_bonus: u32, armor: &str, armor_bonus: u32) -> Self {
        Self {
            weapons: BTreeMap::from([(weapon.to_string(), weapon_bonus)]),
            equipped_weapon: weapon.to_string(),
            armor_items: BTreeMap::from([(armor.to_string(), armor_bonus)]),
            equipped_armor: armor.to_string(),
        }
    }

    pub fn equipped_weapon(&self) -> &str {
        &self.equipped_weapon
    }

    pub fn equipped_armor(&self) -> &str {
        &self.equipped_armor
    }

    /// Flat damage bonus of the equipped weapon.
    pub fn weapon_bonus(&self) -> u32 {
        self.weapons.get(&self.equipped_weapon).copied().unwrap_or(0)
    }

    /// Flat mitigation of the equipped armor item.
    pub fn armor_bonus(&self) -> u32 {
        self.armor_items.get(&self.equipped_armor).copied().unwrap_or(0)
    }

    /// Adds (or re-rates) an owned weapon without equipping it.
    pub fn add_weapon(&mut self, name: &str, bonus: u32) {
        self.weapons.insert(name.to_string(), bonus);
    }

    /// Adds (or re-rates) an owned armor item without equipping it.
    pub fn add_armor(&mut self, name: &str, bonus: u32) {
        self.armor_items.insert(name.to_string(), bonus);
    }

    pub fn equip_weapon(&mut self, name: &str) -> Result<(), EquipError> {
        if !self.weapons.contains_key(name) {
            return Err(EquipError::UnknownWeapon(name.to_string()));
        }
        self.equipped_weapon = name.to_string();
        Ok(())
    }

    pub fn equip_armor(&mut self, name: &str) -> Result<(), EquipError> {
        if !self.armor_items.contains_key(name) {
            return Err(EquipError::UnknownArmor(name.to_string()));
        }
        self.equipped_armor = name.to_string();
        Ok(())
    }

    pub fn weapons(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weapons.iter().map(|(name, bonus)| (name.as_str(), *bonus))
    }

    pub fn armor_items(&self) -> impl Iterator<Item = (&str, u32)> {
        self.armor_items.iter().map(|(name, bonus)| (name.as_str(), *bonus))
    }
}
