//! Battle configuration.
//!
//! Every field defaults to the values in [`constants`](super::constants), so an
//! empty JSON object is a valid config.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Probabilities steering the enemy decision table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyTuning {
    /// Chance to try the leap skill when out of melee range.
    pub leap_chance: f64,
    /// Chance to jump toward the opponent when out of range and not leaping.
    pub jump_chance: f64,
    /// Chance to jump away instead of attacking while badly hurt.
    pub disengage_chance: f64,
    /// Share of the in-range roll that picks the basic attack.
    pub basic_attack_weight: f64,
    /// Share of the in-range roll that picks the strong attack.
    /// Whatever remains above basic + strong picks a jump.
    pub strong_attack_weight: f64,
    /// Health fraction below which the combatant counts as badly hurt.
    pub low_health_ratio: f64,
}

impl Default for PolicyTuning {
    fn default() -> Self {
        Self {
            leap_chance: LEAP_CHANCE,
            jump_chance: JUMP_CHANCE,
            disengage_chance: DISENGAGE_CHANCE,
            basic_attack_weight: BASIC_ATTACK_WEIGHT,
            strong_attack_weight: STRONG_ATTACK_WEIGHT,
            low_health_ratio: LOW_HEALTH_RATIO,
        }
    }
}

impl PolicyTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("leap_chance", self.leap_chance),
            ("jump_chance", self.jump_chance),
            ("disengage_chance", self.disengage_chance),
            ("basic_attack_weight", self.basic_attack_weight),
            ("strong_attack_weight", self.strong_attack_weight),
            ("low_health_ratio", self.low_health_ratio),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }

        let sum = self.basic_attack_weight + self.strong_attack_weight;
        if sum > 1.0 {
            return Err(ConfigError::WeightsExceedOne { sum });
        }
        Ok(())
    }
}

/// Tunables for a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Ticks the controller waits after the player's action before the enemy acts.
    pub enemy_turn_delay: u32,
    /// How many recent log lines the presentation layer shows.
    pub log_display_len: usize,
    pub policy: PolicyTuning,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            enemy_turn_delay: ENEMY_TURN_DELAY_TICKS,
            log_display_len: LOG_DISPLAY_LEN,
            policy: PolicyTuning::default(),
        }
    }
}

impl BattleConfig {
    /// Parses and validates a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_display_len == 0 {
            return Err(ConfigError::EmptyLogView);
        }
        self.policy.validate()
    }
}
