//! Simulation configuration.

use crate::character::creation::CharacterClass;
use crate::core::config::BattleConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated careers
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Stop a career after this many victories
    pub max_battles: u32,

    /// Abandon a battle (and the career) after this many ticks
    pub max_ticks_per_battle: u64,

    /// Class of every simulated player
    pub class: CharacterClass,

    /// Name given to simulated players
    pub player_name: String,

    /// Recuperate between battles when health falls below this fraction
    pub recuperate_below: f64,

    /// Battle tunables shared by every fight
    pub battle: BattleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_battles: 50,
            max_ticks_per_battle: 100_000,
            class: CharacterClass::Warrior,
            player_name: "Challenger".to_string(),
            recuperate_below: 0.5,
            battle: BattleConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small, fast configuration for smoke checks, with no pause before the
    /// enemy's turn.
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_battles: 20,
            battle: BattleConfig {
                enemy_turn_delay: 0,
                ..BattleConfig::default()
            },
            ..Default::default()
        }
    }
}
