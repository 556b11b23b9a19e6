//! The arena loop around individual battles: the player persists between
//! fights, enemies are generated fresh for each one.

use super::controller::{Battle, TurnState, Victory};
use crate::character::combatant::Combatant;
use crate::character::progression::recuperate;
use crate::combat::spawn::generate_enemy;
use crate::core::config::BattleConfig;
use rand::Rng;

/// How a concluded battle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleConclusion {
    Won(Option<Victory>),
    Lost,
    /// Handed back before reaching a terminal state.
    Abandoned,
}

impl BattleConclusion {
    /// A loss ends the session.
    pub fn is_session_over(&self) -> bool {
        matches!(self, BattleConclusion::Lost)
    }
}

#[derive(Debug, Clone)]
pub struct ArenaSession {
    player: Combatant,
    config: BattleConfig,
    battles_won: u32,
}

impl ArenaSession {
    pub fn new(player: Combatant, config: BattleConfig) -> Self {
        Self {
            player,
            config,
            battles_won: 0,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.player
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn battles_won(&self) -> u32 {
        self.battles_won
    }

    /// Generates an opponent for the player's level and starts a battle with
    /// both combatants on their base positions. The battle works on a copy of
    /// the player; [`conclude`](Self::conclude) brings the result back.
    pub fn enter_battle(&self, rng: &mut impl Rng) -> Battle {
        let mut player = self.player.clone();
        player.reset_for_battle();
        let mut enemy = generate_enemy(player.level, rng);
        enemy.reset_for_battle();

        tracing::debug!(
            player_level = player.level,
            enemy = %enemy.name,
            enemy_level = enemy.level,
            "entering battle"
        );
        Battle::new(player, enemy, self.config)
    }

    /// Takes the player back from a finished (or abandoned) battle.
    pub fn conclude(&mut self, mut battle: Battle) -> BattleConclusion {
        let state = battle.state();
        let victory = battle.take_victory();
        let (mut player, _enemy) = battle.into_combatants();
        player.reset_for_battle();
        self.player = player;

        match state {
            TurnState::BattleWon => {
                self.battles_won += 1;
                BattleConclusion::Won(victory)
            }
            TurnState::BattleLost => BattleConclusion::Lost,
            TurnState::PlayerTurn | TurnState::EnemyTurnPending { .. } => {
                BattleConclusion::Abandoned
            }
        }
    }

    /// Arena rest between battles.
    pub fn recuperate(&mut self) -> String {
        recuperate(&mut self.player)
    }
}
