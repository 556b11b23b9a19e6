//! Turn state machine for one battle.
//!
//! The controller owns both combatants for the duration of the battle. Each
//! frame the caller invokes [`Battle::tick`]; player input arrives through
//! [`Battle::submit`] whenever the state is [`TurnState::PlayerTurn`].

use super::log::BattleLog;
use crate::character::combatant::{Combatant, CombatantSnapshot};
use crate::character::progression::gain_experience;
use crate::combat::actions::{check_action, perform};
use crate::combat::animation::update_animation;
use crate::combat::policy::EnemyPolicy;
use crate::combat::types::{ActionOutcome, CombatAction};
use crate::core::config::BattleConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    PlayerTurn,
    /// The enemy acts on the first tick that finds `delay_remaining` at 0.
    EnemyTurnPending { delay_remaining: u32 },
    BattleWon,
    BattleLost,
}

impl TurnState {
    pub fn is_over(&self) -> bool {
        matches!(self, TurnState::BattleWon | TurnState::BattleLost)
    }
}

/// Rewards granted when the player wins, for a one-time announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub experience: u32,
    pub gold: u32,
    pub leveled_up: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Battle {
    player: Combatant,
    enemy: Combatant,
    state: TurnState,
    config: BattleConfig,
    policy: EnemyPolicy,
    log: BattleLog,
    victory: Option<Victory>,
    ticks: u64,
    player_actions: u32,
    enemy_actions: u32,
}

impl Battle {
    pub fn new(player: Combatant, enemy: Combatant, config: BattleConfig) -> Self {
        let policy = EnemyPolicy::for_enemy(config.policy);
        let mut log = BattleLog::new();
        log.push(
            format!("A {} (Level {}) appears!", enemy.name, enemy.level),
            false,
        );

        let mut battle = Self {
            player,
            enemy,
            state: TurnState::PlayerTurn,
            config,
            policy,
            log,
            victory: None,
            ticks: 0,
            player_actions: 0,
            enemy_actions: 0,
        };
        battle.face_each_other();
        battle
    }

    /// Replaces the enemy's decision table.
    pub fn with_policy(mut self, policy: EnemyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn player_snapshot(&self) -> CombatantSnapshot {
        self.player.snapshot()
    }

    pub fn enemy_snapshot(&self) -> CombatantSnapshot {
        self.enemy.snapshot()
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// The log tail sized by the configured display length.
    pub fn recent_log(&self) -> Vec<&str> {
        self.log
            .recent(self.config.log_display_len)
            .iter()
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Successful actions taken by (player, enemy).
    pub fn action_counts(&self) -> (u32, u32) {
        (self.player_actions, self.enemy_actions)
    }

    pub fn victory(&self) -> Option<&Victory> {
        self.victory.as_ref()
    }

    /// Hands out the victory record once; later calls return `None`.
    pub fn take_victory(&mut self) -> Option<Victory> {
        self.victory.take()
    }

    /// Whether the player could submit `action` right now.
    pub fn is_action_enabled(&self, action: &CombatAction) -> bool {
        self.state == TurnState::PlayerTurn
            && check_action(&self.player, &self.enemy, action).is_none()
    }

    /// Executes a player action. Failed actions are logged but keep the turn.
    pub fn submit(&mut self, action: &CombatAction, rng: &mut impl Rng) -> ActionOutcome {
        if self.state != TurnState::PlayerTurn {
            return ActionOutcome::failure("It's not your turn!");
        }

        let outcome = perform(&mut self.player, &mut self.enemy, action, rng);
        self.log.push(outcome.message.clone(), true);
        if !outcome.succeeded {
            tracing::debug!(%action, message = %outcome.message, "player action refused");
            return outcome;
        }
        self.player_actions += 1;

        if !self.enemy.is_alive() {
            self.win();
        } else {
            self.state = TurnState::EnemyTurnPending {
                delay_remaining: self.config.enemy_turn_delay,
            };
            tracing::debug!(%action, "player turn done");
        }
        outcome
    }

    /// Advances one frame: facing, both animations, then at most one state
    /// transition. Returns the enemy's outcome on the tick it acts.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<ActionOutcome> {
        self.ticks += 1;
        self.face_each_other();
        update_animation(&mut self.player);
        update_animation(&mut self.enemy);

        let TurnState::EnemyTurnPending { delay_remaining } = self.state else {
            return None;
        };
        if delay_remaining > 0 {
            self.state = TurnState::EnemyTurnPending {
                delay_remaining: delay_remaining - 1,
            };
            return None;
        }

        let outcome = self
            .policy
            .choose_action(&mut self.enemy, &mut self.player, rng);
        self.log.push(outcome.message.clone(), false);
        if outcome.succeeded {
            self.enemy_actions += 1;
        }

        if !self.player.is_alive() {
            self.lose();
        } else {
            self.state = TurnState::PlayerTurn;
            tracing::debug!(message = %outcome.message, "enemy turn done");
        }
        Some(outcome)
    }

    /// Gives both combatants back, ending the battle.
    pub fn into_combatants(self) -> (Combatant, Combatant) {
        (self.player, self.enemy)
    }

    fn face_each_other(&mut self) {
        self.player.face_toward(&self.enemy);
        self.enemy.face_toward(&self.player);
    }

    fn win(&mut self) {
        self.state = TurnState::BattleWon;
        self.log
            .push(format!("{} has been defeated!", self.enemy.name), false);

        let bounty = self.enemy.bounty();
        let report = gain_experience(&mut self.player, bounty.experience);
        self.player.gold = self.player.gold.saturating_add(bounty.gold);
        self.log.push(
            format!(
                "You gained {} experience and {} gold!",
                bounty.experience, bounty.gold
            ),
            false,
        );
        if report.leveled_up {
            self.log.push(report.message.clone(), false);
        }

        tracing::info!(
            enemy = %self.enemy.name,
            enemy_level = self.enemy.level,
            experience = bounty.experience,
            gold = bounty.gold,
            leveled_up = report.leveled_up,
            ticks = self.ticks,
            "battle won"
        );
        self.victory = Some(Victory {
            experience: bounty.experience,
            gold: bounty.gold,
            leveled_up: report.leveled_up,
            message: report.message,
        });
    }

    fn lose(&mut self) {
        self.state = TurnState::BattleLost;
        self.log
            .push(format!("{} has been defeated!", self.player.name), false);
        tracing::info!(
            enemy = %self.enemy.name,
            enemy_level = self.enemy.level,
            ticks = self.ticks,
            "battle lost"
        );
    }
}
