//! Main simulation runner driving real arena sessions.
//!
//! Every battle goes through `ArenaSession` and the `Battle` controller, so
//! simulated results follow the same rules as interactive play.

use super::config::SimConfig;
use super::report::SimReport;
use crate::battle::controller::{Battle, TurnState};
use crate::battle::session::{ArenaSession, BattleConclusion};
use crate::character::creation::{create_player, StatAllocation};
use crate::combat::policy::EnemyPolicy;
use crate::combat::types::CombatAction;
use crate::core::error::CreationError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Why a simulated career ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Defeated,
    /// Won `max_battles` fights without losing.
    Survived,
    /// A battle exceeded `max_ticks_per_battle`.
    TimedOut,
}

/// Statistics for one simulated career.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub outcome: RunOutcome,
    pub final_level: u32,
    pub battles_won: u32,
    pub final_gold: u32,
    pub recuperations: u32,
    pub total_ticks: u64,
    /// Tick count of every battle fought, in order.
    pub battle_ticks: Vec<u64>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, CreationError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng)?;
        tracing::info!(
            run = run_idx + 1,
            of = config.num_runs,
            outcome = ?run.outcome,
            level = run.final_level,
            battles_won = run.battles_won,
            ticks = run.total_ticks,
            "run finished"
        );
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(all_runs))
}

/// One career: fight until defeated, timed out, or `max_battles` won.
pub fn simulate_single_run(
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Result<RunStats, CreationError> {
    let player = create_player(&config.player_name, config.class, &StatAllocation::balanced())?;
    let mut session = ArenaSession::new(player, config.battle);
    let autopilot = EnemyPolicy::for_player(config.battle.policy);

    let mut recuperations = 0;
    let mut battle_ticks = Vec::new();

    let outcome = loop {
        if session.battles_won() >= config.max_battles {
            break RunOutcome::Survived;
        }
        if session.player().health_ratio() < config.recuperate_below {
            session.recuperate();
            recuperations += 1;
        }

        let mut battle = session.enter_battle(rng);
        drive_battle(&mut battle, &autopilot, config.max_ticks_per_battle, rng);
        battle_ticks.push(battle.ticks());

        match session.conclude(battle) {
            BattleConclusion::Won(_) => {}
            BattleConclusion::Lost => break RunOutcome::Defeated,
            BattleConclusion::Abandoned => break RunOutcome::TimedOut,
        }
    };

    let player = session.player();
    Ok(RunStats {
        outcome,
        final_level: player.level,
        battles_won: session.battles_won(),
        final_gold: player.gold,
        recuperations,
        total_ticks: battle_ticks.iter().sum(),
        battle_ticks,
    })
}

/// Plays one battle with `autopilot` choosing the player's actions. Illegal
/// choices fall back to resting so the turn always advances.
pub fn drive_battle(
    battle: &mut Battle,
    autopilot: &EnemyPolicy,
    max_ticks: u64,
    rng: &mut impl Rng,
) {
    while !battle.is_over() && battle.ticks() < max_ticks {
        if battle.state() == TurnState::PlayerTurn {
            let mut action = autopilot.decide(battle.player(), battle.enemy(), rng);
            if !battle.is_action_enabled(&action) {
                action = CombatAction::Rest;
            }
            battle.submit(&action, rng);
        }
        battle.tick(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::creation::CharacterClass;

    fn small_config(seed: u64) -> SimConfig {
        SimConfig {
            num_runs: 3,
            seed: Some(seed),
            max_battles: 5,
            ..SimConfig::quick()
        }
    }

    #[test]
    fn test_single_run_terminates() {
        let config = small_config(42);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let run = simulate_single_run(&config, &mut rng).unwrap();
        assert!(run.battles_won <= config.max_battles);
        assert!(run.final_level >= 1);
        assert!(!run.battle_ticks.is_empty());
        match run.outcome {
            RunOutcome::Survived => assert_eq!(run.battles_won, config.max_battles),
            RunOutcome::Defeated => assert!(run.battles_won < config.max_battles),
            RunOutcome::TimedOut => {
                assert!(run.battle_ticks.last().copied().unwrap_or(0) >= config.max_ticks_per_battle)
            }
        }
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let a = run_simulation(&small_config(7)).unwrap();
        let b = run_simulation(&small_config(7)).unwrap();
        assert_eq!(a.to_json(), b.to_json());
    }

    #[test]
    fn test_every_class_simulates() {
        for class in CharacterClass::ALL {
            let config = SimConfig {
                class,
                num_runs: 1,
                ..small_config(1)
            };
            let report = run_simulation(&config).unwrap();
            assert_eq!(report.num_runs, 1);
        }
    }

    #[test]
    fn test_invalid_player_name_is_an_error() {
        let config = SimConfig {
            player_name: "   ".to_string(),
            ..small_config(1)
        };
        assert_eq!(run_simulation(&config).unwrap_err(), CreationError::EmptyName);
    }

    #[test]
    fn test_tick_limit_abandons_battle() {
        let config = SimConfig {
            max_ticks_per_battle: 1,
            ..small_config(3)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let run = simulate_single_run(&config, &mut rng).unwrap();
        assert_eq!(run.outcome, RunOutcome::TimedOut);
        assert_eq!(run.battles_won, 0);
        assert_eq!(run.battle_ticks, vec![1]);
    }
}
