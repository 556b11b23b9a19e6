//! Integration test: Combat invariants
//!
//! Runs many seeded battles and checks the resource, position and
//! progression invariants after every submitted action and every tick.

use battle_arena::battle::{ArenaSession, Battle, TurnState};
use battle_arena::character::combatant::Combatant;
use battle_arena::character::creation::{create_player, CharacterClass, StatAllocation};
use battle_arena::character::progression::gain_experience;
use battle_arena::combat::policy::EnemyPolicy;
use battle_arena::core::config::{BattleConfig, PolicyTuning};
use battle_arena::core::constants::{ARENA_MAX_X, ARENA_MIN_X, GROUND_Y};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn assert_combatant_invariants(c: &Combatant) {
    assert!(c.health <= c.max_health, "{} health {}/{}", c.name, c.health, c.max_health);
    assert!(c.stamina <= c.max_stamina, "{} stamina {}/{}", c.name, c.stamina, c.max_stamina);
    assert!(
        (ARENA_MIN_X..=ARENA_MAX_X).contains(&c.position.x),
        "{} x {}",
        c.name,
        c.position.x
    );
    assert!(c.position.y <= GROUND_Y, "{} below ground", c.name);
    if !c.animation.is_jumping {
        assert_eq!(c.position.y, GROUND_Y, "{} floating", c.name);
    }
    assert!(
        !(c.animation.is_attacking && c.animation.is_jumping),
        "{} attacking mid-jump",
        c.name
    );
    assert!(c.animation.attack_frame <= 10);
    assert!(c.animation.hit_frame <= 10);
    assert!(c.animation.jump_frame <= 20);
    assert!(c.skills.len() == 3);
}

fn check(battle: &Battle) {
    assert_combatant_invariants(battle.player());
    assert_combatant_invariants(battle.enemy());
}

#[test]
fn test_invariants_hold_across_seeded_battles() {
    let autopilot = EnemyPolicy::for_player(PolicyTuning::default());
    let config = BattleConfig {
        enemy_turn_delay: 5,
        ..BattleConfig::default()
    };

    for seed in 0..40u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let class = CharacterClass::ALL[(seed % 3) as usize];
        let player = create_player("Tester", class, &StatAllocation::balanced()).unwrap();
        let session = ArenaSession::new(player, config);
        let mut battle = session.enter_battle(&mut rng);

        let mut ticks = 0;
        while !battle.is_over() && ticks < 50_000 {
            if battle.state() == TurnState::PlayerTurn {
                let action = autopilot.decide(battle.player(), battle.enemy(), &mut rng);
                let enabled = battle.is_action_enabled(&action);
                let outcome = battle.submit(&action, &mut rng);
                assert_eq!(outcome.succeeded, enabled, "{}", outcome.message);
                if outcome.hit == Some(true) {
                    assert!(outcome.damage.unwrap_or(0) >= 1);
                }
                check(&battle);
            }
            if let Some(outcome) = battle.tick(&mut rng) {
                if outcome.hit == Some(true) {
                    assert!(outcome.damage.unwrap_or(0) >= 1);
                }
            }
            check(&battle);
            ticks += 1;
        }
    }
}

#[test]
fn test_level_up_restores_and_never_shrinks() {
    let mut player =
        create_player("Grower", CharacterClass::Rogue, &StatAllocation::balanced()).unwrap();
    for _ in 0..10 {
        let before = (player.max_health, player.max_stamina, player.level);
        player.health = 1;
        player.stamina = 0;
        let needed = player.experience_to_level - player.experience;
        let report = gain_experience(&mut player, needed);
        assert!(report.leveled_up);
        assert_eq!(player.level, before.2 + 1);
        assert!(player.max_health >= before.0);
        assert!(player.max_stamina >= before.1);
        assert_eq!(player.health, player.max_health);
        assert_eq!(player.stamina, player.max_stamina);
    }
}

#[test]
fn test_single_level_per_experience_grant() {
    let mut player =
        create_player("Greedy", CharacterClass::Warrior, &StatAllocation::balanced()).unwrap();
    let report = gain_experience(&mut player, 1000);
    assert!(report.leveled_up);
    assert_eq!(player.level, 2);
    assert_eq!(player.experience, 900);
    assert_eq!(player.experience_to_level, 150);
}
