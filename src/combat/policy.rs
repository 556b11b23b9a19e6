//! Enemy decision table.
//!
//! The same table drives any policy-controlled combatant: enemies use it over
//! their own skills, and the balance simulator uses it over the player's.

use super::actions::perform;
use super::types::{ActionOutcome, CombatAction, JumpDirection, MoveDirection};
use crate::character::combatant::{Combatant, Facing};
use crate::character::skills::{FIERCE_ATTACK, HEAVY_STRIKE, LUNGE, POUNCE, QUICK_STRIKE, STRIKE};
use crate::core::config::PolicyTuning;
use crate::core::constants::MELEE_RANGE;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyPolicy {
    /// Cheapest melee skill; also the universal fallback.
    pub basic_skill: String,
    pub strong_skill: String,
    pub leap_skill: String,
    pub tuning: PolicyTuning,
}

impl EnemyPolicy {
    pub fn new(basic_skill: &str, strong_skill: &str, leap_skill: &str, tuning: PolicyTuning) -> Self {
        Self {
            basic_skill: basic_skill.to_string(),
            strong_skill: strong_skill.to_string(),
            leap_skill: leap_skill.to_string(),
            tuning,
        }
    }

    /// Policy over the generated enemies' skill book.
    pub fn for_enemy(tuning: PolicyTuning) -> Self {
        Self::new(STRIKE, FIERCE_ATTACK, POUNCE, tuning)
    }

    /// Policy over the player's skill book, for automated play.
    pub fn for_player(tuning: PolicyTuning) -> Self {
        Self::new(QUICK_STRIKE, HEAVY_STRIKE, LUNGE, tuning)
    }

    /// Picks one action. Consumes between zero and two rolls from `rng`.
    pub fn decide(&self, actor: &Combatant, opponent: &Combatant, rng: &mut impl Rng) -> CombatAction {
        let basic_cost = skill_cost(actor, &self.basic_skill);
        if actor.animation.is_jumping || actor.stamina < basic_cost {
            tracing::debug!(actor = %actor.name, stamina = actor.stamina, "policy: rest");
            return CombatAction::Rest;
        }

        let distance = actor.distance_to(opponent);
        let basic = CombatAction::attack(&self.basic_skill);

        if distance > MELEE_RANGE {
            if rng.gen::<f64>() < self.tuning.leap_chance && can_afford(actor, &self.leap_skill) {
                tracing::debug!(actor = %actor.name, distance, "policy: leap");
                return CombatAction::attack(&self.leap_skill);
            }
            if rng.gen::<f64>() < self.tuning.jump_chance && can_jump(actor) {
                tracing::debug!(actor = %actor.name, distance, "policy: jump in");
                return CombatAction::Jump(jump_toward(actor, opponent));
            }
            tracing::debug!(actor = %actor.name, distance, "policy: close distance");
            return CombatAction::Move(direction_to(actor, opponent));
        }

        if actor.health_ratio() < self.tuning.low_health_ratio {
            if rng.gen::<f64>() < self.tuning.disengage_chance && can_jump(actor) {
                tracing::debug!(actor = %actor.name, "policy: disengage");
                return CombatAction::Jump(jump_away(actor, opponent));
            }
            if can_afford(actor, &self.strong_skill) {
                return CombatAction::attack(&self.strong_skill);
            }
            return basic;
        }

        let roll = rng.gen::<f64>();
        let strong_cutoff = self.tuning.basic_attack_weight + self.tuning.strong_attack_weight;
        let action = if roll < self.tuning.basic_attack_weight {
            basic
        } else if roll < strong_cutoff {
            if can_afford(actor, &self.strong_skill) {
                CombatAction::attack(&self.strong_skill)
            } else {
                basic
            }
        } else if can_jump(actor) {
            CombatAction::Jump(jump_toward(actor, opponent))
        } else {
            basic
        };
        tracing::debug!(actor = %actor.name, roll, action = %action, "policy: in range");
        action
    }

    /// Decides and immediately executes an action.
    pub fn choose_action(
        &self,
        actor: &mut Combatant,
        opponent: &mut Combatant,
        rng: &mut impl Rng,
    ) -> ActionOutcome {
        let action = self.decide(actor, opponent, rng);
        perform(actor, opponent, &action, rng)
    }
}

fn skill_cost(actor: &Combatant, skill: &str) -> u32 {
    actor.skill(skill).map(|s| s.stamina_cost).unwrap_or(0)
}

fn can_afford(actor: &Combatant, skill: &str) -> bool {
    actor
        .skill(skill)
        .is_some_and(|s| actor.stamina >= s.stamina_cost)
}

fn can_jump(actor: &Combatant) -> bool {
    !actor.animation.is_jumping && actor.stamina >= actor.jump_stamina_cost
}

fn direction_to(actor: &Combatant, opponent: &Combatant) -> MoveDirection {
    if opponent.position.x >= actor.position.x {
        MoveDirection::Right
    } else {
        MoveDirection::Left
    }
}

fn facing_to(actor: &Combatant, opponent: &Combatant) -> Facing {
    match direction_to(actor, opponent) {
        MoveDirection::Right => Facing::Right,
        MoveDirection::Left => Facing::Left,
    }
}

fn jump_toward(actor: &Combatant, opponent: &Combatant) -> JumpDirection {
    if actor.facing == facing_to(actor, opponent) {
        JumpDirection::Forward
    } else {
        JumpDirection::Backward
    }
}

fn jump_away(actor: &Combatant, opponent: &Combatant) -> JumpDirection {
    match jump_toward(actor, opponent) {
        JumpDirection::Forward => JumpDirection::Backward,
        JumpDirection::Backward => JumpDirection::Forward,
    }
}
