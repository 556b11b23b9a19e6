//! Action resolvers.
//!
//! Every resolver checks all of its preconditions before touching either
//! combatant, so a failed outcome never leaves partial side effects.

use super::math::*;
use super::types::{ActionOutcome, CombatAction, JumpDirection, MoveDirection};
use crate::character::combatant::Combatant;
use crate::character::skills::Skill;
use crate::core::constants::*;
use rand::Rng;

/// Checks skill knowledge, footing, range and stamina for an attack.
///
/// An airborne actor cannot attack. Range is checked before stamina: a leap skill refuses when already within
/// melee range, a melee skill refuses when beyond it.
pub fn validate_attack(
    actor: &Combatant,
    target: &Combatant,
    skill_name: &str,
) -> Result<Skill, ActionOutcome> {
    let Some(skill) = actor.skill(skill_name).copied() else {
        return Err(ActionOutcome::failure(format!(
            "{} doesn't know {}!",
            actor.name, skill_name
        )));
    };

    check_grounded(actor)?;

    let distance = actor.distance_to(target);
    if skill.is_leap() && distance <= MELEE_RANGE {
        return Err(ActionOutcome::failure(format!(
            "{} is already too close to {} to use {}!",
            actor.name, target.name, skill_name
        )));
    }
    if !skill.is_leap() && distance > MELEE_RANGE {
        return Err(ActionOutcome::failure(format!(
            "{} is too far to attack {}!",
            actor.name, target.name
        )));
    }
    if actor.stamina < skill.stamina_cost {
        return Err(ActionOutcome::failure(format!(
            "{} is too tired to use {}!",
            actor.name, skill_name
        )));
    }
    Ok(skill)
}

/// Attacks and moves need both feet on the ground; the jump arc owns
/// horizontal displacement until landing.
fn check_grounded(actor: &Combatant) -> Result<(), ActionOutcome> {
    if actor.animation.is_jumping {
        return Err(ActionOutcome::failure(format!(
            "{} is in the air!",
            actor.name
        )));
    }
    Ok(())
}

/// Resolves an attack with the named skill against `target`.
pub fn attack(
    actor: &mut Combatant,
    target: &mut Combatant,
    skill_name: &str,
    rng: &mut impl Rng,
) -> ActionOutcome {
    let skill = match validate_attack(actor, target, skill_name) {
        Ok(skill) => skill,
        Err(refusal) => return refusal,
    };

    actor.spend_stamina(skill.stamina_cost);
    actor.animation.is_attacking = true;
    actor.animation.attack_frame = 0;

    if skill.is_leap() {
        leap_toward(actor, target);
        if actor.distance_to(target) > MELEE_RANGE {
            return ActionOutcome::fell_short(format!(
                "{} leaps with {} but is still too far from {}!",
                actor.name, skill_name, target.name
            ));
        }
    }

    let chance = hit_chance(
        skill.accuracy,
        actor.attributes.agility(),
        target.attributes.agility(),
    );
    if !roll_hit(chance, rng) {
        tracing::debug!(actor = %actor.name, skill = skill_name, chance, "attack missed");
        return ActionOutcome::miss(format!(
            "{}'s {} missed {}!",
            actor.name, skill_name, target.name
        ));
    }

    let raw = raw_damage(
        actor.attributes.strength(),
        actor.loadout.weapon_bonus(),
        skill.damage_multiplier,
    );
    let damage = mitigate_damage(raw, target.loadout.armor_bonus(), target.attributes.armor());
    target.take_damage(damage);
    target.animation.is_hit = true;
    target.animation.hit_frame = 0;

    tracing::debug!(
        actor = %actor.name,
        target = %target.name,
        skill = skill_name,
        raw,
        damage,
        target_health = target.health,
        "attack hit"
    );
    ActionOutcome::hit(
        damage,
        format!(
            "{} hits {} with {} for {} damage!",
            actor.name, target.name, skill_name, damage
        ),
    )
}

/// Moves the actor `move_speed × LEAP_SPEED_MULTIPLIER` toward the target,
/// stopping at the target's melee boundary and inside the arena.
fn leap_toward(actor: &mut Combatant, target: &Combatant) {
    let step = actor.move_speed * LEAP_SPEED_MULTIPLIER;
    let x = actor.position.x;
    let destination = if target.position.x > x {
        (x + step).min(target.position.x - MELEE_RANGE)
    } else {
        (x - step).max(target.position.x + MELEE_RANGE)
    };
    actor.position.x = clamp_to_arena(destination);
}

/// Where a legal move ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    pub destination: f64,
    /// The step was cut short at melee range from the opponent.
    pub stops_near: bool,
    pub toward_opponent: bool,
}

/// Checks footing, stamina, arena edge and opponent blocking for a move.
pub fn plan_move(
    actor: &Combatant,
    direction: MoveDirection,
    opponent: Option<&Combatant>,
) -> Result<MovePlan, ActionOutcome> {
    check_grounded(actor)?;
    if actor.stamina < actor.move_stamina_cost {
        return Err(ActionOutcome::failure(format!(
            "{} is too tired to move!",
            actor.name
        )));
    }

    let x = actor.position.x;
    let at_edge = match direction {
        MoveDirection::Left => x <= ARENA_MIN_X,
        MoveDirection::Right => x >= ARENA_MAX_X,
    };
    if at_edge {
        let side = match direction {
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
        };
        return Err(ActionOutcome::failure(format!(
            "{} can't move any further {}!",
            actor.name, side
        )));
    }

    let nominal = clamp_to_arena(x + direction.sign() * actor.move_speed);

    let Some(opponent) = opponent else {
        return Ok(MovePlan {
            destination: nominal,
            stops_near: false,
            toward_opponent: false,
        });
    };

    let offset = opponent.position.x - x;
    let toward = offset * direction.sign() > 0.0;
    if !toward {
        return Ok(MovePlan {
            destination: nominal,
            stops_near: false,
            toward_opponent: false,
        });
    }

    if offset.abs() <= MELEE_RANGE {
        return Err(ActionOutcome::failure(format!(
            "{} can't move any closer to {}!",
            actor.name, opponent.name
        )));
    }

    let limit = clamp_to_arena(opponent.position.x - direction.sign() * MELEE_RANGE);
    let overshoots = match direction {
        MoveDirection::Left => nominal < limit,
        MoveDirection::Right => nominal > limit,
    };
    Ok(MovePlan {
        destination: if overshoots { limit } else { nominal },
        stops_near: overshoots,
        toward_opponent: true,
    })
}

/// Moves one step. When `opponent` is supplied and lies ahead, the actor
/// stops exactly at melee range rather than closing further.
pub fn move_in(
    actor: &mut Combatant,
    direction: MoveDirection,
    opponent: Option<&Combatant>,
) -> ActionOutcome {
    let plan = match plan_move(actor, direction, opponent) {
        Ok(plan) => plan,
        Err(refusal) => return refusal,
    };

    actor.spend_stamina(actor.move_stamina_cost);
    actor.position.x = plan.destination;

    let message = match opponent {
        Some(opponent) if plan.stops_near => {
            format!("{} stops near {}!", actor.name, opponent.name)
        }
        Some(opponent) if plan.toward_opponent => {
            format!("{} moves closer to {}!", actor.name, opponent.name)
        }
        Some(opponent) => format!("{} backs away from {}!", actor.name, opponent.name),
        None => match direction {
            MoveDirection::Left => format!("{} moves left!", actor.name),
            MoveDirection::Right => format!("{} moves right!", actor.name),
        },
    };
    ActionOutcome::success(message)
}

pub fn move_left(actor: &mut Combatant, opponent: Option<&Combatant>) -> ActionOutcome {
    move_in(actor, MoveDirection::Left, opponent)
}

pub fn move_right(actor: &mut Combatant, opponent: Option<&Combatant>) -> ActionOutcome {
    move_in(actor, MoveDirection::Right, opponent)
}

pub fn validate_jump(actor: &Combatant) -> Result<(), ActionOutcome> {
    if actor.stamina < actor.jump_stamina_cost {
        return Err(ActionOutcome::failure(format!(
            "{} is too tired to jump!",
            actor.name
        )));
    }
    if actor.animation.is_jumping {
        return Err(ActionOutcome::failure(format!(
            "{} is already in the air!",
            actor.name
        )));
    }
    Ok(())
}

/// Starts a jump. Displacement happens frame by frame in the animation tick.
pub fn jump(actor: &mut Combatant, direction: JumpDirection) -> ActionOutcome {
    if let Err(refusal) = validate_jump(actor) {
        return refusal;
    }

    actor.spend_stamina(actor.jump_stamina_cost);
    let heading = match direction {
        JumpDirection::Forward => actor.facing,
        JumpDirection::Backward => actor.facing.reversed(),
    };
    // Leaving the ground cuts any attack animation short.
    actor.animation.is_attacking = false;
    actor.animation.attack_frame = 0;
    actor.animation.is_jumping = true;
    actor.animation.jump_frame = 0;
    actor.animation.jump_direction = Some(heading);

    let label = match direction {
        JumpDirection::Forward => "forward",
        JumpDirection::Backward => "back",
    };
    ActionOutcome::success(format!("{} jumps {}!", actor.name, label))
}

/// Recovers stamina. Always succeeds.
pub fn rest(actor: &mut Combatant) -> ActionOutcome {
    let recovery = rest_recovery(actor.max_stamina, actor.attributes.stamina());
    let gained = actor.recover_stamina(recovery);
    ActionOutcome::success(format!(
        "{} rests and recovers {} stamina!",
        actor.name, gained
    ))
}

/// Returns the refusal an action would produce, without mutating anything.
/// `None` means the action is currently legal.
pub fn check_action(
    actor: &Combatant,
    opponent: &Combatant,
    action: &CombatAction,
) -> Option<ActionOutcome> {
    match action {
        CombatAction::Attack { skill } => validate_attack(actor, opponent, skill).err(),
        CombatAction::Move(direction) => plan_move(actor, *direction, Some(opponent)).err(),
        CombatAction::Jump(_) => validate_jump(actor).err(),
        CombatAction::Rest => None,
    }
}

/// Executes any action. Moves always treat `opponent` as a blocker.
pub fn perform(
    actor: &mut Combatant,
    opponent: &mut Combatant,
    action: &CombatAction,
    rng: &mut impl Rng,
) -> ActionOutcome {
    match action {
        CombatAction::Attack { skill } => attack(actor, opponent, skill, rng),
        CombatAction::Move(direction) => move_in(actor, *direction, Some(opponent)),
        CombatAction::Jump(direction) => jump(actor, *direction),
        CombatAction::Rest => rest(actor),
    }
}
