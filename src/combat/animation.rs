//! Per-frame animation bookkeeping.

use super::math::clamp_to_arena;
use crate::character::combatant::Combatant;
use crate::core::constants::*;

/// Advances every running animation by one frame.
///
/// Called once per battle tick for both combatants, whoever's turn it is.
/// Attack and hit flags clear once their counter passes 10. A jump rises for
/// 10 frames and falls for 10, drifting `jump_distance / 20` per frame, and
/// lands exactly on the base height.
pub fn update_animation(combatant: &mut Combatant) {
    let anim = &mut combatant.animation;

    if anim.is_attacking {
        anim.attack_frame += 1;
        if anim.attack_frame > ATTACK_ANIMATION_FRAMES {
            anim.is_attacking = false;
            anim.attack_frame = 0;
        }
    }

    if anim.is_hit {
        anim.hit_frame += 1;
        if anim.hit_frame > HIT_ANIMATION_FRAMES {
            anim.is_hit = false;
            anim.hit_frame = 0;
        }
    }

    if anim.is_jumping {
        step_jump(combatant);
    }
}

fn step_jump(combatant: &mut Combatant) {
    let anim = &mut combatant.animation;
    anim.jump_frame += 1;
    let frame = anim.jump_frame;
    let sign = anim.jump_direction.map(|d| d.sign()).unwrap_or(0.0);

    let ascent = JUMP_ASCENT_FRAMES as f64;
    let lift = if frame <= JUMP_ASCENT_FRAMES {
        combatant.jump_height * (frame as f64 / ascent)
    } else {
        combatant.jump_height * (1.0 - (frame - JUMP_ASCENT_FRAMES) as f64 / ascent)
    };
    combatant.position.y = combatant.base_position.y - lift;

    let drift = combatant.jump_distance / JUMP_ANIMATION_FRAMES as f64;
    combatant.position.x = clamp_to_arena(combatant.position.x + sign * drift);

    if frame >= JUMP_ANIMATION_FRAMES {
        let anim = &mut combatant.animation;
        anim.is_jumping = false;
        anim.jump_frame = 0;
        anim.jump_direction = None;
        combatant.position.y = combatant.base_position.y;
        tracing::trace!(name = %combatant.name, x = combatant.position.x, "jump landed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Attributes;
    use crate::character::combatant::Facing;
    use crate::character::equipment::Loadout;
    use crate::character::skills::player_skills;
    use crate::combat::actions::jump;
    use crate::combat::types::JumpDirection;

    fn jumper(x: f64, facing: Facing) -> Combatant {
        Combatant::new(
            "Jumper",
            1,
            Attributes::new(),
            Loadout::new("Stick", 1, "Rags", 0),
            player_skills(),
            x,
            facing,
        )
    }

    #[test]
    fn test_attack_animation_lasts_ten_frames() {
        let mut c = jumper(300.0, Facing::Right);
        c.animation.is_attacking = true;
        for _ in 0..10 {
            update_animation(&mut c);
            assert!(c.animation.is_attacking);
        }
        update_animation(&mut c);
        assert!(!c.animation.is_attacking);
        assert_eq!(c.animation.attack_frame, 0);
    }

    #[test]
    fn test_hit_flash_decays_alongside_jump() {
        let mut c = jumper(300.0, Facing::Right);
        jump(&mut c, JumpDirection::Forward);
        c.animation.is_hit = true;
        for _ in 0..11 {
            update_animation(&mut c);
        }
        assert!(!c.animation.is_hit);
        assert!(c.animation.is_jumping);
    }

    #[test]
    fn test_jump_arc_and_landing() {
        let mut c = jumper(300.0, Facing::Right);
        jump(&mut c, JumpDirection::Forward);

        let mut peak = GROUND_Y;
        for frame in 1..=20 {
            update_animation(&mut c);
            peak = peak.min(c.position.y);
            if frame == 10 {
                assert_eq!(c.position.y, GROUND_Y - c.jump_height);
            }
            if frame < 20 {
                assert!(c.animation.is_jumping);
            }
        }

        assert_eq!(peak, GROUND_Y - c.jump_height);
        assert!(!c.animation.is_jumping);
        assert_eq!(c.animation.jump_direction, None);
        assert_eq!(c.position.y, c.base_position.y);
        assert!((c.position.x - (300.0 + c.jump_distance)).abs() < 1e-9);
    }

    #[test]
    fn test_backward_jump_drifts_against_facing() {
        let mut c = jumper(400.0, Facing::Right);
        jump(&mut c, JumpDirection::Backward);
        for _ in 0..20 {
            update_animation(&mut c);
        }
        assert!((c.position.x - (400.0 - c.jump_distance)).abs() < 1e-9);
    }

    #[test]
    fn test_jump_clamped_at_arena_edge() {
        let mut c = jumper(ARENA_MAX_X - 10.0, Facing::Right);
        jump(&mut c, JumpDirection::Forward);
        for _ in 0..20 {
            update_animation(&mut c);
            assert!(c.position.x <= ARENA_MAX_X);
        }
        assert_eq!(c.position.x, ARENA_MAX_X);
        assert_eq!(c.position.y, GROUND_Y);
    }

    #[test]
    fn test_idle_combatant_untouched() {
        let mut c = jumper(300.0, Facing::Left);
        let before = c.clone();
        update_animation(&mut c);
        assert_eq!(c, before);
    }
}
