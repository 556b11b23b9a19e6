//! The combatant: the shared data unit for the player and every enemy.

use super::attributes::Attributes;
use super::derived_stats::DerivedStats;
use super::equipment::Loadout;
use super::skills::{Skill, SkillBook};
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// A point in arena coordinates. `y` grows downward, so airborne poses have
/// `y` below the ground value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn grounded(x: f64) -> Self {
        Self { x, y: GROUND_Y }
    }
}

/// Horizontal orientation. Also used for the resolved direction of a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(&self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Frame-counted animation flags advanced by
/// [`update_animation`](crate::combat::animation::update_animation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub is_attacking: bool,
    pub attack_frame: u32,
    pub is_hit: bool,
    pub hit_frame: u32,
    pub is_jumping: bool,
    pub jump_frame: u32,
    /// Horizontal direction of the jump in progress, fixed when it starts.
    pub jump_direction: Option<Facing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub level: u32,
    pub attributes: Attributes,

    pub health: u32,
    pub max_health: u32,
    pub stamina: u32,
    pub max_stamina: u32,

    pub gold: u32,
    pub experience: u32,
    pub experience_to_level: u32,

    pub loadout: Loadout,
    pub skills: SkillBook,

    pub base_position: Position,
    pub position: Position,
    pub facing: Facing,
    pub move_speed: f64,
    pub move_stamina_cost: u32,
    pub jump_height: f64,
    pub jump_distance: f64,
    pub jump_stamina_cost: u32,

    pub animation: AnimationState,
}

impl Combatant {
    /// Creates a combatant at full health and stamina, standing at `start_x`.
    pub fn new(
        name: impl Into<String>,
        level: u32,
        attributes: Attributes,
        loadout: Loadout,
        skills: SkillBook,
        start_x: f64,
        facing: Facing,
    ) -> Self {
        let derived = DerivedStats::from_attributes(&attributes);
        let base_position = Position::grounded(start_x.clamp(ARENA_MIN_X, ARENA_MAX_X));

        Self {
            name: name.into(),
            level: level.max(1),
            attributes,
            health: derived.max_health,
            max_health: derived.max_health,
            stamina: derived.max_stamina,
            max_stamina: derived.max_stamina,
            gold: 0,
            experience: 0,
            experience_to_level: STARTING_XP_TO_LEVEL,
            loadout,
            skills,
            base_position,
            position: base_position,
            facing,
            move_speed: derived.move_speed,
            move_stamina_cost: MOVE_STAMINA_COST,
            jump_height: derived.jump_height,
            jump_distance: derived.jump_distance,
            jump_stamina_cost: JUMP_STAMINA_COST,
            animation: AnimationState::default(),
        }
    }

    pub fn derived_stats(&self) -> DerivedStats {
        DerivedStats::from_attributes(&self.attributes)
    }

    /// Re-derives every resource and movement parameter from the current
    /// attributes, then refills health and stamina.
    pub fn recompute_and_restore(&mut self) {
        let derived = self.derived_stats();
        self.max_health = derived.max_health;
        self.max_stamina = derived.max_stamina;
        self.move_speed = derived.move_speed;
        self.jump_height = derived.jump_height;
        self.jump_distance = derived.jump_distance;
        self.health = self.max_health;
        self.stamina = self.max_stamina;
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f64 / self.max_health as f64
    }

    /// Horizontal distance to another combatant.
    pub fn distance_to(&self, other: &Combatant) -> f64 {
        (self.position.x - other.position.x).abs()
    }

    /// Removes up to `amount` health and returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }

    /// Restores up to `amount` health and returns how much was actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_health.saturating_sub(self.health));
        self.health += gained;
        gained
    }

    pub fn spend_stamina(&mut self, cost: u32) {
        self.stamina = self.stamina.saturating_sub(cost);
    }

    /// Restores up to `amount` stamina and returns how much was actually gained.
    pub fn recover_stamina(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_stamina.saturating_sub(self.stamina));
        self.stamina += gained;
        gained
    }

    /// Turns to face `other`, unless mid-jump or standing on the same spot.
    pub fn face_toward(&mut self, other: &Combatant) {
        if self.animation.is_jumping {
            return;
        }
        if other.position.x > self.position.x {
            self.facing = Facing::Right;
        } else if other.position.x < self.position.x {
            self.facing = Facing::Left;
        }
    }

    /// Returns to the base position with all animations cleared.
    pub fn reset_for_battle(&mut self) {
        self.position = self.base_position;
        self.animation = AnimationState::default();
    }

    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            name: self.name.clone(),
            level: self.level,
            position: self.position,
            facing: self.facing,
            health: self.health,
            max_health: self.max_health,
            stamina: self.stamina,
            max_stamina: self.max_stamina,
            animation: self.animation,
        }
    }
}

/// Read-only view of a combatant for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub name: String,
    pub level: u32,
    pub position: Position,
    pub facing: Facing,
    pub health: u32,
    pub max_health: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub animation: AnimationState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::skills::player_skills;

    fn sample() -> Combatant {
        Combatant::new(
            "Tester",
            1,
            Attributes::new(),
            Loadout::new("Rusty Sword", 5, "Cloth Tunic", 2),
            player_skills(),
            PLAYER_START_X,
            Facing::Right,
        )
    }

    #[test]
    fn test_new_starts_full_and_grounded() {
        let c = sample();
        assert_eq!(c.health, 130);
        assert_eq!(c.max_health, 130);
        assert_eq!(c.stamina, 115);
        assert_eq!(c.position, Position { x: 200.0, y: GROUND_Y });
        assert_eq!(c.position, c.base_position);
        assert_eq!(c.experience_to_level, 100);
        assert!(!c.animation.is_jumping);
    }

    #[test]
    fn test_start_x_clamped_to_arena() {
        let c = Combatant::new(
            "Far Away",
            1,
            Attributes::new(),
            Loadout::new("Stick", 1, "Rags", 0),
            player_skills(),
            10_000.0,
            Facing::Left,
        );
        assert_eq!(c.position.x, ARENA_MAX_X);
    }

    #[test]
    fn test_take_damage_saturates_at_zero() {
        let mut c = sample();
        assert_eq!(c.take_damage(50), 50);
        assert_eq!(c.health, 80);
        assert_eq!(c.take_damage(500), 80);
        assert_eq!(c.health, 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_heal_and_recover_clamp_to_max() {
        let mut c = sample();
        c.take_damage(10);
        assert_eq!(c.heal(100), 10);
        assert_eq!(c.health, c.max_health);

        c.spend_stamina(1000);
        assert_eq!(c.stamina, 0);
        assert_eq!(c.recover_stamina(500), c.max_stamina);
        assert_eq!(c.stamina, c.max_stamina);
    }

    #[test]
    fn test_overfull_resources_gain_nothing() {
        let mut c = sample();
        c.health = c.max_health + 20;
        c.stamina = c.max_stamina + 5;
        assert_eq!(c.heal(10), 0);
        assert_eq!(c.recover_stamina(10), 0);
        assert_eq!(c.health, c.max_health + 20);
    }

    #[test]
    fn test_face_toward() {
        let mut a = sample();
        let mut b = sample();
        b.position.x = 100.0;
        a.face_toward(&b);
        assert_eq!(a.facing, Facing::Left);

        b.position.x = 300.0;
        a.animation.is_jumping = true;
        a.face_toward(&b);
        assert_eq!(a.facing, Facing::Left);

        a.animation.is_jumping = false;
        a.face_toward(&b);
        assert_eq!(a.facing, Facing::Right);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut c = sample();
        c.take_damage(7);
        c.animation.is_hit = true;
        let snap = c.snapshot();
        assert_eq!(snap.name, "Tester");
        assert_eq!(snap.health, 123);
        assert!(snap.animation.is_hit);
        assert_eq!(snap.position, c.position);
    }

    #[test]
    fn test_reset_for_battle() {
        let mut c = sample();
        c.position = Position { x: 400.0, y: 250.0 };
        c.animation.is_attacking = true;
        c.animation.attack_frame = 4;
        c.reset_for_battle();
        assert_eq!(c.position, c.base_position);
        assert_eq!(c.animation, AnimationState::default());
    }
}
