use super::attributes::Attributes;
use crate::core::constants::*;

/// Resources and movement parameters computed from primary attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub max_health: u32,
    pub max_stamina: u32,
    pub move_speed: f64,
    pub jump_height: f64,
    pub jump_distance: f64,
}

impl DerivedStats {
    pub fn from_attributes(attrs: &Attributes) -> Self {
        // Max Health = BASE_HEALTH + VIT × HEALTH_PER_VITALITY
        let max_health = BASE_HEALTH + attrs.vitality() * HEALTH_PER_VITALITY;

        // Max Stamina = BASE_STAMINA + AGI × 2 + STA × 5
        let max_stamina = BASE_STAMINA
            + attrs.agility() * STAMINA_PER_AGILITY
            + attrs.stamina() * STAMINA_PER_STAMINA_STAT;

        let agility = attrs.agility() as f64;
        let move_speed = BASE_MOVE_SPEED + agility * MOVE_SPEED_PER_AGILITY;

        let jump_scale = 1.0 + agility * JUMP_SCALE_PER_AGILITY;
        let jump_height = BASE_JUMP_HEIGHT * jump_scale;
        let jump_distance = BASE_JUMP_DISTANCE * jump_scale;

        Self {
            max_health,
            max_stamina,
            move_speed,
            jump_height,
            jump_distance,
        }
    }
}
