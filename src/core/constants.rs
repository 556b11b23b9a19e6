// Arena geometry
pub const ARENA_MIN_X: f64 = 50.0;
pub const ARENA_MAX_X: f64 = 750.0;
pub const GROUND_Y: f64 = 300.0;
pub const PLAYER_START_X: f64 = 200.0;
pub const ENEMY_START_X: f64 = 600.0;
pub const MELEE_RANGE: f64 = 100.0;

// Animation frame durations
pub const ATTACK_ANIMATION_FRAMES: u32 = 10;
pub const HIT_ANIMATION_FRAMES: u32 = 10;
pub const JUMP_ANIMATION_FRAMES: u32 = 20;
pub const JUMP_ASCENT_FRAMES: u32 = 10;

// Turn pacing
pub const ENEMY_TURN_DELAY_TICKS: u32 = 30;
pub const LOG_DISPLAY_LEN: usize = 5;

// Character attributes
pub const BASE_ATTRIBUTE_VALUE: u32 = 5;
pub const CREATION_STAT_POINTS: u32 = 10;
pub const MAX_NAME_LEN: usize = 15;

// Derived resources
pub const BASE_HEALTH: u32 = 80;
pub const HEALTH_PER_VITALITY: u32 = 10;
pub const BASE_STAMINA: u32 = 80;
pub const STAMINA_PER_AGILITY: u32 = 2;
pub const STAMINA_PER_STAMINA_STAT: u32 = 5;

// Movement
pub const BASE_MOVE_SPEED: f64 = 30.0;
pub const MOVE_SPEED_PER_AGILITY: f64 = 2.0;
pub const MOVE_STAMINA_COST: u32 = 5;
pub const LEAP_SPEED_MULTIPLIER: f64 = 2.5;

// Jumping: base value × (1 + agility × JUMP_SCALE_PER_AGILITY)
pub const BASE_JUMP_HEIGHT: f64 = 60.0;
pub const BASE_JUMP_DISTANCE: f64 = 120.0;
pub const JUMP_SCALE_PER_AGILITY: f64 = 0.05;
pub const JUMP_STAMINA_COST: u32 = 15;

// Resting
pub const MIN_REST_RECOVERY: u32 = 5;
pub const REST_RECOVERY_DIVISOR: u32 = 10;

// Experience and leveling
pub const STARTING_GOLD: u32 = 50;
pub const STARTING_XP_TO_LEVEL: u32 = 100;
pub const XP_TO_LEVEL_GROWTH: f64 = 1.5;
pub const LEVEL_UP_STRENGTH: u32 = 2;
pub const LEVEL_UP_AGILITY: u32 = 1;
pub const LEVEL_UP_ARMOR: u32 = 1;
pub const LEVEL_UP_STAMINA: u32 = 1;
pub const LEVEL_UP_VITALITY: u32 = 1;

// Enemy scaling: base + level × step
pub const ENEMY_BOUNTY_XP_BASE: u32 = 20;
pub const ENEMY_BOUNTY_XP_PER_LEVEL: u32 = 10;
pub const ENEMY_BOUNTY_GOLD_BASE: u32 = 10;
pub const ENEMY_BOUNTY_GOLD_PER_LEVEL: u32 = 5;
pub const EPITHET_MIN_LEVEL: u32 = 6;

// Enemy policy defaults
pub const LEAP_CHANCE: f64 = 0.3;
pub const JUMP_CHANCE: f64 = 0.15;
pub const DISENGAGE_CHANCE: f64 = 0.2;
pub const BASIC_ATTACK_WEIGHT: f64 = 0.6;
pub const STRONG_ATTACK_WEIGHT: f64 = 0.25;
pub const LOW_HEALTH_RATIO: f64 = 0.3;
