//! Error types for the fallible, non-combat surfaces of the crate.
//!
//! Combat itself never fails with an error: an illegal action is an
//! [`ActionOutcome`](crate::combat::ActionOutcome) with `succeeded == false`.

use thiserror::Error;

/// Errors raised while loading or validating a [`BattleConfig`](super::BattleConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("attack weights sum to {sum}, which exceeds 1")]
    WeightsExceedOne { sum: f64 },

    #[error("log_display_len must be at least 1")]
    EmptyLogView,
}

/// Errors raised while parsing a player action request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("unknown action: {0:?}")]
    UnknownAction(String),

    #[error("attack requires a skill name")]
    MissingSkill,

    #[error("unknown jump direction: {0:?}")]
    UnknownJumpDirection(String),
}

/// Errors raised during character creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationError {
    #[error("character name cannot be empty")]
    EmptyName,

    #[error("character name is {len} characters long, limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("allocation spends {spent} points but {available} are available")]
    Overspent { spent: u32, available: u32 },

    #[error("allocation leaves {remaining} points unspent")]
    Unspent { remaining: u32 },
}

/// Errors raised when changing equipped items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipError {
    #[error("no weapon named {0:?} is owned")]
    UnknownWeapon(String),

    #[error("no armor named {0:?} is owned")]
    UnknownArmor(String),
}
