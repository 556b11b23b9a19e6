use crate::core::error::ParseActionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of every combat action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub succeeded: bool,
    /// Set for attacks that got as far as (or were meant to reach) a hit roll.
    pub hit: Option<bool>,
    /// Set for attacks that rolled: the mitigated damage, or 0 on a miss.
    pub damage: Option<u32>,
    pub message: String,
}

impl ActionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            hit: None,
            damage: None,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            hit: None,
            damage: None,
            message: message.into(),
        }
    }

    pub fn hit(damage: u32, message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            hit: Some(true),
            damage: Some(damage),
            message: message.into(),
        }
    }

    pub fn miss(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            hit: Some(false),
            damage: Some(0),
            message: message.into(),
        }
    }

    /// A leap that used its stamina but could not close the gap.
    pub fn fell_short(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            hit: Some(false),
            damage: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    pub fn sign(&self) -> f64 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Right => 1.0,
        }
    }
}

/// Jump direction relative to the jumper's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpDirection {
    Forward,
    Backward,
}

/// One discrete action request, from player input or a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Attack { skill: String },
    Move(MoveDirection),
    Jump(JumpDirection),
    Rest,
}

impl CombatAction {
    pub fn attack(skill: &str) -> Self {
        CombatAction::Attack {
            skill: skill.to_string(),
        }
    }
}

impl fmt::Display for CombatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatAction::Attack { skill } => write!(f, "attack {}", skill),
            CombatAction::Move(MoveDirection::Left) => write!(f, "left"),
            CombatAction::Move(MoveDirection::Right) => write!(f, "right"),
            CombatAction::Jump(JumpDirection::Forward) => write!(f, "jump forward"),
            CombatAction::Jump(JumpDirection::Backward) => write!(f, "jump backward"),
            CombatAction::Rest => write!(f, "rest"),
        }
    }
}

/// Parses input strings such as `"attack Quick Strike"`, `"left"`,
/// `"jump back"` or `"rest"`. Keywords are case-insensitive; skill names are
/// taken verbatim after the keyword.
impl FromStr for CombatAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "attack" => {
                if rest.is_empty() {
                    Err(ParseActionError::MissingSkill)
                } else {
                    Ok(CombatAction::attack(rest))
                }
            }
            "left" if rest.is_empty() => Ok(CombatAction::Move(MoveDirection::Left)),
            "right" if rest.is_empty() => Ok(CombatAction::Move(MoveDirection::Right)),
            "rest" if rest.is_empty() => Ok(CombatAction::Rest),
            "jump" => match rest.to_ascii_lowercase().as_str() {
                "" | "forward" | "fwd" => Ok(CombatAction::Jump(JumpDirection::Forward)),
                "backward" | "back" => Ok(CombatAction::Jump(JumpDirection::Backward)),
                other => Err(ParseActionError::UnknownJumpDirection(other.to_string())),
            },
            _ => Err(ParseActionError::UnknownAction(trimmed.to_string())),
        }
    }
}
