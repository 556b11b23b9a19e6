//! Combatant data: attributes, derived stats, equipment, skills, creation and progression.

pub mod attributes;
pub mod combatant;
pub mod creation;
pub mod derived_stats;
pub mod equipment;
pub mod progression;
pub mod skills;

pub use attributes::*;
pub use combatant::*;
pub use creation::*;
pub use derived_stats::*;
pub use equipment::*;
pub use progression::*;
pub use skills::*;
