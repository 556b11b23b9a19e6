//! Battle Arena - turn-based 2D arena combat engine.
//!
//! This crate holds the combat rules and turn sequencing. Rendering and input
//! live in whatever presentation layer drives [`battle::Battle`]: it reads
//! combatant snapshots and the battle log, and submits one action at a time.

pub mod battle;
pub mod character;
pub mod combat;
pub mod core;
pub mod simulator;
