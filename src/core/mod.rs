//! Balance constants, battle configuration, and the crate's fallible-surface errors.

pub mod config;
pub mod constants;
pub mod error;

pub use config::*;
pub use constants::*;
pub use error::*;
