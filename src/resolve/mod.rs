//! Turn resolution.
//!
//! Validates each play string against the rules of the game and applies
//! it: hunter movement and encounters, Dracula's trail and placements,
//! and what the hunters learn about the trail.

mod dracula;
pub mod error;
mod hunter;
pub mod processor;
mod trail;

pub use error::{
    DraculaMoveError, DraculaSuffixError, HunterMoveError, HunterSuffixError, RuleViolation,
    Violation,
};
pub use processor::{GameStatus, Processor};
