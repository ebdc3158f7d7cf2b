//! Game constants.
//!
//! Structural constants (trail length, encounter cadence) are fixed.
//! The health and score economy lives in [`Rules`], which can be loaded
//! from a JSON file where any omitted field keeps its standard value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of places tracked in Dracula's trail, including the current one.
pub const TRAIL_SIZE: usize = 6;

/// Number of earlier moves that constrain Dracula's next move.
pub const TRAIL_MOVES: usize = TRAIL_SIZE - 1;

/// Rounds an encounter stays in play before leaving the trail.
pub const ENCOUNTER_LIFETIME: u32 = 6;

/// Immature vampires are placed on rounds divisible by this.
pub const VAMPIRE_CADENCE: u32 = 13;

/// An unclaimed immature vampire matures on rounds `r` with
/// `r % VAMPIRE_CADENCE == MATURATION_OFFSET`.
pub const MATURATION_OFFSET: u32 = 6;

/// Maximum encounters (traps plus vampire) that may share a place.
pub const MAX_ENCOUNTERS: usize = 3;

/// Consecutive resting hunter turns that trigger research.
pub const RESEARCH_STREAK: u32 = 4;

/// Number of rail hops a hunter's rail allowance cycles through.
pub const RAIL_CYCLE: usize = 4;

/// Errors loading a rules file.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rule {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Health and score economy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub starting_score: i32,
    pub hunter_max_health: i32,
    pub dracula_starting_blood: i32,
    pub trap_damage: i32,
    pub dracula_encounter_damage: i32,
    pub hunter_encounter_damage: i32,
    pub sea_damage: i32,
    pub castle_gain: i32,
    pub rest_gain: i32,
    pub score_per_dracula_turn: i32,
    pub score_per_hospitalisation: i32,
    pub score_per_maturation: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            starting_score: 366,
            hunter_max_health: 9,
            dracula_starting_blood: 40,
            trap_damage: 2,
            dracula_encounter_damage: 4,
            hunter_encounter_damage: 10,
            sea_damage: 2,
            castle_gain: 10,
            rest_gain: 3,
            score_per_dracula_turn: 1,
            score_per_hospitalisation: 6,
            score_per_maturation: 13,
        }
    }
}

impl Rules {
    pub fn from_json(json: &str) -> Result<Rules, RulesError> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Rejects economies where the score could rise or a total starts
    /// at zero.
    pub fn validate(&self) -> Result<(), RulesError> {
        let totals = [
            ("starting_score", self.starting_score),
            ("hunter_max_health", self.hunter_max_health),
            ("dracula_starting_blood", self.dracula_starting_blood),
        ];
        for (field, value) in totals {
            if value <= 0 {
                return Err(RulesError::Invalid { field, reason: "must be positive" });
            }
        }
        let amounts = [
            ("trap_damage", self.trap_damage),
            ("dracula_encounter_damage", self.dracula_encounter_damage),
            ("hunter_encounter_damage", self.hunter_encounter_damage),
            ("sea_damage", self.sea_damage),
            ("castle_gain", self.castle_gain),
            ("rest_gain", self.rest_gain),
            ("score_per_dracula_turn", self.score_per_dracula_turn),
            ("score_per_hospitalisation", self.score_per_hospitalisation),
            ("score_per_maturation", self.score_per_maturation),
        ];
        for (field, value) in amounts {
            if value < 0 {
                return Err(RulesError::Invalid { field, reason: "must not be negative" });
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Rules, RulesError> {
        let data = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Rules::from_json(&data)
    }
}
