//! Play-string tokens.
//!
//! A play string is exactly seven characters:
//! `[player][move code (2)][suffix (4)]`, e.g. `GMN....` or `DCDT...`.
//! Move codes are either a place abbreviation or one of Dracula's special
//! codes (`C?`, `S?`, `HI`, `D1`..`D5`, `TP`).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::place::Place;

/// Length of a single play string in characters.
pub const TOKEN_LEN: usize = 7;

/// Largest double-back distance.
pub const MAX_DOUBLE_BACK: u8 = 5;

/// A move token or a position as seen on the board.
///
/// Only `Place` is a vertex of the map; the other variants are symbolic
/// moves that resolve to a place through Dracula's location history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Place(Place),
    CityUnknown,
    SeaUnknown,
    Hide,
    /// Double back by `k` rounds, `1..=5`.
    DoubleBack(u8),
    Teleport,
    Nowhere,
}

impl Location {
    /// Parses a two-character move code.
    pub fn from_code(code: &str) -> Option<Location> {
        match code {
            "C?" => Some(Location::CityUnknown),
            "S?" => Some(Location::SeaUnknown),
            "HI" => Some(Location::Hide),
            "TP" => Some(Location::Teleport),
            _ => {
                if let Some(place) = Place::from_abbr(code) {
                    return Some(Location::Place(place));
                }
                let digit = code.strip_prefix('D')?;
                let k: u8 = digit.parse().ok()?;
                (digit.len() == 1 && (1..=MAX_DOUBLE_BACK).contains(&k))
                    .then_some(Location::DoubleBack(k))
            }
        }
    }

    /// Returns the two-character code, or `None` for `Nowhere`.
    pub fn code(self) -> Option<&'static str> {
        Some(match self {
            Location::Place(p) => p.abbr(),
            Location::CityUnknown => "C?",
            Location::SeaUnknown => "S?",
            Location::Hide => "HI",
            Location::Teleport => "TP",
            Location::DoubleBack(1) => "D1",
            Location::DoubleBack(2) => "D2",
            Location::DoubleBack(3) => "D3",
            Location::DoubleBack(4) => "D4",
            Location::DoubleBack(5) => "D5",
            Location::DoubleBack(_) | Location::Nowhere => return None,
        })
    }

    pub fn is_double_back(self) -> bool {
        matches!(self, Location::DoubleBack(_))
    }

    /// True for the codes only Dracula may play.
    pub fn is_dracula_only(self) -> bool {
        matches!(
            self,
            Location::Hide | Location::DoubleBack(_) | Location::Teleport
        )
    }

    /// How many rounds back a hide or double back points.
    pub fn back_distance(self) -> Option<u32> {
        match self {
            Location::Hide => Some(1),
            Location::DoubleBack(k) => Some(k as u32),
            _ => None,
        }
    }

    /// First round in which this move may be played.
    pub fn earliest_round(self) -> u32 {
        match self {
            Location::Teleport => 1,
            other => other.back_distance().unwrap_or(0),
        }
    }
}

impl From<Place> for Location {
    fn from(place: Place) -> Self {
        Location::Place(place)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Place(p) => f.write_str(p.name()),
            Location::CityUnknown => f.write_str("Unknown City"),
            Location::SeaUnknown => f.write_str("Unknown Sea"),
            Location::Hide => f.write_str("Hide"),
            Location::DoubleBack(k) => write!(f, "Double Back {k}"),
            Location::Teleport => f.write_str("Teleport"),
            Location::Nowhere => f.write_str("Nowhere"),
        }
    }
}

/// Structural problems with a play string, detected before any rule is
/// consulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Expected a play string of length {}, got {found} characters.", TOKEN_LEN)]
    InvalidLength { found: usize },
    #[error("Expected {expected} as the first character of the play string, got {found} instead.")]
    WrongPlayer { expected: char, found: char },
    #[error("The game is already over.")]
    GameOver,
}

/// A play string split into its three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    pub player: char,
    pub code: String,
    pub suffix: String,
}

impl Play {
    /// Splits a play string, checking only its length.
    pub fn parse(token: &str) -> Result<Play, StructuralError> {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != TOKEN_LEN {
            return Err(StructuralError::InvalidLength { found: chars.len() });
        }
        Ok(Play {
            player: chars[0],
            code: chars[1..3].iter().collect(),
            suffix: chars[3..].iter().collect(),
        })
    }
}
