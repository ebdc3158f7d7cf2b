//! Reasons a play string is rejected.
//!
//! Every rejection carries the round and player it was attempted for and
//! exactly one [`Violation`]. The `Display` text of a violation is the
//! human-readable reason.

use thiserror::Error;

use crate::board::place::Place;
use crate::board::player::Player;
use crate::protocol::token::{Location, StructuralError};

/// A rejected play string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Round {round}, {player}: {kind}")]
pub struct RuleViolation {
    pub round: u32,
    pub player: Player,
    pub kind: Violation,
}

impl RuleViolation {
    /// The reason alone, without round and player.
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error(transparent)]
    HunterMove(#[from] HunterMoveError),
    #[error(transparent)]
    HunterSuffix(#[from] HunterSuffixError),
    #[error(transparent)]
    DraculaMove(#[from] DraculaMoveError),
    #[error(transparent)]
    DraculaSuffix(#[from] DraculaSuffixError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HunterMoveError {
    #[error("{0} is not a valid move for a hunter.")]
    DraculaOnlyMove(String),
    #[error("Unknown move abbreviation {0}.")]
    UnknownMove(String),
    #[error("{hunter} cannot reach {to} from {from} this turn.")]
    Unreachable { hunter: Player, from: Place, to: Place },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HunterSuffixError {
    #[error("{0} is an impossible suffix for a hunter.")]
    Impossible(String),
    #[error(
        "The play string suggests that {hunter} encountered {claimed} trap(s), but there {} at {place}.",
        trap_count(.present)
    )]
    TrapsExcessive { hunter: Player, place: Place, present: usize, claimed: usize },
    #[error(
        "{hunter} should have encountered {expected} trap(s) at {place}, not {claimed}, as they were incapacitated after the {} trap.",
        ordinal(.expected)
    )]
    TrapsAfterIncapacitated { hunter: Player, place: Place, expected: usize, claimed: usize },
    #[error(
        "{hunter} should have encountered {expected} trap(s) at {place}, but the play string only shows {claimed}."
    )]
    TrapsMissed { hunter: Player, place: Place, expected: usize, claimed: usize },
    #[error("The play string suggests that {hunter} encountered an immature vampire, but there is no immature vampire at {place}.")]
    VampireAbsent { hunter: Player, place: Place },
    #[error("{hunter} could not have encountered the immature vampire, as they were already incapacitated.")]
    VampireAfterIncapacitated { hunter: Player },
    #[error("{hunter} should have encountered the immature vampire at {place}, but this was not reflected in the play string.")]
    VampireMissed { hunter: Player, place: Place },
    #[error("The play string suggests that {hunter} encountered Dracula, but Dracula is not at {place}.")]
    DraculaAbsent { hunter: Player, place: Place },
    #[error("{hunter} cannot encounter Dracula at sea ({place}).")]
    DraculaAtSea { hunter: Player, place: Place },
    #[error("{hunter} could not have encountered Dracula, as they were already incapacitated.")]
    DraculaAfterIncapacitated { hunter: Player },
    #[error("{hunter} should have encountered Dracula at {place}, but this was not reflected in the play string.")]
    DraculaMissed { hunter: Player, place: Place },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraculaMoveError {
    #[error("Unknown move abbreviation {0}.")]
    UnknownMove(String),
    #[error("Only fully-revealed play strings are allowed.")]
    NotFullyRevealed,
    #[error("Dracula cannot move to {0}.")]
    MovedToHospital(Place),
    #[error("It is too early for Dracula to use {0}.")]
    TooEarly(Location),
    #[error("Dracula cannot hide at sea ({0}).")]
    HidingAtSea(Place),
    #[error("{0} is already in Dracula's trail.")]
    AlreadyInTrail(Location),
    #[error("A double back is already in Dracula's trail.")]
    DoubleBackInTrail,
    #[error(
        "Dracula cannot {} {to}, as it is not adjacent to the current location ({from}) by road or by boat.",
        move_verb(.play)
    )]
    NotAdjacent { play: Location, from: Place, to: Place },
    #[error(
        "Dracula cannot teleport, as these moves are still valid: {}.",
        join(.alternatives)
    )]
    TeleportWithAlternatives { alternatives: Vec<Location> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraculaSuffixError {
    #[error("{0} is an impossible suffix for Dracula.")]
    Impossible(String),
    #[error("No traps were expected to malfunction in round {round}.")]
    NoMalfunctionDue { round: u32 },
    #[error("No immature vampires were expected to mature in round {round}.")]
    NoMaturationDue { round: u32 },
    #[error("A trap placed at {place} in round {placed} was expected to malfunction this turn, but this was not reflected in the play string.")]
    MissedMalfunction { place: Place, placed: u32 },
    #[error("An immature vampire placed at {place} in round {placed} was expected to mature this turn, but this was not reflected in the play string.")]
    MissedMaturation { place: Place, placed: u32 },
    #[error("Dracula cannot place encounters at sea ({0}).")]
    EncounterAtSea(Place),
    #[error("Dracula cannot place an encounter at {0}, as there are already three encounters there.")]
    AlreadyThreeEncounters(Place),
    #[error("Dracula should have placed an immature vampire instead of a trap in round {round}.")]
    TrapOnVampireRound { round: u32 },
    #[error("Dracula cannot place an immature vampire in round {round}; only traps may be placed.")]
    VampireOnTrapRound { round: u32 },
    #[error("Dracula should have placed {} in round {round}.", placement(.vampire))]
    MissingPlacement { round: u32, vampire: bool },
}

fn trap_count(n: &usize) -> String {
    match n {
        0 => "are no traps".to_string(),
        1 => "is only 1 trap".to_string(),
        n => format!("are only {n} traps"),
    }
}

fn ordinal(n: &usize) -> &'static str {
    match n {
        0 => "zeroth",
        1 => "first",
        2 => "second",
        3 => "third",
        _ => "last",
    }
}

fn move_verb(play: &Location) -> String {
    match play {
        Location::Hide => "hide at".to_string(),
        Location::DoubleBack(k) => format!("double back by {k} to"),
        _ => "move to".to_string(),
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(|l| l.code().unwrap_or("--"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn placement(vampire: &bool) -> &'static str {
    if *vampire {
        "an immature vampire"
    } else {
        "a trap"
    }
}
