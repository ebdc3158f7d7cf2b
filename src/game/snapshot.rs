//! Immutable copies of the observable game state.

use serde::{Deserialize, Serialize};

use crate::board::place::Place;
use crate::board::player::{Player, PLAYER_COUNT};
use crate::protocol::token::Location;
use crate::rules::TRAIL_SIZE;

use super::state::GameState;

/// The observable state of a game at one instant.
///
/// A snapshot owns all of its data; later turns never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    round: u32,
    score: i32,
    health: [i32; PLAYER_COUNT],
    locations: [Option<Place>; PLAYER_COUNT],
    location_history: [Vec<Place>; PLAYER_COUNT],
    move_history: [Vec<Location>; PLAYER_COUNT],
    trail_view: Vec<Location>,
    traps: Vec<Place>,
    vampire: Option<Place>,
}

impl Snapshot {
    pub(crate) fn from_state(state: &GameState) -> Snapshot {
        Snapshot {
            round: state.round,
            score: state.score,
            health: state.health,
            locations: state.locations,
            location_history: state.location_history.clone(),
            move_history: state.move_history.clone(),
            trail_view: state.trail_view.clone(),
            traps: state.traps.iter().map(|t| t.place).collect(),
            vampire: state.vampire,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn health(&self, player: Player) -> i32 {
        self.health[player.index()]
    }

    pub fn healths(&self) -> &[i32; PLAYER_COUNT] {
        &self.health
    }

    /// Where `player` currently is; `None` before their first move.
    pub fn location(&self, player: Player) -> Option<Place> {
        self.locations[player.index()]
    }

    /// Same as [`location`](Self::location), as a board position.
    pub fn position(&self, player: Player) -> Location {
        self.location(player).map_or(Location::Nowhere, Location::Place)
    }

    pub fn past_location(&self, player: Player, round: u32) -> Option<Place> {
        self.location_history[player.index()].get(round as usize).copied()
    }

    pub fn past_move(&self, player: Player, round: u32) -> Option<Location> {
        self.move_history[player.index()].get(round as usize).copied()
    }

    pub fn location_history(&self, player: Player) -> &[Place] {
        &self.location_history[player.index()]
    }

    pub fn move_history(&self, player: Player) -> &[Location] {
        &self.move_history[player.index()]
    }

    /// The hunters' knowledge of Dracula's move in each round so far.
    pub fn trail_view(&self) -> &[Location] {
        &self.trail_view
    }

    /// Dracula's last `TRAIL_SIZE` places, most recent first.
    pub fn trail_locations(&self) -> Vec<Place> {
        self.location_history[Player::Dracula.index()]
            .iter()
            .rev()
            .take(TRAIL_SIZE)
            .copied()
            .collect()
    }

    /// One entry per trap, oldest first.
    pub fn trap_locations(&self) -> &[Place] {
        &self.traps
    }

    pub fn vampire_location(&self) -> Option<Place> {
        self.vampire
    }
}
