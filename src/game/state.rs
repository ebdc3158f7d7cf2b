//! Canonical game state, owned and mutated only by the turn processor.

use crate::board::place::Place;
use crate::board::player::{Player, HUNTERS, PLAYER_COUNT};
use crate::protocol::token::Location;
use crate::rules::{Rules, TRAIL_MOVES};

use super::snapshot::Snapshot;

/// A trap on the board, remembered with the round it was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trap {
    pub round: u32,
    pub place: Place,
}

#[derive(Debug, Clone)]
pub(crate) struct GameState {
    pub(crate) round: u32,
    pub(crate) current: Player,
    pub(crate) score: i32,
    pub(crate) health: [i32; PLAYER_COUNT],
    pub(crate) locations: [Option<Place>; PLAYER_COUNT],
    /// Resolved place per player per round.
    pub(crate) location_history: [Vec<Place>; PLAYER_COUNT],
    /// Move token per player per round.
    pub(crate) move_history: [Vec<Location>; PLAYER_COUNT],
    /// What the hunters know about Dracula's move in each round.
    pub(crate) trail_view: Vec<Location>,
    /// Oldest first.
    pub(crate) traps: Vec<Trap>,
    pub(crate) vampire: Option<Place>,
    pub(crate) rest_streak: u32,
}

impl GameState {
    pub(crate) fn new(rules: &Rules) -> GameState {
        let mut health = [rules.hunter_max_health; PLAYER_COUNT];
        health[Player::Dracula.index()] = rules.dracula_starting_blood;
        GameState {
            round: 0,
            current: Player::LordGodalming,
            score: rules.starting_score,
            health,
            locations: [None; PLAYER_COUNT],
            location_history: Default::default(),
            move_history: Default::default(),
            trail_view: Vec::new(),
            traps: Vec::new(),
            vampire: None,
            rest_streak: 0,
        }
    }

    pub(crate) fn health(&self, player: Player) -> i32 {
        self.health[player.index()]
    }

    pub(crate) fn health_mut(&mut self, player: Player) -> &mut i32 {
        &mut self.health[player.index()]
    }

    pub(crate) fn location(&self, player: Player) -> Option<Place> {
        self.locations[player.index()]
    }

    pub(crate) fn past_location(&self, player: Player, round: u32) -> Option<Place> {
        self.location_history[player.index()].get(round as usize).copied()
    }

    pub(crate) fn past_move(&self, player: Player, round: u32) -> Option<Location> {
        self.move_history[player.index()].get(round as usize).copied()
    }

    /// Appends this round's move and resolved place and moves the player.
    pub(crate) fn record_move(&mut self, player: Player, play: Location, place: Place) {
        self.move_history[player.index()].push(play);
        self.location_history[player.index()].push(place);
        self.locations[player.index()] = Some(place);
    }

    /// Dracula's last moves, most recent first, at most `TRAIL_MOVES` long.
    pub(crate) fn dracula_trail(&self) -> Vec<Location> {
        self.move_history[Player::Dracula.index()]
            .iter()
            .rev()
            .take(TRAIL_MOVES)
            .copied()
            .collect()
    }

    /// Resolves a hide or double back to the place it points at, or a
    /// concrete move to its place.
    pub(crate) fn resolve_dracula_move(&self, play: Location, castle: Place) -> Option<Place> {
        match play {
            Location::Place(p) => Some(p),
            Location::Teleport => Some(castle),
            Location::Hide | Location::DoubleBack(_) => {
                let back = play.back_distance()?;
                let round = self.round.checked_sub(back)?;
                self.past_location(Player::Dracula, round)
            }
            _ => None,
        }
    }

    pub(crate) fn traps_at(&self, place: Place) -> usize {
        self.traps.iter().filter(|t| t.place == place).count()
    }

    pub(crate) fn encounters_at(&self, place: Place) -> usize {
        self.traps_at(place) + usize::from(self.vampire == Some(place))
    }

    /// Removes the oldest trap at `place`.
    pub(crate) fn remove_trap_at(&mut self, place: Place) -> Option<Trap> {
        let i = self.traps.iter().position(|t| t.place == place)?;
        Some(self.traps.remove(i))
    }

    /// A hunter currently standing at `place`, if any.
    pub(crate) fn hunter_at(&self, place: Place) -> Option<Player> {
        HUNTERS.into_iter().find(|h| self.location(*h) == Some(place))
    }

    pub(crate) fn is_over(&self) -> bool {
        self.score <= 0 || self.health(Player::Dracula) <= 0
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(self)
    }
}
