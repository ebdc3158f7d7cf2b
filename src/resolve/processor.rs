//! The turn processor.
//!
//! A [`Processor`] owns the canonical state of one game and turns play
//! strings into [`TurnRecord`]s. Each play string is checked and applied
//! on a scratch copy of the state; the copy replaces the canonical state
//! only once the whole play string has been accepted, so a rejected play
//! leaves the game exactly as it was.

use serde::Serialize;
use tracing::debug;

use crate::board::map::GameMap;
use crate::board::place::Place;
use crate::board::player::Player;
use crate::game::state::GameState;
use crate::game::{Action, History, Snapshot, TurnRecord};
use crate::protocol::token::{Location, Play, StructuralError};
use crate::rules::Rules;

use super::error::{RuleViolation, Violation};

/// Whether more turns may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Replays one game, a play string at a time.
#[derive(Debug)]
pub struct Processor<'m> {
    map: &'m GameMap,
    rules: Rules,
    state: GameState,
    history: History,
}

impl<'m> Processor<'m> {
    /// A fresh game on `map` with the standard rules.
    pub fn new(map: &'m GameMap) -> Self {
        Self::with_rules(map, Rules::default())
    }

    pub fn with_rules(map: &'m GameMap, rules: Rules) -> Self {
        let state = GameState::new(&rules);
        Processor { map, rules, state, history: History::new() }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    /// The player whose play string is expected next.
    pub fn current_player(&self) -> Player {
        self.state.current
    }

    pub fn status(&self) -> GameStatus {
        if self.state.is_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Over
    }

    /// The current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Checks and applies one play string.
    ///
    /// On success the new turn is appended to the history and returned.
    /// On failure nothing changes and the same turn may be retried.
    pub fn process_turn(&mut self, play: &str) -> Result<&TurnRecord, RuleViolation> {
        let round = self.state.round;
        let player = self.state.current;
        let reject = |kind: Violation| {
            debug!(round, player = %player, play, reason = %kind, "rejected");
            RuleViolation { round, player, kind }
        };

        if self.state.is_over() {
            return Err(reject(StructuralError::GameOver.into()));
        }
        let parsed = Play::parse(play).map_err(|e| reject(e.into()))?;
        if parsed.player != player.code() {
            return Err(reject(
                StructuralError::WrongPlayer { expected: player.code(), found: parsed.player }
                    .into(),
            ));
        }

        let turn = TurnContext {
            map: self.map,
            rules: &self.rules,
            state: self.state.clone(),
            actions: Vec::new(),
        };
        let (state, record) = turn.play(player, &parsed, play).map_err(reject)?;
        debug!(
            round,
            player = %player,
            play,
            destination = %record.destination(),
            "accepted"
        );
        self.state = state;
        Ok(self.history.push(record))
    }
}

/// Scratch state for a single turn.
pub(crate) struct TurnContext<'a> {
    pub(crate) map: &'a GameMap,
    pub(crate) rules: &'a Rules,
    pub(crate) state: GameState,
    pub(crate) actions: Vec<Action>,
}

impl TurnContext<'_> {
    fn play(
        mut self,
        player: Player,
        parsed: &Play,
        raw: &str,
    ) -> Result<(GameState, TurnRecord), Violation> {
        if player.is_hunter() && self.state.health(player) <= 0 {
            *self.state.health_mut(player) = self.rules.hunter_max_health;
        }
        let start = self.state.snapshot();

        let (play_move, destination): (Location, Place) = if player.is_hunter() {
            let (dest, rested) = self.hunter_move(player, &parsed.code)?;
            self.hunter_encounters(player, dest, rested, &parsed.suffix)?;
            (Location::Place(dest), dest)
        } else {
            let (play, dest) = self.dracula_move(&parsed.code)?;
            self.dracula_encounters(dest, &parsed.suffix)?;
            (play, dest)
        };

        for health in self.state.health.iter_mut() {
            *health = (*health).max(0);
        }
        let end = self.state.snapshot();
        if player == Player::Dracula {
            self.state.round += 1;
        }
        self.state.current = player.next();

        let record = TurnRecord::new(
            player,
            raw,
            play_move,
            destination,
            self.actions,
            start,
            end,
        );
        Ok((self.state, record))
    }
}
