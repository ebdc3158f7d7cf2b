//! The append-only list of accepted turns.

use serde::{Deserialize, Serialize};

use crate::board::player::PLAYER_COUNT;

use super::snapshot::Snapshot;
use super::turn::TurnRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    turns: Vec<TurnRecord>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub(crate) fn push(&mut self, turn: TurnRecord) -> &TurnRecord {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turn(&self, index: usize) -> Option<&TurnRecord> {
        self.turns.get(index)
    }

    pub fn last(&self) -> Option<&TurnRecord> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TurnRecord> {
        self.turns.iter()
    }

    /// The round of the most recent turn, or `None` if nothing was played.
    pub fn last_round(&self) -> Option<u32> {
        let last = self.turns.len().checked_sub(1)?;
        Some((last / PLAYER_COUNT) as u32)
    }

    /// The turns played in `round`.
    pub fn round(&self, round: u32) -> &[TurnRecord] {
        let start = (round as usize * PLAYER_COUNT).min(self.turns.len());
        let end = (start + PLAYER_COUNT).min(self.turns.len());
        &self.turns[start..end]
    }

    /// State after the most recent turn.
    pub fn final_state(&self) -> Option<&Snapshot> {
        self.last().map(TurnRecord::end)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TurnRecord;
    type IntoIter = std::slice::Iter<'a, TurnRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
