//! Replaying whole play logs.
//!
//! A log is a whitespace-separated sequence of play strings. Replay stops
//! at the first rejected play; the error names it together with the plays
//! that led up to it.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::board::map::GameMap;
use crate::game::History;
use crate::resolve::{Processor, RuleViolation};
use crate::rules::Rules;

/// Number of preceding plays quoted in a [`SessionError`].
pub const CONTEXT_PLAYS: usize = 5;

/// Longest echo of a rejected play before it is cut short.
pub const ECHO_LIMIT: usize = 10;

/// A log that could not be replayed to the end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{violation} (after `{context}`, at `{play}`)")]
pub struct SessionError {
    /// Zero-based position of the rejected play in the log.
    pub index: usize,
    /// Up to `CONTEXT_PLAYS` accepted plays before the rejected one.
    pub context: String,
    /// The rejected play, made printable.
    pub play: String,
    pub violation: RuleViolation,
    /// Everything accepted before the failure.
    pub history: History,
}

/// Replays `log` with the standard rules.
pub fn replay(map: &GameMap, log: &str) -> Result<History, Box<SessionError>> {
    replay_with_rules(map, &Rules::default(), log)
}

pub fn replay_with_rules(
    map: &GameMap,
    rules: &Rules,
    log: &str,
) -> Result<History, Box<SessionError>> {
    let plays: Vec<&str> = log.split_whitespace().collect();
    let mut processor = Processor::with_rules(map, rules.clone());
    for (index, play) in plays.iter().enumerate() {
        if let Some(violation) = processor.process_turn(play).err() {
            let context = plays[index.saturating_sub(CONTEXT_PLAYS)..index].join(" ");
            return Err(Box::new(SessionError {
                index,
                context,
                play: sanitise(play),
                violation,
                history: processor.into_history(),
            }));
        }
    }
    debug!(turns = plays.len(), "log replayed");
    Ok(processor.into_history())
}

/// Replays independent logs in parallel, keeping their order.
pub fn replay_all(
    map: &GameMap,
    rules: &Rules,
    logs: &[String],
) -> Vec<Result<History, Box<SessionError>>> {
    info!(games = logs.len(), "replaying logs");
    logs.par_iter()
        .map(|log| replay_with_rules(map, rules, log))
        .collect()
}

/// Drops control characters and cuts long input short.
fn sanitise(play: &str) -> String {
    let clean: String = play.chars().filter(|c| !c.is_control()).collect();
    if clean.chars().count() > ECHO_LIMIT {
        let cut: String = clean.chars().take(ECHO_LIMIT).collect();
        format!("{cut}... (truncated)")
    } else {
        clean
    }
}
