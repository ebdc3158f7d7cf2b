//! Nocturne: a rules engine for Fury of Dracula play logs.
//!
//! Exposes the board, the play-string notation, the turn processor and the
//! log replay driver for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod game;
pub mod protocol;
pub mod resolve;
pub mod rules;
pub mod session;

pub use board::{GameMap, Place, Player};
pub use game::{Action, History, Snapshot, TurnRecord};
pub use protocol::Location;
pub use resolve::{GameStatus, Processor, RuleViolation, Violation};
pub use rules::Rules;
pub use session::{replay, replay_all, SessionError};
