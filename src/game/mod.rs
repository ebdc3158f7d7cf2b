//! Game state, snapshots and the record of play.

pub mod history;
pub mod snapshot;
pub(crate) mod state;
pub mod turn;

pub use history::History;
pub use snapshot::Snapshot;
pub use turn::{Action, TurnRecord};
