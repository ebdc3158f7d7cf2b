//! Board representation: places, players and the connection map.

pub mod connection;
pub mod graph;
pub mod map;
pub mod place;
pub mod player;

pub use connection::{Connection, Transport};
pub use graph::{Graph, GraphError};
pub use map::GameMap;
pub use place::{Place, PlaceKind, ALL_PLACES, PLACE_COUNT};
pub use player::{Player, ALL_PLAYERS, HUNTERS, PLAYER_COUNT};
