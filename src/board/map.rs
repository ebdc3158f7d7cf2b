//! The game map: places joined by road, rail and boat.
//!
//! Built once from the static tables and shared by reference. Hunters may
//! use every mode of transport; Dracula never travels by rail.

use super::connection::{Connection, Transport, CONNECTIONS};
use super::graph::{Graph, GraphError};
use super::place::{Place, ALL_PLACES};

const DRACULA_TRANSPORT: [Transport; 2] = [Transport::Road, Transport::Boat];

/// The board topology plus its two special places.
#[derive(Debug, Clone)]
pub struct GameMap {
    graph: Graph<Place, Transport>,
    castle: Place,
    hospital: Place,
}

impl GameMap {
    /// The standard Fury of Dracula board.
    ///
    /// `CONNECTIONS` joins known places and lists each edge once, so the
    /// infallible [`Graph::connect`] builds the same graph as
    /// [`from_connections`](Self::from_connections).
    pub fn standard() -> GameMap {
        let mut map = GameMap::empty();
        for c in CONNECTIONS.iter() {
            map.graph.connect(c.a, c.b, c.transport);
        }
        map
    }

    /// Builds a board over all places with a custom connection list.
    pub fn from_connections(connections: &[Connection]) -> Result<GameMap, GraphError> {
        let mut map = GameMap::empty();
        for c in connections {
            map.graph.add_edge(c.a, c.b, c.transport)?;
        }
        Ok(map)
    }

    fn empty() -> GameMap {
        let mut graph = Graph::new();
        for p in ALL_PLACES {
            graph.add_vertex(p);
        }
        GameMap {
            graph,
            castle: Place::CastleDracula,
            hospital: Place::StJosephAndStMary,
        }
    }

    pub fn graph(&self) -> &Graph<Place, Transport> {
        &self.graph
    }

    pub fn castle(&self) -> Place {
        self.castle
    }

    pub fn hospital(&self) -> Place {
        self.hospital
    }

    pub fn adjacent_by_road(&self, a: Place, b: Place) -> bool {
        self.graph.is_adjacent(a, b, &[Transport::Road])
    }

    pub fn adjacent_by_rail(&self, a: Place, b: Place) -> bool {
        self.graph.is_adjacent(a, b, &[Transport::Rail])
    }

    pub fn adjacent_by_boat(&self, a: Place, b: Place) -> bool {
        self.graph.is_adjacent(a, b, &[Transport::Boat])
    }

    /// Fewest rail hops from `a` to `b`; `None` if no rail route exists.
    pub fn distance_by_rail(&self, a: Place, b: Place) -> Option<usize> {
        self.graph.distance(a, b, &[Transport::Rail])
    }

    pub fn rail_path(&self, a: Place, b: Place) -> Option<Vec<Place>> {
        self.graph.path(a, b, &[Transport::Rail])
    }

    /// Places Dracula can reach in one move from `from`, including `from`.
    pub fn reachable_by_dracula(&self, from: Place) -> Vec<Place> {
        let mut out = vec![from];
        out.extend(self.graph.neighbours(from, &DRACULA_TRANSPORT));
        out
    }

    /// True if Dracula may go from `a` to `b` in a single move.
    pub fn dracula_adjacent(&self, a: Place, b: Place) -> bool {
        a == b || self.graph.is_adjacent(a, b, &DRACULA_TRANSPORT)
    }

    /// True if a hunter at `from` may end a turn at `to`, given the rail
    /// allowance for this turn.
    pub fn hunter_can_reach(&self, from: Place, to: Place, rail_hops: usize) -> bool {
        from == to
            || self.adjacent_by_road(from, to)
            || self.adjacent_by_boat(from, to)
            || self.distance_by_rail(from, to).is_some_and(|d| d <= rail_hops)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        GameMap::standard()
    }
}
