//! Connections between places on the Fury of Dracula map.
//!
//! Each entry records an undirected connection between two places together
//! with its mode of transport. The same pair may appear once per transport
//! (e.g. Madrid and Lisbon are joined by both road and rail). All data is
//! compile-time `static`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::place::Place;

/// How a connection may be travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Road,
    Rail,
    Boat,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transport::Road => "road",
            Transport::Rail => "rail",
            Transport::Boat => "boat",
        })
    }
}

/// A single undirected connection between two places.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub a: Place,
    pub b: Place,
    pub transport: Transport,
}

const fn road(a: Place, b: Place) -> Connection {
    Connection { a, b, transport: Transport::Road }
}
const fn rail(a: Place, b: Place) -> Connection {
    Connection { a, b, transport: Transport::Rail }
}
const fn boat(a: Place, b: Place) -> Connection {
    Connection { a, b, transport: Transport::Boat }
}

use Place::*;

/// Number of road connections.
pub const ROAD_COUNT: usize = 115;
/// Number of rail connections.
pub const RAIL_COUNT: usize = 43;
/// Number of boat connections.
pub const BOAT_COUNT: usize = 40;
/// Total number of undirected connections in the table.
pub const CONNECTION_COUNT: usize = ROAD_COUNT + RAIL_COUNT + BOAT_COUNT;

/// Complete connection table, grouped by transport.
pub static CONNECTIONS: [Connection; CONNECTION_COUNT] = [
    // --- Road ---
    road(Alicante, Granada),
    road(Alicante, Madrid),
    road(Alicante, Saragossa),
    road(Amsterdam, Brussels),
    road(Amsterdam, Cologne),
    road(Athens, Valona),
    road(Barcelona, Saragossa),
    road(Barcelona, Toulouse),
    road(Bari, Naples),
    road(Bari, Rome),
    road(Belgrade, Bucharest),
    road(Belgrade, Klausenburg),
    road(Belgrade, Sarajevo),
    road(Belgrade, Sofia),
    road(Belgrade, StJosephAndStMary),
    road(Belgrade, Szeged),
    road(Berlin, Hamburg),
    road(Berlin, Leipzig),
    road(Berlin, Prague),
    road(Bordeaux, ClermontFerrand),
    road(Bordeaux, Nantes),
    road(Bordeaux, Saragossa),
    road(Bordeaux, Toulouse),
    road(Brussels, Cologne),
    road(Brussels, LeHavre),
    road(Brussels, Paris),
    road(Brussels, Strasbourg),
    road(Bucharest, Constanta),
    road(Bucharest, Galatz),
    road(Bucharest, Klausenburg),
    road(Bucharest, Sofia),
    road(Budapest, Klausenburg),
    road(Budapest, Szeged),
    road(Budapest, Vienna),
    road(Budapest, Zagreb),
    road(Cadiz, Granada),
    road(Cadiz, Lisbon),
    road(Cadiz, Madrid),
    road(CastleDracula, Galatz),
    road(CastleDracula, Klausenburg),
    road(ClermontFerrand, Geneva),
    road(ClermontFerrand, Marseilles),
    road(ClermontFerrand, Nantes),
    road(ClermontFerrand, Paris),
    road(ClermontFerrand, Toulouse),
    road(Cologne, Frankfurt),
    road(Cologne, Hamburg),
    road(Cologne, Leipzig),
    road(Cologne, Strasbourg),
    road(Constanta, Galatz),
    road(Constanta, Varna),
    road(Dublin, Galway),
    road(Edinburgh, Manchester),
    road(Florence, Genoa),
    road(Florence, Rome),
    road(Florence, Venice),
    road(Frankfurt, Leipzig),
    road(Frankfurt, Nuremburg),
    road(Frankfurt, Strasbourg),
    road(Galatz, Klausenburg),
    road(Geneva, Marseilles),
    road(Geneva, Paris),
    road(Geneva, Strasbourg),
    road(Geneva, Zurich),
    road(Genoa, Marseilles),
    road(Genoa, Milan),
    road(Genoa, Venice),
    road(Granada, Madrid),
    road(Hamburg, Leipzig),
    road(Klausenburg, Szeged),
    road(Leipzig, Nuremburg),
    road(LeHavre, Nantes),
    road(LeHavre, Paris),
    road(Lisbon, Madrid),
    road(Lisbon, Santander),
    road(Liverpool, Manchester),
    road(Liverpool, Swansea),
    road(London, Manchester),
    road(London, Plymouth),
    road(London, Swansea),
    road(Madrid, Santander),
    road(Madrid, Saragossa),
    road(Marseilles, Milan),
    road(Marseilles, Toulouse),
    road(Marseilles, Zurich),
    road(Milan, Munich),
    road(Milan, Venice),
    road(Milan, Zurich),
    road(Munich, Nuremburg),
    road(Munich, Strasbourg),
    road(Munich, Venice),
    road(Munich, Vienna),
    road(Munich, Zagreb),
    road(Munich, Zurich),
    road(Nantes, Paris),
    road(Naples, Rome),
    road(Nuremburg, Prague),
    road(Nuremburg, Strasbourg),
    road(Paris, Strasbourg),
    road(Prague, Vienna),
    road(Salonica, Sofia),
    road(Salonica, Valona),
    road(Santander, Saragossa),
    road(Saragossa, Toulouse),
    road(Sarajevo, Sofia),
    road(Sarajevo, StJosephAndStMary),
    road(Sarajevo, Valona),
    road(Sarajevo, Zagreb),
    road(Sofia, Valona),
    road(Sofia, Varna),
    road(Strasbourg, Zurich),
    road(StJosephAndStMary, Szeged),
    road(StJosephAndStMary, Zagreb),
    road(Szeged, Zagreb),
    road(Vienna, Zagreb),
    // --- Rail ---
    rail(Alicante, Barcelona),
    rail(Alicante, Madrid),
    rail(Barcelona, Saragossa),
    rail(Bari, Naples),
    rail(Belgrade, Sofia),
    rail(Belgrade, Szeged),
    rail(Berlin, Hamburg),
    rail(Berlin, Leipzig),
    rail(Berlin, Prague),
    rail(Bordeaux, Paris),
    rail(Bordeaux, Saragossa),
    rail(Brussels, Cologne),
    rail(Brussels, Paris),
    rail(Bucharest, Constanta),
    rail(Bucharest, Galatz),
    rail(Bucharest, Szeged),
    rail(Budapest, Szeged),
    rail(Budapest, Vienna),
    rail(Cologne, Frankfurt),
    rail(Edinburgh, Manchester),
    rail(Florence, Milan),
    rail(Florence, Rome),
    rail(Frankfurt, Leipzig),
    rail(Frankfurt, Strasbourg),
    rail(Geneva, Milan),
    rail(Genoa, Milan),
    rail(Leipzig, Nuremburg),
    rail(LeHavre, Paris),
    rail(Lisbon, Madrid),
    rail(Liverpool, Manchester),
    rail(London, Manchester),
    rail(London, Swansea),
    rail(Madrid, Santander),
    rail(Madrid, Saragossa),
    rail(Marseilles, Paris),
    rail(Milan, Zurich),
    rail(Munich, Nuremburg),
    rail(Naples, Rome),
    rail(Prague, Vienna),
    rail(Salonica, Sofia),
    rail(Sofia, Varna),
    rail(Strasbourg, Zurich),
    rail(Venice, Vienna),
    // --- Boat ---
    boat(AdriaticSea, Bari),
    boat(AdriaticSea, IonianSea),
    boat(AdriaticSea, Venice),
    boat(Alicante, MediterraneanSea),
    boat(Amsterdam, NorthSea),
    boat(Athens, IonianSea),
    boat(AtlanticOcean, BayOfBiscay),
    boat(AtlanticOcean, Cadiz),
    boat(AtlanticOcean, EnglishChannel),
    boat(AtlanticOcean, Galway),
    boat(AtlanticOcean, IrishSea),
    boat(AtlanticOcean, Lisbon),
    boat(AtlanticOcean, MediterraneanSea),
    boat(AtlanticOcean, NorthSea),
    boat(Barcelona, MediterraneanSea),
    boat(BayOfBiscay, Bordeaux),
    boat(BayOfBiscay, Nantes),
    boat(BayOfBiscay, Santander),
    boat(BlackSea, Constanta),
    boat(BlackSea, IonianSea),
    boat(BlackSea, Varna),
    boat(Cagliari, MediterraneanSea),
    boat(Cagliari, TyrrhenianSea),
    boat(Dublin, IrishSea),
    boat(Edinburgh, NorthSea),
    boat(EnglishChannel, LeHavre),
    boat(EnglishChannel, London),
    boat(EnglishChannel, NorthSea),
    boat(EnglishChannel, Plymouth),
    boat(Genoa, TyrrhenianSea),
    boat(Hamburg, NorthSea),
    boat(IonianSea, Salonica),
    boat(IonianSea, TyrrhenianSea),
    boat(IonianSea, Valona),
    boat(IrishSea, Liverpool),
    boat(IrishSea, Swansea),
    boat(Marseilles, MediterraneanSea),
    boat(MediterraneanSea, TyrrhenianSea),
    boat(Naples, TyrrhenianSea),
    boat(Rome, TyrrhenianSea),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::place::PlaceKind;
    use std::collections::HashSet;

    fn count(transport: Transport) -> usize {
        CONNECTIONS.iter().filter(|c| c.transport == transport).count()
    }

    #[test]
    fn connection_counts_per_transport() {
        assert_eq!(count(Transport::Road), ROAD_COUNT);
        assert_eq!(count(Transport::Rail), RAIL_COUNT);
        assert_eq!(count(Transport::Boat), BOAT_COUNT);
    }

    #[test]
    fn no_self_connections() {
        for c in CONNECTIONS.iter() {
            assert_ne!(c.a, c.b, "{:?} connects to itself", c.a);
        }
    }

    #[test]
    fn no_duplicate_connections() {
        let mut seen = HashSet::new();
        for c in CONNECTIONS.iter() {
            let key = (c.a.min(c.b), c.a.max(c.b), c.transport);
            assert!(seen.insert(key), "duplicate connection {:?}", c);
        }
    }

    #[test]
    fn seas_only_connect_by_boat() {
        for c in CONNECTIONS.iter() {
            if c.a.is_sea() || c.b.is_sea() {
                assert_eq!(c.transport, Transport::Boat, "{:?}", c);
            }
        }
    }

    #[test]
    fn boats_touch_a_sea_and_ports_touch_a_boat() {
        for c in CONNECTIONS.iter().filter(|c| c.transport == Transport::Boat) {
            assert!(c.a.is_sea() || c.b.is_sea(), "{:?}", c);
            for p in [c.a, c.b] {
                assert_ne!(p.kind(), PlaceKind::InlandCity, "{:?}", c);
            }
        }
        for p in crate::board::place::ALL_PLACES {
            if p.kind() == PlaceKind::PortCity {
                assert!(
                    CONNECTIONS
                        .iter()
                        .any(|c| c.transport == Transport::Boat && (c.a == p || c.b == p)),
                    "port {:?} has no boat connection",
                    p
                );
            }
        }
    }
}
