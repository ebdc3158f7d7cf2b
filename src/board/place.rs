//! Place definitions and metadata for the Fury of Dracula board.
//!
//! All 71 real places are enumerated in alphabetical order of their full
//! names. Place metadata (abbreviation, name, kind) is stored in a
//! compile-time lookup table indexed by the `Place` enum discriminant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of real places on the board.
pub const PLACE_COUNT: usize = 71;

/// A real place on the board.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Place {
    AdriaticSea = 0,
    Alicante = 1,
    Amsterdam = 2,
    Athens = 3,
    AtlanticOcean = 4,
    Barcelona = 5,
    Bari = 6,
    BayOfBiscay = 7,
    Belgrade = 8,
    Berlin = 9,
    BlackSea = 10,
    Bordeaux = 11,
    Brussels = 12,
    Bucharest = 13,
    Budapest = 14,
    Cadiz = 15,
    Cagliari = 16,
    CastleDracula = 17,
    ClermontFerrand = 18,
    Cologne = 19,
    Constanta = 20,
    Dublin = 21,
    Edinburgh = 22,
    EnglishChannel = 23,
    Florence = 24,
    Frankfurt = 25,
    Galatz = 26,
    Galway = 27,
    Geneva = 28,
    Genoa = 29,
    Granada = 30,
    Hamburg = 31,
    IonianSea = 32,
    IrishSea = 33,
    Klausenburg = 34,
    LeHavre = 35,
    Leipzig = 36,
    Lisbon = 37,
    Liverpool = 38,
    London = 39,
    Madrid = 40,
    Manchester = 41,
    Marseilles = 42,
    MediterraneanSea = 43,
    Milan = 44,
    Munich = 45,
    Nantes = 46,
    Naples = 47,
    NorthSea = 48,
    Nuremburg = 49,
    Paris = 50,
    Plymouth = 51,
    Prague = 52,
    Rome = 53,
    Salonica = 54,
    Santander = 55,
    Saragossa = 56,
    Sarajevo = 57,
    Sofia = 58,
    StJosephAndStMary = 59,
    Strasbourg = 60,
    Swansea = 61,
    Szeged = 62,
    Toulouse = 63,
    TyrrhenianSea = 64,
    Valona = 65,
    Varna = 66,
    Venice = 67,
    Vienna = 68,
    Zagreb = 69,
    Zurich = 70,
}

use Place::*;

/// All places in index order.
pub const ALL_PLACES: [Place; PLACE_COUNT] = [
    AdriaticSea, Alicante, Amsterdam, Athens, AtlanticOcean, Barcelona, Bari,
    BayOfBiscay, Belgrade, Berlin, BlackSea, Bordeaux, Brussels, Bucharest,
    Budapest, Cadiz, Cagliari, CastleDracula, ClermontFerrand, Cologne,
    Constanta, Dublin, Edinburgh, EnglishChannel, Florence, Frankfurt, Galatz,
    Galway, Geneva, Genoa, Granada, Hamburg, IonianSea, IrishSea, Klausenburg,
    LeHavre, Leipzig, Lisbon, Liverpool, London, Madrid, Manchester,
    Marseilles, MediterraneanSea, Milan, Munich, Nantes, Naples, NorthSea,
    Nuremburg, Paris, Plymouth, Prague, Rome, Salonica, Santander, Saragossa,
    Sarajevo, Sofia, StJosephAndStMary, Strasbourg, Swansea, Szeged, Toulouse,
    TyrrhenianSea, Valona, Varna, Venice, Vienna, Zagreb, Zurich,
];

/// Classifies a place by terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    InlandCity,
    PortCity,
    Sea,
}

/// Static metadata for a place.
#[derive(Debug)]
pub struct PlaceInfo {
    pub abbr: &'static str,
    pub name: &'static str,
    pub kind: PlaceKind,
}

impl Place {
    /// Returns the 2-letter abbreviation used in play strings.
    pub const fn abbr(self) -> &'static str {
        PLACE_INFO[self as usize].abbr
    }

    /// Returns the full display name.
    pub const fn name(self) -> &'static str {
        PLACE_INFO[self as usize].name
    }

    pub const fn kind(self) -> PlaceKind {
        PLACE_INFO[self as usize].kind
    }

    pub const fn is_sea(self) -> bool {
        matches!(self.kind(), PlaceKind::Sea)
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a place by its 2-letter abbreviation.
    pub fn from_abbr(abbr: &str) -> Option<Place> {
        PLACE_INFO
            .iter()
            .position(|info| info.abbr == abbr)
            .map(|i| ALL_PLACES[i])
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn inland(abbr: &'static str, name: &'static str) -> PlaceInfo {
    PlaceInfo { abbr, name, kind: PlaceKind::InlandCity }
}

const fn port(abbr: &'static str, name: &'static str) -> PlaceInfo {
    PlaceInfo { abbr, name, kind: PlaceKind::PortCity }
}

const fn sea(abbr: &'static str, name: &'static str) -> PlaceInfo {
    PlaceInfo { abbr, name, kind: PlaceKind::Sea }
}

/// Compile-time lookup table: index by `Place as usize`.
pub static PLACE_INFO: [PlaceInfo; PLACE_COUNT] = [
    sea("AS", "Adriatic Sea"),
    port("AL", "Alicante"),
    port("AM", "Amsterdam"),
    port("AT", "Athens"),
    sea("AO", "Atlantic Ocean"),
    port("BA", "Barcelona"),
    port("BI", "Bari"),
    sea("BB", "Bay of Biscay"),
    inland("BE", "Belgrade"),
    inland("BR", "Berlin"),
    sea("BS", "Black Sea"),
    port("BO", "Bordeaux"),
    inland("BU", "Brussels"),
    inland("BC", "Bucharest"),
    inland("BD", "Budapest"),
    port("CA", "Cadiz"),
    port("CG", "Cagliari"),
    inland("CD", "Castle Dracula"),
    inland("CF", "Clermont-Ferrand"),
    inland("CO", "Cologne"),
    port("CN", "Constanta"),
    port("DU", "Dublin"),
    port("ED", "Edinburgh"),
    sea("EC", "English Channel"),
    inland("FL", "Florence"),
    inland("FR", "Frankfurt"),
    inland("GA", "Galatz"),
    port("GW", "Galway"),
    inland("GE", "Geneva"),
    port("GO", "Genoa"),
    inland("GR", "Granada"),
    port("HA", "Hamburg"),
    sea("IO", "Ionian Sea"),
    sea("IR", "Irish Sea"),
    inland("KL", "Klausenburg"),
    port("LE", "Le Havre"),
    inland("LI", "Leipzig"),
    port("LS", "Lisbon"),
    port("LV", "Liverpool"),
    port("LO", "London"),
    inland("MA", "Madrid"),
    inland("MN", "Manchester"),
    port("MR", "Marseilles"),
    sea("MS", "Mediterranean Sea"),
    inland("MI", "Milan"),
    inland("MU", "Munich"),
    port("NA", "Nantes"),
    port("NP", "Naples"),
    sea("NS", "North Sea"),
    inland("NU", "Nuremburg"),
    inland("PA", "Paris"),
    port("PL", "Plymouth"),
    inland("PR", "Prague"),
    port("RO", "Rome"),
    port("SA", "Salonica"),
    port("SN", "Santander"),
    inland("SR", "Saragossa"),
    inland("SJ", "Sarajevo"),
    inland("SO", "Sofia"),
    inland("JM", "St Joseph and St Mary"),
    inland("ST", "Strasbourg"),
    port("SW", "Swansea"),
    inland("SZ", "Szeged"),
    inland("TO", "Toulouse"),
    sea("TS", "Tyrrhenian Sea"),
    port("VA", "Valona"),
    port("VR", "Varna"),
    port("VE", "Venice"),
    inland("VI", "Vienna"),
    inland("ZA", "Zagreb"),
    inland("ZU", "Zurich"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_count_is_71() {
        assert_eq!(ALL_PLACES.len(), 71);
        assert_eq!(PLACE_INFO.len(), PLACE_COUNT);
    }

    #[test]
    fn place_indices_are_sequential() {
        for (i, p) in ALL_PLACES.iter().enumerate() {
            assert_eq!(p.index(), i, "Place {:?} has wrong index", p);
        }
    }

    #[test]
    fn abbr_roundtrip() {
        for p in ALL_PLACES.iter() {
            let roundtrip = Place::from_abbr(p.abbr())
                .unwrap_or_else(|| panic!("Failed to look up abbreviation '{}'", p.abbr()));
            assert_eq!(*p, roundtrip);
        }
    }

    #[test]
    fn place_kind_counts() {
        let count = |kind: PlaceKind| ALL_PLACES.iter().filter(|p| p.kind() == kind).count();
        assert_eq!(count(PlaceKind::Sea), 10);
        assert_eq!(count(PlaceKind::PortCity), 29);
        assert_eq!(count(PlaceKind::InlandCity), 32);
    }

    #[test]
    fn special_places() {
        assert_eq!(Place::from_abbr("CD"), Some(Place::CastleDracula));
        assert_eq!(Place::from_abbr("JM"), Some(Place::StJosephAndStMary));
        assert!(!Place::CastleDracula.is_sea());
        assert!(Place::NorthSea.is_sea());
        assert_eq!(Place::ClermontFerrand.to_string(), "Clermont-Ferrand");
    }

    #[test]
    fn unknown_abbr_returns_none() {
        assert_eq!(Place::from_abbr("XX"), None);
        assert_eq!(Place::from_abbr(""), None);
        assert_eq!(Place::from_abbr("C?"), None);
        assert_eq!(Place::from_abbr("as"), None);
    }
}
