//! The closed sets of turn suffixes.
//!
//! Hunters report the encounters they triggered (`T` per trap, `V` for an
//! immature vampire, `D` for Dracula). Dracula reports the encounter placed
//! (`T` at position 0 or `V` at position 1) and what expired from the end
//! of the trail (`M` malfunctioned trap or `V` matured vampire at
//! position 2). Anything outside these tables is rejected as impossible.

/// Encounters a hunter claims to have triggered this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HunterSuffix {
    pub traps: u8,
    pub vampire: bool,
    pub dracula: bool,
}

const fn hunter(traps: u8, vampire: bool, dracula: bool) -> HunterSuffix {
    HunterSuffix { traps, vampire, dracula }
}

/// Every legal hunter suffix.
pub static HUNTER_SUFFIXES: [(&str, HunterSuffix); 14] = [
    ("....", hunter(0, false, false)),
    ("T...", hunter(1, false, false)),
    ("TT..", hunter(2, false, false)),
    ("TTT.", hunter(3, false, false)),
    ("V...", hunter(0, true, false)),
    ("TV..", hunter(1, true, false)),
    ("TTV.", hunter(2, true, false)),
    ("D...", hunter(0, false, true)),
    ("TD..", hunter(1, false, true)),
    ("TTD.", hunter(2, false, true)),
    ("TTTD", hunter(3, false, true)),
    ("VD..", hunter(0, true, true)),
    ("TVD.", hunter(1, true, true)),
    ("TTVD", hunter(2, true, true)),
];

impl HunterSuffix {
    pub fn parse(suffix: &str) -> Option<HunterSuffix> {
        HUNTER_SUFFIXES
            .iter()
            .find(|(text, _)| *text == suffix)
            .map(|(_, parsed)| *parsed)
    }
}

/// The encounter that leaves the end of Dracula's trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expiry {
    Malfunction,
    Maturation,
}

/// Dracula's placement and expiry report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraculaSuffix {
    pub trap: bool,
    pub vampire: bool,
    pub expiry: Option<Expiry>,
}

const fn dracula(trap: bool, vampire: bool, expiry: Option<Expiry>) -> DraculaSuffix {
    DraculaSuffix { trap, vampire, expiry }
}

const M: Option<Expiry> = Some(Expiry::Malfunction);
const V: Option<Expiry> = Some(Expiry::Maturation);

/// Every legal Dracula suffix.
pub static DRACULA_SUFFIXES: [(&str, DraculaSuffix); 9] = [
    ("....", dracula(false, false, None)),
    ("T...", dracula(true, false, None)),
    (".V..", dracula(false, true, None)),
    ("..M.", dracula(false, false, M)),
    ("..V.", dracula(false, false, V)),
    ("T.M.", dracula(true, false, M)),
    ("T.V.", dracula(true, false, V)),
    (".VM.", dracula(false, true, M)),
    (".VV.", dracula(false, true, V)),
];

impl DraculaSuffix {
    pub fn parse(suffix: &str) -> Option<DraculaSuffix> {
        DRACULA_SUFFIXES
            .iter()
            .find(|(text, _)| *text == suffix)
            .map(|(_, parsed)| *parsed)
    }

    pub fn places_encounter(self) -> bool {
        self.trap || self.vampire
    }
}
