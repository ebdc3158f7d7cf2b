//! The five players, in turn order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 5;

/// Number of hunters.
pub const HUNTER_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    LordGodalming = 0,
    DrSeward = 1,
    VanHelsing = 2,
    MinaHarker = 3,
    Dracula = 4,
}

/// All players in turn order.
pub const ALL_PLAYERS: [Player; PLAYER_COUNT] = [
    Player::LordGodalming,
    Player::DrSeward,
    Player::VanHelsing,
    Player::MinaHarker,
    Player::Dracula,
];

/// The hunters in turn order.
pub const HUNTERS: [Player; HUNTER_COUNT] = [
    Player::LordGodalming,
    Player::DrSeward,
    Player::VanHelsing,
    Player::MinaHarker,
];

impl Player {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The leading character of this player's play strings.
    pub const fn code(self) -> char {
        match self {
            Player::LordGodalming => 'G',
            Player::DrSeward => 'S',
            Player::VanHelsing => 'H',
            Player::MinaHarker => 'M',
            Player::Dracula => 'D',
        }
    }

    pub fn from_code(c: char) -> Option<Player> {
        ALL_PLAYERS.into_iter().find(|p| p.code() == c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Player::LordGodalming => "Lord Godalming",
            Player::DrSeward => "Dr. Seward",
            Player::VanHelsing => "Van Helsing",
            Player::MinaHarker => "Mina Harker",
            Player::Dracula => "Dracula",
        }
    }

    pub const fn is_hunter(self) -> bool {
        !matches!(self, Player::Dracula)
    }

    /// The player who moves after this one.
    pub const fn next(self) -> Player {
        ALL_PLAYERS[(self.index() + 1) % PLAYER_COUNT]
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
