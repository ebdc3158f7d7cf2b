//! Records of completed turns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::place::Place;
use crate::board::player::Player;
use crate::protocol::token::Location;

use super::snapshot::Snapshot;

/// Something that happened during a turn besides the move itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    TrapEncounter,
    VampireEncounter,
    DraculaEncounter,
    Hospitalised,
    Rest,
    Research,
    TrapPlaced,
    VampirePlaced,
    TrapMalfunctioned,
    VampireMatured,
}

impl Action {
    pub fn describe(self) -> &'static str {
        match self {
            Action::TrapEncounter => "encountered a trap",
            Action::VampireEncounter => "destroyed an immature vampire",
            Action::DraculaEncounter => "confronted Dracula",
            Action::Hospitalised => "was sent to the hospital",
            Action::Rest => "rested",
            Action::Research => "researched",
            Action::TrapPlaced => "placed a trap",
            Action::VampirePlaced => "placed an immature vampire",
            Action::TrapMalfunctioned => "lost a trap to malfunction",
            Action::VampireMatured => "saw a vampire mature",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// One accepted play string and its effect on the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    player: Player,
    play: String,
    play_move: Location,
    destination: Place,
    actions: Vec<Action>,
    start: Snapshot,
    end: Snapshot,
}

impl TurnRecord {
    pub(crate) fn new(
        player: Player,
        play: &str,
        play_move: Location,
        destination: Place,
        actions: Vec<Action>,
        start: Snapshot,
        end: Snapshot,
    ) -> TurnRecord {
        TurnRecord {
            player,
            play: play.to_string(),
            play_move,
            destination,
            actions,
            start,
            end,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// The raw play string.
    pub fn play(&self) -> &str {
        &self.play
    }

    /// The move code as played (`HI`, `D2`, a place, ...).
    pub fn play_move(&self) -> Location {
        self.play_move
    }

    /// The place the move resolved to.
    pub fn destination(&self) -> Place {
        self.destination
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn has_action(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn round(&self) -> u32 {
        self.start.round()
    }

    /// State before the turn.
    pub fn start(&self) -> &Snapshot {
        &self.start
    }

    /// State after the turn.
    pub fn end(&self) -> &Snapshot {
        &self.end
    }

    /// A one-sentence description of the move, e.g.
    /// "Dracula double backed by 2 to Edinburgh from Manchester."
    pub fn narration(&self) -> String {
        let from = self.start.location(self.player);
        let stayed = from == Some(self.destination);
        let verb = match self.play_move {
            Location::Teleport => "teleported to".to_string(),
            Location::DoubleBack(k) => format!("double backed by {k} to"),
            Location::Hide => "hid at".to_string(),
            _ if stayed => "remained at".to_string(),
            _ => "moved to".to_string(),
        };
        let mut line = format!("{} {} {}", self.player, verb, self.destination);
        if let Some(from) = from {
            if !stayed && self.play_move != Location::Hide {
                line.push_str(" from ");
                line.push_str(from.name());
            }
        }
        line.push('.');
        line
    }
}

#[cfg(test)]
mod tests {
    use crate::board::map::GameMap;
    use crate::board::player::Player;
    use crate::game::Action;
    use crate::resolve::Processor;

    fn narrate(plays: &[&str]) -> Vec<String> {
        let map = GameMap::standard();
        let mut p = Processor::new(&map);
        plays
            .iter()
            .map(|play| p.process_turn(play).unwrap().narration())
            .collect()
    }

    #[test]
    fn first_moves_have_no_source() {
        let lines = narrate(&["GMN...."]);
        assert_eq!(lines[0], "Lord Godalming moved to Manchester.");
    }

    #[test]
    fn narration_verbs() {
        let lines = narrate(&[
            "GMN....", "SPL....", "HAM....", "MAM....", "DMN.V..",
            "GLO....", "SPL....", "HCO....", "MAM....", "DEDT...",
            "GLO....", "SPL....", "HCO....", "MAM....", "DD2T...",
            "GLO....", "SPL....", "HCO....", "MAM....", "DHIT...",
        ]);
        assert_eq!(lines[5], "Lord Godalming moved to London from Manchester.");
        assert_eq!(lines[6], "Dr. Seward remained at Plymouth.");
        assert_eq!(lines[9], "Dracula moved to Edinburgh from Manchester.");
        assert_eq!(lines[14], "Dracula double backed by 2 to Manchester from Edinburgh.");
        assert_eq!(lines[19], "Dracula hid at Manchester.");
    }

    #[test]
    fn teleport_narration() {
        let mut plays = Vec::new();
        for dracula in ["DKL.V..", "DGAT...", "DCDT...", "DHIT...", "DD1T...", "DTP...."] {
            plays.extend(["GMA....", "SLS....", "HCA....", "MGR....", dracula]);
        }
        let lines = narrate(&plays);
        assert_eq!(lines[29], "Dracula teleported to Castle Dracula.");
        assert_eq!(lines[24], "Dracula double backed by 1 to Castle Dracula.");
    }

    #[test]
    fn actions_are_recorded_and_described() {
        let map = GameMap::standard();
        let mut p = Processor::new(&map);
        for play in ["GMN....", "SPL....", "HAM....", "MAM....", "DMN.V.."] {
            p.process_turn(play).unwrap();
        }
        let dracula = p.history().turn(4).unwrap();
        assert_eq!(dracula.player(), Player::Dracula);
        assert_eq!(dracula.actions(), &[Action::VampirePlaced]);
        assert_eq!(Action::VampirePlaced.to_string(), "placed an immature vampire");
        let godalming = p.process_turn("GMNVD..").unwrap();
        assert_eq!(
            godalming.actions(),
            &[Action::VampireEncounter, Action::DraculaEncounter, Action::Rest]
        );
        assert_eq!(godalming.end().health(Player::LordGodalming), 8);
        assert_eq!(godalming.end().health(Player::Dracula), 30);
    }
}
