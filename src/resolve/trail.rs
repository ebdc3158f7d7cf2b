//! Revealing Dracula's trail to the hunters.

use tracing::trace;

use crate::board::place::Place;
use crate::board::player::Player;
use crate::game::state::GameState;
use crate::protocol::token::Location;
use crate::rules::TRAIL_SIZE;

impl GameState {
    /// Overwrites the hunters' view of `round` with Dracula's true move.
    /// A hide or double back also reveals the move it points at, and so on
    /// until a concrete move is reached.
    pub(crate) fn reveal(&mut self, round: u32) {
        let mut r = round;
        loop {
            let Some(play) = self.past_move(Player::Dracula, r) else {
                return;
            };
            let Some(slot) = self.trail_view.get_mut(r as usize) else {
                return;
            };
            *slot = play;
            trace!(round = r, play = %play, "revealed");
            match play.back_distance().and_then(|k| r.checked_sub(k)) {
                Some(earlier) => r = earlier,
                None => return,
            }
        }
    }

    /// Records what the hunters learn from Dracula's move this round.
    pub(crate) fn conceal_or_sight(&mut self, play: Location, dest: Place, castle: Place) {
        let sighted = dest == castle || (!dest.is_sea() && self.hunter_at(dest).is_some());
        if sighted {
            self.trail_view.push(play);
            let round = self.round;
            for back in 1..TRAIL_SIZE as u32 {
                let Some(r) = round.checked_sub(back) else { break };
                if self.past_location(Player::Dracula, r) == Some(dest) {
                    self.reveal(r);
                }
            }
        } else if dest.is_sea() {
            self.trail_view.push(Location::SeaUnknown);
        } else {
            self.trail_view.push(Location::CityUnknown);
        }
    }

    /// Reveals every recent round in which Dracula was at `place`, after a
    /// hunter moved there.
    pub(crate) fn reveal_visits(&mut self, place: Place) {
        if place.is_sea() {
            return;
        }
        for back in 1..=TRAIL_SIZE as u32 {
            let Some(r) = self.round.checked_sub(back) else { break };
            if self.past_location(Player::Dracula, r) == Some(place) {
                self.reveal(r);
            }
        }
    }
}
