//! Dracula's turns: the trail, special moves and encounter placement.

use crate::board::place::Place;
use crate::board::player::Player;
use crate::game::state::Trap;
use crate::game::Action;
use crate::protocol::suffix::{DraculaSuffix, Expiry};
use crate::protocol::token::{Location, MAX_DOUBLE_BACK};
use crate::rules::{ENCOUNTER_LIFETIME, MATURATION_OFFSET, MAX_ENCOUNTERS, VAMPIRE_CADENCE};

use super::error::{DraculaMoveError, DraculaSuffixError};
use super::processor::TurnContext;

impl TurnContext<'_> {
    /// Moves Dracula and returns the move as played and the place it
    /// resolved to.
    pub(super) fn dracula_move(
        &mut self,
        code: &str,
    ) -> Result<(Location, Place), DraculaMoveError> {
        let play = Location::from_code(code)
            .ok_or_else(|| DraculaMoveError::UnknownMove(code.to_string()))?;
        match play {
            Location::CityUnknown | Location::SeaUnknown => {
                return Err(DraculaMoveError::NotFullyRevealed)
            }
            Location::Place(p) if p == self.map.hospital() => {
                return Err(DraculaMoveError::MovedToHospital(p))
            }
            _ => {}
        }

        let round = self.state.round;
        if play.earliest_round() > round {
            return Err(DraculaMoveError::TooEarly(play));
        }
        let castle = self.map.castle();
        let dest = self
            .state
            .resolve_dracula_move(play, castle)
            .ok_or(DraculaMoveError::TooEarly(play))?;
        if let Some(from) = self.state.location(Player::Dracula).filter(|_| round > 0) {
            self.check_dracula_move(play, from, dest)?;
        }

        self.state.record_move(Player::Dracula, play, dest);
        self.state.conceal_or_sight(play, dest, castle);
        Ok((play, dest))
    }

    fn check_dracula_move(
        &self,
        play: Location,
        from: Place,
        dest: Place,
    ) -> Result<(), DraculaMoveError> {
        if play == Location::Hide && from.is_sea() {
            return Err(DraculaMoveError::HidingAtSea(from));
        }
        let trail = self.state.dracula_trail();
        if play == Location::Teleport {
            return self.check_teleport(from, &trail);
        }
        if play.is_double_back() && trail.iter().any(|m| m.is_double_back()) {
            return Err(DraculaMoveError::DoubleBackInTrail);
        }
        if trail.contains(&play) {
            return Err(DraculaMoveError::AlreadyInTrail(play));
        }
        if !self.map.dracula_adjacent(from, dest) {
            return Err(DraculaMoveError::NotAdjacent { play, from, to: dest });
        }
        Ok(())
    }

    /// Teleporting is only allowed when Dracula has no other legal move.
    fn check_teleport(&self, from: Place, trail: &[Location]) -> Result<(), DraculaMoveError> {
        let hospital = self.map.hospital();
        let mut alternatives: Vec<Location> = self
            .map
            .reachable_by_dracula(from)
            .into_iter()
            .filter(|p| *p != hospital)
            .map(Location::Place)
            .filter(|m| !trail.contains(m))
            .collect();
        if !from.is_sea() && !trail.contains(&Location::Hide) {
            alternatives.push(Location::Hide);
        }
        if !trail.iter().any(|m| m.is_double_back()) {
            for k in 1..=MAX_DOUBLE_BACK {
                let Some(round) = self.state.round.checked_sub(k as u32) else { break };
                let target = self.state.past_location(Player::Dracula, round);
                if target.is_some_and(|p| self.map.dracula_adjacent(from, p)) {
                    alternatives.push(Location::DoubleBack(k));
                }
            }
        }
        if alternatives.is_empty() {
            Ok(())
        } else {
            Err(DraculaMoveError::TeleportWithAlternatives { alternatives })
        }
    }

    /// Checks and applies Dracula's placement and expiry report at `place`.
    pub(super) fn dracula_encounters(
        &mut self,
        place: Place,
        suffix: &str,
    ) -> Result<(), DraculaSuffixError> {
        let report = DraculaSuffix::parse(suffix)
            .ok_or_else(|| DraculaSuffixError::Impossible(suffix.to_string()))?;
        let round = self.state.round;

        let expiring_trap = round
            .checked_sub(ENCOUNTER_LIFETIME)
            .and_then(|placed| self.state.traps.iter().position(|t| t.round == placed));
        let maturing = self
            .state
            .vampire
            .filter(|_| round % VAMPIRE_CADENCE == MATURATION_OFFSET);

        let mut count = self.state.encounters_at(place);
        match report.expiry {
            Some(Expiry::Malfunction) => {
                let i = expiring_trap.ok_or(DraculaSuffixError::NoMalfunctionDue { round })?;
                if self.state.traps[i].place == place {
                    count -= 1;
                }
            }
            Some(Expiry::Maturation) => {
                let vampire = maturing.ok_or(DraculaSuffixError::NoMaturationDue { round })?;
                if vampire == place {
                    count -= 1;
                }
            }
            None => {
                if let Some(i) = expiring_trap {
                    let Trap { round: placed, place } = self.state.traps[i];
                    return Err(DraculaSuffixError::MissedMalfunction { place, placed });
                }
                if let Some(vampire) = maturing {
                    return Err(DraculaSuffixError::MissedMaturation {
                        place: vampire,
                        placed: round - MATURATION_OFFSET,
                    });
                }
            }
        }

        let vampire_round = round % VAMPIRE_CADENCE == 0;
        if report.places_encounter() {
            if place.is_sea() {
                return Err(DraculaSuffixError::EncounterAtSea(place));
            }
            if count >= MAX_ENCOUNTERS {
                return Err(DraculaSuffixError::AlreadyThreeEncounters(place));
            }
            if report.trap && vampire_round {
                return Err(DraculaSuffixError::TrapOnVampireRound { round });
            }
            if report.vampire && !vampire_round {
                return Err(DraculaSuffixError::VampireOnTrapRound { round });
            }
        } else if count < MAX_ENCOUNTERS && !place.is_sea() {
            return Err(DraculaSuffixError::MissingPlacement { round, vampire: vampire_round });
        }

        let rules = self.rules;
        match report.expiry {
            Some(Expiry::Malfunction) => {
                if let Some(i) = expiring_trap {
                    self.state.traps.remove(i);
                    self.actions.push(Action::TrapMalfunctioned);
                }
            }
            Some(Expiry::Maturation) => {
                self.state.vampire = None;
                self.state.score = self.state.score.saturating_sub(rules.score_per_maturation);
                self.actions.push(Action::VampireMatured);
            }
            None => {}
        }
        if report.trap {
            self.state.traps.push(Trap { round, place });
            self.actions.push(Action::TrapPlaced);
        }
        if report.vampire {
            self.state.vampire = Some(place);
            self.actions.push(Action::VampirePlaced);
        }

        let blood = self.state.health_mut(Player::Dracula);
        if place.is_sea() {
            *blood = blood.saturating_sub(rules.sea_damage);
        } else if place == self.map.castle() {
            *blood = blood.saturating_add(rules.castle_gain);
        }
        self.state.score = self.state.score.saturating_sub(rules.score_per_dracula_turn);
        Ok(())
    }
}
