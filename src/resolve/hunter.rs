//! Hunter turns: movement, encounters, hospital and rest.

use tracing::trace;

use crate::board::place::Place;
use crate::board::player::Player;
use crate::game::Action;
use crate::protocol::suffix::HunterSuffix;
use crate::protocol::token::Location;
use crate::rules::{RAIL_CYCLE, RESEARCH_STREAK, TRAIL_SIZE};

use super::error::{HunterMoveError, HunterSuffixError};
use super::processor::TurnContext;

impl TurnContext<'_> {
    /// Moves `hunter` and returns the destination and whether the hunter
    /// stayed put.
    pub(super) fn hunter_move(
        &mut self,
        hunter: Player,
        code: &str,
    ) -> Result<(Place, bool), HunterMoveError> {
        let dest = match Location::from_code(code) {
            Some(Location::Place(p)) => p,
            Some(l) if l.is_dracula_only() => {
                return Err(HunterMoveError::DraculaOnlyMove(code.to_string()))
            }
            _ => return Err(HunterMoveError::UnknownMove(code.to_string())),
        };

        let from = self.state.location(hunter);
        // Round 0 places the hunters anywhere.
        if let Some(from) = from.filter(|_| self.state.round > 0) {
            let rail_hops = (hunter.index() + self.state.round as usize) % RAIL_CYCLE;
            if !self.map.hunter_can_reach(from, dest, rail_hops) {
                return Err(HunterMoveError::Unreachable { hunter, from, to: dest });
            }
        }

        self.state.record_move(hunter, Location::Place(dest), dest);
        self.state.reveal_visits(dest);
        Ok((dest, from == Some(dest)))
    }

    /// Checks and applies the encounters a hunter reports at `place`.
    pub(super) fn hunter_encounters(
        &mut self,
        hunter: Player,
        place: Place,
        rested: bool,
        suffix: &str,
    ) -> Result<(), HunterSuffixError> {
        let claim = HunterSuffix::parse(suffix)
            .ok_or_else(|| HunterSuffixError::Impossible(suffix.to_string()))?;
        self.check_hunter_claim(hunter, place, claim)?;

        let rules = self.rules;
        for _ in 0..claim.traps {
            self.state.remove_trap_at(place);
            let health = self.state.health_mut(hunter);
            *health = health.saturating_sub(rules.trap_damage);
            self.actions.push(Action::TrapEncounter);
        }
        if claim.vampire {
            self.state.vampire = None;
            self.actions.push(Action::VampireEncounter);
        }
        if claim.dracula {
            let health = self.state.health_mut(hunter);
            *health = health.saturating_sub(rules.dracula_encounter_damage);
            let blood = self.state.health_mut(Player::Dracula);
            *blood = blood.saturating_sub(rules.hunter_encounter_damage);
            self.actions.push(Action::DraculaEncounter);
        }

        if self.state.health(hunter) <= 0 {
            *self.state.health_mut(hunter) = 0;
            self.state.locations[hunter.index()] = Some(self.map.hospital());
            self.state.score = self.state.score.saturating_sub(rules.score_per_hospitalisation);
            self.actions.push(Action::Hospitalised);
        }

        if rested && self.state.health(hunter) > 0 {
            let health = self.state.health_mut(hunter);
            *health = health.saturating_add(rules.rest_gain).min(rules.hunter_max_health);
            self.actions.push(Action::Rest);
            self.state.rest_streak += 1;
        } else {
            self.state.rest_streak = 0;
        }

        if self.state.rest_streak >= RESEARCH_STREAK {
            if let Some(round) = self.state.round.checked_sub(TRAIL_SIZE as u32) {
                trace!(round, "research");
                self.state.reveal(round);
            }
            self.actions.push(Action::Research);
        }
        Ok(())
    }

    /// The claimed encounters must be exactly those the hunter triggers,
    /// in trap, vampire, Dracula order, stopping once incapacitated.
    fn check_hunter_claim(
        &self,
        hunter: Player,
        place: Place,
        claim: HunterSuffix,
    ) -> Result<(), HunterSuffixError> {
        let mut health = self.state.health(hunter);

        let present = self.state.traps_at(place);
        let claimed = claim.traps as usize;
        let damage = self.rules.trap_damage.max(1) as u32;
        let bearable = (health.max(0) as u32).div_ceil(damage) as usize;
        let expected = present.min(bearable);
        if claimed > present {
            return Err(HunterSuffixError::TrapsExcessive { hunter, place, present, claimed });
        }
        if claimed > expected {
            return Err(HunterSuffixError::TrapsAfterIncapacitated {
                hunter,
                place,
                expected,
                claimed,
            });
        }
        if claimed < expected {
            return Err(HunterSuffixError::TrapsMissed { hunter, place, expected, claimed });
        }
        health = health.saturating_sub(self.rules.trap_damage.saturating_mul(expected as i32));

        let vampire_here = self.state.vampire == Some(place);
        if claim.vampire {
            if !vampire_here {
                return Err(HunterSuffixError::VampireAbsent { hunter, place });
            }
            if health <= 0 {
                return Err(HunterSuffixError::VampireAfterIncapacitated { hunter });
            }
        } else if vampire_here && health > 0 {
            return Err(HunterSuffixError::VampireMissed { hunter, place });
        }

        let dracula_here = self.state.location(Player::Dracula) == Some(place);
        if claim.dracula {
            if !dracula_here {
                return Err(HunterSuffixError::DraculaAbsent { hunter, place });
            }
            if place.is_sea() {
                return Err(HunterSuffixError::DraculaAtSea { hunter, place });
            }
            if health <= 0 {
                return Err(HunterSuffixError::DraculaAfterIncapacitated { hunter });
            }
        } else if dracula_here && !place.is_sea() && health > 0 {
            return Err(HunterSuffixError::DraculaMissed { hunter, place });
        }
        Ok(())
    }
}
