//! Two-player local duel: alternating turns until one side drops.
//!
//! The session holds only ids, whose turn it is and the defend flags. The
//! caller loads both characters, passes them in for every action and saves
//! them afterwards.

use super::abilities::use_ability;
use super::math::{apply_multiplier, roll_basic_attack, type_multiplier};
use super::types::CombatOutcome;
use crate::character::{create_character, Character, CharacterId};
use crate::core::dice::Dice;
use crate::core::error::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    One,
    Two,
}

impl Party {
    pub fn other(self) -> Party {
        match self {
            Party::One => Party::Two,
            Party::Two => Party::One,
        }
    }

    fn slot(self) -> usize {
        match self {
            Party::One => 0,
            Party::Two => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PvpState {
    AwaitingAction(Party),
    Concluded(Party),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PvpAction {
    Attack,
    Defend,
    Ability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PvpSession {
    players: [CharacterId; 2],
    state: PvpState,
    defending: [bool; 2],
    log: Vec<String>,
}

impl PvpSession {
    /// Party one moves first.
    pub fn new(p1: CharacterId, p2: CharacterId) -> Self {
        Self {
            players: [p1, p2],
            state: PvpState::AwaitingAction(Party::One),
            defending: [false, false],
            log: Vec::new(),
        }
    }

    /// Rolls two fresh characters and opens a session between them.
    pub fn start(dice: &mut impl Dice) -> (Self, Character, Character) {
        let p1 = create_character(dice);
        let p2 = create_character(dice);
        let session = Self::new(p1.id, p2.id);
        info!(p1 = %p1.race_label(), p2 = %p2.race_label(), "pvp session started");
        (session, p1, p2)
    }

    pub fn player(&self, party: Party) -> CharacterId {
        self.players[party.slot()]
    }

    pub fn state(&self) -> PvpState {
        self.state
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_defending(&self, party: Party) -> bool {
        self.defending[party.slot()]
    }

    pub fn active(&self) -> Option<Party> {
        match self.state {
            PvpState::AwaitingAction(party) => Some(party),
            PvpState::Concluded(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Party> {
        match self.state {
            PvpState::Concluded(party) => Some(party),
            PvpState::AwaitingAction(_) => None,
        }
    }

    /// Applies `action` for whoever holds the turn.
    ///
    /// A defend flag lasts for exactly the opponent's next action: it halves
    /// a basic attack's base damage (before the matchup multiplier) and is
    /// discarded whatever that action was.
    pub fn submit(
        &mut self,
        p1: &mut Character,
        p2: &mut Character,
        action: PvpAction,
        dice: &mut impl Dice,
    ) -> Result<CombatOutcome> {
        let Some(active) = self.active() else {
            warn!(?action, "action on concluded pvp session");
            return Err(ArenaError::EncounterConcluded);
        };
        for (expected, given) in self.players.iter().zip([p1.id, p2.id]) {
            if *expected != given {
                return Err(ArenaError::CharacterNotFound(*expected));
            }
        }

        let (attacker, defender) = match active {
            Party::One => (p1, p2),
            Party::Two => (p2, p1),
        };
        let opponent = active.other();

        let mut outcome = match action {
            PvpAction::Attack => {
                let mut base = roll_basic_attack(attacker.strength(), dice);
                if self.is_defending(opponent) {
                    base /= 2;
                }
                let damage = apply_multiplier(base, type_multiplier(attacker.race, defender.race));
                defender.take_damage(damage);
                CombatOutcome::new(
                    format!(
                        "{} attacked {} for {damage} damage!",
                        attacker.race_label(),
                        defender.race_label()
                    ),
                    damage,
                    0,
                )
            }
            PvpAction::Defend => {
                CombatOutcome::note(format!("{} is defending this turn!", attacker.race_label()))
            }
            PvpAction::Ability => use_ability(attacker, defender, dice),
        };
        self.log.push(outcome.narration.clone());

        if !defender.is_alive() {
            let line = format!(
                "{} has been defeated! {} wins!",
                defender.race_label(),
                attacker.race_label()
            );
            self.log.push(line.clone());
            outcome.narration = format!("{}\n{line}", outcome.narration);
            self.state = PvpState::Concluded(active);
            self.defending = [false, false];
            info!(winner = ?active, race = attacker.race_label(), "pvp session concluded");
        } else {
            self.defending[opponent.slot()] = false;
            self.defending[active.slot()] = action == PvpAction::Defend;
            self.state = PvpState::AwaitingAction(opponent);
        }

        debug!(party = ?active, ?action, damage = outcome.damage, "pvp action resolved");
        Ok(outcome)
    }
}
