//! One player against one generated enemy, resolved a decision at a time.

use super::abilities::use_ability;
use super::math::{apply_multiplier, calculate_damage, defended_damage, roll_basic_attack, type_multiplier};
use super::types::{generate_enemy, Enemy};
use crate::character::{drink_potion, gain_experience, Character, ProgressEvents};
use crate::core::constants::{GOLD_REWARD_PER_ENEMY_LEVEL, XP_REWARD_PER_ENEMY_LEVEL};
use crate::core::dice::Dice;
use crate::core::error::{ArenaError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PveAction {
    Attack,
    Defend,
    UsePotion,
    Ability,
    Flee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterStatus {
    Ongoing,
    Victory,
    Defeat,
    Fled,
}

impl EncounterStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, EncounterStatus::Ongoing)
    }
}

/// Everything one action produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Narration lines in the order they happened.
    pub lines: Vec<String>,
    pub damage_dealt: i64,
    pub damage_taken: i64,
    pub healed: i64,
    pub experience_gained: u64,
    pub gold_gained: u64,
    pub progress: ProgressEvents,
}

impl TurnReport {
    fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PveEncounter {
    pub enemy: Enemy,
    pub status: EncounterStatus,
    pub log: Vec<String>,
}

impl PveEncounter {
    /// Generates an enemy scaled to `player_level`.
    pub fn start(player_level: u32, dice: &mut impl Dice) -> Self {
        Self::against(generate_enemy(player_level, dice))
    }

    pub fn against(enemy: Enemy) -> Self {
        Self {
            enemy,
            status: EncounterStatus::Ongoing,
            log: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Resolves one player decision and, where it applies, the enemy's reply.
    pub fn act(
        &mut self,
        character: &mut Character,
        action: PveAction,
        dice: &mut impl Dice,
    ) -> Result<TurnReport> {
        if self.is_over() {
            warn!(id = %character.id, ?action, status = ?self.status, "action on concluded encounter");
            return Err(ArenaError::EncounterConcluded);
        }

        let mut report = TurnReport::default();
        let foe = self.enemy.race.name();

        match action {
            PveAction::Attack => {
                let base = roll_basic_attack(character.strength(), dice);
                let mult = type_multiplier(character.race, self.enemy.race);
                let damage = apply_multiplier(base, mult);
                self.enemy.take_damage(damage);
                report.damage_dealt = damage;
                report.say(format!("You attacked the {foe} for {damage} damage!"));
                if self.enemy.is_alive() {
                    self.counter_attack(character, &mut report, dice, |foe, n| {
                        format!("The {foe} attacked you for {n} damage!")
                    });
                } else {
                    self.victory(character, &mut report, dice);
                }
            }
            PveAction::Defend => {
                let raw = self.enemy.roll_attack(dice);
                let damage = defended_damage(raw, character.constitution());
                self.hit_player(character, damage, &mut report);
                report.say(format!(
                    "You defended! The {foe} attacked for {damage} damage after reduction."
                ));
                self.check_defeat(character, &mut report);
            }
            PveAction::UsePotion => {
                if character.potions == 0 {
                    report.say("You have no potions left!");
                } else {
                    let heal = drink_potion(character, dice)?;
                    report.healed = heal;
                    report.say(format!("You used a potion and healed for {heal} HP!"));
                    self.counter_attack(character, &mut report, dice, |foe, n| {
                        format!("While using a potion, the {foe} attacked you for {n} damage!")
                    });
                }
            }
            PveAction::Ability => {
                let outcome = use_ability(character, &mut self.enemy, dice);
                report.damage_dealt = outcome.damage;
                report.healed = outcome.heal;
                report.say(outcome.narration);
                if self.enemy.is_alive() {
                    self.counter_attack(character, &mut report, dice, |foe, n| {
                        format!("The {foe} attacked you for {n} damage!")
                    });
                } else {
                    self.victory(character, &mut report, dice);
                }
            }
            PveAction::Flee => {
                self.status = EncounterStatus::Fled;
                report.say(format!("You fled from the {foe}."));
                info!(id = %character.id, enemy = foe, "fled encounter");
            }
        }

        debug!(
            id = %character.id,
            ?action,
            dealt = report.damage_dealt,
            taken = report.damage_taken,
            "pve turn resolved"
        );
        self.log.extend(report.lines.iter().cloned());
        Ok(report)
    }

    fn counter_attack(
        &mut self,
        character: &mut Character,
        report: &mut TurnReport,
        dice: &mut impl Dice,
        narrate: impl Fn(&str, i64) -> String,
    ) {
        let raw = self.enemy.roll_attack(dice);
        let damage = calculate_damage(raw, character.constitution());
        self.hit_player(character, damage, report);
        report.say(narrate(self.enemy.race.name(), damage));
        self.check_defeat(character, report);
    }

    fn hit_player(&self, character: &mut Character, damage: i64, report: &mut TurnReport) {
        character.take_damage(damage);
        report.damage_taken += damage;
    }

    fn check_defeat(&mut self, character: &Character, report: &mut TurnReport) {
        if !character.is_alive() {
            self.status = EncounterStatus::Defeat;
            report.say("You have been defeated!");
            info!(id = %character.id, enemy = %self.enemy.race, "player defeated");
        }
    }

    fn victory(&mut self, character: &mut Character, report: &mut TurnReport, dice: &mut impl Dice) {
        self.status = EncounterStatus::Victory;
        let experience = self.enemy.level as u64 * XP_REWARD_PER_ENEMY_LEVEL;
        let gold = self.enemy.level as u64 * GOLD_REWARD_PER_ENEMY_LEVEL;

        report.say(format!("You defeated the {}!", self.enemy.race));
        report.say(format!("You gained {experience} EXP and {gold} gold!"));
        report.experience_gained = experience;
        report.gold_gained = gold;

        character.gold += gold;
        let progress = gain_experience(character, experience, dice);
        report.lines.extend(progress.messages());
        report.progress = progress;

        info!(
            id = %character.id,
            enemy = %self.enemy.race,
            enemy_level = self.enemy.level,
            experience,
            gold,
            "encounter won"
        );
    }
}
