//! Experience, leveling and the one-time evolution.

use super::attributes::AttributeType;
use super::types::Character;
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::races::AbilitySet;
use tracing::info;

/// What happened during one experience grant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressEvents {
    /// Each level reached, in order.
    pub levels_reached: Vec<u32>,
    /// Evolved race label, if evolution fired.
    pub evolved_into: Option<&'static str>,
}

impl ProgressEvents {
    pub fn level_ups(&self) -> u32 {
        self.levels_reached.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.levels_reached.is_empty() && self.evolved_into.is_none()
    }

    /// Player-facing notices, one per event.
    pub fn messages(&self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .levels_reached
            .iter()
            .map(|level| format!("You leveled up! You are now level {level}."))
            .collect();
        if let Some(race) = self.evolved_into {
            messages.push(format!(
                "Evolution complete! You have evolved into a {race}!"
            ));
        }
        messages
    }
}

/// Experience needed to leave `level`.
pub fn xp_for_next_level(level: u32) -> u64 {
    level as u64 * XP_PER_LEVEL
}

/// Adds experience, processes every level-up it pays for, then evolves
/// the character once it is at or past the evolution level.
pub fn gain_experience(
    character: &mut Character,
    amount: u64,
    dice: &mut impl Dice,
) -> ProgressEvents {
    let mut events = ProgressEvents::default();
    character.experience = character.experience.saturating_add(amount);

    while character.level < u32::MAX {
        let xp_needed = xp_for_next_level(character.level);
        if character.experience < xp_needed {
            break;
        }
        character.experience -= xp_needed;
        level_up(character);
        events.levels_reached.push(character.level);
        info!(id = %character.id, level = character.level, "level up");
    }

    if character.level >= EVOLUTION_LEVEL && !character.evolved {
        events.evolved_into = evolve(character, dice);
    }

    events
}

fn level_up(character: &mut Character) {
    character.level += 1;
    for attr in AttributeType::trained() {
        character.attributes.add(attr, LEVEL_UP_ATTRIBUTE_GAIN);
    }
    character.base_health += LEVEL_UP_HEALTH_GAIN;
    character.full_heal();
}

/// Applies the race's evolution rule. Returns the new race label, or
/// `None` when the character has already evolved.
///
/// Current health is left alone except where the new base health is
/// lower, in which case it is clamped.
pub fn evolve(character: &mut Character, dice: &mut impl Dice) -> Option<&'static str> {
    if character.evolved {
        return None;
    }
    let def = character.race.definition();
    let rule = &def.evolution;

    let mut delta = |fixed: i64| -> i64 {
        if rule.randomized {
            if dice.coin() {
                CHAOS_EVOLUTION_BONUS
            } else {
                0
            }
        } else {
            fixed
        }
    };

    character.base_health += delta(rule.health);
    character.mana += delta(rule.mana);
    for attr in AttributeType::all() {
        character.attributes.add(attr, delta(rule.attributes[attr.index()]));
    }
    if rule.keep_catalog_health {
        character.base_health = def.base_health;
    }
    character.current_health = character.current_health.min(character.base_health);

    character.abilities = AbilitySet::evolved(rule.primary, rule.secondary);
    character.evolved = true;

    info!(
        id = %character.id,
        from = def.name,
        into = rule.name,
        "evolution complete"
    );
    Some(rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::fixtures::{human, of_race};
    use crate::core::dice::ScriptedDice;
    use crate::races::{Ability, Race};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_xp_curve_is_linear() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(2), 200);
        assert_eq!(xp_for_next_level(9), 900);
    }

    #[test]
    fn test_exact_threshold_levels_once() {
        let mut c = human();
        let mut dice = ScriptedDice::default();
        let events = gain_experience(&mut c, 100, &mut dice);
        assert_eq!(events.levels_reached, vec![2]);
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_below_threshold_only_accrues() {
        let mut c = human();
        let events = gain_experience(&mut c, 99, &mut ScriptedDice::default());
        assert!(events.is_empty());
        assert_eq!(c.level, 1);
        assert_eq!(c.experience, 99);
    }

    #[test]
    fn test_one_grant_can_cross_two_thresholds() {
        let mut c = human();
        // 100 for level 1 -> 2, 200 for level 2 -> 3
        let events = gain_experience(&mut c, 300, &mut ScriptedDice::default());
        assert_eq!(events.level_ups(), 2);
        assert_eq!(c.level, 3);
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_huge_grant_saturates_instead_of_overflowing() {
        let mut c = human();
        c.level = u32::MAX;
        c.evolved = true;
        c.experience = 50;
        let events = gain_experience(&mut c, u64::MAX - 10, &mut ScriptedDice::default());
        assert_eq!(c.experience, u64::MAX);
        assert_eq!(c.level, u32::MAX);
        assert!(events.is_empty());
    }

    #[test]
    fn test_level_up_stats_and_full_heal() {
        let mut c = human();
        c.current_health = 12;
        gain_experience(&mut c, 100, &mut ScriptedDice::default());
        assert_eq!(c.strength(), 12);
        assert_eq!(c.attributes.intelligence(), 12);
        assert_eq!(c.attributes.wisdom(), 12);
        assert_eq!(c.constitution(), 12);
        assert_eq!(c.attributes.speed(), 100);
        assert_eq!(c.base_health, 120);
        assert_eq!(c.current_health, 120);
    }

    #[test]
    fn test_messages() {
        let events = ProgressEvents {
            levels_reached: vec![10],
            evolved_into: Some("High Elf"),
        };
        assert_eq!(
            events.messages(),
            vec![
                "You leveled up! You are now level 10.".to_string(),
                "Evolution complete! You have evolved into a High Elf!".to_string(),
            ]
        );
    }

    #[test]
    fn test_evolution_at_level_ten() {
        let mut c = human();
        c.level = 9;
        let events = gain_experience(&mut c, 900, &mut ScriptedDice::default());
        assert_eq!(events.evolved_into, Some("Champion Human"));
        assert!(c.evolved);
        assert_eq!(c.race_label(), "Champion Human");
        assert_eq!(c.ability_label(), "Heroic Rally | Guardian's Shield");
        // 100 + 20 (level 10) + 50 (evolution)
        assert_eq!(c.base_health, 170);
        // 10 + 2 + 5
        assert_eq!(c.strength(), 17);
        assert_eq!(c.attributes.speed(), 110);
        assert_eq!(c.mana, 120);
    }

    #[test]
    fn test_evolution_fires_once() {
        let mut c = human();
        c.level = 10;
        let first = gain_experience(&mut c, 0, &mut ScriptedDice::default());
        assert!(first.evolved_into.is_some());
        let snapshot = c.clone();

        let again = gain_experience(&mut c, 0, &mut ScriptedDice::default());
        assert!(again.evolved_into.is_none());
        assert_eq!(c, snapshot);
        assert!(evolve(&mut c, &mut ScriptedDice::default()).is_none());
        assert_eq!(c, snapshot);
    }

    #[test]
    fn test_demon_and_angel_keep_catalog_health() {
        for race in [Race::Demon, Race::Angel] {
            let mut c = of_race(race);
            let catalog = c.base_health;
            gain_experience(&mut c, 4500, &mut ScriptedDice::default());
            assert_eq!(c.level, 10);
            assert!(c.evolved);
            assert_eq!(c.base_health, catalog);
            assert!(c.current_health <= c.base_health);
        }
    }

    #[test]
    fn test_dwarf_speed_unchanged_on_evolution() {
        let mut c = of_race(Race::Dwarf);
        c.level = 10;
        gain_experience(&mut c, 0, &mut ScriptedDice::default());
        assert_eq!(c.attributes.speed(), 50);
        assert_eq!(c.abilities.primary, Ability::StalwartFortress);
    }

    #[test]
    fn test_kaosborne_evolution_flips_each_stat() {
        let mut c = of_race(Race::Kaosborne);
        c.level = 10;
        let before = c.clone();
        // health, mana, STR, INT, WIS, CON, SPD
        let mut dice = ScriptedDice::default();
        for flip in [true, false, true, true, false, false, true] {
            dice.push_coin(flip);
        }
        evolve(&mut c, &mut dice);
        assert!(dice.is_exhausted());

        assert_eq!(c.base_health, before.base_health + 100);
        assert_eq!(c.mana, before.mana);
        assert_eq!(c.strength(), before.strength() + 100);
        assert_eq!(c.attributes.intelligence(), before.attributes.intelligence() + 100);
        assert_eq!(c.attributes.wisdom(), before.attributes.wisdom());
        assert_eq!(c.constitution(), before.constitution());
        assert_eq!(c.attributes.speed(), before.attributes.speed() + 100);
        assert_eq!(c.race_label(), "Anarchic Kaosborne");
    }

    #[test]
    fn test_evolution_reachable_for_every_race() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for race in Race::ALL {
            let mut c = of_race(race);
            let events = gain_experience(&mut c, 4500, &mut rng);
            assert_eq!(events.level_ups(), 9);
            assert_eq!(events.evolved_into, Some(race.evolved_name()));
            assert!(c.abilities.secondary.is_some());
        }
    }
}
