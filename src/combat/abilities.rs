use super::types::{CombatOutcome, Combatant};
use crate::core::constants::{BASIC_ATTACK_ROLL, INFERNAL_RAGE_BONUS, INFERNAL_RAGE_MANA_COST};
use crate::core::dice::Dice;
use crate::races::AbilityFamily;
use tracing::debug;

/// Fires the attacker's primary ability at the defender.
///
/// Self-heals are clamped to the attacker's base health; the outcome
/// reports the rolled amount. Ability damage ignores constitution and
/// type matchups and is applied to the defender in full.
pub fn use_ability<A, D>(attacker: &mut A, defender: &mut D, dice: &mut impl Dice) -> CombatOutcome
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let who = attacker.label();
    let ability = attacker.primary_ability();
    let strength = attacker.strength();
    let family = ability.family();

    let (damage, heal, narration) = match family {
        AbilityFamily::StrikeAndHeal => {
            let bonus = dice.roll(10, 20);
            let damage = strength + bonus;
            let heal = bonus / 2;
            (
                damage,
                heal,
                format!("{who} used {ability}, dealing {damage} damage and healing for {heal} HP!"),
            )
        }
        AbilityFamily::Fortify => {
            let heal = dice.roll(5, 15);
            (
                0,
                heal,
                format!("{who} used {ability} and fortified their defenses, healing for {heal} HP!"),
            )
        }
        AbilityFamily::DoubleStrike => {
            let damage = (strength + dice.roll(5, 15)) * 2;
            (
                damage,
                0,
                format!("{who} unleashed {ability}, striking for {damage} damage!"),
            )
        }
        AbilityFamily::ManaBurst => {
            if attacker.spend_mana(INFERNAL_RAGE_MANA_COST) {
                let damage = strength + INFERNAL_RAGE_BONUS;
                (
                    damage,
                    0,
                    format!("{who} invoked {ability}, dealing {damage} searing damage!"),
                )
            } else {
                (
                    0,
                    0,
                    format!("{who} tried to use {ability} but lacked enough mana!"),
                )
            }
        }
        AbilityFamily::Restore => {
            let heal = dice.roll(20, 30);
            (0, heal, format!("{who} used {ability} to heal for {heal} HP!"))
        }
        AbilityFamily::Charge => {
            let damage = strength + dice.roll(15, 25);
            (
                damage,
                0,
                format!("{who} used {ability}, charging for {damage} damage!"),
            )
        }
        AbilityFamily::Miracle => {
            let damage = strength + 10;
            let heal = dice.roll(10, 20);
            (
                damage,
                heal,
                format!("{who} used {ability}, dealing {damage} damage and healing for {heal} HP!"),
            )
        }
        AbilityFamily::Burn => {
            let damage = strength + dice.roll(20, 30);
            (
                damage,
                0,
                format!("{who} unleashed {ability} for {damage} damage!"),
            )
        }
        AbilityFamily::Bite => {
            let damage = strength + dice.roll(10, 20);
            (
                damage,
                0,
                format!("{who} used {ability} and bit fiercely for {damage} damage!"),
            )
        }
        AbilityFamily::Chaos => {
            if dice.coin() {
                let damage = strength + dice.roll(5, 15);
                (
                    damage,
                    0,
                    format!("{who} channeled chaos via {ability}, dealing {damage} damage!"),
                )
            } else {
                let heal = dice.roll(5, 15);
                (
                    0,
                    heal,
                    format!("{who} let loose {ability} and healed for {heal} HP!"),
                )
            }
        }
        AbilityFamily::Basic => {
            let damage = strength + dice.roll_range(BASIC_ATTACK_ROLL);
            (
                damage,
                0,
                format!("{who} performed a basic attack for {damage} damage."),
            )
        }
    };

    if heal > 0 {
        attacker.heal(heal);
    }
    if damage > 0 {
        defender.take_damage(damage);
    }
    debug!(attacker = who, ability = %ability, ?family, damage, heal, "ability resolved");
    CombatOutcome::new(narration, damage, heal)
}
