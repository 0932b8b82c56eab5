//! Integration test: damage formulas, abilities and full PvE encounters.

mod common;

use arena::combat::{
    apply_multiplier, calculate_damage, generate_enemy, roll_basic_attack, type_multiplier,
    use_ability, EncounterStatus, PveAction, PveEncounter,
};
use arena::core::{ArenaError, ScriptedDice};
use arena::races::Race;
use common::catalog_character;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Enemy of `race` at level 1 with catalog stats.
fn level_one(race: Race) -> PveEncounter {
    PveEncounter::start(1, &mut ScriptedDice::rolls([race.index() as i64, 1]))
}

#[test]
fn test_strength_ten_roll_five_against_constitution_eight() {
    let base = roll_basic_attack(10, &mut ScriptedDice::rolls([5]));
    let damage = apply_multiplier(base, type_multiplier(Race::Human, Race::Elf));
    assert_eq!(damage, 15);
    assert_eq!(calculate_damage(damage, 8), 11);
}

#[test]
fn test_demon_hits_angel_for_one_and_a_half() {
    let mut demon = catalog_character(Race::Demon, 1);
    let mut battle = level_one(Race::Angel);
    let attack_min = battle.enemy.attack_min;
    // 15 strength + 5 = 20, x1.5 = 30
    let report = battle
        .act(&mut demon, PveAction::Attack, &mut ScriptedDice::rolls([5, attack_min]))
        .unwrap();
    assert_eq!(report.damage_dealt, 30);
    assert_eq!(battle.enemy.current_health, 333 - 30);
}

#[test]
fn test_evolved_forms_keep_matchups() {
    let mut archangel = catalog_character(Race::Angel, 2);
    archangel.evolved = true;
    let mut battle = level_one(Race::Demon);
    let attack_min = battle.enemy.attack_min;
    // 10 strength + 4 = 14, x1.5 = 21
    let report = battle
        .act(&mut archangel, PveAction::Attack, &mut ScriptedDice::rolls([4, attack_min]))
        .unwrap();
    assert_eq!(report.damage_dealt, 21);
}

#[test]
fn test_mana_gate_at_nineteen_and_twenty() {
    let mut enemy = generate_enemy(1, &mut ScriptedDice::rolls([0, 1]));
    let mut demon = catalog_character(Race::Demon, 3);

    demon.mana = 19;
    let fizzle = use_ability(&mut demon, &mut enemy, &mut ScriptedDice::default());
    assert_eq!((fizzle.damage, demon.mana), (0, 19));
    assert_eq!(enemy.current_health, enemy.base_health);

    demon.mana = 20;
    let burst = use_ability(&mut demon, &mut enemy, &mut ScriptedDice::default());
    assert_eq!((burst.damage, demon.mana), (45, 0));
    assert_eq!(enemy.current_health, enemy.base_health - 45);
}

#[test]
fn test_defend_uses_flat_reduction() {
    let mut dwarf = catalog_character(Race::Dwarf, 4);
    let con = dwarf.constitution();
    let mut battle = level_one(Race::Human);
    let report = battle
        .act(&mut dwarf, PveAction::Defend, &mut ScriptedDice::rolls([20]))
        .unwrap();
    assert_eq!(report.damage_taken, (20 - con / 2 - 5).max(1));
}

#[test]
fn test_winning_streak_pays_out() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut dragon = catalog_character(Race::Dragon, 5);
    let mut wins = 0;
    let mut gold = dragon.gold;

    while wins < 3 && dragon.is_alive() {
        let mut battle = PveEncounter::start(dragon.level, &mut rng);
        let level = battle.enemy.level as u64;
        while !battle.is_over() {
            battle.act(&mut dragon, PveAction::Attack, &mut rng).unwrap();
        }
        if battle.status == EncounterStatus::Victory {
            wins += 1;
            gold += level * 20;
            assert_eq!(dragon.gold, gold);
        }
    }
    assert!(wins == 3 || dragon.current_health == 0);
}

#[test]
fn test_concluded_encounter_is_immutable() {
    let mut human = catalog_character(Race::Human, 6);
    let mut battle = level_one(Race::Human);
    battle.enemy.current_health = 1;
    battle
        .act(&mut human, PveAction::Attack, &mut ScriptedDice::rolls([1]))
        .unwrap();
    assert_eq!(battle.status, EncounterStatus::Victory);

    for action in [
        PveAction::Attack,
        PveAction::Defend,
        PveAction::UsePotion,
        PveAction::Ability,
        PveAction::Flee,
    ] {
        let before = (human.clone(), battle.clone());
        let err = battle
            .act(&mut human, action, &mut ScriptedDice::default())
            .unwrap_err();
        assert!(matches!(err, ArenaError::EncounterConcluded));
        assert_eq!((human.clone(), battle.clone()), before);
    }
}
