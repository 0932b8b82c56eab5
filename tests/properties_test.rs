//! Property-based tests for creation, leveling and damage invariants.

mod common;

use proptest::prelude::*;

use arena::character::{
    chaos_stat_from, create_character, gain_experience, xp_for_next_level, AttributeType,
};
use arena::combat::{calculate_damage, use_ability, Combatant};
use arena::core::ScriptedDice;
use arena::races::Race;
use common::{catalog_character, experience_to_reach};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_race() -> impl Strategy<Value = Race> {
    (0usize..10).prop_map(|i| Race::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Damage after constitution is never below 1, and exact when positive.
    #[test]
    fn prop_damage_floor(raw in 0i64..100_000, con in 0i64..100_000) {
        let effective = calculate_damage(raw, con);
        prop_assert!(effective >= 1);
        if raw - con / 2 >= 1 {
            prop_assert_eq!(effective, raw - con / 2);
        }
    }

    /// Rolled attributes and mana stay inside catalog + variance.
    #[test]
    fn prop_creation_within_variance(seed in any::<u64>()) {
        let c = create_character(&mut ChaCha8Rng::seed_from_u64(seed));
        let def = c.race.definition();
        for attr in AttributeType::all() {
            // Chaos replaces the catalog speed
            if attr == AttributeType::Speed && def.chaotic {
                continue;
            }
            let (lo, hi) = def.variance.attributes[attr.index()];
            let base = def.attributes.get(attr);
            let value = c.attributes.get(attr);
            prop_assert!(value >= base + lo && value <= base + hi);
        }
        prop_assert!(c.mana >= def.mana + def.variance.mana.0);
        prop_assert!(c.mana <= def.mana + def.variance.mana.1);
    }

    /// Exactly one threshold's worth of experience is exactly one level.
    #[test]
    fn prop_one_threshold_one_level(race in any_race(), start in 1u32..9) {
        let mut c = catalog_character(race, 1);
        gain_experience(&mut c, experience_to_reach(start), &mut ScriptedDice::default());
        prop_assert_eq!(c.level, start);

        let events = gain_experience(&mut c, xp_for_next_level(start), &mut ScriptedDice::default());
        prop_assert_eq!(events.level_ups(), 1);
        prop_assert_eq!(c.level, start + 1);
        prop_assert_eq!(c.experience, 0);
    }

    /// However experience is split up, evolution happens exactly once.
    #[test]
    fn prop_evolution_once(
        race in any_race(),
        grants in proptest::collection::vec(0u64..3000, 1..20),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut c = catalog_character(race, 1);
        let mut evolutions = 0;
        for amount in grants {
            if gain_experience(&mut c, amount, &mut rng).evolved_into.is_some() {
                evolutions += 1;
            }
        }
        prop_assert!(evolutions <= 1);
        prop_assert_eq!(c.evolved, c.level >= 10);
        prop_assert_eq!(evolutions == 1, c.evolved);
    }

    /// Abilities never overheal and never push health out of range.
    #[test]
    fn prop_ability_keeps_health_in_range(
        attacker in any_race(),
        defender in any_race(),
        hurt in 0i64..100,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut a = catalog_character(attacker, 1);
        let mut d = catalog_character(defender, 2);
        a.current_health = (a.base_health - hurt).max(1);
        let outcome = use_ability(&mut a, &mut d, &mut rng);
        prop_assert!(outcome.damage >= 0);
        prop_assert!(outcome.heal >= 0);
        prop_assert!(a.current_health <= a.base_health);
        prop_assert!(d.current_health >= 0);
        prop_assert!(a.mana() >= 0);
    }

    /// Chaos stat lands in its documented bands for every reachable draw.
    #[test]
    fn prop_chaos_stat_bands(mult in 1i64..=101, div in 1i64..=3) {
        let v = chaos_stat_from(mult, div);
        if div == 1 {
            prop_assert_eq!(v, 100 * mult);
        } else {
            prop_assert!((0..=100).contains(&v));
        }
    }
}
