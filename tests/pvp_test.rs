//! Integration test: PvP sessions driven the way a caller would, loading and
//! saving both characters around every action.

mod common;

use arena::combat::{Party, PvpAction, PvpSession, PvpState};
use arena::core::{ArenaError, ScriptedDice};
use arena::races::Race;
use arena::save::{CharacterStore, MemoryStore};
use common::catalog_character;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn submit(
    session: &mut PvpSession,
    store: &mut MemoryStore,
    action: PvpAction,
    dice: &mut ScriptedDice,
) -> arena::Result<i64> {
    let mut p1 = store.load(session.player(Party::One))?;
    let mut p2 = store.load(session.player(Party::Two))?;
    let outcome = session.submit(&mut p1, &mut p2, action, dice)?;
    store.save(&p1)?;
    store.save(&p2)?;
    Ok(outcome.damage)
}

fn setup(a: Race, b: Race) -> (PvpSession, MemoryStore) {
    let p1 = catalog_character(a, 1);
    let p2 = catalog_character(b, 2);
    let mut store = MemoryStore::new();
    store.save(&p1).unwrap();
    store.save(&p2).unwrap();
    (PvpSession::new(p1.id, p2.id), store)
}

#[test]
fn test_defend_halves_only_the_next_attack() {
    let (mut session, mut store) = setup(Race::Human, Race::Human);

    submit(&mut session, &mut store, PvpAction::Defend, &mut ScriptedDice::default()).unwrap();
    let halved =
        submit(&mut session, &mut store, PvpAction::Attack, &mut ScriptedDice::rolls([6])).unwrap();
    assert_eq!(halved, 8);

    submit(&mut session, &mut store, PvpAction::Defend, &mut ScriptedDice::default()).unwrap();
    submit(&mut session, &mut store, PvpAction::Defend, &mut ScriptedDice::default()).unwrap();
    // Party two defended last; party one now attacks into it
    let halved_again =
        submit(&mut session, &mut store, PvpAction::Attack, &mut ScriptedDice::rolls([6])).unwrap();
    assert_eq!(halved_again, 8);
    let full =
        submit(&mut session, &mut store, PvpAction::Attack, &mut ScriptedDice::rolls([6])).unwrap();
    assert_eq!(full, 16);
}

#[test]
fn test_narration_log() {
    let (mut session, mut store) = setup(Race::Elf, Race::Beastman);
    submit(&mut session, &mut store, PvpAction::Attack, &mut ScriptedDice::rolls([2])).unwrap();
    submit(&mut session, &mut store, PvpAction::Defend, &mut ScriptedDice::default()).unwrap();

    let elf_strength = Race::Elf.definition().attributes.strength();
    let expected = ((elf_strength + 2) as f64 * 1.3) as i64;
    assert_eq!(
        session.log(),
        &[
            format!("Elf attacked Beastman for {expected} damage!"),
            "Beastman is defending this turn!".to_string(),
        ]
    );
}

#[test]
fn test_duel_to_the_end() {
    let (mut session, mut store) = setup(Race::Human, Race::Human);
    let mut p2 = store.load(session.player(Party::Two)).unwrap();
    p2.current_health = 12;
    store.save(&p2).unwrap();

    submit(&mut session, &mut store, PvpAction::Attack, &mut ScriptedDice::rolls([2])).unwrap();
    assert_eq!(session.state(), PvpState::Concluded(Party::One));
    assert_eq!(
        session.log().last().map(String::as_str),
        Some("Human has been defeated! Human wins!")
    );
    assert_eq!(store.load(session.player(Party::Two)).unwrap().current_health, 0);

    let err = submit(&mut session, &mut store, PvpAction::Attack, &mut ScriptedDice::default())
        .unwrap_err();
    assert!(matches!(err, ArenaError::EncounterConcluded));
}

#[test]
fn test_missing_character_surfaces_from_store() {
    let (session, mut store) = setup(Race::Human, Race::Dwarf);
    store.remove(session.player(Party::Two)).unwrap();
    let err = store.load(session.player(Party::Two)).unwrap_err();
    assert!(matches!(err, ArenaError::CharacterNotFound(_)));
}

#[test]
fn test_session_round_trips_through_json() {
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let (mut session, mut a, mut b) = PvpSession::start(&mut rng);
    session.submit(&mut a, &mut b, PvpAction::Defend, &mut rng).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: PvpSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
    assert!(restored.is_defending(Party::One));
    assert_eq!(restored.active(), Some(Party::Two));
}
