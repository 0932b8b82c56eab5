//! Plays seeded PvE careers and PvP duels through the real engine.

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::{buy_potions, create_character, Character};
use crate::combat::{EncounterStatus, Party, PveAction, PveEncounter, PvpAction, PvpSession};
use crate::core::constants::{INFERNAL_RAGE_MANA_COST, POTION_COST, STARTING_POTIONS};
use crate::core::dice::Dice;
use crate::core::error::Result;
use crate::races::{AbilityFamily, Race};
use crate::save::{CharacterStore, MemoryStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Keeps duel seeds clear of career seeds.
const DUEL_SEED_OFFSET: u64 = 1 << 32;

/// Drink below this share of base health.
const POTION_THRESHOLD_PERCENT: i64 = 30;

/// How one PvE career ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerStats {
    pub race: Race,
    pub final_level: u32,
    pub evolved: bool,
    pub defeated: bool,
    pub encounters_won: u32,
    pub encounters_fled: u32,
    pub potions_bought: u32,
}

/// How one PvP duel ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuelStats {
    pub races: [Race; 2],
    /// `None` when the turn cap was hit.
    pub winner: Option<Race>,
    pub turns: u32,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let mut careers = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let mut rng = rng_for(config.seed, run_idx as u64);
        let stats = simulate_career(config, &mut rng);
        debug!(
            run = run_idx + 1,
            race = %stats.race,
            level = stats.final_level,
            defeated = stats.defeated,
            "career finished"
        );
        careers.push(stats);
    }

    let mut duels = Vec::with_capacity(config.num_duels as usize);
    for duel_idx in 0..config.num_duels {
        let mut rng = rng_for(config.seed, DUEL_SEED_OFFSET + duel_idx as u64);
        duels.push(simulate_duel(config, &mut rng)?);
    }

    info!(careers = careers.len(), duels = duels.len(), "simulation complete");
    Ok(SimReport::from_runs(careers, duels))
}

fn rng_for(seed: Option<u64>, offset: u64) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(offset)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// One character fighting encounters until defeat or retirement.
pub fn simulate_career(config: &SimConfig, dice: &mut impl Dice) -> CareerStats {
    let mut character = create_character(dice);
    let mut stats = CareerStats {
        race: character.race,
        final_level: character.level,
        evolved: false,
        defeated: false,
        encounters_won: 0,
        encounters_fled: 0,
        potions_bought: 0,
    };

    for _ in 0..config.encounters_per_run {
        let mut battle = PveEncounter::start(character.level, dice);
        let mut turns = 0;
        while !battle.is_over() {
            let action = if turns >= config.max_turns {
                PveAction::Flee
            } else {
                choose_pve_action(&character)
            };
            // Only fails once the encounter has concluded.
            if battle.act(&mut character, action, dice).is_err() {
                break;
            }
            turns += 1;
        }

        match battle.status {
            EncounterStatus::Victory => stats.encounters_won += 1,
            EncounterStatus::Fled => stats.encounters_fled += 1,
            EncounterStatus::Defeat => {
                stats.defeated = true;
                break;
            }
            EncounterStatus::Ongoing => {}
        }

        if config.use_shop {
            stats.potions_bought += restock(&mut character);
        }
    }

    stats.final_level = character.level;
    stats.evolved = character.evolved;
    stats
}

/// Potion when low, a damaging ability when it can fire, else attack.
pub fn choose_pve_action(character: &Character) -> PveAction {
    let low = character.current_health * 100 < character.base_health * POTION_THRESHOLD_PERCENT;
    if low && character.potions > 0 {
        PveAction::UsePotion
    } else if ability_ready(character) {
        PveAction::Ability
    } else {
        PveAction::Attack
    }
}

fn ability_ready(character: &Character) -> bool {
    let family = character.abilities.primary.family();
    match family {
        AbilityFamily::ManaBurst => character.mana >= INFERNAL_RAGE_MANA_COST,
        _ => family.deals_damage(),
    }
}

/// Tops potions back up to the starting count if gold allows.
fn restock(character: &mut Character) -> u32 {
    let missing = STARTING_POTIONS.saturating_sub(character.potions) as u64;
    let affordable = character.gold / POTION_COST;
    let quantity = missing.min(affordable);
    if quantity == 0 {
        return 0;
    }
    match buy_potions(character, quantity as i64) {
        Ok(purchase) => purchase.quantity,
        Err(_) => 0,
    }
}

/// Two fresh characters trading blows until one drops.
///
/// Both sides are kept in a `MemoryStore` and loaded by the ids the
/// session holds each turn.
pub fn simulate_duel(config: &SimConfig, dice: &mut impl Dice) -> Result<DuelStats> {
    let (mut session, p1, p2) = PvpSession::start(dice);
    let races = [p1.race, p2.race];
    let mut store = MemoryStore::new();
    store.save(&p1)?;
    store.save(&p2)?;

    let mut turns = 0;
    while let Some(active) = session.active() {
        if turns >= config.max_turns {
            break;
        }
        let mut a = store.load(session.player(Party::One))?;
        let mut b = store.load(session.player(Party::Two))?;
        let actor = match active {
            Party::One => &a,
            Party::Two => &b,
        };
        let action = if ability_ready(actor) {
            PvpAction::Ability
        } else {
            PvpAction::Attack
        };
        session.submit(&mut a, &mut b, action, dice)?;
        store.save(&a)?;
        store.save(&b)?;
        turns += 1;
    }

    let winner = session.winner().map(|party| match party {
        Party::One => races[0],
        Party::Two => races[1],
    });
    Ok(DuelStats {
        races,
        winner,
        turns,
    })
}
