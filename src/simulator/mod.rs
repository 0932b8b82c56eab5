//! Balance simulator for Monte Carlo analysis.
//!
//! Plays batches of seeded PvE careers and PvP duels through the same
//! engine calls a game would make, then aggregates:
//! - Levels reached and evolution rate per race
//! - Defeat counts
//! - PvP win rate per race

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RaceSummary, SimReport};
pub use runner::{
    choose_pve_action, run_simulation, simulate_career, simulate_duel, CareerStats, DuelStats,
};
