//! Simulation report generation.

use super::runner::{CareerStats, DuelStats};
use crate::races::Race;
use serde::Serialize;

/// Per-race aggregates across careers and duels.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RaceSummary {
    pub race: String,
    pub careers: u32,
    pub avg_final_level: f64,
    pub evolutions: u32,
    pub defeats: u32,
    pub duels: u32,
    pub duel_wins: u32,
    pub duel_win_rate: f64,
}

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_careers: u32,
    pub avg_final_level: f64,
    pub max_final_level: u32,
    pub evolutions: u32,
    pub defeats: u32,
    pub avg_encounters_won: f64,
    pub potions_bought: u64,

    pub num_duels: u32,
    pub duel_draws: u32,
    pub avg_duel_turns: f64,

    /// One entry per race, in roll order.
    pub races: Vec<RaceSummary>,

    #[serde(skip)]
    pub careers: Vec<CareerStats>,
    #[serde(skip)]
    pub duels: Vec<DuelStats>,
}

impl SimReport {
    /// Create a new report from finished careers and duels.
    pub fn from_runs(careers: Vec<CareerStats>, duels: Vec<DuelStats>) -> Self {
        let num_careers = careers.len() as u32;
        let num_duels = duels.len() as u32;

        let avg_final_level = average(careers.iter().map(|c| c.final_level as f64));
        let max_final_level = careers.iter().map(|c| c.final_level).max().unwrap_or(0);
        let evolutions = careers.iter().filter(|c| c.evolved).count() as u32;
        let defeats = careers.iter().filter(|c| c.defeated).count() as u32;
        let avg_encounters_won = average(careers.iter().map(|c| c.encounters_won as f64));
        let potions_bought = careers.iter().map(|c| c.potions_bought as u64).sum();

        let duel_draws = duels.iter().filter(|d| d.winner.is_none()).count() as u32;
        let avg_duel_turns = average(duels.iter().map(|d| d.turns as f64));

        let races = Race::ALL
            .iter()
            .map(|&race| summarize_race(race, &careers, &duels))
            .collect();

        Self {
            num_careers,
            avg_final_level,
            max_final_level,
            evolutions,
            defeats,
            avg_encounters_won,
            potions_bought,
            num_duels,
            duel_draws,
            avg_duel_turns,
            races,
            careers,
            duels,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    ARENA SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Careers: {}    Duels: {}\n\n",
            self.num_careers, self.num_duels
        ));

        if self.num_careers > 0 {
            report.push_str("── CAREERS ──────────────────────────────────────────────────────\n");
            report.push_str(&format!(
                "  Avg Final Level:     {:.1}\n",
                self.avg_final_level
            ));
            report.push_str(&format!("  Max Final Level:     {}\n", self.max_final_level));
            report.push_str(&format!(
                "  Evolutions:          {} ({:.1}%)\n",
                self.evolutions,
                percent(self.evolutions, self.num_careers)
            ));
            report.push_str(&format!(
                "  Defeats:             {} ({:.1}%)\n",
                self.defeats,
                percent(self.defeats, self.num_careers)
            ));
            report.push_str(&format!(
                "  Avg Encounters Won:  {:.1}\n",
                self.avg_encounters_won
            ));
            report.push_str(&format!("  Potions Bought:      {}\n\n", self.potions_bought));
        }

        if self.num_duels > 0 {
            report.push_str("── DUELS ────────────────────────────────────────────────────────\n");
            report.push_str(&format!(
                "  Draws (turn cap):    {}\n",
                self.duel_draws
            ));
            report.push_str(&format!(
                "  Avg Turns:           {:.1}\n\n",
                self.avg_duel_turns
            ));
        }

        report.push_str("── RACES ────────────────────────────────────────────────────────\n");
        report.push_str("  Race        Careers  Avg Lvl  Evolved  Defeats  Duels  Win %\n");
        for r in &self.races {
            report.push_str(&format!(
                "  {:<10} {:>8} {:>8.1} {:>8} {:>8} {:>6} {:>6.1}\n",
                r.race,
                r.careers,
                r.avg_final_level,
                r.evolutions,
                r.defeats,
                r.duels,
                r.duel_win_rate * 100.0
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn summarize_race(race: Race, careers: &[CareerStats], duels: &[DuelStats]) -> RaceSummary {
    let mine: Vec<&CareerStats> = careers.iter().filter(|c| c.race == race).collect();
    // A mirror match counts once.
    let fought: Vec<&DuelStats> = duels.iter().filter(|d| d.races.contains(&race)).collect();
    let duel_wins = fought.iter().filter(|d| d.winner == Some(race)).count() as u32;
    let duels = fought.len() as u32;

    RaceSummary {
        race: race.name().to_string(),
        careers: mine.len() as u32,
        avg_final_level: average(mine.iter().map(|c| c.final_level as f64)),
        evolutions: mine.iter().filter(|c| c.evolved).count() as u32,
        defeats: mine.iter().filter(|c| c.defeated).count() as u32,
        duels,
        duel_wins,
        duel_win_rate: if duels == 0 {
            0.0
        } else {
            duel_wins as f64 / duels as f64
        },
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
