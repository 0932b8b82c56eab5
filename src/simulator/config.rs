//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of PvE careers to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum encounters per career before it retires
    pub encounters_per_run: u32,

    /// Number of PvP duels between fresh characters
    pub num_duels: u32,

    /// Turn cap for a single fight; PvE flees and PvP draws past it
    pub max_turns: u32,

    /// Restock potions from the shop between encounters
    pub use_shop: bool,

    /// Output verbosity (0 = report only, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            encounters_per_run: 50,
            num_duels: 1000,
            max_turns: 500,
            use_shop: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small batch for smoke runs
    pub fn quick() -> Self {
        Self {
            num_runs: 50,
            encounters_per_run: 20,
            num_duels: 50,
            ..Default::default()
        }
    }

    /// Duels only, for race matchup analysis
    pub fn pvp_only() -> Self {
        Self {
            num_runs: 0,
            num_duels: 5000,
            ..Default::default()
        }
    }
}
