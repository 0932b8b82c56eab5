//! Arena balance simulator CLI.
//!
//! Run Monte Carlo batches of PvE careers and PvP duels.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulator                        # 1000 careers, 1000 duels
//!   cargo run --bin simulator -- -n 100 --seed 42    # Reproducible run
//!   cargo run --bin simulator -- --pvp --json out.json

use arena::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let (config, json_path) = parse_args(&args);
    init_tracing(config.verbosity);

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║                 ARENA BALANCE SIMULATOR                       ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Careers:        {}", config.num_runs);
        println!("  Encounters:     {}", config.encounters_per_run);
        println!("  Duels:          {}", config.num_duels);
        println!("  Turn Cap:       {}", config.max_turns);
        println!("  Shop:           {}", config.use_shop);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if let Some(path) = json_path {
        if let Err(e) = std::fs::write(&path, report.to_json()) {
            eprintln!("Failed to write JSON report to {path}: {e}");
            return ExitCode::FAILURE;
        }
        if config.verbosity >= 1 {
            println!("JSON report saved to: {}", path);
        }
    }

    ExitCode::SUCCESS
}

/// `RUST_LOG` wins; otherwise warnings only, or debug output with `--verbose`.
fn init_tracing(verbosity: u8) {
    let default_level = if verbosity >= 2 { "arena=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> (SimConfig, Option<String>) {
    let mut config = SimConfig::default();
    let mut json_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-e" | "--encounters" => {
                if i + 1 < args.len() {
                    config.encounters_per_run =
                        args[i + 1].parse().unwrap_or(config.encounters_per_run);
                    i += 1;
                }
            }
            "-d" | "--duels" => {
                if i + 1 < args.len() {
                    config.num_duels = args[i + 1].parse().unwrap_or(config.num_duels);
                    i += 1;
                }
            }
            "-t" | "--turns" => {
                if i + 1 < args.len() {
                    config.max_turns = args[i + 1].parse().unwrap_or(config.max_turns);
                    i += 1;
                }
            }
            "--json" => {
                if i + 1 < args.len() {
                    json_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--no-shop" => {
                config.use_shop = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--quick" => {
                config = SimConfig {
                    seed: config.seed,
                    verbosity: config.verbosity,
                    ..SimConfig::quick()
                };
            }
            "--pvp" => {
                config = SimConfig {
                    seed: config.seed,
                    verbosity: config.verbosity,
                    ..SimConfig::pvp_only()
                };
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Ignoring unknown argument: {other}");
            }
        }
        i += 1;
    }

    (config, json_path)
}

fn print_help() {
    println!("Arena Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulator -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of PvE careers (default: 1000)");
    println!("    -e, --encounters <N>  Encounters per career (default: 50)");
    println!("    -d, --duels <N>       Number of PvP duels (default: 1000)");
    println!("    -t, --turns <N>       Turn cap per fight (default: 500)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("        --json <FILE>     Also write the report as JSON");
    println!("        --no-shop         Never restock potions between fights");
    println!("        --quick           Small batch preset");
    println!("        --pvp             Duels-only preset");
    println!("    -v, --verbose         Debug logging to stderr");
    println!("    -q, --quiet           Print only the report");
    println!("    -h, --help            Show this help");
}
