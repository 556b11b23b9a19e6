//! Arena balance simulator CLI.
//!
//! Run Monte Carlo arena careers to analyze combat balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 Warrior careers
//!   cargo run --bin simulate -- -n 100 -c rogue  # 100 Rogue careers
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use battle_arena::character::creation::CharacterClass;
use battle_arena::core::config::BattleConfig;
use battle_arena::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, options) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            process::exit(2);
        }
    };

    init_tracing(options.verbosity);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                ARENA BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Class:          {}", config.class.name());
    println!("  Max Battles:    {}", config.max_battles);
    println!("  Max Ticks:      {}", config.max_ticks_per_battle);
    println!("  Enemy Delay:    {}", config.battle.enemy_turn_delay);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if options.write_json {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("error: failed to write {}: {}", filename, e);
                process::exit(1);
            }
        }
    }
}

#[derive(Debug, Default)]
struct CliOptions {
    verbosity: u8,
    write_json: bool,
}

/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG`
/// directives are layered on top of the verbosity default.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<(SimConfig, CliOptions), String> {
    // The preset is the base, so every other flag overrides it regardless of order.
    let mut config = if args.iter().skip(1).any(|arg| arg == "--quick") {
        SimConfig::quick()
    } else {
        SimConfig::default()
    };
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                let value = next_value(args, &mut i, flag)?;
                config.num_runs = value
                    .parse()
                    .map_err(|_| format!("invalid run count: {}", value))?;
            }
            "-s" | "--seed" => {
                let value = next_value(args, &mut i, flag)?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {}", value))?,
                );
            }
            "-b" | "--battles" => {
                let value = next_value(args, &mut i, flag)?;
                config.max_battles = value
                    .parse()
                    .map_err(|_| format!("invalid battle count: {}", value))?;
            }
            "-t" | "--ticks" => {
                let value = next_value(args, &mut i, flag)?;
                config.max_ticks_per_battle = value
                    .parse()
                    .map_err(|_| format!("invalid tick limit: {}", value))?;
            }
            "-c" | "--class" => {
                let value = next_value(args, &mut i, flag)?;
                config.class = CharacterClass::from_name(value)
                    .ok_or_else(|| format!("unknown class: {}", value))?;
            }
            "--config" => {
                let path = next_value(args, &mut i, flag)?;
                config.battle = BattleConfig::load(path)
                    .map_err(|e| format!("could not load {}: {}", path, e))?;
            }
            "--quick" => {}
            "--json" => options.write_json = true,
            "-v" | "--verbose" => options.verbosity = options.verbosity.saturating_add(1),
            "-vv" => options.verbosity = 2,
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    Ok((config, options))
}

fn print_help() {
    println!("Arena Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated careers (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -b, --battles <B>   Stop a career after B victories (default: 50)");
    println!("    -t, --ticks <T>     Max ticks per battle (default: 100,000)");
    println!("    -c, --class <C>     Warrior, Rogue or Knight (default: Warrior)");
    println!("    --config <FILE>     Battle config JSON (turn delay, policy tuning)");
    println!("    --quick             Quick test (100 careers, 20 battles, no enemy delay)");
    println!("    -v, --verbose       Log each run (-vv for every decision)");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -n 100 -c rogue   # 100 Rogue careers");
    println!("    cargo run --bin simulate -- --seed 42         # Reproducible");
    println!("    RUST_LOG=battle_arena=debug cargo run --bin simulate -- -n 1");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(flags: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(flags.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_quick_preset_keeps_explicit_flags() {
        let (config, _) =
            parse_args(&args(&["-n", "5", "-s", "42", "-c", "rogue", "--quick"])).unwrap();
        assert_eq!(config.num_runs, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.class, CharacterClass::Rogue);
        assert_eq!(config.max_battles, SimConfig::quick().max_battles);
        assert_eq!(config.battle.enemy_turn_delay, 0);
    }

    #[test]
    fn test_quick_preset_alone() {
        let (config, options) = parse_args(&args(&["--quick", "-v"])).unwrap();
        let quick = SimConfig::quick();
        assert_eq!(config.num_runs, quick.num_runs);
        assert_eq!(config.max_battles, quick.max_battles);
        assert_eq!(config.seed, None);
        assert_eq!(config.battle.enemy_turn_delay, 0);
        assert_eq!(options.verbosity, 1);
    }

    #[test]
    fn test_bad_values_are_reported() {
        assert_eq!(
            parse_args(&args(&["-n", "many"])).unwrap_err(),
            "invalid run count: many"
        );
        assert_eq!(
            parse_args(&args(&["--frobnicate"])).unwrap_err(),
            "unknown option: --frobnicate"
        );
        assert_eq!(parse_args(&args(&["-s"])).unwrap_err(), "-s requires a value");
    }
}
