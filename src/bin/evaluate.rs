//! Oracle fitness evaluation binary.
//!
//! Usage:
//!   cargo run --release --bin evaluate -- [OPTIONS]
//!
//! Options:
//!   --weights <FILE>     Oracle policy JSON (default: random policy)
//!   --games <N>          Games per side per opponent (default: 50)
//!   --seed <N>           Random seed for opponents and default policy
//!   --target <VALUE>     Fitness threshold for the solved flag
//!   --output <FILE>      Write the fitness report as JSON
//!
//! Scores one oracle policy with the fitness harness: N games as each side
//! against the random and heuristic opponents, folded into a single fitness
//! value. A policy reaching the target is reported as solved, which is the
//! signal an external search loop uses to stop.

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use tictactoe_arena::agents::WeightsOracle;
use tictactoe_arena::harness::{FitnessHarness, FitnessReport, HarnessConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut weights_file: Option<String> = None;
    let mut games: u32 = 50;
    let mut seed: Option<u64> = None;
    let mut target: Option<f64> = None;
    let mut output_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--weights" | "-w" => {
                i += 1;
                if i < args.len() {
                    weights_file = Some(args[i].clone());
                }
            }
            "--games" | "-g" => {
                i += 1;
                if i < args.len() {
                    games = args[i].parse().unwrap_or(50);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--target" => {
                i += 1;
                if i < args.len() {
                    target = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Oracle Fitness Evaluation");
    println!("=================================================");
    println!();

    // Load or generate the policy under evaluation.
    let mut oracle = if let Some(path) = &weights_file {
        println!("Loading policy from: {}", path);
        match WeightsOracle::from_json_file(path) {
            Ok(oracle) => oracle,
            Err(e) => {
                eprintln!("Error loading policy: {}", e);
                return;
            }
        }
    } else {
        let policy_seed = seed.unwrap_or_else(rand::random);
        println!("Using random policy with seed {}", policy_seed);
        WeightsOracle::random(policy_seed)
    };

    let mut config = HarnessConfig::default().with_games_per_side(games);
    if let Some(s) = seed {
        config = config.with_seed(s);
    }
    if let Some(t) = target {
        config = config.with_target_fitness(t);
    }

    let harness = match FitnessHarness::new(config) {
        Ok(harness) => harness,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    println!("Games per side: {}", games);
    println!("Target fitness: {}", harness.config().target_fitness);
    println!();
    println!("Evaluating...");

    let start = Instant::now();
    let report = harness.evaluate(&mut oracle);
    let elapsed = start.elapsed().as_secs_f64();

    println!();
    println!("=== Fitness Report ===");
    println!("Games played: {} ({:.2}s)", report.games_played, elapsed);
    println!(
        "vs random:    {} wins / {} draws / {} losses",
        report.wins_vs_random, report.draws_vs_random, report.losses_vs_random
    );
    println!(
        "vs heuristic: {} wins / {} draws / {} losses",
        report.wins_vs_heuristic, report.draws_vs_heuristic, report.losses_vs_heuristic
    );
    println!("Fitness: {:.1}", report.fitness);
    if report.solved {
        println!("Target reached - this policy is good enough.");
    } else {
        println!(
            "Target not reached ({:.1} < {:.1}).",
            report.fitness,
            harness.config().target_fitness
        );
    }

    if let Some(path) = output_file {
        match save_json(&report, &path) {
            Ok(_) => println!("\nReport saved to {}", path),
            Err(e) => eprintln!("\nError saving report: {}", e),
        }
    }
}

fn save_json(report: &FitnessReport, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}

fn print_help() {
    println!("Oracle Fitness Evaluation");
    println!();
    println!("Usage: evaluate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -w, --weights <FILE>  Oracle policy JSON (default: random policy)");
    println!("  -g, --games <N>       Games per side per opponent (default: 50)");
    println!("  -s, --seed <N>        Random seed for opponents and default policy");
    println!("      --target <VALUE>  Fitness threshold for the solved flag");
    println!("  -o, --output <FILE>   Write the fitness report as JSON");
    println!("  -h, --help            Show this help");
    println!();
    println!("Examples:");
    println!("  # Score a trained policy reproducibly");
    println!("  evaluate --weights champion.json --seed 42");
    println!();
    println!("  # Baseline: how far does a random policy get?");
    println!("  evaluate --games 100 --seed 7 --output baseline.json");
}
