//! Round-robin arena binary.
//!
//! Usage:
//!   cargo run --release --bin arena -- [OPTIONS]
//!
//! Options:
//!   --games <N>          Games per matchup (default: 1000)
//!   --seed <N>           Base random seed (default: entropy)
//!   --threads <N>        Number of threads (default: auto)
//!   --output <FILE>      Write matchup summaries as JSON
//!
//! Plays every ordered pairing of the built-in agents (random, heuristic,
//! and a randomly-initialized oracle) for a fixed number of games each and
//! prints the win/draw tallies. Games are independent, so they run in
//! parallel with fresh per-game agents.

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use tictactoe_arena::agents::{HeuristicAgent, OracleAgent, RandomAgent, WeightsOracle};
use tictactoe_arena::engine::{play_until_win, Agent, Outcome};

/// Agent kinds available in the arena.
const KINDS: [&str; 3] = ["random", "heuristic", "oracle"];

/// Tallied outcomes of one ordered matchup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MatchupSummary {
    x: String,
    o: String,
    games: u64,
    x_wins: u64,
    o_wins: u64,
    draws: u64,
}

/// Full arena run, serializable for later analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArenaResults {
    games_per_matchup: u64,
    seed: u64,
    summaries: Vec<MatchupSummary>,
}

fn make_agent(kind: &str, is_x: bool, seed: u64) -> Box<dyn Agent> {
    match kind {
        "random" => Box::new(RandomAgent::seeded(seed)),
        "heuristic" => Box::new(HeuristicAgent::new()),
        "oracle" => Box::new(OracleAgent::new(WeightsOracle::random(seed), is_x)),
        _ => unreachable!("unknown agent kind {}", kind),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut games: u64 = 1000;
    let mut seed: Option<u64> = None;
    let mut threads: usize = 0;
    let mut output_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                i += 1;
                if i < args.len() {
                    games = args[i].parse().unwrap_or(1000);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().unwrap_or(0);
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

    if threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            eprintln!("Failed to configure thread pool: {}", e);
        }
    }

    let base_seed = seed.unwrap_or_else(rand::random);

    println!("=================================================");
    println!("  Tic-Tac-Toe Arena");
    println!("=================================================");
    println!();
    println!("Games per matchup: {}", games);
    println!("Base seed: {}", base_seed);
    println!(
        "Threads: {}",
        if threads == 0 {
            "auto".to_string()
        } else {
            threads.to_string()
        }
    );
    println!();

    let matchups: Vec<(&str, &str)> = KINDS
        .iter()
        .flat_map(|&x| KINDS.iter().map(move |&o| (x, o)))
        .collect();

    let pb = ProgressBar::new(games * matchups.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")
            .expect("progress template is static and valid"),
    );

    let start = Instant::now();
    let mut summaries: FxHashMap<String, MatchupSummary> = FxHashMap::default();

    for (m, &(x_kind, o_kind)) in matchups.iter().enumerate() {
        let outcomes: Vec<Outcome> = (0..games)
            .into_par_iter()
            .map(|g| {
                // Every game gets fresh agents with a distinct derived seed,
                // so the run is reproducible regardless of thread scheduling.
                let game_seed = base_seed
                    .wrapping_add((m as u64) << 40)
                    .wrapping_add(g << 1);
                let mut x = make_agent(x_kind, true, game_seed);
                let mut o = make_agent(o_kind, false, game_seed | 1);
                let outcome = play_until_win(x.as_mut(), o.as_mut());
                pb.inc(1);
                outcome
            })
            .collect();

        let mut summary = MatchupSummary {
            x: x_kind.to_string(),
            o: o_kind.to_string(),
            games,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        };
        for outcome in outcomes {
            match outcome {
                Outcome::XWins => summary.x_wins += 1,
                Outcome::OWins => summary.o_wins += 1,
                Outcome::Draw => summary.draws += 1,
            }
        }
        summaries.insert(format!("{}_vs_{}", x_kind, o_kind), summary);
    }

    pb.finish_and_clear();

    println!(
        "Finished {} games in {:.2}s",
        games * matchups.len() as u64,
        start.elapsed().as_secs_f64()
    );
    println!();
    println!("{:<24} {:>8} {:>8} {:>8}", "Matchup (X vs O)", "X wins", "O wins", "Draws");

    let mut keys: Vec<&String> = summaries.keys().collect();
    keys.sort();
    for key in keys {
        let s = &summaries[key];
        println!(
            "{:<24} {:>8} {:>8} {:>8}",
            format!("{} vs {}", s.x, s.o),
            s.x_wins,
            s.o_wins,
            s.draws
        );
    }

    if let Some(path) = output_file {
        let mut entries: Vec<MatchupSummary> = summaries.into_values().collect();
        entries.sort_by(|a, b| (&a.x, &a.o).cmp(&(&b.x, &b.o)));
        let results = ArenaResults {
            games_per_matchup: games,
            seed: base_seed,
            summaries: entries,
        };
        match save_json(&results, &path) {
            Ok(_) => println!("\nResults saved to {}", path),
            Err(e) => eprintln!("\nError saving results: {}", e),
        }
    }
}

fn save_json(results: &ArenaResults, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}

fn print_help() {
    println!("Tic-Tac-Toe Arena");
    println!();
    println!("Usage: arena [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -g, --games <N>      Games per matchup (default: 1000)");
    println!("  -s, --seed <N>       Base random seed (default: entropy)");
    println!("  -t, --threads <N>    Number of threads (default: auto)");
    println!("  -o, --output <FILE>  Write matchup summaries as JSON");
    println!("  -h, --help           Show this help");
    println!();
    println!("Examples:");
    println!("  # Quick sanity run");
    println!("  arena --games 100");
    println!();
    println!("  # Reproducible run saved for analysis");
    println!("  arena --games 10000 --seed 42 --output arena.json");
}
