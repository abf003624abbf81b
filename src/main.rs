//! Headless runner: plays rounds with the autopilot and prints the results.
//!
//! Usage:
//!   cargo run --release -- --difficulty hard --rounds 5
//!   RUST_LOG=debug cargo run -- --seed 42 --config tuning.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use asteroid_avoidance::platform::HeadlessPlatform;
use asteroid_avoidance::{Difficulty, Game, GameConfig};

#[derive(Parser)]
#[command(name = "asteroid-avoidance")]
#[command(about = "Play Asteroid Avoidance headlessly with the autopilot")]
struct Args {
    /// Difficulty picked on the menu (easy or hard)
    #[arg(long, default_value = "easy", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Session seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds to play before exiting
    #[arg(long, default_value_t = 3)]
    rounds: u64,

    /// Stop after this many presented frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// JSON file overriding the default configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pace frames at the configured fps instead of running flat out
    #[arg(long)]
    realtime: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}' (expected easy or hard)"))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Asteroid Avoidance (headless) starting with seed {}", seed);

    let platform = HeadlessPlatform::new(&config, args.difficulty)
        .with_max_frames(args.max_frames)
        .with_realtime(args.realtime);
    let mut game = match Game::new(platform, config, seed) {
        Ok(game) => game.with_round_limit(Some(args.rounds)),
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = game.run() {
        log::error!("Game aborted: {}", e);
        return ExitCode::FAILURE;
    }

    println!("=== SESSION RESULTS ===");
    println!("  Seed:       {}", seed);
    println!("  Difficulty: {}", args.difficulty.as_str());
    println!("  Rounds:     {}", game.rounds_played());
    println!("  Frames:     {}", game.platform().frames_presented());
    println!("  Vertex KiB: {}", game.platform().bytes_presented() / 1024);
    println!("  Best score: {}", game.high_scores().best());
    for (rank, entry) in game.high_scores().entries.iter().enumerate() {
        println!(
            "  #{:<2} {:>5}  {:<4}  {} frames",
            rank + 1,
            entry.score,
            entry.difficulty.as_str(),
            entry.frames
        );
    }

    ExitCode::SUCCESS
}
