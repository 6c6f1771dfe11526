//! Civica - Main Binary
//!
//! Headless simulation and card-file validation for the civic card game
//! engine.

use anyhow::Context;
use civica::{
    core::IndicatorId,
    game::{EndReason, GameEngine, OutputMode, TurnDriver, VerbosityLevel, ERA_MAX, ERA_MIN},
    loader::CardLoader,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "civica")]
#[command(about = "Civica - turn-based civic card game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an all-AI game to completion and print the results
    Sim {
        /// Card source file (JSON array of card records)
        #[arg(value_name = "CARDS_FILE")]
        cards: PathBuf,

        /// Number of players (2-5)
        #[arg(long, default_value_t = 4)]
        players: usize,

        /// Set random seed for deterministic play (omit for entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many rounds even if the game has not ended
        #[arg(long, default_value_t = 200)]
        max_rounds: u32,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Print the per-player indicator contribution table at the end
        #[arg(long)]
        contributions: bool,
    },

    /// Validate a card source file and report per-era counts
    Check {
        /// Card source file (JSON array of card records)
        #[arg(value_name = "CARDS_FILE")]
        cards: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Sim {
            cards,
            players,
            seed,
            max_rounds,
            verbosity,
            contributions,
        } => run_sim(
            &cards,
            players,
            seed,
            max_rounds,
            verbosity.into(),
            contributions,
        ),
        Commands::Check { cards } => run_check(&cards),
    }
}

fn load_cards(path: &PathBuf) -> anyhow::Result<civica::loader::CardSet> {
    CardLoader::load_from_file(path)
        .with_context(|| format!("failed to load card source {}", path.display()))
}

fn run_sim(
    cards_path: &PathBuf,
    players: usize,
    seed: Option<u64>,
    max_rounds: u32,
    verbosity: VerbosityLevel,
    contributions: bool,
) -> anyhow::Result<()> {
    let players = players.clamp(2, 5);
    let set = load_cards(cards_path)?;
    for warning in &set.warnings {
        eprintln!("warning: {warning}");
    }

    let mut engine = GameEngine::new(set.cards, seed);
    engine.logger.set_verbosity(verbosity);
    engine.logger.set_output_mode(OutputMode::Stdout);
    engine.start(players);

    let mut driver = TurnDriver::new(&mut engine).with_autopilot(true);
    let result = driver.run_to_completion(max_rounds);

    println!();
    match result.end_reason {
        EndReason::IndicatorsComplete => {
            println!("Game ended: three or more indicators at maximum.")
        }
        EndReason::DecksExhausted => println!("Game ended: all eras exhausted."),
        EndReason::RoundLimit => println!("Game stopped at the {max_rounds}-round cap."),
    }
    println!("Rounds played: {}", result.rounds);
    println!();
    println!("Final scores:");
    for score in &result.scores.entries {
        println!(
            "  {:10} {:4}  (fields {} + indicators {})",
            score.name, score.total, score.field_points, score.indicator_points
        );
    }

    if contributions {
        print_contributions(&engine);
    }
    Ok(())
}

/// Tabulate who raised each indicator, how often, and by how much.
fn print_contributions(engine: &GameEngine) {
    let indicators = engine.indicators();
    for id in IndicatorId::all() {
        println!();
        println!(
            "Indicator {id} (final value {}/{})",
            indicators.value(id),
            indicators.max()
        );
        println!("  {:10} | {:>6} | {:>8}", "Player", "Events", "TotalInc");
        for player in engine.players() {
            println!(
                "  {:10} | {:>6} | {:>8}",
                player.name,
                indicators.events(id, player.id),
                indicators.amount(id, player.id)
            );
        }
    }
}

fn run_check(cards_path: &PathBuf) -> anyhow::Result<()> {
    let set = load_cards(cards_path)?;
    println!("Loaded {} cards.", set.cards.len());
    for level in ERA_MIN..=ERA_MAX {
        let count = set.cards.iter().filter(|c| c.level == level).count();
        println!("  era {level}: {count} cards");
    }
    let out_of_range = set
        .cards
        .iter()
        .filter(|c| !(ERA_MIN..=ERA_MAX).contains(&c.level))
        .count();
    if out_of_range > 0 {
        println!("  outside eras: {out_of_range} cards (never enter play)");
    }
    if set.warnings.is_empty() {
        println!("No warnings.");
    } else {
        println!("{} warnings:", set.warnings.len());
        for warning in &set.warnings {
            println!("  - {warning}");
        }
    }
    Ok(())
}
