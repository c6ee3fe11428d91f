//! gosim: command-line harness for the Go rules engine.
//!
//! ## Usage
//!
//! - `gosim` - Show a demo
//! - `gosim demo` - Play a short scripted game and print the board
//! - `gosim selfplay` - Run seeded random games and report the results
//!
//! Set `RUST_LOG=debug` to see captures, ko and superko events.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gosim::board::{parse_coord, str_coord};
use gosim::config::GameConfig;
use gosim::constants::{DEFAULT_HISTORY, DEFAULT_KOMI};
use gosim::game::Game;
use gosim::playout::random_game;

/// gosim: a deterministic Go rules engine
#[derive(Parser)]
#[command(name = "gosim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a short scripted game and print the board
    Demo(RuleArgs),
    /// Run seeded random games and report the results
    Selfplay {
        #[command(flatten)]
        rules: RuleArgs,
        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: u64,
        /// Seed of the first game; game i uses seed + i
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Stop a game after this many actions
        #[arg(long, default_value_t = 1000)]
        max_moves: usize,
    },
}

#[derive(Args, Clone)]
struct RuleArgs {
    /// Board size (5-19)
    #[arg(long, default_value_t = 9)]
    size: usize,
    /// Compensation points for White
    #[arg(long, default_value_t = DEFAULT_KOMI)]
    komi: f32,
    /// Board snapshots kept for superko detection
    #[arg(long, default_value_t = DEFAULT_HISTORY)]
    history: usize,
}

impl RuleArgs {
    fn build(&self) -> Result<Game> {
        let config = GameConfig::default()
            .with_size(self.size)
            .with_komi(self.komi)
            .with_history_length(self.history);
        Game::new(config).context("invalid game configuration")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay {
            rules,
            games,
            seed,
            max_moves,
        }) => run_selfplay(&rules.build()?, games, seed, max_moves),
        Some(Commands::Demo(rules)) => run_demo(&rules.build()?),
        None => run_demo(&Game::new(GameConfig::default().with_size(9))?),
    }
}

fn run_demo(game: &Game) -> Result<()> {
    println!("gosim: Go rules engine demo\n");

    let size = game.size();
    let mut state = game.init();
    for mv in ["C3", "D3", "D2", "C2", "pass", "B2", "D4", "C1", "pass", "pass"] {
        let action = parse_coord(mv, size).with_context(|| format!("bad demo move {mv}"))?;
        if !game.legal_action_mask(&state)[action.index(size)] {
            anyhow::bail!("demo move {mv} is illegal on a {size}x{size} board");
        }
        state = game.step(&state, action);
        println!("{:?} plays {}", state.color().opponent(), str_coord(action, size));
    }

    println!("\n{}", state.board());
    let (black, white) = game.area_scores(&state);
    let (black_reward, white_reward) = game.terminal_values(&state);
    println!("Area: black {black}, white {white} (komi {})", game.komi());
    println!("Rewards: black {black_reward:+}, white {white_reward:+}");
    Ok(())
}

fn run_selfplay(game: &Game, games: u64, seed: u64, max_moves: usize) -> Result<()> {
    let mut black_wins = 0u64;
    let mut superko_endings = 0u64;
    let mut unfinished = 0u64;
    let mut total_moves = 0usize;

    for i in 0..games {
        let result = random_game(game, seed + i, max_moves);
        let (black_reward, _) = result.rewards;
        if black_reward > 0.0 {
            black_wins += 1;
        }
        if result.state.is_superko() {
            superko_endings += 1;
        }
        if !result.finished {
            unfinished += 1;
        }
        total_moves += result.moves.len();

        let (black, white) = game.area_scores(&result.state);
        info!(
            game = i,
            seed = seed + i,
            moves = result.moves.len(),
            black,
            white,
            superko = result.state.is_superko(),
            winner = if black_reward > 0.0 { "black" } else { "white" },
            "game finished"
        );
    }

    let avg = if games > 0 {
        total_moves as f64 / games as f64
    } else {
        0.0
    };
    println!(
        "{games} games: black won {black_wins}, white won {}, superko {superko_endings}, \
         move limit {unfinished}, average length {avg:.1}",
        games - black_wins
    );
    Ok(())
}
