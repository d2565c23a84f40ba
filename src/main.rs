//! Gomoku self-play driver
//!
//! Pits two AIs against each other on the terminal and prints the final
//! board. Set `RUST_LOG=debug` to follow each decision.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use clap::Parser;
use gomoku::{
    AIEngine, AiOptions, Behavior, Difficulty, EngineOptions, GomokuEngine, JsonLinesSink,
    MoveOutcome, Stone,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(name = "gomoku", about = "Play an AI-vs-AI Gomoku game in the terminal")]
struct Args {
    /// Difficulty of the black AI (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    black: Difficulty,

    /// Difficulty of the white AI (easy, medium, hard)
    #[arg(long, default_value = "hard")]
    white: Difficulty,

    /// Seed for reproducible games; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Board size
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Alpha-beta depth for hard AIs
    #[arg(long)]
    depth: Option<u8>,

    /// Append one JSON telemetry record per move to this file
    #[arg(long)]
    telemetry: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = GomokuEngine::new(EngineOptions {
        board_size: args.size,
        ..EngineOptions::default()
    })?;

    let telemetry = match &args.telemetry {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };
    let mut black = build_ai(&args, args.black, Stone::Black, telemetry.as_ref())?;
    let mut white = build_ai(&args, args.white, Stone::White, telemetry.as_ref())?;

    log::info!("{} (black) vs {} (white) on {}x{}", args.black, args.white, args.size, args.size);

    loop {
        let player = game.current_player();
        let ai = if player == Stone::Black {
            &mut black
        } else {
            &mut white
        };
        let Some(pos) = ai.select_move(game.board())? else {
            break;
        };

        match game.apply_move(pos.row as i32, pos.col as i32) {
            MoveOutcome::Invalid(reason) => {
                anyhow::bail!("{} chose ({}, {}): {}", player, pos.row, pos.col, reason)
            }
            MoveOutcome::Continue { .. } => {
                log::info!("{} plays ({}, {})", player, pos.row, pos.col);
            }
            MoveOutcome::Win {
                winning_sequence, ..
            } => {
                println!(
                    "{} ({}) wins after {} moves: {:?}",
                    player,
                    ai.difficulty(),
                    game.board().stone_count(),
                    winning_sequence
                );
                break;
            }
            MoveOutcome::Draw { .. } => {
                println!("Draw after {} moves", game.board().stone_count());
                break;
            }
        }
    }

    println!("{}", game.board());
    if args.json {
        println!("{}", game.to_json()?);
    }
    Ok(())
}

fn build_ai(
    args: &Args,
    difficulty: Difficulty,
    color: Stone,
    telemetry: Option<&File>,
) -> anyhow::Result<AIEngine> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(color as u64)),
        None => StdRng::from_entropy(),
    };
    let behavior = Behavior {
        search_depth: args.depth,
        ..Behavior::default()
    };

    let mut options = AiOptions::default()
        .with_board_size(args.size)
        .with_rng(rng)
        .with_behavior(behavior);
    if let Some(file) = telemetry {
        options = options.with_telemetry(JsonLinesSink::new(file.try_clone()?));
    }

    Ok(AIEngine::new(difficulty, color, options)?)
}
