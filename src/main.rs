//! Self-play driver
//!
//! Plays the engine against itself from the starting position and prints the
//! board after every ply. Each side searches with its own depth.

use anyhow::{Context, Result};
use chess_engine::{Color, Game, GameStatus};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Minimax chess engine playing against itself
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Search depth for both sides
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Stop after this many plies
    #[arg(long, default_value_t = 22)]
    max_plies: usize,

    /// Search depth for White, overriding --depth
    #[arg(long)]
    white_depth: Option<usize>,

    /// Search depth for Black, overriding --depth
    #[arg(long)]
    black_depth: Option<usize>,
}

impl Args {
    fn depth_for(&self, color: Color) -> usize {
        let side = match color {
            Color::White => self.white_depth,
            Color::Black => self.black_depth,
        };
        side.unwrap_or(self.depth).max(1)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(
        white_depth = args.depth_for(Color::White),
        black_depth = args.depth_for(Color::Black),
        max_plies = args.max_plies,
        "starting self-play"
    );

    let mut game = Game::new();
    println!("{}", game.position());

    for ply in 1..=args.max_plies {
        let mover = game.turn();
        let Some(played) = game
            .play_engine_move(args.depth_for(mover))
            .with_context(|| format!("engine move failed at ply {ply}"))?
        else {
            break;
        };

        let capture = played
            .result
            .captured
            .map(|victim| format!(" capturing {victim}"))
            .unwrap_or_default();
        println!("{ply}. {mover} {} -> {}{capture}", played.from, played.to);
        println!("{}", game.position());

        if game.is_in_check() {
            warn!(color = %game.turn(), "in check");
        }
    }

    match game.status() {
        GameStatus::Checkmate => println!("Checkmate, {} wins", game.turn().opposite()),
        GameStatus::Stalemate => println!("Stalemate"),
        GameStatus::Ongoing => println!("Stopped after {} plies", game.history().len()),
    }

    Ok(())
}
