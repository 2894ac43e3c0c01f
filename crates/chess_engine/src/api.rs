//! Public API for the chess engine
//!
//! Entry points for a presentation layer or driver: start a game, list and
//! play legal moves, resolve promotions, query check and game status, and ask
//! the engine for a move. Every mutating call validates its input first.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle and turn order (new_game, Game)
//! - `moves` - Move execution and validation (legal_moves, apply_move, resolve_promotion)
//! - `state` - Game state queries and AI (is_in_check, game_status, choose_move)

mod game;
mod moves;
mod state;

pub use game::{new_game, Game, PlayedMove};
pub use moves::{apply_move, legal_moves, resolve_promotion};
pub use state::{choose_move, choose_move_with, game_status, is_in_check, GameStatus};
