//! Chess rules engine with a fixed-depth minimax opponent
//!
//! The engine covers the full rules of movement: pawn double steps, en
//! passant, castling, promotion, and check-aware legality. On top of that it
//! ships a material-and-pawn-structure evaluator and a plain minimax search.
//!
//! ## Module Organization
//!
//! - `types` - Colors, piece kinds, chessmen and squares
//! - `board` - The 8x8 position
//! - `move_gen` - Pseudo-legal and legal move generation, attack detection
//! - `make_move` - Applying moves and resolving promotions
//! - `evaluation` - Static evaluation
//! - `search` - Minimax search
//! - `api` - Checked entry points and turn-tracking [`Game`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use chess_engine::{Color, Game};
//!
//! let mut game = Game::new();
//! while let Some(played) = game.play_engine_move(2)? {
//!     println!("{} {} -> {}", played.color, played.from, played.to);
//! }
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod make_move;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{Game, GameStatus, PlayedMove};
pub use board::Position;
pub use error::{ChessEngineError, ChessEngineResult};
pub use make_move::MoveResult;
pub use search::{ScoredMove, SearchConfig};
pub use types::{Chessman, Color, PieceKind, Square};
