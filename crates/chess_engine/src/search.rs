//! Fixed-depth minimax search
//!
//! This module implements the AI opponent:
//! - Plain minimax over legal moves, perspective fixed at the root
//! - Fixed depth passed in through [`SearchConfig`]
//! - Every explored move applied to its own clone of the position
//!
//! The search is synchronous and always runs to completion. Its cost grows as
//! `moves_per_position ^ depth`, so depth 4 on a middlegame position takes
//! noticeably longer than depth 2.
//!
//! ## Module Organization
//!
//! - `config` - Search parameters
//! - `minimax` - The recursive search and root move selection

mod config;
mod minimax;

pub use config::SearchConfig;
pub use minimax::{best_move, search_root, ScoredMove};
