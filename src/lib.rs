//! Othello (Reversi) game engine.
//!
//! [`GameEngine`] owns the board, the side to move and the scores, validates
//! and applies moves, and lets an [`OpponentPolicy`] answer for the automated
//! side. [`wasm::OthelloGame`] exposes the same operations to JavaScript.

use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use ai::{FirstLegalMove, OpponentPolicy};
pub use board::{BOARD_SIZE, Board};
pub use error::EngineError;
pub use game::GameEngine;
pub use types::{Cell, Disc, EngineConfig, GameResult, GameState, Position, Scores};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
