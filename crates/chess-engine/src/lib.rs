//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of occupants
//! - [`Position`] - the board plus the arena of pieces standing on it
//! - Pseudo-legal move, capture and attack generation ([`movegen`])
//! - Check, checkmate, stalemate and castling ([`rules`])
//! - [`Game`] - turn-by-turn play from player input, with history and promotion
//!
//! # Architecture
//!
//! Pieces live in an arena owned by [`Position`] and are referred to by
//! [`PieceId`]. The grid records which id stands where; both are only ever
//! changed together. Legality questions ("would this leave my king in
//! check?") are answered on a cloned position, so the live game is never
//! modified speculatively.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameResult};
//! use chess_core::Color;
//!
//! let mut game = Game::new();
//! for mv in ["pf3", "pe5", "pg4", "qh4"] {
//!     game.play(mv).unwrap();
//! }
//! assert!(game.is_checkmate(Color::White));
//! assert_eq!(game.result(), Some(GameResult::BlackWins));
//! ```

mod board;
mod game;
pub mod movegen;
mod position;
pub mod rules;
mod squareset;
mod view;

pub use board::{Board, Occupant, PieceId};
pub use game::{Candidates, Game, GameError, GameMove, MoveOutcome};
pub use position::{ChessPiece, Position, PositionError};
pub use rules::{CastlingError, GameResult};
pub use squareset::{SquareSet, SquareSetIter};
pub use view::{BoardView, SquareView};
