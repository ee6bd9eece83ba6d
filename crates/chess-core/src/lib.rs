//! Core types for chess.
//!
//! This crate provides the fundamental types used across the chess engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] and [`CastleSide`] for move representation
//! - Move notation parsing ([`parse_move`], [`parse_command`])

mod color;
mod mov;
mod notation;
mod piece;
mod square;

pub use color::Color;
pub use mov::{CastleSide, Move, MoveKind};
pub use notation::{parse_command, parse_move, Command, MoveIntent, NotationError, StartHint};
pub use piece::Piece;
pub use square::{File, Rank, Square};
