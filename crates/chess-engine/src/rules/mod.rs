//! Rules of play on top of pseudo-legal move generation.
//!
//! - [`check`]: check, legal moves, checkmate and stalemate
//! - [`castling`]: castling preconditions and execution

pub mod castling;
pub mod check;

pub use castling::{can_castle, castle, CastlingError};
pub use check::{
    exposes_king, has_legal_move, is_checkmate, is_in_check, is_square_attacked, is_stalemate,
    legal_moves,
};

use crate::Position;
use chess_core::Color;
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White wins by checkmate.
    WhiteWins,
    /// Black wins by checkmate.
    BlackWins,
    /// The side to move has no legal move but is not in check.
    Stalemate,
}

impl GameResult {
    /// A win for the given color.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => f.write_str("checkmate, White wins"),
            GameResult::BlackWins => f.write_str("checkmate, Black wins"),
            GameResult::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Returns the game result if `side_to_move` is checkmated or stalemated.
///
/// A side without a king cannot be mated, so the game is only judged while
/// the side to move still has one.
pub fn game_result(position: &Position, side_to_move: Color) -> Option<GameResult> {
    position.king(side_to_move)?;
    if has_legal_move(position, side_to_move) {
        None
    } else if is_in_check(position, side_to_move) {
        Some(GameResult::win_for(side_to_move.opposite()))
    } else {
        Some(GameResult::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, Square};

    fn place(pieces: &[(Piece, Color, &str)]) -> Position {
        let mut position = Position::empty();
        for &(piece, color, at) in pieces {
            let sq = Square::from_algebraic(at).unwrap();
            position.add_piece(piece, color, sq).unwrap();
        }
        position
    }

    #[test]
    fn startpos_is_undecided() {
        let position = Position::startpos();
        assert_eq!(game_result(&position, Color::White), None);
        assert_eq!(game_result(&position, Color::Black), None);
    }

    #[test]
    fn checkmate_result() {
        let position = place(&[
            (Piece::King, Color::Black, "a8"),
            (Piece::Queen, Color::White, "a7"),
            (Piece::King, Color::White, "b6"),
        ]);
        let result = game_result(&position, Color::Black);
        assert_eq!(result, Some(GameResult::WhiteWins));
        assert_eq!(result.and_then(GameResult::winner), Some(Color::White));
    }

    #[test]
    fn stalemate_result() {
        let position = place(&[
            (Piece::King, Color::Black, "h8"),
            (Piece::Queen, Color::White, "f7"),
            (Piece::King, Color::White, "g6"),
        ]);
        let result = game_result(&position, Color::Black);
        assert_eq!(result, Some(GameResult::Stalemate));
        assert_eq!(result.and_then(GameResult::winner), None);
    }

    #[test]
    fn kingless_side_is_not_judged() {
        let position = place(&[(Piece::King, Color::White, "e1")]);
        assert_eq!(game_result(&position, Color::Black), None);
    }

    #[test]
    fn display() {
        assert_eq!(GameResult::BlackWins.to_string(), "checkmate, Black wins");
        assert_eq!(GameResult::Stalemate.to_string(), "stalemate");
    }
}
