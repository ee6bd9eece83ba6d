//! Castling.
//!
//! There is no castling-rights state of its own: eligibility is read off the
//! king's and rook's moved flags, which are set on their first move and never
//! cleared.

use std::iter;

use chess_core::{CastleSide, Color, Move, Piece, Square};
use thiserror::Error;

use super::check::{is_in_check, is_square_attacked};
use crate::board::PieceId;
use crate::{Position, PositionError};

/// Reasons a castle is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CastlingError {
    #[error("no {color} king on {square}")]
    KingMissing { color: Color, square: Square },

    #[error("the {0} king has already moved")]
    KingMoved(Color),

    #[error("no {color} rook on {square}")]
    RookMissing { color: Color, square: Square },

    #[error("the rook on {0} has already moved")]
    RookMoved(Square),

    #[error("cannot castle out of check")]
    InCheck,

    #[error("{0} is not empty")]
    PathBlocked(Square),

    #[error("the king would cross or land on attacked square {0}")]
    SquareAttacked(Square),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Squares from `from` toward `to` along a rank, excluding both ends.
fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let step = (to.coords().0 - from.coords().0).signum();
    iter::successors(from.offset(step, 0), move |sq| sq.offset(step, 0))
        .take_while(move |&sq| sq != to)
}

fn home_piece(
    position: &Position,
    sq: Square,
    piece: Piece,
    color: Color,
) -> Option<(PieceId, bool)> {
    position
        .piece_at(sq)
        .filter(|(_, p)| p.piece() == piece && p.color() == color)
        .map(|(id, p)| (id, p.has_moved()))
}

/// Checks every castling precondition without changing the position.
///
/// Returns the king and rook that would move.
pub fn can_castle(
    position: &Position,
    color: Color,
    side: CastleSide,
) -> Result<(PieceId, PieceId), CastlingError> {
    let king_from = side.king_from(color);
    let rook_from = side.rook_from(color);
    let king_to = side.king_to(color);

    let (king, king_moved) = home_piece(position, king_from, Piece::King, color).ok_or(
        CastlingError::KingMissing {
            color,
            square: king_from,
        },
    )?;
    let (rook, rook_moved) = home_piece(position, rook_from, Piece::Rook, color).ok_or(
        CastlingError::RookMissing {
            color,
            square: rook_from,
        },
    )?;

    if king_moved {
        return Err(CastlingError::KingMoved(color));
    }
    if rook_moved {
        return Err(CastlingError::RookMoved(rook_from));
    }
    if is_in_check(position, color) {
        return Err(CastlingError::InCheck);
    }
    if let Some(sq) = between(king_from, rook_from).find(|&sq| !position.board().is_empty(sq)) {
        return Err(CastlingError::PathBlocked(sq));
    }

    let enemy = color.opposite();
    let king_path = between(king_from, king_to).chain(iter::once(king_to));
    for sq in king_path {
        if is_square_attacked(position, sq, enemy) {
            return Err(CastlingError::SquareAttacked(sq));
        }
    }

    Ok((king, rook))
}

/// Castles if every precondition holds, moving king and rook together.
///
/// On failure the position is unchanged.
pub fn castle(
    position: &mut Position,
    color: Color,
    side: CastleSide,
) -> Result<Move, CastlingError> {
    let (king, rook) = can_castle(position, color, side)?;
    position.move_piece(king, side.king_to(color))?;
    position.move_piece(rook, side.rook_to(color))?;
    Ok(Move::castle(side, color))
}
