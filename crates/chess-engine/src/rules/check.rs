//! Check, checkmate and stalemate detection.
//!
//! Every "what if" question is answered on a copy made by
//! [`Position::speculate`], so evaluating candidates never disturbs the live
//! position.

use crate::board::PieceId;
use crate::Position;
use chess_core::{Color, Move, Square};

/// Returns true if the king of `color` can be captured by an enemy piece.
///
/// A side without a king on the board is never in check.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    let Some((_, king)) = position.king(color) else {
        return false;
    };
    let target = king.square();
    position
        .pieces_of(color.opposite())
        .any(|(_, piece)| piece.possible_captures(position.board()).contains(target))
}

/// Returns true if any piece of color `by` bears on `sq`, whether or not the
/// square is occupied.
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    position
        .pieces_of(by)
        .any(|(_, piece)| piece.attacks(position.board()).contains(sq))
}

/// Returns true if moving `id` to `dest` would leave its own king in check.
///
/// Whether the move captures follows from what stands on `dest`.
pub fn exposes_king(position: &Position, id: PieceId, dest: Square) -> bool {
    match position.piece(id) {
        Some(piece) => is_in_check(&position.speculate(id, dest), piece.color()),
        None => false,
    }
}

/// Pseudo-legal moves and captures of a piece.
fn candidate_moves(position: &Position, id: PieceId) -> Vec<Move> {
    let Some(piece) = position.piece(id) else {
        return Vec::new();
    };
    let from = piece.square();
    let board = position.board();
    let quiet = piece
        .possible_moves(board)
        .into_iter()
        .map(|to| Move::quiet(from, to));
    let captures = piece
        .possible_captures(board)
        .into_iter()
        .map(|to| Move::capture(from, to));
    quiet.chain(captures).collect()
}

/// Legal moves of one piece: its pseudo-legal moves and captures that do not
/// expose its king.
pub fn legal_moves(position: &Position, id: PieceId) -> Vec<Move> {
    candidate_moves(position, id)
        .into_iter()
        .filter(|m| !exposes_king(position, id, m.to))
        .collect()
}

/// Returns true if `color` has at least one legal move.
///
/// Stops at the first move found.
pub fn has_legal_move(position: &Position, color: Color) -> bool {
    position.pieces_of(color).any(|(id, _)| {
        candidate_moves(position, id)
            .iter()
            .any(|m| !exposes_king(position, id, m.to))
    })
}

/// In check with no move that escapes it.
pub fn is_checkmate(position: &Position, color: Color) -> bool {
    is_in_check(position, color) && !has_legal_move(position, color)
}

/// Not in check but without any legal move.
pub fn is_stalemate(position: &Position, color: Color) -> bool {
    !is_in_check(position, color) && !has_legal_move(position, color)
}
