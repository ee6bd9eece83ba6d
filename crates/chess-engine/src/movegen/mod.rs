//! Piece move generation.
//!
//! Each piece produces two disjoint destination sets from a board snapshot:
//! [`possible_moves`] onto empty squares and [`possible_captures`] onto
//! squares holding an enemy piece. A pawn's two sets follow different
//! geometry (forward pushes vs. forward diagonals); every other piece uses the
//! same pattern for both.
//!
//! [`attacks`] is the set of squares a piece bears on regardless of what
//! stands there, used to ask whether an empty square is under fire.
//!
//! None of these consider whether the mover's own king ends up in check;
//! that is the job of [`rules`](crate::rules).

mod rays;

pub use rays::{DIAGONALS, ORTHOGONALS};

use crate::{Board, SquareSet};
use chess_core::{Color, Piece, Square};
use rays::{ray_attacks, ray_captures, ray_moves};

/// Knight jumps as (file, rank) offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// King steps as (file, rank) offsets.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Destinations reachable by a non-capturing move.
pub fn possible_moves(board: &Board, piece: Piece, color: Color, from: Square) -> SquareSet {
    match piece {
        Piece::Pawn => pawn_moves(board, color, from),
        Piece::Knight => leaper_targets(from, &KNIGHT_OFFSETS, |f, r| {
            board.valid_and_empty(f, r)
        }),
        Piece::Bishop => ray_moves(board, from, &DIAGONALS),
        Piece::Rook => ray_moves(board, from, &ORTHOGONALS),
        Piece::Queen => ray_moves(board, from, &DIAGONALS) | ray_moves(board, from, &ORTHOGONALS),
        Piece::King => leaper_targets(from, &KING_OFFSETS, |f, r| board.valid_and_empty(f, r)),
    }
}

/// Destinations reachable by a capturing move.
pub fn possible_captures(board: &Board, piece: Piece, color: Color, from: Square) -> SquareSet {
    let enemy = |f, r| board.valid_and_enemy(f, r, color);
    match piece {
        Piece::Pawn => leaper_targets(from, &pawn_capture_offsets(color), enemy),
        Piece::Knight => leaper_targets(from, &KNIGHT_OFFSETS, enemy),
        Piece::Bishop => ray_captures(board, from, color, &DIAGONALS),
        Piece::Rook => ray_captures(board, from, color, &ORTHOGONALS),
        Piece::Queen => {
            ray_captures(board, from, color, &DIAGONALS)
                | ray_captures(board, from, color, &ORTHOGONALS)
        }
        Piece::King => leaper_targets(from, &KING_OFFSETS, enemy),
    }
}

/// Squares the piece bears on, occupied or not.
///
/// For a pawn these are its forward diagonals, never its pushes.
pub fn attacks(board: &Board, piece: Piece, color: Color, from: Square) -> SquareSet {
    let on_board = |f, r| Board::is_square_on_board(f, r);
    match piece {
        Piece::Pawn => leaper_targets(from, &pawn_capture_offsets(color), on_board),
        Piece::Knight => leaper_targets(from, &KNIGHT_OFFSETS, on_board),
        Piece::Bishop => ray_attacks(board, from, &DIAGONALS),
        Piece::Rook => ray_attacks(board, from, &ORTHOGONALS),
        Piece::Queen => {
            ray_attacks(board, from, &DIAGONALS) | ray_attacks(board, from, &ORTHOGONALS)
        }
        Piece::King => leaper_targets(from, &KING_OFFSETS, on_board),
    }
}

/// Returns true if `dest` is in the capture set (when `is_capture`) or the
/// move set (otherwise) of the piece.
pub fn valid_move(
    board: &Board,
    piece: Piece,
    color: Color,
    from: Square,
    dest: Square,
    is_capture: bool,
) -> bool {
    if is_capture {
        possible_captures(board, piece, color, from).contains(dest)
    } else {
        possible_moves(board, piece, color, from).contains(dest)
    }
}

/// Returns true if a piece of this kind and color arriving on `sq` must
/// promote.
#[inline]
pub fn is_promotion_square(piece: Piece, color: Color, sq: Square) -> bool {
    piece == Piece::Pawn && sq.coords().1 == color.promotion_rank()
}

fn pawn_moves(board: &Board, color: Color, from: Square) -> SquareSet {
    let (file, rank) = from.coords();
    let dir = color.pawn_direction();
    let mut set = SquareSet::EMPTY;

    if let Some(one) = Square::from_coords(file, rank + dir).filter(|&sq| board.is_empty(sq)) {
        set.insert(one);
        if rank == color.pawn_rank() {
            if let Some(two) =
                Square::from_coords(file, rank + 2 * dir).filter(|&sq| board.is_empty(sq))
            {
                set.insert(two);
            }
        }
    }
    set
}

const fn pawn_capture_offsets(color: Color) -> [(i8, i8); 2] {
    let dir = color.pawn_direction();
    [(-1, dir), (1, dir)]
}

fn leaper_targets(
    from: Square,
    offsets: &[(i8, i8)],
    accept: impl Fn(i8, i8) -> bool,
) -> SquareSet {
    let (file, rank) = from.coords();
    offsets
        .iter()
        .map(|&(df, dr)| (file + df, rank + dr))
        .filter(|&(f, r)| accept(f, r))
        .filter_map(|(f, r)| Square::from_coords(f, r))
        .collect()
}
