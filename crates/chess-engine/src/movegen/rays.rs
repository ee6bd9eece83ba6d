//! Sliding-piece rays.

use crate::{Board, SquareSet};
use chess_core::{Color, Square};

/// Diagonal directions as (file, rank) steps.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// Orthogonal directions as (file, rank) steps.
pub const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Empty squares reachable along each ray before it leaves the board or
/// meets any piece.
pub fn ray_moves(board: &Board, from: Square, directions: &[(i8, i8)]) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for &(df, dr) in directions {
        let mut current = from.offset(df, dr);
        while let Some(sq) = current.filter(|&sq| board.is_empty(sq)) {
            set.insert(sq);
            current = sq.offset(df, dr);
        }
    }
    set
}

/// The first piece met along each ray, when it belongs to the other side.
pub fn ray_captures(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> SquareSet {
    directions
        .iter()
        .filter_map(|&(df, dr)| first_blocker(board, from, df, dr))
        .filter(|&sq| board.is_enemy(sq, color))
        .collect()
}

/// Every square a slider bears on: the empty run of each ray plus its first
/// blocker, whoever owns it.
pub fn ray_attacks(board: &Board, from: Square, directions: &[(i8, i8)]) -> SquareSet {
    let mut set = ray_moves(board, from, directions);
    for &(df, dr) in directions {
        if let Some(sq) = first_blocker(board, from, df, dr) {
            set.insert(sq);
        }
    }
    set
}

fn first_blocker(board: &Board, from: Square, df: i8, dr: i8) -> Option<Square> {
    let mut current = from.offset(df, dr);
    while let Some(sq) = current {
        if !board.is_empty(sq) {
            return Some(sq);
        }
        current = sq.offset(df, dr);
    }
    None
}
