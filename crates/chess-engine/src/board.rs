//! The 8×8 grid.
//!
//! [`Board`] only knows which piece stands where. It answers occupancy
//! queries and accepts structural edits; it knows nothing about whose turn it
//! is or whether an edit is a legal move. Game state mutation goes through
//! [`Position`](crate::Position), which keeps the grid and its piece arena in
//! step.

use chess_core::{Color, Piece, Square};

/// Identifies a piece in a [`Position`](crate::Position)'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    /// Returns the arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What the grid records for an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub id: PieceId,
    pub piece: Piece,
    pub color: Color,
}

/// An 8×8 grid of optional occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Occupant>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Returns true if both coordinates are in 0-7.
    #[inline]
    pub const fn is_square_on_board(file: i8, rank: i8) -> bool {
        Square::is_on_board(file, rank)
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<Occupant> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.occupant(sq).is_none()
    }

    /// Returns true if a piece of the opposite color to `color` stands on the
    /// square. Empty squares are never enemies.
    #[inline]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.occupant(sq).is_some_and(|o| o.color != color)
    }

    /// On-board and empty.
    #[inline]
    pub fn valid_and_empty(&self, file: i8, rank: i8) -> bool {
        Square::from_coords(file, rank).is_some_and(|sq| self.is_empty(sq))
    }

    /// On-board and occupied by a piece of the opposite color to `color`.
    #[inline]
    pub fn valid_and_enemy(&self, file: i8, rank: i8, color: Color) -> bool {
        Square::from_coords(file, rank).is_some_and(|sq| self.is_enemy(sq, color))
    }

    /// Puts an occupant on a square, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, occupant: Occupant, sq: Square) -> Option<Occupant> {
        self.squares[sq.index() as usize].replace(occupant)
    }

    /// Clears a square, returning its former occupant.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Occupant> {
        self.squares[sq.index() as usize].take()
    }

    /// Iterates over occupied squares in a1..h8 order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(|sq| self.occupant(sq).map(|o| (sq, o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn occupant(id: u8, piece: Piece, color: Color) -> Occupant {
        Occupant {
            id: PieceId(id),
            piece,
            color,
        }
    }

    #[test]
    fn square_bounds() {
        assert!(Board::is_square_on_board(0, 0));
        assert!(Board::is_square_on_board(7, 7));
        assert!(!Board::is_square_on_board(-1, 4));
        assert!(!Board::is_square_on_board(4, 8));
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::empty();
        let rook = occupant(0, Piece::Rook, Color::White);
        assert_eq!(board.place(rook, sq("a1")), None);
        assert!(!board.is_empty(sq("a1")));
        assert_eq!(board.occupant(sq("a1")), Some(rook));
        assert_eq!(board.remove(sq("a1")), Some(rook));
        assert!(board.is_empty(sq("a1")));
        assert_eq!(board.remove(sq("a1")), None);
    }

    #[test]
    fn enemy_queries() {
        let mut board = Board::empty();
        board.place(occupant(0, Piece::Pawn, Color::Black), sq("e5"));

        assert!(board.is_enemy(sq("e5"), Color::White));
        assert!(!board.is_enemy(sq("e5"), Color::Black));
        assert!(!board.is_enemy(sq("e4"), Color::White));

        assert!(board.valid_and_enemy(4, 4, Color::White));
        assert!(!board.valid_and_enemy(4, 4, Color::Black));
        assert!(!board.valid_and_enemy(4, 3, Color::White));
        assert!(!board.valid_and_enemy(9, 4, Color::White));
    }

    #[test]
    fn valid_and_empty_guards_bounds() {
        let mut board = Board::empty();
        board.place(occupant(0, Piece::Knight, Color::White), sq("b1"));
        assert!(board.valid_and_empty(0, 0));
        assert!(!board.valid_and_empty(1, 0));
        assert!(!board.valid_and_empty(-1, 0));
        assert!(!board.valid_and_empty(0, 8));
    }

    #[test]
    fn occupied_iterates_in_order() {
        let mut board = Board::empty();
        board.place(occupant(1, Piece::King, Color::Black), sq("e8"));
        board.place(occupant(0, Piece::King, Color::White), sq("e1"));
        let squares: Vec<Square> = board.occupied().map(|(s, _)| s).collect();
        assert_eq!(squares, vec![Square::E1, Square::E8]);
    }
}
