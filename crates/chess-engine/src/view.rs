//! Read-only snapshot of the board for display.

use crate::Position;
use chess_core::{Color, File, Piece, Rank, Square};

/// What a renderer needs to know about an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub piece: Piece,
    pub color: Color,
}

impl SquareView {
    /// Unicode chess glyph.
    pub const fn glyph(self) -> char {
        self.piece.glyph(self.color)
    }

    /// Piece letter, uppercase for White and lowercase for Black.
    pub const fn letter(self) -> char {
        self.piece.display_letter(self.color)
    }
}

/// A copy of the grid, detached from the game it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    squares: [Option<SquareView>; 64],
}

impl BoardView {
    pub fn from_position(position: &Position) -> Self {
        let mut squares = [None; 64];
        for (sq, occupant) in position.board().occupied() {
            squares[sq.index() as usize] = Some(SquareView {
                piece: occupant.piece,
                color: occupant.color,
            });
        }
        BoardView { squares }
    }

    /// Returns what stands on a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<SquareView> {
        self.squares[sq.index() as usize]
    }

    /// Squares of one rank from the a-file to the h-file.
    pub fn rank(&self, rank: Rank) -> impl Iterator<Item = (Square, Option<SquareView>)> + '_ {
        File::ALL.into_iter().map(move |file| {
            let sq = Square::new(file, rank);
            (sq, self.get(sq))
        })
    }
}

impl From<&Position> for BoardView {
    fn from(position: &Position) -> Self {
        BoardView::from_position(position)
    }
}
