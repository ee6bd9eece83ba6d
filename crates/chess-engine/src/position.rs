//! Chess position: the board grid plus the arena of pieces standing on it.

use chess_core::{Color, Piece, Square};
use thiserror::Error;

use crate::board::{Occupant, PieceId};
use crate::movegen;
use crate::{Board, SquareSet};

/// Errors raised by structural edits to a [`Position`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("no piece with id {0:?}")]
    UnknownPiece(PieceId),

    #[error("a position holds at most 64 pieces")]
    TooManyPieces,
}

/// A piece and its mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessPiece {
    piece: Piece,
    color: Color,
    square: Square,
    has_moved: bool,
}

impl ChessPiece {
    /// Creates a piece that has not moved yet.
    pub const fn new(piece: Piece, color: Color, square: Square) -> Self {
        ChessPiece {
            piece,
            color,
            square,
            has_moved: false,
        }
    }

    /// Returns the same piece with its moved flag set as given.
    pub const fn with_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    /// The piece kind.
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The square the piece stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Whether the piece has ever moved. Once set this is never cleared.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Destinations reachable by a non-capturing move.
    pub fn possible_moves(&self, board: &Board) -> SquareSet {
        movegen::possible_moves(board, self.piece, self.color, self.square)
    }

    /// Destinations reachable by a capturing move.
    pub fn possible_captures(&self, board: &Board) -> SquareSet {
        movegen::possible_captures(board, self.piece, self.color, self.square)
    }

    /// Squares this piece bears on.
    pub fn attacks(&self, board: &Board) -> SquareSet {
        movegen::attacks(board, self.piece, self.color, self.square)
    }

    /// Returns true if `dest` is a pseudo-legal destination of the given kind.
    pub fn valid_move(&self, board: &Board, dest: Square, is_capture: bool) -> bool {
        movegen::valid_move(board, self.piece, self.color, self.square, dest, is_capture)
    }

    fn occupant(&self, id: PieceId) -> Occupant {
        Occupant {
            id,
            piece: self.piece,
            color: self.color,
        }
    }
}

/// Complete board state.
///
/// The grid and the arena are two views of the same facts: every live piece
/// in the arena stands on exactly the grid square it records, and every
/// occupied grid square names a live arena piece. Only the methods below
/// mutate either, and each updates both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    board: Board,
    pieces: Vec<Option<ChessPiece>>,
}

impl Position {
    /// Upper bound on pieces ever added to one position.
    pub const MAX_PIECES: usize = 64;

    /// Creates a position with no pieces.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            pieces: Vec::with_capacity(32),
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut position = Position::empty();
        for color in Color::ALL {
            for (file, &piece) in (0i8..).zip(BACK_RANK.iter()) {
                position.setup(piece, color, file, color.back_rank());
                position.setup(Piece::Pawn, color, file, color.pawn_rank());
            }
        }
        position
    }

    fn setup(&mut self, piece: Piece, color: Color, file: i8, rank: i8) {
        if let Some(sq) = Square::from_coords(file, rank) {
            // Setup squares are distinct and on the board
            let _ = self.add_piece(piece, color, sq);
        }
    }

    /// Returns the board grid.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Adds an unmoved piece on an empty square.
    pub fn add_piece(
        &mut self,
        piece: Piece,
        color: Color,
        sq: Square,
    ) -> Result<PieceId, PositionError> {
        self.insert_piece(ChessPiece::new(piece, color, sq))
    }

    /// Adds a piece with its full state, e.g. when restoring a saved game.
    pub fn insert_piece(&mut self, piece: ChessPiece) -> Result<PieceId, PositionError> {
        if !self.board.is_empty(piece.square) {
            return Err(PositionError::Occupied(piece.square));
        }
        if self.pieces.len() >= Self::MAX_PIECES {
            return Err(PositionError::TooManyPieces);
        }
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Some(piece));
        self.board.place(piece.occupant(id), piece.square);
        Ok(id)
    }

    /// Takes a piece off the board. Its id is never reused.
    pub fn remove_piece(&mut self, id: PieceId) -> Option<ChessPiece> {
        let piece = self.pieces.get_mut(id.index())?.take()?;
        self.board.remove(piece.square);
        Some(piece)
    }

    /// Moves a piece to `to`, capturing whatever stands there, and marks it
    /// as moved. Returns the captured piece.
    ///
    /// No chess rules are checked.
    pub fn move_piece(
        &mut self,
        id: PieceId,
        to: Square,
    ) -> Result<Option<ChessPiece>, PositionError> {
        let mut piece = self.piece(id).copied().ok_or(PositionError::UnknownPiece(id))?;
        if piece.square == to {
            return Ok(None);
        }

        let captured = self
            .board
            .occupant(to)
            .and_then(|occupant| self.remove_piece(occupant.id));

        self.board.remove(piece.square);
        piece.square = to;
        piece.has_moved = true;
        self.board.place(piece.occupant(id), to);
        self.pieces[id.index()] = Some(piece);

        Ok(captured)
    }

    /// Changes a piece's kind in place (pawn promotion).
    pub fn set_kind(&mut self, id: PieceId, kind: Piece) -> Result<(), PositionError> {
        let piece = self
            .pieces
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(PositionError::UnknownPiece(id))?;
        piece.piece = kind;
        let updated = *piece;
        self.board.place(updated.occupant(id), updated.square);
        Ok(())
    }

    /// Returns a copy of this position with `id` moved to `to`.
    ///
    /// This is the single place speculative moves are made: the live position
    /// is never touched, so there is nothing to undo.
    pub fn speculate(&self, id: PieceId, to: Square) -> Position {
        let mut next = self.clone();
        // An unknown id leaves the copy unchanged
        let _ = next.move_piece(id, to);
        next
    }

    /// Returns a live piece by id.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&ChessPiece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns the piece standing on a square.
    pub fn piece_at(&self, sq: Square) -> Option<(PieceId, &ChessPiece)> {
        let id = self.board.occupant(sq)?.id;
        self.piece(id).map(|piece| (id, piece))
    }

    /// Iterates over live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &ChessPiece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|piece| (PieceId(i as u8), piece)))
    }

    /// Iterates over live pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &ChessPiece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the king of the given color, if it is on the board.
    pub fn king(&self, color: Color) -> Option<(PieceId, &ChessPiece)> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.piece == Piece::King)
    }

    /// Number of live pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Returns true if the grid and the arena agree on every piece.
    pub fn is_consistent(&self) -> bool {
        let arena_agrees = self.pieces().all(|(id, piece)| {
            self.board.occupant(piece.square) == Some(piece.occupant(id))
        });
        arena_agrees && self.board.occupied().count() == self.piece_count()
    }
}
