//! Turn-by-turn game management.
//!
//! [`Game`] drives a [`Position`] through player input:
//! - resolving a parsed [`MoveIntent`] to the piece it names
//! - rejecting moves that are not legal, with a reason
//! - castling and pawn promotion
//! - move history and the game result

use crate::board::PieceId;
use crate::movegen::is_promotion_square;
use crate::rules::{self, game_result, CastlingError, GameResult};
use crate::{BoardView, Position, PositionError};
use chess_core::{
    parse_command, CastleSide, Color, Command, Move, MoveIntent, MoveKind, NotationError, Piece,
    Square,
};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move; for a castle this is the king's move.
    pub mov: Move,
    pub piece: Piece,
    pub color: Color,
    /// Kind of the piece taken, if any.
    pub captured: Option<Piece>,
    /// Kind the pawn was promoted to, once chosen.
    pub promotion: Option<Piece>,
}

impl fmt::Display for GameMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let MoveKind::Castle(side) = self.mov.kind {
            return write!(f, "{}", side);
        }
        write!(f, "{}{}", self.piece.letter().to_ascii_uppercase(), self.mov)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// Error type for game operations.
///
/// Every error leaves the game exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("no {color} piece can play {intent}")]
    NoMatchingPiece { intent: MoveIntent, color: Color },

    #[error("{count} pieces can play {intent}, name the start file or rank")]
    AmbiguousMove { intent: MoveIntent, count: usize },

    #[error("it is {turn}'s turn, the piece on {square} is {color}")]
    NotYourPiece {
        square: Square,
        color: Color,
        turn: Color,
    },

    #[error("{0} is not a legal move")]
    IllegalMove(Move),

    #[error("{0} would leave the king in check")]
    ExposesKing(Move),

    #[error("cannot castle: {0}")]
    Castling(#[from] CastlingError),

    #[error(transparent)]
    Position(#[from] PositionError),

    #[error("the pawn on {0} must be promoted first")]
    PromotionPending(Square),

    #[error("no pawn is waiting for promotion")]
    NoPromotionPending,

    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotion(Piece),

    #[error("the game is over: {0}")]
    GameAlreadyOver(GameResult),
}

/// Pieces of the side to move that match a [`MoveIntent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    None,
    One(PieceId),
    Many(Vec<PieceId>),
}

/// What a committed move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: GameMove,
    /// The moved pawn reached the last rank and waits for [`Game::promote`].
    pub promotion_pending: bool,
    /// The side now to move is in check.
    pub check: bool,
    pub result: Option<GameResult>,
}

/// A chess game between two players.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    turn: Color,
    moves: Vec<GameMove>,
    pending_promotion: Option<PieceId>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_position(Position::startpos(), Color::White)
    }

    /// Creates a game from any position.
    ///
    /// The position is judged at once, so a game may start already finished.
    pub fn from_position(position: Position, turn: Color) -> Self {
        let result = game_result(&position, turn);
        Game {
            position,
            turn,
            moves: Vec::new(),
            pending_promotion: None,
            result,
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Takes a snapshot of the board for display.
    pub fn view(&self) -> BoardView {
        BoardView::from_position(&self.position)
    }

    /// Returns the move history.
    pub fn history(&self) -> &[GameMove] {
        &self.moves
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Square of the pawn waiting to be promoted.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
            .and_then(|id| self.position.piece(id))
            .map(|piece| piece.square())
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(&self.position, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        rules::is_checkmate(&self.position, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        rules::is_stalemate(&self.position, color)
    }

    /// Legal moves of one piece.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Move> {
        rules::legal_moves(&self.position, id)
    }

    /// Finds the pieces of the side to move that could carry out `intent`.
    ///
    /// A piece matches when it is of the named kind, stands on the hinted file
    /// or rank if one is given, and can reach the destination by a move of the
    /// requested kind without leaving its own king in check.
    pub fn find_candidate_piece(&self, intent: &MoveIntent) -> Candidates {
        let board = self.position.board();
        let mut ids: Vec<PieceId> = self
            .position
            .pieces_of(self.turn)
            .filter(|(_, piece)| piece.piece() == intent.piece)
            .filter(|(_, piece)| {
                intent
                    .start_hint
                    .map_or(true, |hint| hint.matches(piece.square()))
            })
            .filter(|(_, piece)| piece.valid_move(board, intent.dest, intent.is_capture))
            .filter(|&(id, _)| !rules::exposes_king(&self.position, id, intent.dest))
            .map(|(id, _)| id)
            .collect();

        match ids.len() {
            0 => Candidates::None,
            1 => Candidates::One(ids.remove(0)),
            _ => Candidates::Many(ids),
        }
    }

    /// Moves a piece of the side to move, after checking the move is legal.
    pub fn execute_move(
        &mut self,
        id: PieceId,
        dest: Square,
        is_capture: bool,
    ) -> Result<MoveOutcome, GameError> {
        self.ensure_can_move()?;

        let piece = self
            .position
            .piece(id)
            .copied()
            .ok_or(PositionError::UnknownPiece(id))?;
        if piece.color() != self.turn {
            trace!(square = %piece.square(), turn = %self.turn, "rejected: not the mover's piece");
            return Err(GameError::NotYourPiece {
                square: piece.square(),
                color: piece.color(),
                turn: self.turn,
            });
        }
        let mov = if is_capture {
            Move::capture(piece.square(), dest)
        } else {
            Move::quiet(piece.square(), dest)
        };

        if !piece.valid_move(self.position.board(), dest, is_capture) {
            trace!(%mov, piece = %piece.piece(), "rejected: unreachable");
            return Err(GameError::IllegalMove(mov));
        }
        if rules::exposes_king(&self.position, id, dest) {
            trace!(%mov, piece = %piece.piece(), "rejected: exposes king");
            return Err(GameError::ExposesKing(mov));
        }

        let captured = self.position.move_piece(id, dest)?.map(|p| p.piece());
        if is_promotion_square(piece.piece(), piece.color(), dest) {
            self.pending_promotion = Some(id);
        }

        let record = GameMove {
            mov,
            piece: piece.piece(),
            color: piece.color(),
            captured,
            promotion: None,
        };
        debug!(%record, color = %piece.color(), "move committed");
        Ok(self.finish_turn(record))
    }

    /// Castles the side to move, given `o-o` or `o-o-o`.
    pub fn castle_move(&mut self, notation: &str) -> Result<MoveOutcome, GameError> {
        let side = CastleSide::from_notation(notation)
            .ok_or_else(|| NotationError::InvalidFormat(notation.to_string()))?;
        self.castle(side)
    }

    /// Castles the side to move.
    pub fn castle(&mut self, side: CastleSide) -> Result<MoveOutcome, GameError> {
        self.ensure_can_move()?;

        let color = self.turn;
        let mov = match rules::castle(&mut self.position, color, side) {
            Ok(mov) => mov,
            Err(err) => {
                trace!(%side, %err, "castle refused");
                return Err(err.into());
            }
        };

        let record = GameMove {
            mov,
            piece: Piece::King,
            color,
            captured: None,
            promotion: None,
        };
        debug!(%side, %color, "castled");
        Ok(self.finish_turn(record))
    }

    /// Plays one line of player input: a castle or a piece move.
    pub fn play(&mut self, input: &str) -> Result<MoveOutcome, GameError> {
        match parse_command(input)? {
            Command::Castle(side) => self.castle(side),
            Command::Move(intent) => {
                self.ensure_can_move()?;
                match self.find_candidate_piece(&intent) {
                    Candidates::One(id) => self.execute_move(id, intent.dest, intent.is_capture),
                    Candidates::None => Err(GameError::NoMatchingPiece {
                        intent,
                        color: self.turn,
                    }),
                    Candidates::Many(ids) => Err(GameError::AmbiguousMove {
                        intent,
                        count: ids.len(),
                    }),
                }
            }
        }
    }

    /// Promotes the pawn that just reached the last rank.
    pub fn promote(&mut self, kind: Piece) -> Result<Option<GameResult>, GameError> {
        let id = self
            .pending_promotion
            .ok_or(GameError::NoPromotionPending)?;
        if !kind.is_promotion_target() {
            return Err(GameError::InvalidPromotion(kind));
        }

        self.position.set_kind(id, kind)?;
        self.pending_promotion = None;
        if let Some(last) = self.moves.last_mut() {
            last.promotion = Some(kind);
        }
        debug!(piece = %kind, "pawn promoted");

        self.judge();
        Ok(self.result)
    }

    fn ensure_can_move(&self) -> Result<(), GameError> {
        if let Some(result) = self.result {
            return Err(GameError::GameAlreadyOver(result));
        }
        if let Some(sq) = self.pending_promotion() {
            return Err(GameError::PromotionPending(sq));
        }
        Ok(())
    }

    fn finish_turn(&mut self, record: GameMove) -> MoveOutcome {
        self.turn = record.color.opposite();
        self.moves.push(record.clone());
        if self.pending_promotion.is_none() {
            self.judge();
        }

        MoveOutcome {
            record,
            promotion_pending: self.pending_promotion.is_some(),
            check: self.is_in_check(self.turn),
            result: self.result,
        }
    }

    fn judge(&mut self) {
        self.result = game_result(&self.position, self.turn);
        if let Some(result) = self.result {
            debug!(%result, plies = self.moves.len(), "game over");
        }
    }
}
