//! Saving and restoring a game as JSON.
//!
//! Only the board is stored: each live piece with its kind, color, square and
//! moved flag, plus the side to move. Move history is not kept.

use chess_core::{Color, Piece, Square};
use chess_engine::{ChessPiece, Game, Position, PositionError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when saving or loading a game.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown piece letter '{0}' in save file")]
    UnknownPiece(char),
    #[error("Invalid square '{0}' in save file")]
    InvalidSquare(String),
    #[error("Invalid position in save file: {0}")]
    Position(#[from] PositionError),
    #[error("Cannot save while a pawn is waiting for promotion")]
    PromotionPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Side {
    White,
    Black,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SavedPiece {
    kind: char,
    color: Side,
    square: String,
    has_moved: bool,
}

/// On-disk form of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    turn: Side,
    pieces: Vec<SavedPiece>,
}

impl SavedGame {
    /// Captures the current board and side to move.
    pub fn from_game(game: &Game) -> Self {
        let pieces = game
            .position()
            .pieces()
            .map(|(_, piece)| SavedPiece {
                kind: piece.piece().letter(),
                color: piece.color().into(),
                square: piece.square().to_algebraic(),
                has_moved: piece.has_moved(),
            })
            .collect();
        SavedGame {
            turn: game.turn().into(),
            pieces,
        }
    }

    /// Rebuilds a game, rejecting unknown pieces, bad squares and pieces
    /// sharing a square.
    pub fn restore(&self) -> Result<Game, SaveError> {
        let mut position = Position::empty();
        for saved in &self.pieces {
            let kind =
                Piece::from_letter(saved.kind).ok_or(SaveError::UnknownPiece(saved.kind))?;
            let square = Square::from_algebraic(&saved.square)
                .ok_or_else(|| SaveError::InvalidSquare(saved.square.clone()))?;
            let piece =
                ChessPiece::new(kind, saved.color.into(), square).with_moved(saved.has_moved);
            position.insert_piece(piece)?;
        }
        Ok(Game::from_position(position, self.turn.into()))
    }
}

/// Writes the game to `path` as pretty-printed JSON.
pub fn save(game: &Game, path: &Path) -> Result<(), SaveError> {
    if game.pending_promotion().is_some() {
        return Err(SaveError::PromotionPending);
    }
    let json = serde_json::to_string_pretty(&SavedGame::from_game(game))?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "game saved");
    Ok(())
}

/// Reads a game saved by [`save`].
pub fn load(path: &Path) -> Result<Game, SaveError> {
    let content = std::fs::read_to_string(path)?;
    let saved: SavedGame = serde_json::from_str(&content)?;
    let game = saved.restore()?;
    tracing::debug!(path = %path.display(), turn = %game.turn(), "game loaded");
    Ok(game)
}
