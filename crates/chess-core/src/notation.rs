//! Compact move notation.
//!
//! Player input names a piece explicitly, optionally narrows down which piece
//! is meant, optionally marks a capture, and ends with the destination:
//!
//! ```text
//! <piece> [start file | start rank] [x] <file><rank>
//! ```
//!
//! For example `pe4`, `Nbc7`, `R1f1`, `Pxd4` and `N3xe2`. Matching is
//! case-insensitive. Castling is written `o-o` or `o-o-o`.

use crate::{CastleSide, File, Piece, Rank, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move")]
    Empty,

    #[error("invalid piece letter '{0}'")]
    InvalidPiece(char),

    #[error("invalid destination square in '{0}'")]
    InvalidSquare(String),

    #[error("invalid move format: {0}")]
    InvalidFormat(String),
}

/// Optional hint narrowing down which piece should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartHint {
    File(File),
    Rank(Rank),
}

impl StartHint {
    /// Parses a single file letter or rank digit.
    pub fn from_char(c: char) -> Option<Self> {
        File::from_char(c)
            .map(StartHint::File)
            .or_else(|| Rank::from_char(c).map(StartHint::Rank))
    }

    /// Returns true if a piece standing on `sq` satisfies this hint.
    #[inline]
    pub fn matches(self, sq: Square) -> bool {
        match self {
            StartHint::File(file) => sq.file() == file,
            StartHint::Rank(rank) => sq.rank() == rank,
        }
    }
}

impl fmt::Display for StartHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartHint::File(file) => write!(f, "{}", file),
            StartHint::Rank(rank) => write!(f, "{}", rank),
        }
    }
}

/// A parsed request to move a piece.
///
/// The intent does not identify a piece; the engine resolves it against the
/// current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveIntent {
    pub piece: Piece,
    pub start_hint: Option<StartHint>,
    pub is_capture: bool,
    pub dest: Square,
}

impl FromStr for MoveIntent {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.piece.letter().to_ascii_uppercase())?;
        if let Some(hint) = self.start_hint {
            write!(f, "{}", hint)?;
        }
        if self.is_capture {
            f.write_str("x")?;
        }
        write!(f, "{}", self.dest)
    }
}

/// A line of player input, understood as a move or a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(MoveIntent),
    Castle(CastleSide),
}

/// Parses a piece move such as `Nbc7` or `pxd4`.
pub fn parse_move(input: &str) -> Result<MoveIntent, NotationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(NotationError::Empty);
    }

    let chars: Vec<char> = input.chars().collect();
    if chars.len() < 3 || chars.len() > 5 {
        return Err(NotationError::InvalidFormat(input.to_string()));
    }

    let piece = Piece::from_letter(chars[0]).ok_or(NotationError::InvalidPiece(chars[0]))?;

    // The last two characters are the destination square
    let dest_str: String = chars[chars.len() - 2..].iter().collect();
    let dest = Square::from_algebraic(&dest_str)
        .ok_or_else(|| NotationError::InvalidSquare(input.to_string()))?;

    // Whatever sits between the piece letter and the destination is an
    // optional hint followed by an optional capture marker
    let (start_hint, is_capture) = match &chars[1..chars.len() - 2] {
        [] => (None, false),
        ['x' | 'X'] => (None, true),
        [hint] => (Some(parse_hint(*hint, input)?), false),
        [hint, 'x' | 'X'] => (Some(parse_hint(*hint, input)?), true),
        _ => return Err(NotationError::InvalidFormat(input.to_string())),
    };

    Ok(MoveIntent {
        piece,
        start_hint,
        is_capture,
        dest,
    })
}

fn parse_hint(c: char, input: &str) -> Result<StartHint, NotationError> {
    StartHint::from_char(c).ok_or_else(|| NotationError::InvalidFormat(input.to_string()))
}

/// Parses either castling notation or a piece move.
pub fn parse_command(input: &str) -> Result<Command, NotationError> {
    match CastleSide::from_notation(input) {
        Some(side) => Ok(Command::Castle(side)),
        None => parse_move(input).map(Command::Move),
    }
}
