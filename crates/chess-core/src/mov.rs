//! Move representation.

use crate::{Color, Square};
use std::fmt;

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file (O-O).
    Kingside,
    /// Toward the a-file (O-O-O).
    Queenside,
}

impl CastleSide {
    /// Parses castling notation: `o-o`/`o-o-o`, case-insensitive, with
    /// letter O or digit zero.
    pub fn from_notation(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "o-o" | "0-0" => Some(CastleSide::Kingside),
            "o-o-o" | "0-0-0" => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Returns the notation for this side.
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }

    /// Square the king starts on.
    pub const fn king_from(self, color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Square the king lands on.
    pub const fn king_to(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::G1,
            (CastleSide::Queenside, Color::White) => Square::C1,
            (CastleSide::Kingside, Color::Black) => Square::G8,
            (CastleSide::Queenside, Color::Black) => Square::C8,
        }
    }

    /// Square the rook starts on.
    pub const fn rook_from(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::H1,
            (CastleSide::Queenside, Color::White) => Square::A1,
            (CastleSide::Kingside, Color::Black) => Square::H8,
            (CastleSide::Queenside, Color::Black) => Square::A8,
        }
    }

    /// Square the rook lands on.
    pub const fn rook_to(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::Kingside, Color::White) => Square::F1,
            (CastleSide::Queenside, Color::White) => Square::D1,
            (CastleSide::Kingside, Color::Black) => Square::F8,
            (CastleSide::Queenside, Color::Black) => Square::D8,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// How a move interacts with the destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move onto an empty square.
    Quiet,
    /// Capture of the enemy piece on the destination square.
    Capture,
    /// King move of a castle; `to` is the king's landing square.
    Castle(CastleSide),
}

/// A chess move from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Creates a non-capturing move.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Quiet,
        }
    }

    /// Creates a capturing move.
    #[inline]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Capture,
        }
    }

    /// Creates the king move of a castle.
    #[inline]
    pub const fn castle(side: CastleSide, color: Color) -> Self {
        Move {
            from: side.king_from(color),
            to: side.king_to(color),
            kind: MoveKind::Castle(side),
        }
    }

    /// Returns true if this move captures a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Quiet => write!(f, "{}-{}", self.from, self.to),
            MoveKind::Capture => write!(f, "{}x{}", self.from, self.to),
            MoveKind::Castle(side) => write!(f, "{}", side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castle_side_from_notation() {
        assert_eq!(CastleSide::from_notation("o-o"), Some(CastleSide::Kingside));
        assert_eq!(CastleSide::from_notation("O-O"), Some(CastleSide::Kingside));
        assert_eq!(CastleSide::from_notation("0-0"), Some(CastleSide::Kingside));
        assert_eq!(
            CastleSide::from_notation("o-o-o"),
            Some(CastleSide::Queenside)
        );
        assert_eq!(CastleSide::from_notation("o-o-o-o"), None);
        assert_eq!(CastleSide::from_notation("oo"), None);
    }

    #[test]
    fn castle_squares() {
        let side = CastleSide::Kingside;
        assert_eq!(side.king_from(Color::White), Square::E1);
        assert_eq!(side.king_to(Color::White), Square::G1);
        assert_eq!(side.rook_from(Color::White), Square::H1);
        assert_eq!(side.rook_to(Color::White), Square::F1);

        let side = CastleSide::Queenside;
        assert_eq!(side.king_to(Color::Black), Square::C8);
        assert_eq!(side.rook_from(Color::Black), Square::A8);
        assert_eq!(side.rook_to(Color::Black), Square::D8);
    }

    #[test]
    fn move_display() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(Move::quiet(e2, e4).to_string(), "e2-e4");
        assert_eq!(Move::capture(e2, e4).to_string(), "e2xe4");
        assert_eq!(
            Move::castle(CastleSide::Queenside, Color::White).to_string(),
            "O-O-O"
        );
        assert_eq!(format!("{:?}", Move::quiet(e2, e4)), "Move(e2-e4)");
    }

    #[test]
    fn move_is_capture() {
        assert!(Move::capture(Square::A1, Square::A8).is_capture());
        assert!(!Move::quiet(Square::A1, Square::A8).is_capture());
        assert!(!Move::castle(CastleSide::Kingside, Color::Black).is_capture());
    }
}
