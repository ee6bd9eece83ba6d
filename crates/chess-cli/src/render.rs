//! Text rendering of the board.

use chess_core::{File, Rank};
use chess_engine::BoardView;

/// Draws the board from White's side: rank 8 on top, files a to h.
pub fn render(view: &BoardView, unicode: bool) -> String {
    let mut out = String::new();
    for &rank in Rank::ALL.iter().rev() {
        out.push(rank.to_char());
        out.push(' ');
        for (_, occupant) in view.rank(rank) {
            let c = match occupant {
                Some(sv) if unicode => sv.glyph(),
                Some(sv) => sv.letter(),
                None => '.',
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }

    out.push_str("  ");
    for file in File::ALL {
        out.push(' ');
        out.push(file.to_char());
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Position;

    #[test]
    fn letters_for_startpos() {
        let text = render(&BoardView::from_position(&Position::startpos()), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[1], "7  p p p p p p p p");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn glyphs_for_startpos() {
        let text = render(&BoardView::from_position(&Position::startpos()), true);
        assert!(text.starts_with("8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜\n"));
        assert!(text.contains("1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖\n"));
    }
}
