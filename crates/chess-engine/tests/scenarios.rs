//! Game scenarios played through the public API.

use chess_core::{CastleSide, Color, Piece, Square};
use chess_engine::rules::{
    can_castle, castle, exposes_king, is_checkmate, is_in_check, is_stalemate, legal_moves,
};
use chess_engine::{CastlingError, Game, GameError, GameResult, PieceId, Position};
use proptest::prelude::*;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn place(position: &mut Position, piece: Piece, color: Color, at: &str) -> PieceId {
    position.add_piece(piece, color, sq(at)).unwrap()
}

fn id_at(position: &Position, at: &str) -> PieceId {
    position.piece_at(sq(at)).unwrap().0
}

// Board set-up

#[test]
fn fresh_board_has_full_armies() {
    let position = Position::startpos();
    assert_eq!(position.pieces().count(), 32);

    for color in Color::ALL {
        let mut counts = [0usize; 6];
        for (_, piece) in position.pieces_of(color) {
            counts[piece.piece().index()] += 1;
        }
        let expected = |kind: Piece| match kind {
            Piece::Pawn => 8,
            Piece::Knight | Piece::Bishop | Piece::Rook => 2,
            Piece::Queen | Piece::King => 1,
        };
        for kind in Piece::ALL {
            assert_eq!(counts[kind.index()], expected(kind), "{color} {kind}");
        }
    }
}

// Piece movement

#[test]
fn lone_rook_reaches_fourteen_squares() {
    let mut position = Position::empty();
    let rook = place(&mut position, Piece::Rook, Color::White, "d4");
    let piece = position.piece(rook).unwrap();
    assert_eq!(piece.possible_moves(position.board()).len(), 14);
    assert!(piece.possible_captures(position.board()).is_empty());
}

#[test]
fn boxed_bishop() {
    let mut position = Position::empty();
    let bishop = place(&mut position, Piece::Bishop, Color::White, "e4");
    place(&mut position, Piece::Pawn, Color::White, "c6");
    place(&mut position, Piece::Pawn, Color::Black, "g6");
    place(&mut position, Piece::Knight, Color::Black, "b1");

    let piece = *position.piece(bishop).unwrap();
    let board = position.board();
    assert!(piece.valid_move(board, sq("h1"), false));
    assert!(!piece.valid_move(board, sq("b7"), false));
    assert!(piece.valid_move(board, sq("g6"), true));
    assert!(piece.valid_move(board, sq("b1"), true));
    assert!(!piece.valid_move(board, sq("c6"), false));
    assert!(!piece.valid_move(board, sq("c6"), true));
    assert!(!piece.valid_move(board, sq("d6"), false));
}

#[test]
fn knight_jumps_over_pieces() {
    let position = Position::startpos();
    let knight = position.piece(id_at(&position, "b1")).unwrap();
    let moves: Vec<Square> = knight.possible_moves(position.board()).iter().collect();
    assert_eq!(moves, vec![sq("a3"), sq("c3")]);
}

#[test]
fn pawn_pushes_from_home_rank() {
    let position = Position::startpos();
    let pawn = *position.piece(id_at(&position, "d2")).unwrap();
    let board = position.board();
    assert!(pawn.valid_move(board, sq("d3"), false));
    assert!(pawn.valid_move(board, sq("d4"), false));
    assert!(!pawn.valid_move(board, sq("d5"), false));
    assert!(!pawn.valid_move(board, sq("e3"), true));
}

#[test]
fn pawn_captures_only_enemies() {
    let mut position = Position::startpos();
    place(&mut position, Piece::Knight, Color::Black, "e3");
    let pawn = *position.piece(id_at(&position, "d2")).unwrap();
    let board = position.board();
    assert!(pawn.valid_move(board, sq("e3"), true));
    assert!(!pawn.valid_move(board, sq("e3"), false));
    assert!(!pawn.valid_move(board, sq("c3"), true));
}

#[test]
fn black_pawn_double_step() {
    let position = Position::startpos();
    let pawn = *position.piece(id_at(&position, "e7")).unwrap();
    assert!(pawn.valid_move(position.board(), sq("e5"), false));
    assert!(!pawn.valid_move(position.board(), sq("e4"), false));
}

// Check and checkmate

#[test]
fn queen_pinned_to_king() {
    let mut position = Position::empty();
    place(&mut position, Piece::King, Color::White, "e1");
    let queen = place(&mut position, Piece::Queen, Color::White, "e2");
    place(&mut position, Piece::Rook, Color::Black, "e8");

    let piece = position.piece(queen).unwrap();
    assert!(piece.valid_move(position.board(), sq("d2"), false));
    assert!(exposes_king(&position, queen, sq("d2")));
    assert!(!exposes_king(&position, queen, sq("e3")));
}

#[test]
fn check_comes_and_goes() {
    let mut position = Position::empty();
    place(&mut position, Piece::King, Color::Black, "e8");
    place(&mut position, Piece::Rook, Color::White, "e1");
    let bishop = place(&mut position, Piece::Bishop, Color::White, "e2");
    let knight = place(&mut position, Piece::Knight, Color::White, "d6");

    assert!(is_in_check(&position, Color::Black));

    position.move_piece(knight, sq("b5")).unwrap();
    assert!(!is_in_check(&position, Color::Black));

    position.move_piece(bishop, sq("d3")).unwrap();
    assert!(is_in_check(&position, Color::Black));
}

#[test]
fn queen_and_king_mate() {
    let mut position = Position::empty();
    place(&mut position, Piece::King, Color::Black, "a8");
    let queen = place(&mut position, Piece::Queen, Color::White, "a7");
    place(&mut position, Piece::King, Color::White, "b6");

    assert!(is_checkmate(&position, Color::Black));

    // Still checking down the a-file, but the king can step to b8.
    position.move_piece(queen, sq("a3")).unwrap();
    assert!(is_in_check(&position, Color::Black));
    assert!(!is_checkmate(&position, Color::Black));

    position.move_piece(queen, sq("h3")).unwrap();
    assert!(!is_in_check(&position, Color::Black));
    assert!(!is_checkmate(&position, Color::Black));
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    for input in ["pf3", "pe5", "pg4"] {
        game.play(input).unwrap();
    }
    assert!(!game.is_checkmate(Color::White));

    game.play("Qh4").unwrap();
    assert!(game.is_in_check(Color::White));
    assert!(game.is_checkmate(Color::White));
    assert_eq!(game.result(), Some(GameResult::BlackWins));
    assert!(matches!(
        game.play("pa3"),
        Err(GameError::GameAlreadyOver(GameResult::BlackWins))
    ));
}

#[test]
fn stalemate_ends_the_game() {
    let mut position = Position::empty();
    place(&mut position, Piece::King, Color::Black, "h8");
    place(&mut position, Piece::Queen, Color::White, "f6");
    place(&mut position, Piece::King, Color::White, "g6");

    let mut game = Game::from_position(position, Color::White);
    assert!(game.result().is_none());
    let outcome = game.play("qf7").unwrap();
    assert_eq!(outcome.result, Some(GameResult::Stalemate));
    assert!(game.is_stalemate(Color::Black));
    assert!(!is_stalemate(game.position(), Color::White));
}

// Castling

fn castling_position() -> Position {
    let mut position = Position::empty();
    place(&mut position, Piece::King, Color::White, "e1");
    place(&mut position, Piece::Rook, Color::White, "h1");
    position
}

#[test]
fn castles_kingside_without_enemy_king() {
    let mut position = castling_position();
    castle(&mut position, Color::White, CastleSide::Kingside).unwrap();
    assert_eq!(
        position.piece_at(sq("g1")).map(|(_, p)| p.piece()),
        Some(Piece::King)
    );
    assert_eq!(
        position.piece_at(sq("f1")).map(|(_, p)| p.piece()),
        Some(Piece::Rook)
    );
}

#[test]
fn knight_guarding_g1_stops_castle() {
    let mut position = castling_position();
    place(&mut position, Piece::Knight, Color::Black, "h3");
    assert_eq!(
        castle(&mut position, Color::White, CastleSide::Kingside),
        Err(CastlingError::SquareAttacked(sq("g1")))
    );
    assert_eq!(position.piece_at(sq("e1")).map(|(_, p)| p.piece()), Some(Piece::King));
}

#[test]
fn bishop_guarding_f1_unless_blocked() {
    let mut position = castling_position();
    place(&mut position, Piece::Bishop, Color::Black, "a6");
    assert_eq!(
        can_castle(&position, Color::White, CastleSide::Kingside),
        Err(CastlingError::SquareAttacked(sq("f1")))
    );

    place(&mut position, Piece::Pawn, Color::White, "e2");
    assert!(can_castle(&position, Color::White, CastleSide::Kingside).is_ok());
}

#[test]
fn queenside_needs_a_rook() {
    let mut position = castling_position();
    assert!(matches!(
        castle(&mut position, Color::White, CastleSide::Queenside),
        Err(CastlingError::RookMissing { .. })
    ));
}

#[test]
fn no_castling_out_of_check() {
    let mut position = castling_position();
    place(&mut position, Piece::Rook, Color::Black, "e8");
    assert_eq!(
        castle(&mut position, Color::White, CastleSide::Kingside),
        Err(CastlingError::InCheck)
    );
}

#[test]
fn king_that_went_for_a_walk_cannot_castle() {
    let mut position = castling_position();
    place(&mut position, Piece::King, Color::Black, "a8");
    let mut game = Game::from_position(position, Color::White);

    for input in ["kd1", "kb8", "ke1", "ka8"] {
        game.play(input).unwrap();
    }
    assert_eq!(game.turn(), Color::White);
    assert_eq!(
        game.castle_move("o-o"),
        Err(GameError::Castling(CastlingError::KingMoved(Color::White)))
    );
}

#[test]
fn castle_from_start_after_clearing() {
    let mut game = Game::new();
    for input in ["pe4", "pe5", "nf3", "nf6", "bc4", "bc5"] {
        game.play(input).unwrap();
    }
    let outcome = game.castle_move("O-O").unwrap();
    assert_eq!(outcome.record.to_string(), "O-O");
    assert_eq!(game.turn(), Color::Black);
    game.castle_move("0-0").unwrap();
    assert_eq!(
        game.position().piece_at(sq("g8")).map(|(_, p)| p.piece()),
        Some(Piece::King)
    );
    assert!(game.position().is_consistent());
}

// Properties

fn arb_position() -> impl Strategy<Value = Position> {
    prop::collection::vec((0usize..6, any::<bool>(), 0u8..64), 0..16).prop_map(|placements| {
        let mut position = Position::empty();
        for (kind, white, index) in placements {
            let color = if white { Color::White } else { Color::Black };
            if let Some(sq) = Square::from_index(index) {
                let _ = position.add_piece(Piece::ALL[kind], color, sq);
            }
        }
        position
    })
}

proptest! {
    #[test]
    fn check_query_is_idempotent(position in arb_position()) {
        for color in Color::ALL {
            let first = is_in_check(&position, color);
            prop_assert_eq!(first, is_in_check(&position, color));
        }
    }

    #[test]
    fn speculation_never_mutates(position in arb_position()) {
        let before = position.clone();
        for (id, _) in before.pieces() {
            for m in legal_moves(&position, id) {
                let next = position.speculate(id, m.to);
                prop_assert!(next.is_consistent());
            }
        }
        for color in Color::ALL {
            let _ = is_checkmate(&position, color);
        }
        prop_assert_eq!(position, before);
    }

    #[test]
    fn legal_moves_keep_own_king_safe(position in arb_position()) {
        for (id, piece) in position.pieces() {
            for m in legal_moves(&position, id) {
                prop_assert!(!is_in_check(&position.speculate(id, m.to), piece.color()));
            }
        }
    }
}
