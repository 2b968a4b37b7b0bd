use plum_rules::chess_errors::ChessErrors;
use plum_rules::game_state::chess_rules::GameOutcome;
use plum_rules::game_state::chess_types::{Color, PieceKind, Square, Variant};
use plum_rules::game_state::game_config::GameConfig;
use plum_rules::game_state::game_state::GameState;
use plum_rules::game_state::position::Position;
use plum_rules::moves::move_descriptions::MoveKind;

fn sq(name: &str) -> Square {
    name.parse().expect("test square should parse")
}

fn play(game: &mut GameState, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        let ply = game.latest_ply();
        game.apply_move(ply, sq(from), sq(to))
            .unwrap_or_else(|err| panic!("{from}{to} at ply {ply} should be legal: {err}"));
    }
}

#[test]
fn double_steps_stamp_the_ply_they_were_played_on() {
    let mut game = GameState::new_game("standard", None).expect("game should start");

    assert_eq!(game.legal_moves(0).expect("moves").get(sq("e2"), sq("e4")), Some(MoveKind::PawnBoost));
    play(&mut game, &[("e2", "e4"), ("d7", "d5")]);

    let position = game.position(2).expect("ply 2");
    assert_eq!(position.piece_at(sq("e4")).and_then(|p| p.last_double_step_ply), Some(0));
    assert_eq!(position.piece_at(sq("d5")).and_then(|p| p.last_double_step_ply), Some(1));

    // The d5 pawn is diagonal to e4, so taking it is an ordinary capture.
    let moves = game.legal_moves(2).expect("moves at ply 2");
    assert_eq!(moves.get(sq("e4"), sq("d5")), Some(MoveKind::Capture));
    assert_eq!(moves.get(sq("e4"), sq("d6")), None);
}

#[test]
fn en_passant_is_only_available_on_the_next_ply() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);

    let moves = game.legal_moves(4).expect("moves at ply 4");
    assert_eq!(moves.get(sq("e5"), sq("d6")), Some(MoveKind::EnPassant));

    play(&mut game, &[("g1", "f3"), ("g8", "f6")]);
    let later = game.legal_moves(6).expect("moves at ply 6");
    assert_eq!(later.get(sq("e5"), sq("d6")), None);

    // The window is still open when looking back at ply 4.
    assert_eq!(
        game.legal_moves(4).expect("moves at ply 4").get(sq("e5"), sq("d6")),
        Some(MoveKind::EnPassant)
    );
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5"), ("e5", "d6")]);

    let position = game.latest_position();
    assert!(position.is_empty_square(sq("d5")));
    assert_eq!(position.piece_at(sq("d6")).map(|p| p.owner), Some(Color::Light));
    assert_eq!(game.material_balance(5), Ok(1));
}

#[test]
fn undo_restores_the_previous_position_exactly() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
    let before = game.latest_position().clone();
    let before_moves = game.legal_moves(3).expect("moves at ply 3");

    play(&mut game, &[("b8", "c6")]);
    assert_ne!(game.latest_position(), &before);

    let restored = game.undo().expect("undo should succeed").clone();
    assert_eq!(restored, before);
    assert_eq!(game.latest_ply(), 3);
    assert_eq!(game.legal_moves(3).expect("moves at ply 3"), before_moves);
}

#[test]
fn undo_at_the_start_is_an_error() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    assert_eq!(game.undo().map(|_| ()), Err(ChessErrors::NoMoveToUndo));
    assert_eq!(game.latest_ply(), 0);
}

#[test]
fn fools_mate_is_checkmate() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);

    assert_eq!(game.is_in_check(4), Ok(true));
    assert!(game.legal_moves(4).expect("moves at ply 4").is_empty());
    assert_eq!(game.outcome(4), Ok(GameOutcome::Checkmate { winner: Color::Dark }));
    assert_eq!(game.outcome(3), Ok(GameOutcome::Ongoing));
}

#[test]
fn castling_moves_both_king_and_rook() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(
        &mut game,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")],
    );

    assert_eq!(
        game.legal_moves(6).expect("moves at ply 6").get(Square::E1, sq("g1")),
        Some(MoveKind::KingsideCastling)
    );
    play(&mut game, &[("e1", "g1")]);

    let position = game.latest_position();
    assert_eq!(position.piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(position.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(position.is_empty_square(Square::H1));
}

#[test]
fn moving_the_king_forfeits_castling() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
            ("e1", "e2"),
            ("f8", "c5"),
            ("e2", "e1"),
            ("d7", "d6"),
        ],
    );

    let moves = game.legal_moves(10).expect("moves at ply 10");
    assert_eq!(moves.get(Square::E1, sq("g1")), None);
    assert_eq!(moves.get(Square::E1, sq("f1")), Some(MoveKind::Moving));
}

#[test]
fn chess960_games_never_castle() {
    for seed in 0..20u64 {
        let game = GameState::with_config(GameConfig {
            variant: Variant::Chess960,
            seed: Some(seed),
            ..GameConfig::default()
        })
        .expect("game should start");

        let moves = game.legal_moves(0).expect("moves at ply 0");
        assert!(!moves.is_empty(), "seed {seed}");
        assert!(moves.iter().all(|mv| !mv.kind.is_castling()), "seed {seed}");
    }

    let open = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
    let standard = GameState::from_fen(open, GameConfig::default()).expect("game should start");
    let shuffled = GameState::from_fen(
        open,
        GameConfig {
            variant: Variant::Chess960,
            ..GameConfig::default()
        },
    )
    .expect("game should start");

    assert!(standard.legal_moves(0).expect("moves").iter().any(|mv| mv.kind.is_castling()));
    assert!(!shuffled.legal_moves(0).expect("moves").iter().any(|mv| mv.kind.is_castling()));
}

#[test]
fn stalemate_and_bare_kings() {
    let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", GameConfig::default())
        .expect("game should start");
    assert_eq!(stalemate.outcome(stalemate.latest_ply()), Ok(GameOutcome::Stalemate));

    let bare = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1", GameConfig::default())
        .expect("game should start");
    assert_eq!(bare.outcome(0), Ok(GameOutcome::InsufficientMaterial));

    let rook = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", GameConfig::default())
        .expect("game should start");
    assert_eq!(rook.outcome(0), Ok(GameOutcome::Ongoing));
}

#[test]
fn same_color_bishops_follow_the_config() {
    let fen = "4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1";
    let default_rules = GameState::from_fen(fen, GameConfig::default()).expect("game should start");
    let drawn_rules = GameState::from_fen(
        fen,
        GameConfig {
            same_color_bishops_draw: true,
            ..GameConfig::default()
        },
    )
    .expect("game should start");

    assert_eq!(default_rules.outcome(0), Ok(GameOutcome::Ongoing));
    assert_eq!(drawn_rules.outcome(0), Ok(GameOutcome::InsufficientMaterial));
}

#[test]
fn positions_round_trip_through_json() {
    let mut game = GameState::new_game("standard", None).expect("game should start");
    play(&mut game, &[("e2", "e4")]);

    let json = serde_json::to_string(game.latest_position()).expect("position should serialize");
    assert!(json.contains(r#"["e4","white","pawn",true,0]"#));

    let back: Position = serde_json::from_str(&json).expect("position should deserialize");
    assert_eq!(&back, game.latest_position());

    let kingless = r#"[["e1","white","king",false,null]]"#;
    assert!(serde_json::from_str::<Position>(kingless).is_err());
}
