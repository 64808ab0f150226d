use super::*;

fn c(s: &str) -> Coordinate {
    Coordinate::from_algebraic(s).unwrap()
}

fn status_at(game: &Game, sq: &str) -> Option<MoveStatus> {
    game.board().get(c(sq)).map(|p| p.status)
}

#[test]
fn test_start_roundtrip() {
    let game = parse(START_FEN).unwrap();
    assert_eq!(game, Game::new());
    assert_eq!(generate(&game), START_FEN);
}

#[test]
fn test_position_key_drops_counters() {
    let game = parse("4k3/8/8/8/8/8/8/4K3 w - - 17 42").unwrap();
    assert_eq!(position_key(&game), "4k3/8/8/8/8/8/8/4K3 w - -");
}

#[test]
fn test_statuses_settled_from_placement() {
    let game = parse("4k3/3p4/8/2p5/8/4P3/P7/R3K2R w K - 0 1").unwrap();
    assert_eq!(status_at(&game, "A2"), Some(MoveStatus::Unmoved));
    assert_eq!(status_at(&game, "E3"), Some(MoveStatus::Moved));
    assert_eq!(status_at(&game, "D7"), Some(MoveStatus::Unmoved));
    assert_eq!(status_at(&game, "C5"), Some(MoveStatus::Moved));
    assert_eq!(status_at(&game, "E1"), Some(MoveStatus::Unmoved));
    assert_eq!(status_at(&game, "H1"), Some(MoveStatus::Unmoved));
    // present on its corner but without the Q right
    assert_eq!(status_at(&game, "A1"), Some(MoveStatus::Moved));
}

#[test]
fn test_partial_castling_roundtrip() {
    let text = "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1";
    let game = parse(text).unwrap();
    assert_eq!(status_at(&game, "H1"), Some(MoveStatus::Unmoved));
    assert_eq!(status_at(&game, "A1"), Some(MoveStatus::Moved));
    assert_eq!(status_at(&game, "A8"), Some(MoveStatus::Unmoved));
    assert_eq!(status_at(&game, "H8"), Some(MoveStatus::Moved));
    assert_eq!(generate(&game), text);
}

#[test]
fn test_en_passant_marks_rushed_pawn() {
    let text = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let game = parse(text).unwrap();
    assert_eq!(status_at(&game, "E4"), Some(MoveStatus::Rushed));
    assert_eq!(generate(&game), text);
}

#[test]
fn test_castling_right_without_pieces_rejected() {
    for text in [
        "4k3/8/8/8/8/8/8/4K3 w K - 0 1",
        "4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1",
        "4k3/8/8/8/8/8/8/R2K4 w Q - 0 1",
    ] {
        assert!(
            matches!(parse(text), Err(ChessError::MalformedFen(_))),
            "{text}"
        );
    }
}

#[test]
fn test_malformed_fields() {
    let bad = [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkqK - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KX - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - a 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1",
    ];
    for text in bad {
        assert!(
            matches!(parse(text), Err(ChessError::MalformedFen(_))),
            "{text:?}"
        );
    }
}

#[test]
fn test_bad_en_passant_square() {
    let bad = [
        // no pawn in front of the square
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq e3 0 1",
        // wrong rank for the side to move
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e9 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq 33 0 1",
    ];
    for text in bad {
        assert!(
            matches!(parse(text), Err(ChessError::MalformedFen(_))),
            "{text:?}"
        );
    }
}
