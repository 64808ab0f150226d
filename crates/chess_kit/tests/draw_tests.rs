//! Tests for end-of-game detection
//!
//! This module covers every terminal condition:
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material
//! - Checkmate versus plain check

use chess_kit::{Color, DrawReason, Game, GameState, History, Status};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN {fen}: {e}"))
}

fn status(game: &Game) -> Status {
    let history = History::starting_at(game);
    GameState::new(game, &history).status()
}

fn insufficient(fen: &str) -> bool {
    let game = game(fen);
    let history = History::new();
    GameState::new(&game, &history).is_insufficient_material()
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let game = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(game.legal_moves().is_empty(), "Stalemate position should have no legal moves");
    assert!(!game.is_in_check(), "Stalemate means king is not in check");
    assert_eq!(status(&game), Status::Draw(DrawReason::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let game = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(game.legal_moves().is_empty());
    assert_eq!(status(&game), Status::Draw(DrawReason::Stalemate));
}

#[test]
fn test_stalemate_pawn_shields_king() {
    let game = game("8/8/8/8/8/7k/7p/7K w - - 0 1");

    assert!(game.legal_moves().is_empty());
    assert_eq!(status(&game), Status::Draw(DrawReason::Stalemate));
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let game = game("8/8/8/4k3/8/4K3/8/4R3 w - - 100 60");
    let history = History::new();

    assert!(
        GameState::new(&game, &history).is_fifty_move_draw(),
        "Position with halfmove_clock=100 should be a draw"
    );
    assert_eq!(status(&game), Status::Draw(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let game = game("8/8/8/4k3/8/4K3/8/4R3 w - - 99 60");
    let history = History::new();

    assert!(
        !GameState::new(&game, &history).is_fifty_move_draw(),
        "Position with halfmove_clock=99 should not be a draw yet"
    );
}

#[test]
fn test_fifty_move_rule_reached_by_quiet_move() {
    let mut game = game("8/8/8/4k3/8/4K3/8/4R3 w - - 99 60");
    game.make_move_algebraic("E1", "A1").unwrap();

    assert_eq!(game.half_move_clock(), 100);
    assert_eq!(status(&game), Status::Draw(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut game = game("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    game.make_move_algebraic("E2", "E3").unwrap();

    assert_eq!(game.half_move_clock(), 0, "Pawn move should reset halfmove clock");
    assert_ne!(status(&game), Status::Draw(DrawReason::FiftyMoveRule));
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    assert!(insufficient("8/8/8/4k3/8/4K3/8/8 w - - 0 1"));
    assert_eq!(
        status(&game("6k1/8/8/8/8/8/8/4K3 b - - 0 12")),
        Status::Draw(DrawReason::InsufficientMaterial)
    );
}

#[test]
fn test_insufficient_material_single_minor_piece() {
    assert!(insufficient("8/8/8/4k3/8/4KB2/8/8 w - - 0 1"));
    assert!(insufficient("8/8/8/4k3/8/4KN2/8/8 w - - 0 1"));
    assert!(insufficient("8/8/4b3/4k3/8/4K3/8/8 w - - 0 1"));
    assert!(insufficient("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1"));
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // f8 and c1 are both dark squares
    assert!(insufficient("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1"));
}

#[test]
fn test_sufficient_material_opposite_color_bishops() {
    // c8 is light, c1 is dark
    assert!(!insufficient("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1"));
}

#[test]
fn test_sufficient_material() {
    for fen in [
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/3BB3/8 w - - 0 1",
    ] {
        assert!(!insufficient(fen), "{fen} should have mating material");
    }
}

// =============================================================================
// Repetition Tests
// =============================================================================

#[test]
fn test_position_key_ignores_counters() {
    let a = game("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let b = game("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5");
    let mut history = History::starting_at(&a);
    assert_eq!(history.occurrences(&b), 1);
    history.record(&b);
    assert_eq!(history.occurrences(&a), 2);
}

#[test]
fn test_position_key_distinguishes_side_castling_and_en_passant() {
    let pairs = [
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1",
        ),
        (
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        ),
    ];
    for (x, y) in pairs {
        let history = History::starting_at(&game(x));
        assert_eq!(history.occurrences(&game(y)), 0, "{x} vs {y}");
    }
}

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut game = Game::new();
    let mut history = History::starting_at(&game);
    let cycle = [("G1", "F3"), ("G8", "F6"), ("F3", "G1"), ("F6", "G8")];

    for round in 1..=2 {
        for (from, to) in cycle {
            game.make_move_algebraic(from, to).unwrap();
            history.record(&game);
        }
        let state = GameState::new(&game, &history);
        assert_eq!(history.occurrences(&game), round + 1);
        assert_eq!(state.is_threefold_repetition(), round == 2);
    }

    assert_eq!(
        GameState::new(&game, &history).status(),
        Status::Draw(DrawReason::ThreefoldRepetition)
    );
}

// =============================================================================
// Checkmate vs Stalemate
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let game = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    let history = History::starting_at(&game);
    let state = GameState::new(&game, &history);

    assert!(game.legal_moves().is_empty(), "Checkmate position should have no legal moves");
    assert!(state.is_checkmate());
    assert!(!state.is_stalemate());
    assert_eq!(state.status(), Status::Checkmate { winner: Color::White });
}

#[test]
fn test_check_is_not_checkmate() {
    let game = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    let history = History::starting_at(&game);
    let state = GameState::new(&game, &history);

    assert!(!game.legal_moves().is_empty(), "Check position should have legal moves");
    assert!(state.is_check());
    assert!(!state.is_checkmate());
    assert_eq!(state.status(), Status::Check);
}

#[test]
fn test_fools_mate_played_out() {
    let mut game = Game::new();
    for (from, to) in [("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")] {
        game.make_move_algebraic(from, to).unwrap();
    }
    assert_eq!(status(&game), Status::Checkmate { winner: Color::Black });
    assert!(game.make_move_algebraic("A2", "A3").is_err());
}
