use super::*;

#[test]
fn test_random_suggestion_is_legal() {
    let game = Game::new();
    let mut suggester = RandomSuggester::with_seed(7);
    for _ in 0..20 {
        let mv = suggester.suggest(&game).unwrap().expect("start position has moves");
        assert!(game.legal_moves().contains(&(mv.from, mv.to)));
    }
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let game = Game::new();
    let a = RandomSuggester::with_seed(42).suggest(&game).unwrap();
    let b = RandomSuggester::with_seed(42).suggest(&game).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_has_nothing_in_stalemate() {
    let game = Game::from_fen("8/8/8/8/8/7k/7p/7K w - - 0 1").unwrap();
    assert_eq!(RandomSuggester::with_seed(1).suggest(&game).unwrap(), None);
}

#[test]
fn test_no_engine_path_means_random() {
    let suggester = suggester_from_config(&EngineConfig::default());
    assert_eq!(suggester.name(), "random");
}

#[test]
fn test_missing_engine_falls_back_to_random() {
    let config = EngineConfig {
        path: Some("/nonexistent/chess-engine".to_string()),
        ..EngineConfig::default()
    };
    assert!(UciEngine::spawn("/nonexistent/chess-engine", &[], 10).is_err());
    assert_eq!(suggester_from_config(&config).name(), "random");
}

#[cfg(unix)]
const FAKE_ENGINE: &str = r#"
while read -r line; do
  case "$line" in
    uci) echo "id name FakeFish 1.0"; echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "info depth 1 score cp 20"; echo "bestmove e2e4 ponder e7e5" ;;
    quit) exit 0 ;;
  esac
done
"#;

#[cfg(unix)]
#[test]
fn test_uci_engine_handshake_and_bestmove() {
    let args = vec!["-c".to_string(), FAKE_ENGINE.to_string()];
    let mut engine = UciEngine::spawn("sh", &args, 10).unwrap();
    assert_eq!(engine.name(), "FakeFish 1.0");

    let game = Game::new();
    let mv = engine.suggest(&game).unwrap().unwrap();
    assert_eq!(chess_kit::move_to_uci(mv.from, mv.to, mv.promotion), "e2e4");
}

#[cfg(unix)]
#[test]
fn test_uci_engine_that_exits_is_an_error() {
    let args = vec!["-c".to_string(), "exit 0".to_string()];
    assert!(UciEngine::spawn("sh", &args, 10).is_err());
}
