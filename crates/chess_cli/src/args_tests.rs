use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_arguments() {
    assert_eq!(CliArgs::parse(&[]).unwrap(), CliArgs::default());
}

#[test]
fn test_all_flags() {
    let parsed = CliArgs::parse(&args(&[
        "--config",
        "my.toml",
        "--fen",
        "8/8/8/8/8/8/8/K6k w - - 0 1",
        "-e",
        "stockfish",
        "--white",
        "Alice",
        "-b",
        "Bob",
    ]))
    .unwrap();

    assert_eq!(parsed.config, PathBuf::from("my.toml"));
    assert_eq!(parsed.fen.as_deref(), Some("8/8/8/8/8/8/8/K6k w - - 0 1"));
    assert_eq!(parsed.engine.as_deref(), Some("stockfish"));
    assert_eq!(parsed.white.as_deref(), Some("Alice"));
    assert_eq!(parsed.black.as_deref(), Some("Bob"));
    assert!(!parsed.help);
}

#[test]
fn test_help() {
    assert!(CliArgs::parse(&args(&["--white", "A", "-h"])).unwrap().help);
}

#[test]
fn test_errors() {
    assert!(CliArgs::parse(&args(&["--fen"])).is_err());
    assert!(CliArgs::parse(&args(&["--depth", "4"])).is_err());
    assert!(CliArgs::parse(&args(&["stray"])).is_err());
}
