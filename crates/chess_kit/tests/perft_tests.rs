use rayon::prelude::*;

use chess_kit::perft::expanded_moves;
use chess_kit::{Game, perft};

/// Set to also run the depths whose counts exceed `NODE_LIMIT`.
const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 100_000;

/// One line of `standard.epd`: a FEN followed by `;D<depth> <nodes>` entries.
struct EpdCase {
    line: usize,
    fen: String,
    counts: Vec<(u8, u64)>,
}

impl EpdCase {
    fn parse(line: usize, text: &str) -> Option<EpdCase> {
        let mut fields = text.split(';').map(str::trim);
        let fen = fields.next().filter(|f| !f.is_empty())?.to_string();
        let counts = fields
            .filter_map(|field| {
                let (key, nodes) = field.split_once(' ')?;
                let depth = key.strip_prefix('D')?.parse().ok()?;
                Some((depth, nodes.trim().parse().ok()?))
            })
            .collect();
        Some(EpdCase { line, fen, counts })
    }
}

fn load_cases() -> Vec<EpdCase> {
    include_str!("standard.epd")
        .lines()
        .enumerate()
        .filter_map(|(idx, text)| EpdCase::parse(idx + 1, text))
        .collect()
}

#[test]
fn test_epd_cases_parse() {
    let cases = load_cases();
    assert_eq!(cases.len(), 5);
    assert!(cases.iter().all(|case| !case.counts.is_empty()));
    assert_eq!(cases[0].counts[..2].to_vec(), vec![(1u8, 20u64), (2, 400)]);
}

#[test]
fn test_perft_standard_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let cases = load_cases();

    let mismatches: Vec<String> = cases
        .par_iter()
        .flat_map_iter(|case| {
            let game = Game::from_fen(&case.fen)
                .unwrap_or_else(|e| panic!("line {}: {e}", case.line));
            case.counts
                .iter()
                .filter(move |&&(_, expected)| full || expected <= NODE_LIMIT)
                .filter_map(move |&(depth, expected)| {
                    let got = perft(&game, depth);
                    (got != expected).then(|| {
                        format!("line {} depth {depth}: expected {expected}, got {got}", case.line)
                    })
                })
        })
        .collect();

    assert!(mismatches.is_empty(), "perft mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn perft_root_split_matches_whole() {
    // Splitting the root across threads must add up to the sequential count.
    let game = Game::new();
    let split: u64 = expanded_moves(&game)
        .par_iter()
        .map(|&(from, to, promotion)| {
            let mut next = game.clone();
            next.make_move_with_promotion(from, to, promotion)
                .expect("generated move must be legal");
            perft(&next, 1)
        })
        .sum();
    assert_eq!(split, 400);
    assert_eq!(split, perft(&game, 2));
}
