//! Perft divide and move generation timings.
//!
//! Prints the node count below every root move, which is the usual way to
//! find where a generator disagrees with a reference engine, then times
//! `legal_paths_for` for each piece of the side to move.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_kit -- [depth] [fen]
//!   cargo flamegraph --profile profiling --example perft_bench -p chess_kit -- 3

use std::env;
use std::time::{Duration, Instant};

use chess_kit::perft::expanded_moves;
use chess_kit::{Game, move_to_uci, perft};

fn divide(game: &Game, depth: u8) -> u64 {
    let mut total = 0;
    for (from, to, promotion) in expanded_moves(game) {
        let mut next = game.clone();
        if let Err(e) = next.make_move_with_promotion(from, to, promotion) {
            eprintln!("{}: {e}", move_to_uci(from, to, promotion));
            continue;
        }
        let nodes = perft(&next, depth.saturating_sub(1));
        println!("{}: {nodes}", move_to_uci(from, to, promotion));
        total += nodes;
    }
    total
}

fn time_pieces(game: &Game) {
    let board = game.board();
    let movers = board.find_all(|_, p| p.color == game.current_player());
    let mut slowest: Option<(String, Duration)> = None;

    for square in movers {
        let start = Instant::now();
        let destinations: usize = match game.legal_paths_for(square) {
            Ok(paths) => paths.iter().map(Vec::len).sum(),
            Err(e) => {
                eprintln!("{square}: {e}");
                continue;
            }
        };
        let elapsed = start.elapsed();
        let letter = board.get(square).map(|p| p.letter()).unwrap_or('?');
        println!(
            "{letter} {:<4} {destinations:>3} destinations {elapsed:>10.2?}",
            square.to_string()
        );
        if slowest.as_ref().is_none_or(|(_, t)| elapsed > *t) {
            slowest = Some((square.to_string(), elapsed));
        }
    }
    if let Some((square, elapsed)) = slowest {
        println!("slowest: {square} ({elapsed:.2?})");
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let depth: u8 = args.first().and_then(|s| s.parse().ok()).unwrap_or(3);
    let game = match args.get(1) {
        Some(fen) => match Game::from_fen(fen) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        None => Game::new(),
    };

    println!("{}", game.to_fen());
    let start = Instant::now();
    let nodes = divide(&game, depth.max(1));
    let elapsed = start.elapsed();
    let nps = nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!("\ndepth {depth}: {nodes} nodes in {elapsed:.3?} ({nps:.0} nps)\n");

    time_pieces(&game);
}
