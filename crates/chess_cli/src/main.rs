//! Chess CLI
//!
//! Two players at one terminal, with optional engine hints.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use chess_cli::{
    CliArgs, Config, Outcome, RenderOptions, Session, ask_name, suggester_from_config,
};
use chess_kit::{Color, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess");
    println!();
    println!("Usage:");
    println!("  chess [--config FILE] [--fen FEN] [--engine PATH] [--white NAME] [--black NAME]");
    println!();
    println!("Options:");
    println!("  -c, --config   settings file (default chess.toml)");
    println!("      --fen      start from this position");
    println!("  -e, --engine   UCI engine used for hints");
    println!("  -w, --white    White player's name");
    println!("  -b, --black    Black player's name");
    println!();
    println!("Examples:");
    println!("  chess --white Alice --black Bob");
    println!("  chess --engine stockfish --fen \"8/8/8/4k3/8/8/8/4K2R w K - 0 1\"");
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: CliArgs) -> anyhow::Result<Outcome> {
    let mut config = Config::load(&args.config)?;
    if let Some(engine) = args.engine {
        config.engine.path = Some(engine);
    }
    init_logging(&config.log_level);

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen).context("invalid --fen")?,
        None => Game::new(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let white = match args.white {
        Some(name) => name,
        None => ask_name(&mut input, &mut output, Color::White)?,
    };
    let black = match args.black {
        Some(name) => name,
        None => ask_name(&mut input, &mut output, Color::Black)?,
    };

    let suggester = suggester_from_config(&config.engine);
    let mut session = Session::new(
        game,
        [white, black],
        suggester,
        RenderOptions::from(&config),
        input,
        output,
    );
    let outcome = session.run()?;
    info!(?outcome, "session ended");
    Ok(outcome)
}

fn main() -> ExitCode {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match CliArgs::parse(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return ExitCode::from(2);
        }
    };
    if args.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(_) => {
            let _ = io::stdout().flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
