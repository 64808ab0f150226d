//! The interactive game loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use chess_kit::{
    ChessError, Color, Coordinate, Game, GameState, Highlight, History, PieceKind, Status,
    UciMove, king_square, move_to_uci, parse_uci_move,
};
use tracing::{info, warn};

use crate::engine::{MoveSuggester, RandomSuggester};
use crate::render::{RenderOptions, render};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `E2 E4`, optionally followed by a promotion letter.
    Move {
        from: String,
        to: String,
        promotion: Option<String>,
    },
    /// `e2e4` / `e7e8q`.
    Compact(String),
    Moves(String),
    Hint,
    Fen,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Command::Empty,
        [w] if w.eq_ignore_ascii_case("quit") || w.eq_ignore_ascii_case("exit") => Command::Quit,
        [w] if w.eq_ignore_ascii_case("hint") => Command::Hint,
        [w] if w.eq_ignore_ascii_case("fen") => Command::Fen,
        [w] if w.eq_ignore_ascii_case("help") => Command::Help,
        [w, square] if w.eq_ignore_ascii_case("moves") => Command::Moves(square.to_string()),
        [single] => Command::Compact(single.to_string()),
        [from, to] => Command::Move {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        },
        [from, to, promotion] => Command::Move {
            from: from.to_string(),
            to: to.to_string(),
            promotion: Some(promotion.to_string()),
        },
        _ => Command::Unknown(line.trim().to_string()),
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished(Status),
    Quit,
}

/// Prompts for a player name; an empty answer keeps the color's name.
pub fn ask_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    color: Color,
) -> anyhow::Result<String> {
    write!(output, "{color} player name: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read player name")?;
    let name = line.trim();
    Ok(if name.is_empty() {
        color.to_string()
    } else {
        name.to_string()
    })
}

pub struct Session<R, W> {
    game: Game,
    history: History,
    players: [String; 2],
    suggester: Box<dyn MoveSuggester>,
    options: RenderOptions,
    highlights: Vec<(Coordinate, Highlight)>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        game: Game,
        players: [String; 2],
        suggester: Box<dyn MoveSuggester>,
        options: RenderOptions,
        input: R,
        output: W,
    ) -> Self {
        let history = History::starting_at(&game);
        Self {
            game,
            history,
            players,
            suggester,
            options,
            highlights: Vec::new(),
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn player(&self, color: Color) -> &str {
        &self.players[color.idx()]
    }

    fn status(&self) -> Status {
        GameState::new(&self.game, &self.history).status()
    }

    /// Plays until the game ends, the player quits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        info!(
            white = %self.players[0],
            black = %self.players[1],
            fen = %self.game.to_fen(),
            "game started"
        );
        let status = self.status();
        if status.is_over() {
            self.draw()?;
            self.announce(status)?;
            return Ok(Outcome::Finished(status));
        }
        self.draw()?;

        loop {
            let mover = self.game.current_player();
            write!(self.output, "{} ({mover}) > ", self.players[mover.idx()])?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("failed to read input")? == 0 {
                writeln!(self.output)?;
                return Ok(Outcome::Quit);
            }

            if let Some(outcome) = self.execute(parse_command(&line))? {
                return Ok(outcome);
            }
        }
    }

    /// Runs one command; `Some` once the session is over.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Option<Outcome>> {
        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Some(Outcome::Quit)),
            Command::Help => self.help()?,
            Command::Fen => writeln!(self.output, "{}", self.game.to_fen())?,
            Command::Moves(square) => self.show_moves(&square)?,
            Command::Hint => self.hint()?,
            Command::Unknown(text) => {
                writeln!(self.output, "Unknown command {text:?}; type help")?;
            }
            Command::Compact(text) => match parse_uci_move(self.game.board(), &text) {
                Ok(mv) => return self.play(mv),
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::Move {
                from,
                to,
                promotion,
            } => match self.resolve(&from, &to, promotion.as_deref()) {
                Ok(mv) => return self.play(mv),
                Err(e) => writeln!(self.output, "{e}")?,
            },
        }
        Ok(None)
    }

    fn resolve(&self, from: &str, to: &str, promotion: Option<&str>) -> chess_kit::Result<UciMove> {
        let board = self.game.board();
        let promotion = match promotion {
            None => None,
            Some(text) => {
                let mut chars = text.chars();
                let kind = match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        PieceKind::from_letter(ch).filter(|k| k.is_promotion_target())
                    }
                    _ => None,
                };
                Some(kind.ok_or_else(|| {
                    ChessError::MalformedUci(format!("{text:?} is not a promotion piece"))
                })?)
            }
        };
        Ok(UciMove {
            from: board.coordinate(from)?,
            to: board.coordinate(to)?,
            promotion,
        })
    }

    fn play(&mut self, mv: UciMove) -> anyhow::Result<Option<Outcome>> {
        if let Err(e) = self
            .game
            .make_move_with_promotion(mv.from, mv.to, mv.promotion)
        {
            writeln!(self.output, "{e}")?;
            return Ok(None);
        }
        self.history.record(&self.game);
        self.highlights = vec![(mv.from, Highlight::LastMove), (mv.to, Highlight::LastMove)];

        let status = self.status();
        if status == Status::Check
            && let Some(king) = king_square(self.game.board(), self.game.current_player())
        {
            self.highlights.push((king, Highlight::Check));
        }
        self.draw()?;
        self.announce(status)?;
        if status.is_over() {
            info!(?status, moves = self.history.len() - 1, "game over");
            return Ok(Some(Outcome::Finished(status)));
        }
        Ok(None)
    }

    fn announce(&mut self, status: Status) -> anyhow::Result<()> {
        match status {
            Status::Ongoing => {}
            Status::Check => writeln!(self.output, "Check!")?,
            Status::Checkmate { winner } => {
                let name = self.player(winner).to_string();
                writeln!(self.output, "Checkmate. {name} ({winner}) wins.")?;
            }
            Status::Draw(reason) => writeln!(self.output, "Draw by {reason}.")?,
        }
        Ok(())
    }

    fn show_moves(&mut self, square: &str) -> anyhow::Result<()> {
        let from = match self.game.board().coordinate(square) {
            Ok(c) => c,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(());
            }
        };
        let targets: Vec<Coordinate> = self
            .game
            .legal_paths_for(from)?
            .into_iter()
            .flatten()
            .collect();
        if targets.is_empty() {
            writeln!(self.output, "No legal moves from {from}")?;
            return Ok(());
        }
        self.highlights = std::iter::once((from, Highlight::Selected))
            .chain(targets.iter().map(|&t| (t, Highlight::Target)))
            .collect();
        self.draw()?;
        let list: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        writeln!(self.output, "{from}: {}", list.join(" "))?;
        Ok(())
    }

    fn hint(&mut self) -> anyhow::Result<()> {
        let suggestion = match self.suggester.suggest(&self.game) {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    engine = %self.suggester.name(),
                    "hint failed, switching to random hints: {e:#}"
                );
                self.suggester = Box::new(RandomSuggester::new());
                self.suggester.suggest(&self.game)?
            }
        };
        match suggestion {
            Some(mv) => writeln!(
                self.output,
                "{} suggests {}",
                self.suggester.name(),
                move_to_uci(mv.from, mv.to, mv.promotion)
            )?,
            None => writeln!(self.output, "No move to suggest")?,
        }
        Ok(())
    }

    fn help(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(
            self.output,
            "  E2 E4 | e2e4 | e7e8q   make a move (promotion defaults to queen)"
        )?;
        writeln!(self.output, "  moves E2               show legal destinations")?;
        writeln!(self.output, "  hint                   ask for a suggested move")?;
        writeln!(self.output, "  fen                    print the position")?;
        writeln!(self.output, "  quit")?;
        Ok(())
    }

    /// Renders the board with the current highlights on a scratch copy.
    fn draw(&mut self) -> anyhow::Result<()> {
        let mut view = self.game.board().clone();
        for &(square, highlight) in &self.highlights {
            view.highlight(square, highlight)?;
        }
        write!(self.output, "{}", render(&view, self.options))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
