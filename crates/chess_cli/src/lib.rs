//! Terminal front end for `chess_kit`.

pub mod args;
pub mod config;
pub mod engine;
pub mod render;
pub mod session;

pub use args::CliArgs;
pub use config::{Config, EngineConfig};
pub use engine::{MoveSuggester, RandomSuggester, UciEngine, suggester_from_config};
pub use render::{RenderOptions, render};
pub use session::{Command, Outcome, Session, ask_name, parse_command};
