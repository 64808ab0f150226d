//! Command-line flags.

use std::path::PathBuf;

use anyhow::bail;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: PathBuf,
    pub fen: Option<String>,
    pub engine: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            fen: None,
            engine: None,
            white: None,
            black: None,
            help: false,
        }
    }
}

impl CliArgs {
    /// Parses everything after the program name.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut out = Self::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if matches!(flag, "--help" | "-h") {
                out.help = true;
                i += 1;
                continue;
            }
            let Some(value) = args.get(i + 1).cloned() else {
                bail!("{flag} needs a value");
            };
            match flag {
                "--config" | "-c" => out.config = PathBuf::from(value),
                "--fen" => out.fen = Some(value),
                "--engine" | "-e" => out.engine = Some(value),
                "--white" | "-w" => out.white = Some(value),
                "--black" | "-b" => out.black = Some(value),
                _ => bail!("unknown argument {flag}"),
            }
            i += 2;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod args_tests;
