use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::game::DEFAULT_MAX_ATTEMPTS;
use crate::words::WordFormat;

#[derive(Debug, Clone)]
pub struct Config {
    pub puzzle: PuzzleConfig,
    pub words: WordsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    pub size: usize,
    /// `None` retries placement forever
    pub max_attempts: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct WordsConfig {
    pub path: String,
    pub format: WordFormat,
    pub max_words: Option<usize>,
    pub min_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format {other:?} (expected text or json)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_answers: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let max_attempts: u32 = var("MAX_ATTEMPTS", &DEFAULT_MAX_ATTEMPTS.to_string())
            .parse()
            .context("MAX_ATTEMPTS must be a number")?;

        let puzzle = PuzzleConfig {
            size: var("GRID_SIZE", "13")
                .parse()
                .context("GRID_SIZE must be a number")?,
            max_attempts: (max_attempts > 0).then_some(max_attempts),
            seed: lookup("RNG_SEED")
                .map(|seed| seed.parse())
                .transpose()
                .context("RNG_SEED must be a number")?,
        };

        let max_words: usize = var("WORD_COUNT", "5")
            .parse()
            .context("WORD_COUNT must be a number")?;

        let words = WordsConfig {
            path: var("WORDS_PATH", "./words.txt"),
            format: var("WORDS_FORMAT", "plain")
                .parse()
                .context("WORDS_FORMAT must be plain or paired")?,
            max_words: (max_words > 0).then_some(max_words),
            min_length: var("MIN_WORD_LENGTH", "3")
                .parse()
                .context("MIN_WORD_LENGTH must be a number")?,
        };

        let output = OutputConfig {
            format: var("OUTPUT_FORMAT", "text")
                .parse()
                .context("OUTPUT_FORMAT must be text or json")?,
            show_answers: var("SHOW_ANSWERS", "false")
                .parse()
                .context("SHOW_ANSWERS must be true or false")?,
        };

        Ok(Config {
            puzzle,
            words,
            output,
        })
    }
}
