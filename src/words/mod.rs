use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs;

use crate::utils::letters::{is_grid_letter, normalize};

/// Layout of a word source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordFormat {
    /// One word per line
    #[default]
    Plain,
    /// Alternating word line and clue line
    Paired,
}

impl FromStr for WordFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(WordFormat::Plain),
            "paired" => Ok(WordFormat::Paired),
            other => anyhow::bail!("unknown word format {other:?} (expected plain or paired)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub clue: Option<String>,
}

/// Candidate words for a puzzle, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Load a word list from a file
    pub async fn load<P: AsRef<Path>>(path: P, format: WordFormat) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read word list {}", path.display()))?;

        let list = Self::parse(&content, format);
        tracing::info!("Loaded {} words from {}", list.len(), path.display());

        Ok(list)
    }

    pub fn parse(content: &str, format: WordFormat) -> Self {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let entries = match format {
            WordFormat::Plain => lines
                .into_iter()
                .map(|line| WordEntry {
                    word: normalize(line),
                    clue: None,
                })
                .collect(),
            WordFormat::Paired => lines
                .chunks(2)
                .map(|pair| WordEntry {
                    word: normalize(pair[0]),
                    clue: pair.get(1).map(|clue| clue.to_string()),
                })
                .collect(),
        };

        Self { entries }
    }

    /// Drop words that cannot go into a `size x size` grid, then duplicates,
    /// then anything past `max_words`.
    pub fn fit_to(self, size: usize, min_len: usize, max_words: Option<usize>) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<WordEntry> = self
            .entries
            .into_iter()
            .filter(|entry| {
                let length = entry.word.chars().count();
                if !entry.word.chars().all(is_grid_letter) {
                    tracing::warn!("Dropping {:?}: not purely A-Z", entry.word);
                    false
                } else if length == 0 || length < min_len {
                    tracing::warn!("Dropping {:?}: shorter than {} letters", entry.word, min_len);
                    false
                } else if length > size {
                    tracing::warn!("Dropping {:?}: longer than grid size {}", entry.word, size);
                    false
                } else if !seen.insert(entry.word.clone()) {
                    tracing::warn!("Dropping duplicate {:?}", entry.word);
                    false
                } else {
                    true
                }
            })
            .collect();

        if let Some(max) = max_words {
            entries.truncate(max);
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.word.as_str()).collect()
    }

    pub fn clue_for(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .and_then(|entry| entry.clue.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
