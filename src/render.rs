use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Placement, Position, Puzzle};
use crate::words::{WordEntry, WordList};

/// Marker for cells no word claims in the answer key
pub const UNCLAIMED: char = '.';

/// JSON shape of a rendered puzzle
#[derive(Debug, Serialize)]
pub struct PuzzleOutput<'a> {
    pub size: usize,
    pub grid: &'a [Vec<char>],
    pub words: &'a [WordEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<&'a [Placement]>,
}

/// The board followed by the placed words, with clues when the source has them.
pub fn puzzle_text(puzzle: &Puzzle, words: &WordList) -> String {
    let mut out = puzzle.grid.to_string();

    if !puzzle.placements.is_empty() {
        out.push_str("\nWords:\n");
        for placement in &puzzle.placements {
            let line = match words.clue_for(&placement.word) {
                Some(clue) => format!("  {} - {}\n", placement.word, clue),
                None => format!("  {}\n", placement.word),
            };
            out.push_str(&line);
        }
    }

    out
}

/// The board with filler letters blanked out, then one line per placement.
pub fn answer_key(puzzle: &Puzzle) -> String {
    let claimed: HashSet<Position> = puzzle
        .placements
        .iter()
        .flat_map(Placement::positions)
        .collect();

    let mut out = String::new();
    for (row, letters) in puzzle.grid.rows().iter().enumerate() {
        let line: Vec<String> = letters
            .iter()
            .enumerate()
            .map(|(col, &letter)| {
                if claimed.contains(&Position::new(row, col)) {
                    letter.to_string()
                } else {
                    UNCLAIMED.to_string()
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out.push('\n');
    for placement in &puzzle.placements {
        out.push_str(&format!(
            "{:<12} ({}, {}) {} {}\n",
            placement.word,
            placement.start.row,
            placement.start.col,
            placement.orientation.label(),
            placement.direction.label()
        ));
    }

    out
}

pub fn puzzle_json(puzzle: &Puzzle, words: &WordList, show_answers: bool) -> serde_json::Result<String> {
    let output = PuzzleOutput {
        size: puzzle.grid.size(),
        grid: puzzle.grid.rows(),
        words: words.entries(),
        placements: show_answers.then_some(puzzle.placements.as_slice()),
    };
    serde_json::to_string_pretty(&output)
}
