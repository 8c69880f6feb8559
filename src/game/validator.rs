use std::collections::HashMap;

use crate::models::{Direction, Grid, Orientation, Placement, Position};

/// Checks words against a finished grid.
pub struct WordValidator;

impl WordValidator {
    /// Every cell of the placement lies inside a `size x size` grid
    pub fn is_in_bounds(size: usize, placement: &Placement) -> bool {
        let positions = placement.positions();
        positions.len() == placement.length
            && positions.iter().all(|pos| pos.row < size && pos.col < size)
    }

    /// Extract letters from grid positions
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> Option<String> {
        positions
            .iter()
            .map(|pos| grid.get(pos.row, pos.col))
            .collect()
    }

    /// Read a placement back off the grid in the word's reading order.
    pub fn read(grid: &Grid, placement: &Placement) -> Option<String> {
        if !Self::is_in_bounds(grid.size(), placement) {
            return None;
        }

        let written = Self::extract_word(grid, &placement.positions())?;
        Some(match placement.direction {
            Direction::Forward => written,
            Direction::Reversed => written.chars().rev().collect(),
        })
    }

    pub fn contains(grid: &Grid, placement: &Placement) -> bool {
        Self::read(grid, placement).as_deref() == Some(placement.word.as_str())
    }

    /// Scan every start cell, orientation and direction for `word`.
    pub fn locate(grid: &Grid, word: &str) -> Option<Placement> {
        let length = word.chars().count();
        if length == 0 || length > grid.size() {
            return None;
        }

        for orientation in Orientation::ALL {
            for direction in [Direction::Forward, Direction::Reversed] {
                for row in 0..grid.size() {
                    for col in 0..grid.size() {
                        let candidate = Placement {
                            word: word.to_string(),
                            start: Position::new(row, col),
                            orientation,
                            direction,
                            length,
                        };
                        if Self::contains(grid, &candidate) {
                            return Some(candidate);
                        }
                    }
                }
            }
        }

        None
    }

    /// Where two placements share cells, they must agree on the letter.
    pub fn overlap_consistent(a: &Placement, b: &Placement) -> bool {
        let cells: HashMap<Position, char> = a
            .positions()
            .into_iter()
            .zip(a.written_letters())
            .collect();

        b.positions()
            .into_iter()
            .zip(b.written_letters())
            .all(|(pos, letter)| !matches!(cells.get(&pos), Some(&other) if other != letter))
    }
}
