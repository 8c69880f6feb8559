use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The line a word occupies on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Cell `offset` steps along this orientation from `start`, or `None`
    /// if the step would leave the non-negative quadrant.
    pub fn offset(self, start: Position, offset: usize) -> Option<Position> {
        match self {
            Orientation::Horizontal => Some(Position::new(start.row, start.col + offset)),
            Orientation::Vertical => Some(Position::new(start.row + offset, start.col)),
            Orientation::DiagonalDown => {
                Some(Position::new(start.row + offset, start.col + offset))
            }
            Orientation::DiagonalUp => start
                .row
                .checked_sub(offset)
                .map(|row| Position::new(row, start.col + offset)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::DiagonalDown => "diagonal-down",
            Orientation::DiagonalUp => "diagonal-up",
        }
    }
}

/// Reading order of the word along its orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Reversed,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reversed => "reversed",
        }
    }
}

/// Where a word was written. Cells are laid down from `start` along
/// `orientation`; a reversed placement writes the word's letters back to front.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub orientation: Orientation,
    pub direction: Direction,
    pub length: usize,
}

impl Placement {
    /// Cells claimed by this placement, in write order. Stops early if a
    /// cell would fall below row zero.
    pub fn positions(&self) -> Vec<Position> {
        (0..self.length)
            .map_while(|i| self.orientation.offset(self.start, i))
            .collect()
    }

    /// Letters in the order they are written into the grid.
    pub fn written_letters(&self) -> Vec<char> {
        match self.direction {
            Direction::Forward => self.word.chars().collect(),
            Direction::Reversed => self.word.chars().rev().collect(),
        }
    }
}

/// Cells under construction. `None` is the empty sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Board {
    /// Allocate a `size x size` board with every cell empty.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GridError::InvalidConfiguration { size });
        }

        Ok(Self {
            size,
            cells: vec![vec![None; size]; size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<Option<char>> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos.row][pos.col] = Some(letter);
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// Freeze the board, drawing a letter from `filler` for every empty cell.
    pub(crate) fn fill_into_grid(self, mut filler: impl FnMut() -> char) -> Grid {
        let rows = self
            .cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(&mut filler))
                    .collect()
            })
            .collect();

        Grid {
            size: self.size,
            rows,
        }
    }
}

/// A finished square grid of uppercase letters, row-major. Only the builder
/// produces one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        Self {
            size: rows.len(),
            rows: rows.iter().map(|r| r.chars().collect()).collect(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A built puzzle: the grid plus where each input word went, in input order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}
