//! Word search grid generation.
//!
//! Words are hidden along rows, columns and both diagonals, in either reading
//! direction, and the remaining cells are filled with random letters.
//!
//! ```
//! let puzzle = wordgrid::build(&["CAT", "DOG"], 5).unwrap();
//! assert_eq!(puzzle.grid.size(), 5);
//! assert_eq!(puzzle.placements.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod render;
pub mod utils;
pub mod words;

pub use error::GridError;
pub use game::{build, GridBuilder, RandomSource, WordValidator};
pub use models::{Direction, Grid, Orientation, Placement, Position, Puzzle};
