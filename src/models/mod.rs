pub mod puzzle;

pub use puzzle::{
    // Construction state
    Board,
    // Placement description
    Direction, Orientation, Placement, Position,
    // Finished output
    Grid, Puzzle,
};
