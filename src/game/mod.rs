// Grid construction and checking

pub mod grid;
pub mod random;
pub mod validator;

pub use grid::{build, GridBuilder, DEFAULT_MAX_ATTEMPTS};
pub use random::RandomSource;
pub use validator::WordValidator;
