use thiserror::Error;

/// Errors that terminate a grid build. No partial grid is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be positive, got {size}")]
    InvalidConfiguration { size: usize },

    #[error("invalid word {word:?} for a {size}x{size} grid: must be 1..={size} letters A-Z")]
    InvalidWord { word: String, size: usize },

    #[error("no free position for {word:?} after {attempts} attempts")]
    PlacementExhausted { word: String, attempts: u32 },
}

pub type Result<T> = std::result::Result<T, GridError>;
