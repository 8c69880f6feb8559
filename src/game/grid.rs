use tracing::{debug, info, trace};

use crate::{
    error::{GridError, Result},
    game::random::RandomSource,
    models::{Board, Direction, Grid, Orientation, Placement, Position, Puzzle},
    utils::letters::{is_grid_letter, normalize, random_letter},
};

/// Default per-word attempt cap.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Builds word search grids by rejection sampling: each word gets random
/// (orientation, start, direction) candidates until one fits.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    size: usize,
    max_attempts: Option<u32>,
}

impl GridBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Cap on candidates tried per word before giving up with
    /// [`GridError::PlacementExhausted`].
    ///
    /// `None` retries forever. A word that can no longer fit (for example on a
    /// saturated grid) then never returns.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Allocate an empty board of this builder's size.
    pub fn initialize(&self) -> Result<Board> {
        Board::new(self.size)
    }

    /// Build a puzzle using the thread-local RNG.
    pub fn build<S: AsRef<str>>(&self, words: &[S]) -> Result<Puzzle> {
        self.build_with(words, &mut rand::rng())
    }

    /// Build a puzzle drawing every random choice from `rng`. Words are placed
    /// in input order; the placements come back in the same order.
    pub fn build_with<S, R>(&self, words: &[S], rng: &mut R) -> Result<Puzzle>
    where
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        let mut board = self.initialize()?;

        // Reject bad input before touching the board.
        let words = words
            .iter()
            .map(|word| Self::validate_word(word.as_ref(), self.size))
            .collect::<Result<Vec<String>>>()?;

        let mut placements = Vec::with_capacity(words.len());
        for word in &words {
            placements.push(self.place_word(&mut board, word, rng)?);
        }

        let grid = Self::fill_remaining(board, rng);

        info!(
            size = self.size,
            words = placements.len(),
            "Built word search grid"
        );

        Ok(Puzzle { grid, placements })
    }

    /// Write `word` somewhere it fits on `board` and return where it went.
    ///
    /// Each attempt draws an orientation, a start cell valid for that
    /// orientation, and a direction. Reversed words are reversed before the
    /// fit check, so a target cell is compatible when it is empty or already
    /// holds the letter the reversed word puts there.
    pub fn place_word<R>(&self, board: &mut Board, word: &str, rng: &mut R) -> Result<Placement>
    where
        R: RandomSource + ?Sized,
    {
        let size = board.size();
        let word = Self::validate_word(word, size)?;
        let length = word.chars().count();

        let mut attempts: u32 = 0;
        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    return Err(GridError::PlacementExhausted { word, attempts });
                }
            }
            attempts = attempts.saturating_add(1);

            let candidate = Self::random_candidate(&word, length, size, rng);
            if Self::fits(board, &candidate) {
                Self::write(board, &candidate);
                debug!(
                    word = %candidate.word,
                    row = candidate.start.row,
                    col = candidate.start.col,
                    orientation = candidate.orientation.label(),
                    direction = candidate.direction.label(),
                    attempts,
                    "Placed word"
                );
                return Ok(candidate);
            }

            trace!(word = %word, attempts, "Placement rejected, retrying");
        }
    }

    /// Replace every empty cell with a uniformly drawn letter.
    pub fn fill_remaining<R: RandomSource + ?Sized>(board: Board, rng: &mut R) -> Grid {
        board.fill_into_grid(|| random_letter(&mut *rng))
    }

    /// Uppercase `word` and check it is 1..=size letters, all `A`-`Z`.
    fn validate_word(word: &str, size: usize) -> Result<String> {
        let word = normalize(word);
        let length = word.chars().count();
        if length == 0 || length > size || !word.chars().all(is_grid_letter) {
            return Err(GridError::InvalidWord { word, size });
        }
        Ok(word)
    }

    fn random_candidate<R>(word: &str, length: usize, size: usize, rng: &mut R) -> Placement
    where
        R: RandomSource + ?Sized,
    {
        let orientation = Orientation::ALL[rng.next_in_range(0, Orientation::ALL.len() - 1)];

        // Last index at which a word of this length can start along a line.
        let last_start = size - length;
        let (row, col) = match orientation {
            Orientation::Horizontal => (
                rng.next_in_range(0, size - 1),
                rng.next_in_range(0, last_start),
            ),
            Orientation::Vertical => (
                rng.next_in_range(0, last_start),
                rng.next_in_range(0, size - 1),
            ),
            Orientation::DiagonalDown => (
                rng.next_in_range(0, last_start),
                rng.next_in_range(0, last_start),
            ),
            Orientation::DiagonalUp => (
                rng.next_in_range(length - 1, size - 1),
                rng.next_in_range(0, last_start),
            ),
        };

        let direction = if rng.next_bool() {
            Direction::Reversed
        } else {
            Direction::Forward
        };

        Placement {
            word: word.to_string(),
            start: Position::new(row, col),
            orientation,
            direction,
            length,
        }
    }

    fn fits(board: &Board, placement: &Placement) -> bool {
        let positions = placement.positions();
        positions.len() == placement.length
            && positions
                .iter()
                .zip(placement.written_letters())
                .all(|(&pos, letter)| match board.get(pos) {
                    Some(None) => true,
                    Some(Some(existing)) => existing == letter,
                    None => false,
                })
    }

    fn write(board: &mut Board, placement: &Placement) {
        for (pos, letter) in placement.positions().into_iter().zip(placement.written_letters()) {
            board.set(pos, letter);
        }
    }
}

/// Build a `size x size` puzzle hiding `words`, using the default attempt cap
/// and the thread-local RNG.
pub fn build<S: AsRef<str>>(words: &[S], size: usize) -> Result<Puzzle> {
    GridBuilder::new(size).build(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{random::scripted::ScriptedSource, validator::WordValidator};
    use rand::{rngs::StdRng, SeedableRng};

    const TRAVEL_WORDS: [&str; 10] = [
        "adventure",
        "destination",
        "passport",
        "explore",
        "tourist",
        "journey",
        "flight",
        "cruise",
        "luggage",
        "ticket",
    ];

    fn assert_complete(puzzle: &Puzzle, size: usize) {
        assert_eq!(puzzle.grid.size(), size);
        assert_eq!(puzzle.grid.rows().len(), size);
        for row in puzzle.grid.rows() {
            assert_eq!(row.len(), size);
            assert!(row.iter().all(|&c| c.is_ascii_uppercase()));
        }
    }

    fn assert_contains_placements(puzzle: &Puzzle) {
        for placement in &puzzle.placements {
            assert!(placement
                .positions()
                .iter()
                .all(|p| p.row < puzzle.grid.size() && p.col < puzzle.grid.size()));
            assert_eq!(
                WordValidator::read(&puzzle.grid, placement).as_deref(),
                Some(placement.word.as_str())
            );
        }
    }

    #[test]
    fn test_build_cat_and_dog() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = GridBuilder::new(5)
            .build_with(&["CAT", "DOG"], &mut rng)
            .unwrap();

        assert_complete(&puzzle, 5);
        assert_contains_placements(&puzzle);
        assert_eq!(puzzle.placements.len(), 2);
        assert_eq!(puzzle.placements[0].word, "CAT");
        assert_eq!(puzzle.placements[1].word, "DOG");
        assert!(WordValidator::locate(&puzzle.grid, "CAT").is_some());
        assert!(WordValidator::locate(&puzzle.grid, "DOG").is_some());
    }

    #[test]
    fn test_word_longer_than_grid_rejected() {
        let result = build(&["TOOLONGWORD"], 5);
        assert_eq!(
            result,
            Err(GridError::InvalidWord {
                word: "TOOLONGWORD".to_string(),
                size: 5
            })
        );
    }

    #[test]
    fn test_empty_word_rejected() {
        let result = build(&["CAT", "  "], 5);
        assert!(matches!(result, Err(GridError::InvalidWord { .. })));
    }

    #[test]
    fn test_non_letter_word_rejected() {
        let result = build(&["ICE-CREAM"], 13);
        assert!(matches!(result, Err(GridError::InvalidWord { .. })));
    }

    #[test]
    fn test_place_word_rejects_non_letters() {
        let builder = GridBuilder::new(5);
        let mut board = builder.initialize().unwrap();

        let result = builder.place_word(&mut board, "ça-1", &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GridError::InvalidWord { .. })));
        assert_eq!(board.empty_cells(), 25);

        let grid = GridBuilder::fill_remaining(board, &mut StdRng::seed_from_u64(1));
        assert!(grid.rows().iter().flatten().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_place_word_checks_against_board_size() {
        let builder = GridBuilder::new(8);
        let mut board = Board::new(3).unwrap();

        let result = builder.place_word(&mut board, "HORSE", &mut StdRng::seed_from_u64(1));
        assert_eq!(
            result,
            Err(GridError::InvalidWord {
                word: "HORSE".to_string(),
                size: 3
            })
        );
    }

    #[test]
    fn test_empty_word_list_is_all_filler() {
        let puzzle = build::<&str>(&[], 4).unwrap();
        assert_complete(&puzzle, 4);
        assert!(puzzle.placements.is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            build(&["A"], 0),
            Err(GridError::InvalidConfiguration { size: 0 })
        );
    }

    #[test]
    fn test_lowercase_input_normalized() {
        let puzzle = build(&["cat"], 3).unwrap();
        assert_eq!(puzzle.placements[0].word, "CAT");
        assert_contains_placements(&puzzle);
    }

    #[test]
    fn test_word_filling_whole_line() {
        let mut rng = StdRng::seed_from_u64(9);
        let puzzle = GridBuilder::new(4)
            .build_with(&["WORD"], &mut rng)
            .unwrap();
        let placement = &puzzle.placements[0];
        assert_eq!(placement.length, 4);
        assert_contains_placements(&puzzle);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let builder = GridBuilder::new(13);
        let first = builder
            .build_with(&TRAVEL_WORDS, &mut StdRng::seed_from_u64(2024))
            .unwrap();
        let second = builder
            .build_with(&TRAVEL_WORDS, &mut StdRng::seed_from_u64(2024))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_travel_words_across_seeds() {
        let builder = GridBuilder::new(13);
        for seed in 0..20 {
            let puzzle = builder
                .build_with(&TRAVEL_WORDS, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_complete(&puzzle, 13);
            assert_contains_placements(&puzzle);

            for word in TRAVEL_WORDS {
                assert!(WordValidator::locate(&puzzle.grid, &word.to_uppercase()).is_some());
            }

            for (i, a) in puzzle.placements.iter().enumerate() {
                for b in &puzzle.placements[i + 1..] {
                    assert!(WordValidator::overlap_consistent(a, b));
                }
            }
        }
    }

    #[test]
    fn test_scripted_placement_positions() {
        // orientation, row, col per attempt
        let mut rng = ScriptedSource::new(&[0, 0, 0, 1, 0, 4], &[false, false]);
        let builder = GridBuilder::new(5);
        let mut board = builder.initialize().unwrap();

        let cat = builder.place_word(&mut board, "CAT", &mut rng).unwrap();
        assert_eq!(cat.start, Position::new(0, 0));
        assert_eq!(cat.orientation, Orientation::Horizontal);

        let dog = builder.place_word(&mut board, "DOG", &mut rng).unwrap();
        assert_eq!(dog.start, Position::new(0, 4));
        assert_eq!(dog.orientation, Orientation::Vertical);

        assert_eq!(board.get(Position::new(0, 2)), Some(Some('T')));
        assert_eq!(board.get(Position::new(2, 4)), Some(Some('G')));
        assert_eq!(board.empty_cells(), 19);
    }

    #[test]
    fn test_conflict_triggers_retry() {
        let mut rng = ScriptedSource::new(
            &[
                0, 0, 0, // CAT horizontal at (0, 0)
                1, 0, 1, // DOG vertical at (0, 1): clashes with A
                1, 0, 3, // DOG vertical at (0, 3)
            ],
            &[false, false, false],
        );
        let builder = GridBuilder::new(4);
        let mut board = builder.initialize().unwrap();

        builder.place_word(&mut board, "CAT", &mut rng).unwrap();
        let dog = builder.place_word(&mut board, "DOG", &mut rng).unwrap();

        assert_eq!(dog.start, Position::new(0, 3));
        assert_eq!(rng.remaining_ints(), 0);
    }

    #[test]
    fn test_crossing_words_share_letter() {
        let mut rng = ScriptedSource::new(&[0, 0, 0, 1, 0, 0], &[false, false]);
        let builder = GridBuilder::new(4);
        let mut board = builder.initialize().unwrap();

        let cat = builder.place_word(&mut board, "CAT", &mut rng).unwrap();
        let car = builder.place_word(&mut board, "CAR", &mut rng).unwrap();

        assert_eq!(car.start, Position::new(0, 0));
        assert_eq!(car.orientation, Orientation::Vertical);
        assert!(WordValidator::overlap_consistent(&cat, &car));
        assert_eq!(board.empty_cells(), 16 - 5);
    }

    #[test]
    fn test_reversed_word_checked_after_reversal() {
        // TAB forward, then BAT reversed on the same cells writes TAB again.
        let mut rng = ScriptedSource::new(&[0, 0, 0, 0, 0, 0], &[false, true]);
        let builder = GridBuilder::new(3);
        let mut board = builder.initialize().unwrap();

        builder.place_word(&mut board, "TAB", &mut rng).unwrap();
        let bat = builder.place_word(&mut board, "BAT", &mut rng).unwrap();

        assert_eq!(bat.direction, Direction::Reversed);
        assert_eq!(bat.start, Position::new(0, 0));
        assert_eq!(board.empty_cells(), 6);
    }

    #[test]
    fn test_diagonal_up_start_row_domain() {
        // Row draw of 0 is clamped into the diagonal-up domain [L-1, N-1].
        let mut rng = ScriptedSource::new(&[3, 0, 0], &[false]);
        let builder = GridBuilder::new(5);
        let mut board = builder.initialize().unwrap();

        let placement = builder.place_word(&mut board, "DOG", &mut rng).unwrap();
        assert_eq!(placement.orientation, Orientation::DiagonalUp);
        assert_eq!(placement.start, Position::new(2, 0));
        assert_eq!(board.get(Position::new(0, 2)), Some(Some('G')));
    }

    #[test]
    fn test_saturated_grid_exhausts_attempts() {
        let mut rng = ScriptedSource::new(&[0, 0, 0, 0, 1, 0], &[false, false]);
        let builder = GridBuilder::new(2).with_max_attempts(Some(5));
        let mut board = builder.initialize().unwrap();

        builder.place_word(&mut board, "AB", &mut rng).unwrap();
        builder.place_word(&mut board, "CD", &mut rng).unwrap();
        assert_eq!(board.empty_cells(), 0);

        let result = builder.place_word(&mut board, "EF", &mut rng);
        assert_eq!(
            result,
            Err(GridError::PlacementExhausted {
                word: "EF".to_string(),
                attempts: 5
            })
        );
    }

    #[test]
    fn test_exhaustion_fails_whole_build() {
        // AB fills row 0, CD fills row 1, EF then has nowhere to go.
        let mut rng = ScriptedSource::new(&[0, 0, 0, 0, 1, 0], &[false, false]);
        let builder = GridBuilder::new(2).with_max_attempts(Some(5));

        let result = builder.build_with(&["AB", "CD", "EF"], &mut rng);
        assert_eq!(
            result,
            Err(GridError::PlacementExhausted {
                word: "EF".to_string(),
                attempts: 5
            })
        );
    }

    #[test]
    fn test_unbounded_attempts_still_place_feasible_words() {
        let builder = GridBuilder::new(6).with_max_attempts(None);
        assert_eq!(builder.max_attempts(), None);
        let puzzle = builder
            .build_with(&["SUN", "MOON", "STAR"], &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_contains_placements(&puzzle);
    }
}
