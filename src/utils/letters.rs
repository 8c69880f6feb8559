use crate::game::random::RandomSource;

/// Filler alphabet. Every cell of a finished grid holds one of these.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Draw a filler letter uniformly from the alphabet
pub fn random_letter<R: RandomSource + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.next_in_range(0, ALPHABET.len() - 1)]
}

/// True for `A`-`Z`
pub fn is_grid_letter(letter: char) -> bool {
    letter.is_ascii_uppercase()
}

/// Uppercase a word for placement
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}
