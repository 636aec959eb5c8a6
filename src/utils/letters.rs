use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Standard tile distribution: (letter, point value, number of tiles in the bag)
pub const TILE_DISTRIBUTION: [(char, u32, u32); 26] = [
    // 1 point letters
    ('E', 1, 12),
    ('A', 1, 9),
    ('I', 1, 9),
    ('O', 1, 8),
    ('N', 1, 6),
    ('R', 1, 6),
    ('T', 1, 6),
    ('L', 1, 4),
    ('S', 1, 4),
    ('U', 1, 4),
    // 2 points
    ('D', 2, 4),
    ('G', 2, 3),
    // 3 points
    ('B', 3, 2),
    ('C', 3, 2),
    ('M', 3, 2),
    ('P', 3, 2),
    // 4 points
    ('F', 4, 2),
    ('H', 4, 2),
    ('V', 4, 2),
    ('W', 4, 2),
    ('Y', 4, 2),
    // 5 points
    ('K', 5, 1),
    // 8 points
    ('J', 8, 1),
    ('X', 8, 1),
    // 10 points
    ('Q', 10, 1),
    ('Z', 10, 1),
];

/// Letter values, keyed by uppercase letter
pub static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    TILE_DISTRIBUTION
        .iter()
        .map(|&(letter, value, _)| (letter, value))
        .collect()
});

/// Get the point value for a letter, or `None` if it is not a tile letter
pub fn get_letter_value(letter: char) -> Option<u32> {
    let upper = letter.to_ascii_uppercase();
    LETTER_VALUES.get(&upper).copied()
}

/// Total number of tiles in a freshly built bag
pub fn total_tile_count() -> usize {
    TILE_DISTRIBUTION
        .iter()
        .map(|&(_, _, count)| count as usize)
        .sum()
}

/// Count letter occurrences in a word, uppercasing as it goes
pub fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in word.chars() {
        *counts.entry(ch.to_ascii_uppercase()).or_insert(0) += 1;
    }
    counts
}
