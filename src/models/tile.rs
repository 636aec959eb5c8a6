use std::fmt;

/// A single letter tile
#[derive(Debug, Clone, Eq)]
pub struct Tile {
    pub letter: char,
    pub value: u32,
    /// How many tiles of this letter the bag started with
    pub source_count: u32,
}

impl Tile {
    pub fn new(letter: char, value: u32, source_count: u32) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
            source_count,
        }
    }

    /// Build the standard tile for a letter (for tests)
    #[cfg(test)]
    pub fn standard(letter: char) -> Self {
        let upper = letter.to_ascii_uppercase();
        let (_, value, count) = crate::utils::letters::TILE_DISTRIBUTION
            .iter()
            .copied()
            .find(|&(l, _, _)| l == upper)
            .unwrap_or_else(|| panic!("no standard tile for {}", letter));
        Self::new(upper, value, count)
    }
}

/// Tiles match on letter and value; the source count is ignored
impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter && self.value == other.value
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  (value = {})", self.letter, self.value)
    }
}
