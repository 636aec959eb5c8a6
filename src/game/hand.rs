use std::{collections::HashMap, fmt};

use rand::Rng;

use crate::{
    error::GameError,
    game::{bag::TileBag, validator::WordValidator},
    models::Tile,
};

/// Number of tiles a hand is topped up to
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Tiles currently held by the player
#[derive(Debug, Clone, Default)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw from the bag until the hand holds `target_size` tiles or the bag runs dry.
    /// Returns how many tiles were drawn.
    pub fn refill_to(
        &mut self,
        bag: &mut TileBag,
        target_size: usize,
        rng: &mut impl Rng,
    ) -> usize {
        let mut drawn = 0;

        while self.tiles.len() < target_size && !bag.is_empty() {
            match bag.draw_random(rng) {
                Ok(tile) => {
                    self.tiles.push(tile);
                    drawn += 1;
                }
                Err(e) => {
                    tracing::debug!("Stopped refilling: {}", e);
                    break;
                }
            }
        }

        tracing::debug!(
            drawn,
            hand_size = self.tiles.len(),
            bag_remaining = bag.len(),
            "Refilled hand"
        );
        drawn
    }

    /// Remove one tile per letter occurrence in `word`.
    ///
    /// Nothing is removed unless the whole word can be spelled.
    pub fn remove_for_word(&mut self, word: &str) -> Result<(), GameError> {
        if !WordValidator::can_spell(word, self) {
            return Err(GameError::InvalidWord {
                word: word.to_ascii_uppercase(),
            });
        }

        for letter in word.chars().map(|c| c.to_ascii_uppercase()) {
            // can_spell guarantees a match
            if let Some(index) = self.tiles.iter().position(|t| t.letter == letter) {
                self.tiles.remove(index);
            }
        }

        Ok(())
    }

    /// Held tiles in draw order; restartable by cloning or calling again
    pub fn as_display_list(&self) -> impl Iterator<Item = &Tile> + Clone + '_ {
        self.tiles.iter()
    }

    /// Letter multiset of the held tiles
    pub fn letter_counts(&self) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.letter).or_insert(0) += 1;
        }
        counts
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        let upper = letter.to_ascii_uppercase();
        self.tiles.iter().any(|t| t.letter == upper)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.as_display_list().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
