use rand::Rng;

use crate::{
    error::GameError,
    models::Tile,
    utils::letters::{total_tile_count, TILE_DISTRIBUTION},
};

/// The pool of tiles not yet dealt to a hand
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// Build a full bag from the standard distribution
    pub fn new() -> Self {
        let mut tiles = Vec::with_capacity(total_tile_count());

        for &(letter, value, count) in TILE_DISTRIBUTION.iter() {
            for _ in 0..count {
                tiles.push(Tile::new(letter, value, count));
            }
        }

        Self { tiles }
    }

    /// Remove one tile, picked uniformly among the remaining ones
    pub fn draw_random(&mut self, rng: &mut impl Rng) -> Result<Tile, GameError> {
        if self.tiles.is_empty() {
            return Err(GameError::EmptyBag);
        }

        let index = rng.random_range(0..self.tiles.len());
        let tile = self.tiles.swap_remove(index);
        tracing::trace!(
            letter = %tile.letter,
            source_count = tile.source_count,
            remaining = self.tiles.len(),
            "Drew tile"
        );
        Ok(tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles still in the bag, in no particular order
    #[cfg(test)]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Tile> for TileBag {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
