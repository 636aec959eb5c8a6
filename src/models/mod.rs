pub mod game;
pub mod tile;

pub use game::{GameState, GameSummary, PlayRecord};
pub use tile::Tile;
