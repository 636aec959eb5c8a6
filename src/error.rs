use thiserror::Error;

/// Errors raised by the tile bag, hand and session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Tried to draw from a bag with no tiles left
    #[error("the tile bag is empty")]
    EmptyBag,

    /// The hand does not hold the letters needed for the word
    #[error("you don't have the tiles for {word}")]
    InvalidWord { word: String },

    /// Empty input, or input with characters other than letters
    #[error("'{input}' is not a word: use letters only")]
    MalformedInput { input: String },

    /// A play was attempted after the game ended
    #[error("the game is already over")]
    GameOver,
}

impl GameError {
    /// Turn-level rejections: reported to the player, the game goes on
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameError::InvalidWord { .. } | GameError::MalformedInput { .. }
        )
    }
}
