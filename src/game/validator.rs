use crate::{error::GameError, game::hand::Hand, utils::letters::letter_counts};

pub struct WordValidator;

impl WordValidator {
    /// Check that the hand holds enough of every letter in the word.
    /// Case-insensitive; the empty word is always spellable.
    pub fn can_spell(word: &str, hand: &Hand) -> bool {
        let available = hand.letter_counts();

        letter_counts(word)
            .into_iter()
            .all(|(letter, needed)| available.get(&letter).copied().unwrap_or(0) >= needed)
    }

    /// Trim and uppercase player input, refusing anything that is not a run of letters
    pub fn normalize(input: &str) -> Result<String, GameError> {
        let trimmed = input.trim();

        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::MalformedInput {
                input: trimmed.to_string(),
            });
        }

        Ok(trimmed.to_ascii_uppercase())
    }

    /// Normalize the input and confirm the hand can spell it
    pub fn validate(input: &str, hand: &Hand) -> Result<String, GameError> {
        let word = Self::normalize(input)?;

        if !Self::can_spell(&word, hand) {
            return Err(GameError::InvalidWord { word });
        }

        Ok(word)
    }
}
