use crate::{game::hand::Hand, utils::letters::get_letter_value};

pub struct Scorer;

impl Scorer {
    /// Score a word against the hand.
    ///
    /// Scoring rules:
    /// - Each letter occurrence adds its value from the tile table
    /// - Repeated letters count every time
    /// - A letter the hand does not hold adds nothing
    ///
    /// Spellability is not checked here; see `WordValidator::can_spell`.
    pub fn calculate_score(word: &str, hand: &Hand) -> u32 {
        word.chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&letter| hand.contains_letter(letter))
            .map(|letter| get_letter_value(letter).unwrap_or(0))
            .sum()
    }
}
