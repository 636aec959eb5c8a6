use std::fmt;

use crate::{
    error::GameError,
    game::Hand,
    models::{GameSummary, PlayRecord},
};

pub const PROMPT: &str = "Enter a word using your tiles (or 'quit' to exit): ";

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    /// Raw word as typed; the session normalizes and validates it
    Word(String),
}

impl PlayerInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            PlayerInput::Quit
        } else {
            PlayerInput::Word(trimmed.to_string())
        }
    }
}

/// Text sent to the player
#[derive(Debug, Clone)]
pub enum GameMessage<'a> {
    Welcome,
    HandState {
        hand: &'a Hand,
        bag_remaining: usize,
    },
    Accepted {
        play: &'a PlayRecord,
        total_score: u32,
    },
    Rejected {
        error: &'a GameError,
    },
    Farewell {
        total_score: u32,
    },
    GameOver {
        total_score: u32,
    },
    Summary(&'a GameSummary),
}

impl fmt::Display for GameMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMessage::Welcome => write!(f, "Welcome to Scrabble Solo!"),
            GameMessage::HandState {
                hand,
                bag_remaining,
            } => write!(
                f,
                "Your tiles:\n{}\nTiles left in bag: {}",
                hand, bag_remaining
            ),
            GameMessage::Accepted { play, total_score } => write!(
                f,
                "Word: {} | Score: {} | Total Score: {}",
                play.word, play.score, total_score
            ),
            GameMessage::Rejected { error } => match error {
                GameError::InvalidWord { .. } => write!(
                    f,
                    "Invalid word! You don't have the tiles for that. Try again."
                ),
                GameError::MalformedInput { .. } => {
                    write!(f, "Invalid input! Use letters only. Try again.")
                }
                other => write!(f, "Can't play that: {}", other),
            },
            GameMessage::Farewell { total_score } => {
                write!(f, "Thanks for playing! Total score: {}", total_score)
            }
            GameMessage::GameOver { total_score } => write!(
                f,
                "No more tiles in the bag! Game over. Total score: {}",
                total_score
            ),
            GameMessage::Summary(summary) => {
                write!(f, "Words played: {}", summary.words_played)?;
                if let Some(best) = &summary.best_play {
                    write!(f, " | Best word: {} ({} points)", best.word, best.score)?;
                }
                Ok(())
            }
        }
    }
}
