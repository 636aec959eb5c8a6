use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::GameConfig,
    error::GameError,
    game::{Hand, Scorer, TileBag, WordValidator},
    models::{GameState, GameSummary, PlayRecord},
};

/// One player's game: the bag, their hand and the running score
pub struct GameSession {
    bag: TileBag,
    hand: Hand,
    rng: StdRng,
    hand_size: usize,
    total_score: u32,
    state: GameState,
    plays: Vec<PlayRecord>,
}

impl GameSession {
    /// Start a session with a full bag, seeded from config when a seed is given
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self::with_bag(TileBag::new(), config.hand_size, rng)
    }

    pub fn with_bag(bag: TileBag, hand_size: usize, rng: StdRng) -> Self {
        tracing::info!(bag_size = bag.len(), hand_size, "Starting game session");
        Self {
            bag,
            hand: Hand::new(),
            rng,
            hand_size,
            total_score: 0,
            state: GameState::AwaitingRefill,
            plays: Vec::new(),
        }
    }

    /// Top the hand up from the bag.
    ///
    /// Ends the game with `BagExhausted` when the hand is still empty afterwards.
    pub fn refill(&mut self) -> GameState {
        if self.state.is_finished() {
            return self.state;
        }

        let drawn = self
            .hand
            .refill_to(&mut self.bag, self.hand_size, &mut self.rng);
        tracing::debug!(drawn, hand_size = self.hand.len(), "Hand topped up");

        self.state = if self.hand.is_empty() {
            tracing::info!(total_score = self.total_score, "Bag exhausted");
            GameState::BagExhausted
        } else {
            GameState::AwaitingInput
        };
        self.state
    }

    /// Validate, score and apply a word.
    ///
    /// A rejected word leaves the hand and the score untouched and moves the
    /// session to `Rejected`, from which the next word may be played.
    pub fn play_word(&mut self, input: &str) -> Result<PlayRecord, GameError> {
        if self.state.is_finished() {
            return Err(GameError::GameOver);
        }

        let word = match WordValidator::validate(input, &self.hand) {
            Ok(word) => word,
            Err(e) => {
                tracing::debug!("Rejected {:?}: {}", input, e);
                self.state = GameState::Rejected;
                return Err(e);
            }
        };

        self.state = GameState::Scoring;
        let score = Scorer::calculate_score(&word, &self.hand);
        self.hand.remove_for_word(&word)?;
        self.total_score += score;

        tracing::info!(
            word = %word,
            score,
            total_score = self.total_score,
            "Word accepted"
        );

        let record = PlayRecord { word, score };
        self.plays.push(record.clone());
        self.state = GameState::AwaitingRefill;
        Ok(record)
    }

    pub fn quit(&mut self) {
        if !self.state.is_finished() {
            tracing::info!(total_score = self.total_score, "Player quit");
            self.state = GameState::PlayerQuit;
        }
    }

    pub fn summary(&self) -> GameSummary {
        // max_by_key keeps the last maximum; reverse so the earliest wins a tie
        let best_play = self
            .plays
            .iter()
            .rev()
            .max_by_key(|play| play.score)
            .cloned();

        GameSummary {
            total_score: self.total_score,
            words_played: self.plays.len(),
            best_play,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn bag_remaining(&self) -> usize {
        self.bag.len()
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn state(&self) -> GameState {
        self.state
    }
}
