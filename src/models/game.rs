/// Where a session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hand needs topping up from the bag
    AwaitingRefill,
    /// Hand shown, waiting for the player's word
    AwaitingInput,
    /// A valid word is being applied to hand and score
    Scoring,
    /// The last word was refused; hand and score are unchanged
    Rejected,
    /// Refill left the hand empty
    BagExhausted,
    /// Player asked to stop
    PlayerQuit,
}

impl GameState {
    /// True once the session can no longer accept plays
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::BagExhausted | GameState::PlayerQuit)
    }
}

/// An accepted word and what it scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub word: String,
    pub score: u32,
}

/// End-of-game statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub total_score: u32,
    pub words_played: usize,
    /// Highest scoring word; the earliest one wins a tie
    pub best_play: Option<PlayRecord>,
}
