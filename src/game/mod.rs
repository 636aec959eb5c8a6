pub mod bag;
pub mod hand;
pub mod scorer;
pub mod session;
pub mod validator;

pub use bag::TileBag;
pub use hand::{Hand, DEFAULT_HAND_SIZE};
pub use scorer::Scorer;
pub use session::GameSession;
pub use validator::WordValidator;
