pub mod engine;
pub mod game;

pub use engine::moves::RunMove;
pub use engine::session::{SavedGame, SessionError};
pub use game::{rank_label, Card, DealRound, GameSnapshot, GameState, Suit};
