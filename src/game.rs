pub mod rules;
mod setup;
mod state;
mod types;

pub use state::{DealRound, GameSnapshot, GameState};
pub use types::{rank_label, Card, Suit};

#[cfg(test)]
mod tests;
