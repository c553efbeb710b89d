use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Card, DealRound, GameState, Suit};

impl GameState {
    pub fn new_shuffled() -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(rng.gen())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = single_suit_deck();
        let mut rng = StdRng::seed_from_u64(seed);
        deck.shuffle(&mut rng);

        let mut game = Self::new();
        let mut draw = deck.into_iter();
        for col in 0..10 {
            let col_size = if col < 4 { 6 } else { 5 };
            for row in 0..col_size {
                let mut card = draw.next().expect("spider setup consumes 54 cards");
                card.face_up = row == col_size - 1;
                game.columns[col].push(card);
            }
        }

        for _ in 0..5 {
            let round: DealRound = std::array::from_fn(|_| {
                let mut card = draw.next().expect("stock consumes the remaining 50 cards");
                card.face_up = false;
                card
            });
            game.stock.push(round);
        }

        game
    }
}

fn single_suit_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(104);
    for _ in 0..8 {
        for rank in 1..=13 {
            deck.push(Card {
                suit: Suit::Spades,
                rank,
                face_up: false,
            });
        }
    }
    deck
}
