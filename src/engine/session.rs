use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{Card, DealRound, GameState, Suit};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("expected 10 tableau columns, found {0}")]
    ColumnCountMismatch(usize),
    #[error("stock round {index} holds {len} cards, expected 10")]
    MalformedStockRound { index: usize, len: usize },
    #[error("card rank {0} is outside 1..=13")]
    RankOutOfRange(u8),
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(String),
    #[error("completed run count {0} exceeds 8")]
    TooManyCompletedRuns(u32),
    #[error("malformed session payload: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CardRecord {
    r: u8,
    #[serde(default)]
    s: Option<String>,
    #[serde(default)]
    u: Option<bool>,
}

/// Wire shape of a persisted game. Field order is the on-disk key order and
/// must not change; history never round-trips through this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(default)]
    columns: Option<Vec<Vec<CardRecord>>>,
    #[serde(default)]
    stock: Option<Vec<Vec<CardRecord>>>,
    #[serde(default)]
    foundations: u32,
    #[serde(default)]
    moves: u32,
    #[serde(default)]
    score: i64,
}

/// Fill-in values for record fields a writer omitted. Tableau cards default
/// face-up; stock cards stay face-down until dealt.
#[derive(Debug, Clone, Copy)]
struct CardDefaults {
    suit: Suit,
    face_up: bool,
}

const TABLEAU_DEFAULTS: CardDefaults = CardDefaults {
    suit: Suit::Spades,
    face_up: true,
};

const STOCK_DEFAULTS: CardDefaults = CardDefaults {
    suit: Suit::Spades,
    face_up: false,
};

pub fn saved_game(state: &GameState) -> SavedGame {
    SavedGame {
        columns: Some(
            state
                .tableau()
                .iter()
                .map(|column| column.iter().map(encode_card).collect())
                .collect(),
        ),
        stock: Some(
            state
                .stock()
                .iter()
                .map(|round| round.iter().map(encode_card).collect())
                .collect(),
        ),
        foundations: state.completed_runs() as u32,
        moves: state.move_count(),
        score: state.score(),
    }
}

pub fn restore_saved_game(saved: &SavedGame) -> Result<GameState, SessionError> {
    if saved.foundations > 8 {
        return Err(SessionError::TooManyCompletedRuns(saved.foundations));
    }

    let mut state = GameState::new();

    if let Some(columns) = &saved.columns {
        let decoded: Vec<Vec<Card>> = columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|record| decode_card(record, TABLEAU_DEFAULTS))
                    .collect()
            })
            .collect::<Result<_, _>>()?;
        state.columns = decoded
            .try_into()
            .map_err(|columns: Vec<Vec<Card>>| SessionError::ColumnCountMismatch(columns.len()))?;
    }

    if let Some(stock) = &saved.stock {
        for (index, round) in stock.iter().enumerate() {
            let cards: Vec<Card> = round
                .iter()
                .map(|record| decode_card(record, STOCK_DEFAULTS))
                .collect::<Result<_, _>>()?;
            let round: DealRound = cards.try_into().map_err(|cards: Vec<Card>| {
                SessionError::MalformedStockRound {
                    index,
                    len: cards.len(),
                }
            })?;
            state.stock.push(round);
        }
    }

    state.completed_runs = saved.foundations as usize;
    state.moves = saved.moves;
    state.score = saved.score;
    state.clear_history();
    Ok(state)
}

pub fn encode_saved_game(state: &GameState) -> Result<String, SessionError> {
    serde_json::to_string(&saved_game(state)).map_err(|err| SessionError::Payload(err.to_string()))
}

pub fn decode_saved_game(raw: &str) -> Result<GameState, SessionError> {
    let saved: SavedGame =
        serde_json::from_str(raw).map_err(|err| SessionError::Payload(err.to_string()))?;
    restore_saved_game(&saved)
}

fn encode_card(card: &Card) -> CardRecord {
    CardRecord {
        r: card.rank,
        s: Some(card.suit.symbol().to_string()),
        u: Some(card.face_up),
    }
}

fn decode_card(record: &CardRecord, defaults: CardDefaults) -> Result<Card, SessionError> {
    if !(1..=13).contains(&record.r) {
        return Err(SessionError::RankOutOfRange(record.r));
    }
    let suit = match &record.s {
        None => defaults.suit,
        Some(symbol) => Suit::from_symbol(symbol)
            .ok_or_else(|| SessionError::UnknownSuit(symbol.clone()))?,
    };
    Ok(Card {
        suit,
        rank: record.r,
        face_up: record.u.unwrap_or(defaults.face_up),
    })
}
