use std::ops::Range;

use super::Card;

pub fn is_descending_run(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    cards.iter().all(|card| card.face_up)
        && cards.windows(2).all(|pair| pair[0].rank == pair[1].rank + 1)
}

pub fn can_take_run(column: &[Card], start: usize) -> bool {
    if start >= column.len() || !column[start].face_up {
        return false;
    }
    is_descending_run(&column[start..])
}

/// Suit is never consulted: any rank may stack on rank + 1 in this variant,
/// and any run may start an empty column.
pub fn can_place(dst_top: Option<&Card>, moving_front: Card) -> bool {
    match dst_top {
        None => true,
        Some(top) => top.face_up && top.rank == moving_front.rank + 1,
    }
}

/// Trailing 13-card window forming a face-up K..A run, as a removal range.
/// Runs are contiguous suffixes when formed, so nothing earlier in the
/// column can ever hold a complete sequence.
pub fn complete_seq_window(column: &[Card]) -> Option<Range<usize>> {
    if column.len() < 13 {
        return None;
    }
    let start = column.len() - 13;
    let complete = column[start..]
        .iter()
        .zip((1..=13).rev())
        .all(|(card, rank)| card.face_up && card.rank == rank);
    if complete {
        Some(start..column.len())
    } else {
        None
    }
}
