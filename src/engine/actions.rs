use log::debug;

use crate::engine::moves::RunMove;
use crate::game::rules;
use crate::game::GameState;

/// Moves the run starting at `start` in column `src` onto column `dst`.
/// Validation runs to completion before the first write, so a rejected move
/// leaves the state untouched.
pub fn move_run(state: &mut GameState, src: usize, start: usize, dst: usize) -> bool {
    if src == dst || src >= state.columns.len() || dst >= state.columns.len() {
        return false;
    }
    if !rules::can_take_run(&state.columns[src], start) {
        return false;
    }
    let front = state.columns[src][start];
    if !rules::can_place(state.columns[dst].last(), front) {
        return false;
    }

    state.push_undo_snapshot();
    let moved = state.columns[src].split_off(start);
    state.columns[dst].extend(moved);
    if let Some(card) = state.columns[src].last_mut() {
        card.face_up = true;
    }
    extract_completed_runs(state, dst);
    state.moves += 1;
    true
}

/// Removes trailing complete K..A runs from one column until none remain.
/// A removal can expose another already-complete run beneath, so this loops.
/// The caller owns history; nothing is pushed here.
pub fn extract_completed_runs(state: &mut GameState, col: usize) -> usize {
    let mut removed = 0;
    while let Some(window) = rules::complete_seq_window(&state.columns[col]) {
        state.columns[col].drain(window);
        state.completed_runs += 1;
        removed += 1;
    }
    if removed > 0 {
        debug!(
            "column {col} released {removed} completed run(s), {} of 8 done",
            state.completed_runs
        );
    }
    removed
}

pub fn can_deal_from_stock(state: &GameState) -> bool {
    !state.stock.is_empty() && state.columns.iter().all(|column| !column.is_empty())
}

/// Deals the front stock round, one face-up card per column in order. Each
/// column is checked for a completed run as its card lands; the other nine
/// are unaffected by that placement.
pub fn deal_from_stock(state: &mut GameState) -> bool {
    if !can_deal_from_stock(state) {
        return false;
    }

    state.push_undo_snapshot();
    let round = state.stock.remove(0);
    for (col, mut card) in round.into_iter().enumerate() {
        card.face_up = true;
        state.columns[col].push(card);
        extract_completed_runs(state, col);
    }
    state.moves += 1;
    debug!("dealt a stock round, {} remaining", state.stock.len());
    true
}

pub fn undo(state: &mut GameState) -> bool {
    let Some(snapshot) = state.undo_stack.pop() else {
        return false;
    };
    let current = state.snapshot();
    state.redo_stack.push(current);
    state.restore(snapshot);
    true
}

/// Valid only immediately after one or more undos: move_run and
/// deal_from_stock clear the redo stack on success.
pub fn redo(state: &mut GameState) -> bool {
    let Some(snapshot) = state.redo_stack.pop() else {
        return false;
    };
    let current = state.snapshot();
    state.undo_stack.push(current);
    state.restore(snapshot);
    true
}

/// Every legal (src, start, dst) triple, in ascending src, then start, then
/// dst order. Deterministic so the hint tie-break is reproducible.
pub fn list_legal_moves(state: &GameState) -> Vec<RunMove> {
    let mut moves = Vec::new();
    for src in 0..state.columns.len() {
        let source = &state.columns[src];
        for start in 0..source.len() {
            if !rules::can_take_run(source, start) {
                continue;
            }
            let front = source[start];
            for (dst, destination) in state.columns.iter().enumerate() {
                if dst == src {
                    continue;
                }
                if rules::can_place(destination.last(), front) {
                    moves.push(RunMove { src, start, dst });
                }
            }
        }
    }
    moves
}

pub fn is_won(state: &GameState) -> bool {
    state.completed_runs >= 8
}

pub fn has_legal_moves(state: &GameState) -> bool {
    can_deal_from_stock(state) || !list_legal_moves(state).is_empty()
}

pub fn is_lost(state: &GameState) -> bool {
    !is_won(state) && !has_legal_moves(state)
}
