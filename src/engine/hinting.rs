use std::cmp::Reverse;

use crate::engine::actions;
use crate::engine::moves::{apply_run_move, RunMove};
use crate::game::GameState;

pub fn hint(state: &GameState) -> Option<RunMove> {
    pick_preferred_move(state, &actions::list_legal_moves(state))
}

/// Greedy single-ply choice over an already-enumerated move list: minimize
/// (destination length, Reverse(start)). The shortest destination column
/// wins; ties go to the largest start index.
pub fn pick_preferred_move(state: &GameState, moves: &[RunMove]) -> Option<RunMove> {
    moves
        .iter()
        .copied()
        .min_by_key(|run_move| (state.tableau()[run_move.dst].len(), Reverse(run_move.start)))
}

pub fn auto_move_one(state: &mut GameState) -> bool {
    match hint(state) {
        Some(run_move) => apply_run_move(state, run_move),
        None => false,
    }
}
