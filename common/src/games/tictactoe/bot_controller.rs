use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::error::TicTacToeError;
use super::minimax::{Score, ScoringMode, minimax};
use super::types::{Cell, Position};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BotType {
    Random,
    #[default]
    Minimax,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    scoring_mode: ScoringMode,
    rng: &mut SessionRng,
) -> Result<Position, TicTacToeError> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => select_move_with(board, scoring_mode),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, TicTacToeError> {
    ensure_ongoing(board)?;
    let available_moves = get_available_moves(board);
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Best move for the computer with depth-agnostic scoring.
pub fn select_move(board: &Board) -> Result<Position, TicTacToeError> {
    select_move_with(board, ScoringMode::DepthAgnostic)
}

/// Scores every empty cell in row-major order and returns the first one with
/// the highest score. The caller's board is never modified.
pub fn select_move_with(board: &Board, scoring_mode: ScoringMode) -> Result<Position, TicTacToeError> {
    ensure_ongoing(board)?;

    let mut scratch = *board;
    let mut best: Option<(Position, Score)> = None;

    for pos in get_available_moves(board) {
        scratch.set(pos, Cell::Computer);
        let score = minimax(&mut scratch, false, scoring_mode, 1);
        scratch.set(pos, Cell::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (pos, score) = best.ok_or_else(|| {
        TicTacToeError::InvalidPrecondition("no empty cell to play".to_string())
    })?;
    crate::log!("Minimax selected {} with score {}", pos, score);
    Ok(pos)
}

fn ensure_ongoing(board: &Board) -> Result<(), TicTacToeError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Err(TicTacToeError::InvalidPrecondition(format!(
            "cannot select a move on a finished board ({:?})",
            outcome
        )));
    }
    Ok(())
}
