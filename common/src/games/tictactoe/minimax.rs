use serde::{Deserialize, Serialize};

use super::board::{Board, get_available_moves};
use super::types::{Cell, Outcome};
use super::win_detector::evaluate;

pub type Score = i32;

pub const WIN_SCORE: Score = 10;
pub const DRAW_SCORE: Score = 0;

/// How terminal positions are scored, from the computer's perspective.
///
/// `DepthAgnostic` scores every win as `WIN_SCORE` regardless of how far away
/// it is. `DepthWeighted` subtracts the ply count, so the computer prefers the
/// quickest win and the slowest loss; this can change which move is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringMode {
    #[default]
    DepthAgnostic,
    DepthWeighted,
}

impl ScoringMode {
    fn terminal_score(self, outcome: Outcome, depth: Score) -> Option<Score> {
        let weight = match self {
            ScoringMode::DepthAgnostic => 0,
            ScoringMode::DepthWeighted => depth,
        };
        match outcome {
            Outcome::ComputerWin => Some(WIN_SCORE - weight),
            Outcome::HumanWin => Some(-WIN_SCORE + weight),
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Ongoing => None,
        }
    }
}

/// Exact minimax value of `board` with the computer maximizing.
///
/// Every cell placed during the search is reset before returning, so `board`
/// is unchanged afterwards.
pub fn search(board: &mut Board, maximizing: bool) -> Score {
    search_with(board, maximizing, ScoringMode::DepthAgnostic)
}

pub fn search_with(board: &mut Board, maximizing: bool, scoring_mode: ScoringMode) -> Score {
    minimax(board, maximizing, scoring_mode, 0)
}

/// Starts a full-window alpha-beta search at `depth`. The full window makes the
/// returned value exact, so pruning never changes which move wins a comparison.
pub(crate) fn minimax(
    board: &mut Board,
    maximizing: bool,
    scoring_mode: ScoringMode,
    depth: Score,
) -> Score {
    alpha_beta(board, maximizing, scoring_mode, depth, Score::MIN, Score::MAX)
}

fn alpha_beta(
    board: &mut Board,
    maximizing: bool,
    scoring_mode: ScoringMode,
    depth: Score,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    if let Some(score) = scoring_mode.terminal_score(evaluate(board), depth) {
        return score;
    }

    let moves = get_available_moves(board);

    if maximizing {
        let mut max_eval = Score::MIN;
        for pos in moves {
            board.set(pos, Cell::Computer);
            let eval = alpha_beta(board, false, scoring_mode, depth + 1, alpha, beta);
            board.set(pos, Cell::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = Score::MAX;
        for pos in moves {
            board.set(pos, Cell::Human);
            let eval = alpha_beta(board, true, scoring_mode, depth + 1, alpha, beta);
            board.set(pos, Cell::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
