use super::board::Board;
use super::types::{Outcome, Player, Position, WinningLine};

/// Rows, columns, main diagonal, anti-diagonal. The first complete line in this
/// order is the one reported.
const LINES: [[Position; 3]; 8] = [
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        if board.get(b) == player.cell() && board.get(c) == player.cell() {
            Some(WinningLine::new(player, a, c))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// Wins take precedence over a full board.
pub fn evaluate(board: &Board) -> Outcome {
    match check_win(board) {
        Some(Player::Computer) => Outcome::ComputerWin,
        Some(Player::Human) => Outcome::HumanWin,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}
