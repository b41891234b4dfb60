mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotType, calculate_move, select_move, select_move_with};
pub use error::TicTacToeError;
pub use game_state::{GameStatus, Scoreboard, TicTacToeGameState};
pub use minimax::{DRAW_SCORE, Score, ScoringMode, WIN_SCORE, search, search_with};
pub use types::{BOARD_SIZE, Cell, Outcome, Player, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
