use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotType, calculate_move};
use super::error::TicTacToeError;
use super::minimax::ScoringMode;
use super::types::{Outcome, Player, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    HumanTurn,
    ComputerTurn,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Drawn)
    }
}

/// Finished-game tallies for the current process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::Human) => self.human_wins += 1,
            GameStatus::Won(Player::Computer) => self.computer_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::HumanTurn | GameStatus::ComputerTurn => {}
        }
    }
}

/// Turn management for one human against the computer. The human always moves
/// first after construction and after every reset.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    last_move: Option<Position>,
    scoreboard: Scoreboard,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::HumanTurn,
            last_move: None,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_human_mark(&mut self, pos: Position) -> Result<(), TicTacToeError> {
        self.place_mark(Player::Human, pos)
    }

    pub fn apply_computer_move(&mut self, pos: Position) -> Result<(), TicTacToeError> {
        self.place_mark(Player::Computer, pos)
    }

    /// Asks the bot for a move on the current board and applies it.
    pub fn play_computer_turn(
        &mut self,
        bot_type: BotType,
        scoring_mode: ScoringMode,
        rng: &mut SessionRng,
    ) -> Result<Position, TicTacToeError> {
        self.ensure_turn(Player::Computer)?;
        let pos = calculate_move(bot_type, &self.board, scoring_mode, rng)?;
        self.apply_computer_move(pos)?;
        Ok(pos)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::HumanTurn;
        self.last_move = None;
    }

    fn place_mark(&mut self, player: Player, pos: Position) -> Result<(), TicTacToeError> {
        self.ensure_turn(player)?;
        self.board.place(pos, player)?;
        self.last_move = Some(pos);

        self.status = match self.outcome() {
            Outcome::HumanWin => GameStatus::Won(Player::Human),
            Outcome::ComputerWin => GameStatus::Won(Player::Computer),
            Outcome::Draw => GameStatus::Drawn,
            Outcome::Ongoing => match player {
                Player::Human => GameStatus::ComputerTurn,
                Player::Computer => GameStatus::HumanTurn,
            },
        };

        if self.status.is_over() {
            self.scoreboard.record(self.status);
            crate::log!("Game over: {:?} after {:?} played {}", self.status, player, pos);
        }

        Ok(())
    }

    fn ensure_turn(&self, player: Player) -> Result<(), TicTacToeError> {
        match (self.status, player) {
            (GameStatus::Won(_) | GameStatus::Drawn, _) => Err(TicTacToeError::GameOver),
            (GameStatus::HumanTurn, Player::Human) | (GameStatus::ComputerTurn, Player::Computer) => Ok(()),
            _ => Err(TicTacToeError::NotYourTurn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) {
        for (i, &(row, col)) in moves.iter().enumerate() {
            if i % 2 == 0 {
                state.place_human_mark(pos(row, col)).unwrap();
            } else {
                state.apply_computer_move(pos(row, col)).unwrap();
            }
        }
    }

    #[test]
    fn test_new_game_starts_with_human() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.status(), GameStatus::HumanTurn);
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new();
        state.place_human_mark(pos(0, 0)).unwrap();
        assert_eq!(state.status(), GameStatus::ComputerTurn);
        assert_eq!(state.last_move(), Some(pos(0, 0)));
        state.apply_computer_move(pos(1, 1)).unwrap();
        assert_eq!(state.status(), GameStatus::HumanTurn);
        assert_eq!(state.board().get(pos(1, 1)), Cell::Computer);
    }

    #[test]
    fn test_out_of_turn_moves_are_rejected() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.apply_computer_move(pos(0, 0)), Err(TicTacToeError::NotYourTurn));
        state.place_human_mark(pos(0, 0)).unwrap();
        assert_eq!(state.place_human_mark(pos(0, 1)), Err(TicTacToeError::NotYourTurn));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_changing_turn() {
        let mut state = TicTacToeGameState::new();
        state.place_human_mark(pos(0, 0)).unwrap();
        assert_eq!(
            state.apply_computer_move(pos(0, 0)),
            Err(TicTacToeError::CellOccupied(pos(0, 0)))
        );
        assert_eq!(state.status(), GameStatus::ComputerTurn);
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.status(), GameStatus::Won(Player::Human));
        assert_eq!(state.place_human_mark(pos(2, 2)), Err(TicTacToeError::GameOver));
        let line = state.winning_line().unwrap();
        assert_eq!((line.start, line.end), (pos(0, 0), pos(0, 2)));
        assert_eq!(state.scoreboard().human_wins, 1);
    }

    #[test]
    fn test_board_filling_without_line_is_drawn() {
        let mut state = TicTacToeGameState::new();
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(state.status(), GameStatus::Drawn);
        assert_eq!(state.scoreboard().draws, 1);
    }

    #[test]
    fn test_computer_turn_with_minimax_takes_the_win() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[(1, 0), (0, 0), (2, 2), (0, 1), (1, 2)]);
        let mut rng = SessionRng::new(3);
        let chosen = state
            .play_computer_turn(BotType::Minimax, ScoringMode::DepthAgnostic, &mut rng)
            .unwrap();
        assert_eq!(chosen, pos(0, 2));
        assert_eq!(state.status(), GameStatus::Won(Player::Computer));
        assert_eq!(state.scoreboard().computer_wins, 1);
    }

    #[test]
    fn test_computer_turn_requires_computer_to_move() {
        let mut state = TicTacToeGameState::new();
        let mut rng = SessionRng::new(3);
        assert_eq!(
            state.play_computer_turn(BotType::Random, ScoringMode::DepthAgnostic, &mut rng),
            Err(TicTacToeError::NotYourTurn)
        );
    }

    #[test]
    fn test_reset_clears_board_and_keeps_scoreboard() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        state.reset();
        assert_eq!(state.status(), GameStatus::HumanTurn);
        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.last_move(), None);
        assert_eq!(state.scoreboard().human_wins, 1);
    }

    #[test]
    fn test_full_game_against_minimax_never_lost() {
        let mut rng = SessionRng::new(11);
        let mut state = TicTacToeGameState::new();
        while !state.status().is_over() {
            match state.status() {
                GameStatus::HumanTurn => {
                    let pos = crate::games::tictactoe::calculate_move(
                        BotType::Random,
                        state.board(),
                        ScoringMode::DepthAgnostic,
                        &mut rng,
                    )
                    .unwrap();
                    state.place_human_mark(pos).unwrap();
                }
                GameStatus::ComputerTurn => {
                    state
                        .play_computer_turn(BotType::Minimax, ScoringMode::DepthAgnostic, &mut rng)
                        .unwrap();
                }
                GameStatus::Won(_) | GameStatus::Drawn => unreachable!(),
            }
        }
        assert_ne!(state.status(), GameStatus::Won(Player::Human));
    }
}
