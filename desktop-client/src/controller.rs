use std::time::{Duration, Instant};

use tictactoe_common::games::SessionRng;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{
    BotType, GameStatus, Player, Position, ScoringMode, TicTacToeGameState,
};

use crate::config::Config;

/// Drives one human-vs-computer session for the UI: applies clicks, schedules
/// the computer reply after the configured delay and, optionally, restarts a
/// finished game after the result has been shown.
pub struct GameController {
    state: TicTacToeGameState,
    rng: SessionRng,
    bot_type: BotType,
    scoring_mode: ScoringMode,
    bot_move_delay: Duration,
    result_display: Duration,
    auto_restart: bool,
    computer_move_due: Option<Instant>,
    restart_due: Option<Instant>,
    last_error: Option<String>,
}

impl GameController {
    pub fn new(config: &Config, rng: SessionRng) -> Self {
        log!(
            "New session: bot {:?}, scoring {:?}, seed {}",
            config.bot.bot_type,
            config.bot.scoring_mode,
            rng.seed()
        );
        Self {
            state: TicTacToeGameState::new(),
            rng,
            bot_type: config.bot.bot_type,
            scoring_mode: config.bot.scoring_mode,
            bot_move_delay: Duration::from_millis(config.bot.move_delay_ms as u64),
            result_display: Duration::from_millis(config.ui.result_display_ms as u64),
            auto_restart: config.ui.auto_restart,
            computer_move_due: None,
            restart_due: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn bot_type(&self) -> BotType {
        self.bot_type
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn accepts_clicks(&self) -> bool {
        self.state.status() == GameStatus::HumanTurn
    }

    /// Clicks outside the human's turn or on marked cells are ignored.
    pub fn handle_click(&mut self, pos: Position, now: Instant) {
        if !self.accepts_clicks() {
            return;
        }
        match self.state.place_human_mark(pos) {
            Ok(()) => {
                self.last_error = None;
                self.schedule_after_move(now);
            }
            Err(e) => log!("Ignored click at {}: {}", pos, e),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.computer_move_due
            && now >= due
        {
            self.computer_move_due = None;
            match self
                .state
                .play_computer_turn(self.bot_type, self.scoring_mode, &mut self.rng)
            {
                Ok(pos) => {
                    log!("Computer ({:?}) played {}", self.bot_type, pos);
                    self.schedule_after_move(now);
                }
                Err(e) => {
                    log!("Computer move failed: {}", e);
                    self.last_error = Some(e.to_string());
                }
            }
        }

        if let Some(due) = self.restart_due
            && now >= due
        {
            self.restart();
        }
    }

    pub fn restart(&mut self) {
        self.state.reset();
        self.computer_move_due = None;
        self.restart_due = None;
        self.last_error = None;
        log!("Game restarted");
    }

    /// Time until the next scheduled action, for repaint requests.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        [self.computer_move_due, self.restart_due]
            .into_iter()
            .flatten()
            .map(|due| due.saturating_duration_since(now))
            .min()
    }

    pub fn status_text(&self) -> &'static str {
        match self.state.status() {
            GameStatus::HumanTurn => "Your turn",
            GameStatus::ComputerTurn => "Computer is thinking...",
            GameStatus::Won(Player::Human) => "You win!",
            GameStatus::Won(Player::Computer) => "Computer wins!",
            GameStatus::Drawn => "Draw!",
        }
    }

    fn schedule_after_move(&mut self, now: Instant) {
        match self.state.status() {
            GameStatus::ComputerTurn => {
                self.computer_move_due = Some(now + self.bot_move_delay);
            }
            GameStatus::Won(_) | GameStatus::Drawn => {
                if self.auto_restart {
                    self.restart_due = Some(now + self.result_display);
                }
            }
            GameStatus::HumanTurn => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BotConfig, UiConfig};
    use tictactoe_common::tictactoe::{Board, Cell, get_available_moves};

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn config(move_delay_ms: u32, auto_restart: bool) -> Config {
        Config {
            bot: BotConfig {
                move_delay_ms,
                ..BotConfig::default()
            },
            ui: UiConfig {
                result_display_ms: 1000,
                auto_restart,
                ..UiConfig::default()
            },
        }
    }

    #[test]
    fn test_computer_replies_after_delay() {
        let mut controller = GameController::new(&config(300, false), SessionRng::new(1));
        let start = Instant::now();

        controller.handle_click(pos(0, 0), start);
        assert_eq!(controller.state().status(), GameStatus::ComputerTurn);
        assert_eq!(controller.next_wakeup(start), Some(Duration::from_millis(300)));

        controller.tick(start + Duration::from_millis(100));
        assert_eq!(controller.state().status(), GameStatus::ComputerTurn);

        controller.tick(start + Duration::from_millis(300));
        assert_eq!(controller.state().status(), GameStatus::HumanTurn);
        assert_eq!(controller.state().board().get(pos(1, 1)), Cell::Computer);
        assert_eq!(controller.next_wakeup(start), None);
    }

    #[test]
    fn test_clicks_ignored_while_computer_thinks() {
        let mut controller = GameController::new(&config(300, false), SessionRng::new(1));
        let now = Instant::now();
        controller.handle_click(pos(0, 0), now);
        controller.handle_click(pos(2, 2), now);
        assert_eq!(controller.state().board().get(pos(2, 2)), Cell::Empty);
        assert!(!controller.accepts_clicks());
    }

    #[test]
    fn test_click_on_marked_cell_keeps_turn() {
        let mut controller = GameController::new(&config(0, false), SessionRng::new(1));
        let now = Instant::now();
        controller.handle_click(pos(0, 0), now);
        controller.tick(now);
        controller.handle_click(pos(1, 1), now);
        assert_eq!(controller.state().status(), GameStatus::HumanTurn);
        assert_eq!(controller.status_text(), "Your turn");
    }

    #[test]
    fn test_auto_restart_after_result() {
        let mut controller = GameController::new(&config(0, true), SessionRng::new(1));
        let now = Instant::now();
        while !controller.state().status().is_over() {
            let first_empty = get_available_moves(controller.state().board())[0];
            controller.handle_click(first_empty, now);
            controller.tick(now);
        }
        assert_ne!(controller.state().status(), GameStatus::Won(Player::Human));
        assert_eq!(controller.next_wakeup(now), Some(Duration::from_millis(1000)));

        let shown_until = now + Duration::from_millis(1000);
        controller.tick(shown_until - Duration::from_millis(1));
        assert!(controller.state().status().is_over());
        controller.tick(shown_until);
        assert_eq!(controller.state().status(), GameStatus::HumanTurn);
        assert_eq!(*controller.state().board(), Board::new());
    }

    #[test]
    fn test_finished_game_waits_for_manual_restart() {
        let mut controller = GameController::new(&config(0, false), SessionRng::new(1));
        let now = Instant::now();
        while !controller.state().status().is_over() {
            let first_empty = get_available_moves(controller.state().board())[0];
            controller.handle_click(first_empty, now);
            controller.tick(now);
        }
        assert_eq!(controller.next_wakeup(now), None);
        controller.tick(now + Duration::from_secs(60));
        assert!(controller.state().status().is_over());
        controller.restart();
        assert_eq!(controller.state().status(), GameStatus::HumanTurn);
    }

    #[test]
    fn test_manual_restart_cancels_pending_move() {
        let mut controller = GameController::new(&config(500, false), SessionRng::new(1));
        let now = Instant::now();
        controller.handle_click(pos(1, 1), now);
        controller.restart();
        assert_eq!(controller.next_wakeup(now), None);
        controller.tick(now + Duration::from_secs(1));
        assert_eq!(controller.state().status(), GameStatus::HumanTurn);
        assert_eq!(controller.state().board().count(Cell::Empty), 9);
    }
}
