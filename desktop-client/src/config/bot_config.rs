use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::{BotType, ScoringMode};

pub const MAX_MOVE_DELAY_MS: u32 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct BotConfig {
    pub bot_type: BotType,
    pub scoring_mode: ScoringMode,
    /// Pause before the computer plays, so its move is visible as a separate step.
    pub move_delay_ms: u32,
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(format!(
                "move_delay_ms must not exceed {}, got {}",
                MAX_MOVE_DELAY_MS, self.move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_type: BotType::Minimax,
            scoring_mode: ScoringMode::DepthAgnostic,
            move_delay_ms: 300,
        }
    }
}
