use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

pub const MIN_WINDOW_SIZE: [f32; 2] = [240.0, 300.0];

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub result_display_ms: u32,
    pub auto_restart: bool,
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<(), String> {
        let [min_width, min_height] = MIN_WINDOW_SIZE;
        if self.window_width < min_width || self.window_height < min_height {
            return Err(format!(
                "window must be at least {}x{}, got {}x{}",
                min_width, min_height, self.window_width, self.window_height
            ));
        }
        if self.result_display_ms < 100 || self.result_display_ms > 10_000 {
            return Err(format!(
                "result_display_ms must be between 100 and 10000, got {}",
                self.result_display_ms
            ));
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 450.0,
            window_height: 560.0,
            result_display_ms: 1500,
            auto_restart: false,
        }
    }
}
