mod bot_config;
mod main_config;
mod ui_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use bot_config::BotConfig;
pub use main_config::{DEFAULT_CONFIG_FILE, Config, get_config_manager};
pub use ui_config::{MIN_WINDOW_SIZE, UiConfig};
