use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

use super::{BotConfig, ConfigManager, FileContentConfigProvider, UiConfig, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub bot: BotConfig,
    pub ui: UiConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.bot.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}
