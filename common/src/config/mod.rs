mod config_content_provider;
mod config_manager;
mod config_serializer;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};

/// Range and consistency checks run by [`ConfigManager`] before a config is
/// cached or written.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
