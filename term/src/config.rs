//! Configuration persisted as YAML in the project config directory.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tours_lib::fetcher::DEFAULT_TOURS_ENDPOINT;

use crate::ui::colors::Theme;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the tour list is fetched from
    pub endpoint: String,
    /// Name of the color theme
    pub theme: String,
    /// Optional cap on a single fetch, no limit when absent
    pub request_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TOURS_ENDPOINT.to_string(),
            theme: Theme::default().to_string(),
            request_timeout_ms: None,
        }
    }
}

impl Config {
    /// Returns the configured theme, falling back to the default theme for
    /// unknown names.
    pub fn theme(&self) -> Theme {
        Theme::from_string(&self.theme)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// Loads the configuration from a YAML file, creating it with defaults when
/// it does not exist yet.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                log::info!("writing default config to {}", manager.path);
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the loaded configuration.
    pub fn get(&self) -> Config {
        self.config.clone()
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
