use std::path::Path;
use std::sync::Mutex;
use serde::{Deserialize, Serialize};

use crate::log_warn;
use crate::storage::{ContentProvider, FileContentProvider};
use super::Validate;
use super::config_serializer::{ConfigSerializer, YamlConfigSerializer};

/// Loads, validates and caches a config document.
pub struct ConfigManager<TContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    content_provider: TContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TContentProvider, TConfig, TConfigSerializer> ConfigManager<TContentProvider, TConfig, TConfigSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(content_provider: TContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config_serializer,
            content_provider,
            config: Mutex::new(None),
        }
    }
}

impl<TConfig> ConfigManager<FileContentProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TContentProvider, TConfig, TConfigSerializer> ConfigManager<TContentProvider, TConfig, TConfigSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    /// A missing document yields `TConfig::default()`; a malformed or invalid one is an error.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().expect("config lock poisoned");

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.content_provider.get_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    /// Like `get_config`, but a broken document degrades to defaults.
    pub fn get_config_or_default(&self) -> TConfig {
        match self.get_config() {
            Ok(config) => config,
            Err(e) => {
                log_warn!("Falling back to default config: {}", e);
                TConfig::default()
            }
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config.validate().map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.content_provider.set_content(&serialized_config)?;

        *self.config.lock().expect("config lock poisoned") = Some(config.clone());
        Ok(())
    }
}
