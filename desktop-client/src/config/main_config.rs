use common::config::{ConfigManager, Validate, YamlConfigSerializer};
use common::storage::FileContentProvider;
use serde::{Deserialize, Serialize};

use super::{AudioConfig, StorageConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "snake_game_pro_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub storage: StorageConfig,
    pub audio: AudioConfig,
    pub shutdown_timeout_ms: u32,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.storage.validate()?;
        self.audio.validate()?;
        if self.shutdown_timeout_ms == 0 {
            return Err("shutdown_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            storage: StorageConfig::default(),
            audio: AudioConfig::default(),
            shutdown_timeout_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::ConfigSerializer;
    use common::storage::{ContentProvider, MemoryContentProvider};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snake_game_pro_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            window: WindowConfig { cell_size_px: 24 },
            shutdown_timeout_ms: 500,
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<FileContentProvider, Config> =
            ConfigManager::from_yaml_file(&file_path);

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));
        assert_eq!(manager.get_config(), Ok(config));

        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<FileContentProvider, Config> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let provider = MemoryContentProvider::new(None);
        let serializer = YamlConfigSerializer::new();
        let invalid = Config {
            window: WindowConfig { cell_size_px: 2 },
            ..Config::default()
        };
        provider.set_content(&serializer.serialize(&invalid).unwrap()).unwrap();
        let manager: ConfigManager<_, Config> = ConfigManager::new(provider, serializer);

        assert!(manager.get_config().is_err());
        assert_eq!(manager.get_config_or_default(), Config::default());
    }

    #[test]
    fn test_invalid_config_cannot_be_saved() {
        let manager: ConfigManager<_, Config> =
            ConfigManager::new(MemoryContentProvider::new(None), YamlConfigSerializer::new());
        let invalid = Config {
            audio: AudioConfig {
                music_volume: 1.5,
                ..AudioConfig::default()
            },
            ..Config::default()
        };
        assert!(manager.set_config(&invalid).is_err());
    }
}
