use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AudioConfig {
    pub assets_dir: String,
    pub music_volume: f32,
    pub enabled_on_start: bool,
}

impl Validate for AudioConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(format!(
                "music_volume must be between 0.0 and 1.0, got {}",
                self.music_volume
            ));
        }
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            music_volume: 0.35,
            enabled_on_start: true,
        }
    }
}
