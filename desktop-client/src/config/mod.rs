mod audio_config;
mod main_config;
mod storage_config;
mod window_config;

pub use audio_config::AudioConfig;
pub use main_config::{get_config_manager, Config};
pub use storage_config::StorageConfig;
pub use window_config::WindowConfig;
