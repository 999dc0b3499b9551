use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub cell_size_px: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size_px < 8 || self.cell_size_px > 64 {
            return Err(format!(
                "Cell size must be between 8 and 64 pixels, got {}",
                self.cell_size_px
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { cell_size_px: 20 }
    }
}
