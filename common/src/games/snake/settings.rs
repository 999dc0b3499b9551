use std::time::Duration;

use crate::config::Validate;

pub const DEFAULT_GRID_SIZE: i32 = 30;
pub const MIN_GRID_SIZE: i32 = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub grid_size: i32,
    pub initial_length: usize,
    /// Ticks per second at level 1.
    pub initial_speed: u32,
    pub speed_step: u32,
    pub level_up_every: u32,
    /// Idle tick rate while paused or after game over.
    pub paused_tick_rate: u32,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_length: 3,
            initial_speed: 12,
            speed_step: 1,
            level_up_every: 5,
            paused_tick_rate: 6,
        }
    }
}

impl SnakeSessionSettings {
    pub fn tick_interval_for(rate: u32) -> Duration {
        Duration::from_secs_f64(1.0 / rate.max(1) as f64)
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(format!("Grid size must be at least {}", MIN_GRID_SIZE));
        }
        if self.initial_length < 1 || self.initial_length as i32 > self.grid_size / 2 {
            return Err("Initial length must fit in half of the grid".to_string());
        }
        if self.initial_speed < 1 {
            return Err("Initial speed must be at least 1 tick per second".to_string());
        }
        if self.level_up_every < 1 {
            return Err("Level-up interval must be at least 1".to_string());
        }
        if self.paused_tick_rate < 1 {
            return Err("Paused tick rate must be at least 1".to_string());
        }
        Ok(())
    }
}
