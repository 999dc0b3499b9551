pub mod app_context;
pub mod config;
pub mod games;
pub mod high_score;
pub mod logger;
pub mod presentation;
pub mod storage;

pub use app_context::AppContext;
pub use high_score::{HighScoreGateway, HighScoreRecord, PersistenceFault};
