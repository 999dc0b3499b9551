use std::num::ParseIntError;

use crate::storage::{ContentProvider, FileContentProvider};
use crate::{log, log_warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub score: u32,
    pub level: u32,
}

impl Default for HighScoreRecord {
    fn default() -> Self {
        Self { score: 0, level: 1 }
    }
}

impl HighScoreRecord {
    pub fn new(score: u32, level: u32) -> Self {
        Self { score, level }
    }

    /// Parses `score,level`. Surrounding whitespace is ignored.
    pub fn parse(content: &str) -> Result<Self, PersistenceFault> {
        let fields: Vec<&str> = content.trim().split(',').map(str::trim).collect();
        let [score, level] = fields.as_slice() else {
            return Err(PersistenceFault::Malformed(format!(
                "expected 2 fields, found {}",
                fields.len()
            )));
        };

        let score: u32 = score.parse()?;
        let level: u32 = level.parse()?;
        if level < 1 {
            return Err(PersistenceFault::Malformed("level must be at least 1".to_string()));
        }
        Ok(Self { score, level })
    }

    pub fn to_record_string(&self) -> String {
        format!("{},{}", self.score, self.level)
    }

    /// Strictly greater only; a tie keeps the stored record.
    pub fn is_beaten_by(&self, score: u32) -> bool {
        score > self.score
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceFault {
    Read(String),
    Write(String),
    Malformed(String),
}

impl std::fmt::Display for PersistenceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceFault::Read(e) => write!(f, "Failed to read high score: {}", e),
            PersistenceFault::Write(e) => write!(f, "Failed to write high score: {}", e),
            PersistenceFault::Malformed(e) => write!(f, "Malformed high score record: {}", e),
        }
    }
}

impl std::error::Error for PersistenceFault {}

impl From<ParseIntError> for PersistenceFault {
    fn from(e: ParseIntError) -> Self {
        PersistenceFault::Malformed(e.to_string())
    }
}

/// Reads and writes the best score record. The lenient `load_best`/`save_best`
/// pair never fails; faults are logged and gameplay continues.
pub struct HighScoreGateway<P: ContentProvider> {
    provider: P,
}

impl HighScoreGateway<FileContentProvider> {
    pub fn from_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileContentProvider::new(path))
    }
}

impl<P: ContentProvider> HighScoreGateway<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// `Ok(None)` when no record has been written yet.
    pub fn try_load(&self) -> Result<Option<HighScoreRecord>, PersistenceFault> {
        let Some(content) = self.provider.get_content().map_err(PersistenceFault::Read)? else {
            return Ok(None);
        };
        HighScoreRecord::parse(&content).map(Some)
    }

    pub fn try_save(&self, record: &HighScoreRecord) -> Result<(), PersistenceFault> {
        self.provider
            .set_content(&record.to_record_string())
            .map_err(PersistenceFault::Write)
    }

    /// Missing record is created with the default; unreadable or malformed ones degrade to it.
    pub fn load_best(&self) -> HighScoreRecord {
        match self.try_load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                let record = HighScoreRecord::default();
                log!("No high score record found, creating {}", record.to_record_string());
                self.save_best(&record);
                record
            }
            Err(e) => {
                log_warn!("{}; using defaults", e);
                HighScoreRecord::default()
            }
        }
    }

    pub fn save_best(&self, record: &HighScoreRecord) {
        if let Err(e) = self.try_save(record) {
            log_warn!("{}", e);
        }
    }
}
