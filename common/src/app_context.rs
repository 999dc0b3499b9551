use crate::high_score::{HighScoreGateway, HighScoreRecord};
use crate::storage::ContentProvider;

/// Process-wide game context: the persisted best record and its gateway.
/// Passed explicitly into each session.
pub struct AppContext<P: ContentProvider> {
    gateway: HighScoreGateway<P>,
    best: HighScoreRecord,
}

impl<P: ContentProvider> AppContext<P> {
    pub fn load(gateway: HighScoreGateway<P>) -> Self {
        let best = gateway.load_best();
        Self { gateway, best }
    }

    pub fn best(&self) -> HighScoreRecord {
        self.best
    }

    pub fn gateway(&self) -> &HighScoreGateway<P> {
        &self.gateway
    }

    /// Keeps the new record in memory even when the write fails.
    pub fn record_best(&mut self, record: HighScoreRecord) {
        self.best = record;
        self.gateway.save_best(&record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryContentProvider;

    #[test]
    fn test_load_reads_stored_record() {
        let context = AppContext::load(HighScoreGateway::new(MemoryContentProvider::new(Some("14,3"))));
        assert_eq!(context.best(), HighScoreRecord::new(14, 3));
    }

    #[test]
    fn test_record_best_survives_write_failure() {
        let mut context =
            AppContext::load(HighScoreGateway::new(MemoryContentProvider::read_only(Some("1,1"))));
        context.record_best(HighScoreRecord::new(8, 2));
        assert_eq!(context.best(), HighScoreRecord::new(8, 2));
        assert_eq!(context.gateway().provider().content(), Some("1,1".to_string()));
    }
}
