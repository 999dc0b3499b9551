use common::games::GameBroadcaster;
use common::games::snake::{GameEvent, SnakeSnapshot};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_event(&self, event: GameEvent) {
        match event {
            GameEvent::LevelUp { level } => self.shared_state.start_level_up(level),
            GameEvent::GameOver(_) => self.shared_state.start_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use common::games::snake::{DeathReason, GameOverSummary};

    #[tokio::test]
    async fn test_events_start_animations() {
        let shared_state = SharedState::new();
        shared_state.set_state(AppState::new_game());
        let broadcaster = LocalBroadcaster::new(shared_state.clone());

        broadcaster.broadcast_event(GameEvent::LevelUp { level: 4 }).await;
        broadcaster
            .broadcast_event(GameEvent::GameOver(GameOverSummary {
                reason: DeathReason::SelfCollision,
                score: 17,
                level: 4,
                new_best: false,
            }))
            .await;

        let AppState::InGame { level_up, game_over_started, .. } = shared_state.get_state() else {
            panic!("expected in-game state");
        };
        assert_eq!(level_up.map(|b| b.level), Some(4));
        assert!(game_over_started.is_some());
    }
}
