use std::future::Future;

use super::snake::{GameEvent, SnakeSnapshot};

/// Receives read-only views of the running session. Implementations never touch session state.
pub trait GameBroadcaster {
    fn broadcast_state(&self, snapshot: SnakeSnapshot) -> impl Future<Output = ()>;

    fn broadcast_event(&self, event: GameEvent) -> impl Future<Output = ()>;
}
