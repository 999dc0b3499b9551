use common::games::snake::{InputEvent, SessionOutcome, SnakeSession, SnakeSessionSettings};
use common::games::{SessionRng, SoundPlayer};
use common::storage::ContentProvider;
use common::{log, AppContext};
use tokio::sync::mpsc;
use crate::state::{AppState, SharedState};

use super::LocalBroadcaster;

/// Plays sessions back to back while the player keeps choosing restart.
/// Returns the first outcome that is not a restart.
pub async fn run_snake_game<P: ContentProvider>(
    shared_state: &SharedState,
    context: &mut AppContext<P>,
    input_rx: &mut mpsc::UnboundedReceiver<InputEvent>,
    sound: &mut impl SoundPlayer,
) -> SessionOutcome {
    let settings = SnakeSessionSettings::default();
    let broadcaster = LocalBroadcaster::new(shared_state.clone());

    loop {
        // keys pressed before the session must not leak into it, but a quit still counts
        if drain_stale_input(input_rx) {
            log!("Quit requested before session start");
            return SessionOutcome::Quit;
        }

        shared_state.set_state(AppState::new_game());
        let mut rng = SessionRng::from_random();
        log!("Starting session with seed {}", rng.seed());

        let outcome =
            SnakeSession::run(context, &settings, &mut rng, input_rx, &broadcaster, sound).await;
        log!("Session finished: {:?}", outcome);

        if outcome != SessionOutcome::Restart {
            return outcome;
        }
    }
}

/// Drops queued input. Returns true if one of the events was a quit.
fn drain_stale_input(input_rx: &mut mpsc::UnboundedReceiver<InputEvent>) -> bool {
    let mut quit = false;
    while let Ok(event) = input_rx.try_recv() {
        quit |= event == InputEvent::Quit;
    }
    quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SilentSoundPlayer;
    use common::games::snake::Direction;
    use common::storage::MemoryContentProvider;
    use common::HighScoreGateway;

    #[test]
    fn test_drain_keeps_quit_among_stale_keys() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(InputEvent::Turn(Direction::Up)).unwrap();
        tx.send(InputEvent::Quit).unwrap();
        tx.send(InputEvent::TogglePause).unwrap();
        assert!(drain_stale_input(&mut rx));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_drain_discards_other_keys() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(InputEvent::Restart).unwrap();
        tx.send(InputEvent::Turn(Direction::Left)).unwrap();
        assert!(!drain_stale_input(&mut rx));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_queued_with_restart_ends_game() {
        let shared_state = SharedState::new();
        let mut context =
            AppContext::load(HighScoreGateway::new(MemoryContentProvider::new(Some("0,1"))));
        let mut sound = SilentSoundPlayer::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        // the snake hits the right edge after 15 ticks; restart and a window close
        // arrive together once the game-over fade is over
        let driver = async {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            tx.send(InputEvent::Restart).unwrap();
            tx.send(InputEvent::Quit).unwrap();
        };
        let game = run_snake_game(&shared_state, &mut context, &mut rx, &mut sound);
        let (outcome, _) = tokio::join!(game, driver);

        assert_eq!(outcome, SessionOutcome::Quit);
        let AppState::InGame { snapshot, .. } = shared_state.get_state() else {
            panic!("expected in-game state");
        };
        assert!(snapshot.is_some_and(|s| s.game_over));
    }
}
