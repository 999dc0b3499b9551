use common::games::snake::{InputEvent, SessionOutcome};
use common::{log, AppContext, HighScoreGateway};
use tokio::sync::mpsc;
use crate::audio::AudioPlayer;
use crate::config::Config;
use crate::state::{AppState, MenuCommand, SharedState};

use super::snake_runner::run_snake_game;

/// Game thread entry point: menu commands in, sessions out, until quit.
pub async fn local_game_task(
    shared_state: SharedState,
    mut menu_rx: mpsc::UnboundedReceiver<MenuCommand>,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
    config: Config,
) {
    let mut context = AppContext::load(HighScoreGateway::from_file(&config.storage.high_score_file));
    let mut sound = AudioPlayer::new(&config.audio);
    log!(
        "High score {} (level {})",
        context.best().score,
        context.best().level
    );

    loop {
        let Some(command) = menu_rx.recv().await else {
            break;
        };

        match command {
            MenuCommand::StartGame => {
                let outcome =
                    run_snake_game(&shared_state, &mut context, &mut input_rx, &mut sound).await;
                if outcome == SessionOutcome::Quit || drain_stale_commands(&mut menu_rx) {
                    break;
                }
                shared_state.set_state(AppState::MainMenu);
            }
            MenuCommand::Quit => break,
        }
    }

    log!("Game thread finished");
    shared_state.set_finished();
}

/// Drops menu commands queued during a session. Returns true if one was a quit.
fn drain_stale_commands(menu_rx: &mut mpsc::UnboundedReceiver<MenuCommand>) -> bool {
    let mut quit = false;
    while let Ok(command) = menu_rx.try_recv() {
        quit |= command == MenuCommand::Quit;
    }
    quit
}
