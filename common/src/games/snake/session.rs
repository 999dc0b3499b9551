use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::app_context::AppContext;
use crate::games::{GameBroadcaster, RandomSource, SoundCue, SoundPlayer};
use crate::high_score::HighScoreRecord;
use crate::presentation::{LEVEL_UP_BANNER_DURATION, game_over_fade_duration};
use crate::storage::ContentProvider;
use crate::{log, log_warn};
use super::game_state::SnakeGameState;
use super::settings::SnakeSessionSettings;
use super::types::{GameEvent, InputEvent, SessionOutcome, TickOutcome};

pub struct SnakeSession;

impl SnakeSession {
    /// Plays one session to its end: restart, back to menu, or quit.
    /// A closed input channel counts as quit.
    pub async fn run<P, R, B, S>(
        context: &mut AppContext<P>,
        settings: &SnakeSessionSettings,
        rng: &mut R,
        input_rx: &mut mpsc::UnboundedReceiver<InputEvent>,
        broadcaster: &B,
        sound: &mut S,
    ) -> SessionOutcome
    where
        P: ContentProvider,
        R: RandomSource,
        B: GameBroadcaster,
        S: SoundPlayer,
    {
        let mut state = match SnakeGameState::new(settings.clone(), context.best(), rng) {
            Ok(state) => state,
            Err(e) => {
                log_warn!("Cannot start session: {}", e);
                return SessionOutcome::Menu;
            }
        };
        log!("Session started, best {}", context.best().to_record_string());

        broadcaster.broadcast_state(state.snapshot()).await;

        let mut period = state.tick_interval();
        let mut ticker = start_ticker(period);

        loop {
            tokio::select! {
                biased;

                event = input_rx.recv() => {
                    let Some(event) = event else {
                        return SessionOutcome::Quit;
                    };
                    match event {
                        InputEvent::Turn(direction) => {
                            state.propose_direction(direction);
                        }
                        InputEvent::TogglePause => {
                            let status = state.toggle_pause();
                            log!("Session {:?}", status);
                            broadcaster.broadcast_state(state.snapshot()).await;
                        }
                        InputEvent::ToggleAudio => toggle_music(sound),
                        InputEvent::Quit => return SessionOutcome::Quit,
                        InputEvent::Restart | InputEvent::ReturnToMenu => {}
                    }
                }

                _ = ticker.tick() => {
                    match state.tick(rng) {
                        TickOutcome::Skipped | TickOutcome::Moved | TickOutcome::Ate { level_up: false } => {
                            broadcaster.broadcast_state(state.snapshot()).await;
                        }
                        TickOutcome::Ate { level_up: true } => {
                            broadcaster.broadcast_state(state.snapshot()).await;
                            broadcaster.broadcast_event(GameEvent::LevelUp { level: state.level() }).await;
                            sound.play(SoundCue::LevelUp);
                            log!("Level {} reached, speed {}", state.level(), state.speed());

                            if hold(LEVEL_UP_BANNER_DURATION, input_rx, sound).await.is_err() {
                                return SessionOutcome::Quit;
                            }
                            ticker = start_ticker(state.tick_interval());
                        }
                        TickOutcome::GameOver(summary) => {
                            log!(
                                "Game over ({:?}): score {}, level {}",
                                summary.reason, summary.score, summary.level
                            );
                            if summary.new_best {
                                context.record_best(HighScoreRecord::new(summary.score, summary.level));
                            }
                            broadcaster.broadcast_state(state.snapshot()).await;
                            broadcaster.broadcast_event(GameEvent::GameOver(summary)).await;
                            sound.play(SoundCue::GameOver);

                            if hold(game_over_fade_duration(), input_rx, sound).await.is_err() {
                                return SessionOutcome::Quit;
                            }
                            return await_decision(input_rx, sound).await;
                        }
                    }
                }
            }

            if state.tick_interval() != period {
                period = state.tick_interval();
                ticker = start_ticker(period);
            }
        }
    }
}

fn start_ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn toggle_music(sound: &mut impl SoundPlayer) {
    let on = sound.toggle_music();
    log!("Music {}", if on { "on" } else { "off" });
}

struct QuitRequested;

/// Waits out an animation. Only quit and audio toggles get through.
async fn hold(
    duration: Duration,
    input_rx: &mut mpsc::UnboundedReceiver<InputEvent>,
    sound: &mut impl SoundPlayer,
) -> Result<(), QuitRequested> {
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => return Ok(()),
            event = input_rx.recv() => match event {
                None | Some(InputEvent::Quit) => return Err(QuitRequested),
                Some(InputEvent::ToggleAudio) => toggle_music(sound),
                Some(_) => {}
            },
        }
    }
}

async fn await_decision(
    input_rx: &mut mpsc::UnboundedReceiver<InputEvent>,
    sound: &mut impl SoundPlayer,
) -> SessionOutcome {
    loop {
        match input_rx.recv().await {
            Some(InputEvent::Restart) => return SessionOutcome::Restart,
            Some(InputEvent::ReturnToMenu) => return SessionOutcome::Menu,
            Some(InputEvent::ToggleAudio) => toggle_music(sound),
            Some(InputEvent::Quit) | None => return SessionOutcome::Quit,
            Some(_) => {}
        }
    }
}
