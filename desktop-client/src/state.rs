use common::games::snake::{InputEvent, SnakeSnapshot};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    StartGame,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpBanner {
    pub level: u32,
    pub started: Instant,
}

#[derive(Debug, Clone)]
pub enum AppState {
    MainMenu,
    InGame {
        snapshot: Option<SnakeSnapshot>,
        level_up: Option<LevelUpBanner>,
        game_over_started: Option<Instant>,
    },
}

impl AppState {
    pub fn new_game() -> Self {
        AppState::InGame {
            snapshot: None,
            level_up: None,
            game_over_started: None,
        }
    }
}

/// State shared between the egui thread and the game thread.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    context: Arc<Mutex<Option<egui::Context>>>,
    finished: Arc<Mutex<bool>>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::MainMenu)),
            context: Arc::new(Mutex::new(None)),
            finished: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().expect("state lock poisoned") = state;
        self.request_repaint();
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    pub fn update_snapshot(&self, new_snapshot: SnakeSnapshot) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if let AppState::InGame { snapshot, .. } = &mut *state {
            *snapshot = Some(new_snapshot);
        }
        drop(state);
        self.request_repaint();
    }

    pub fn start_level_up(&self, new_level: u32) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if let AppState::InGame { level_up, .. } = &mut *state {
            *level_up = Some(LevelUpBanner {
                level: new_level,
                started: Instant::now(),
            });
        }
        drop(state);
        self.request_repaint();
    }

    pub fn start_game_over(&self) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if let AppState::InGame { game_over_started, .. } = &mut *state {
            *game_over_started = Some(Instant::now());
        }
        drop(state);
        self.request_repaint();
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().expect("context lock poisoned").is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().expect("context lock poisoned") = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().expect("context lock poisoned").as_ref() {
            ctx.request_repaint();
        }
    }

    /// Marks the game thread as done; the window may close.
    pub fn set_finished(&self) {
        *self.finished.lock().expect("finished lock poisoned") = true;
        self.request_repaint();
    }

    pub fn is_finished(&self) -> bool {
        *self.finished.lock().expect("finished lock poisoned")
    }
}

#[derive(Clone)]
pub struct CommandSender {
    menu_tx: mpsc::UnboundedSender<MenuCommand>,
    input_tx: mpsc::UnboundedSender<InputEvent>,
}

impl CommandSender {
    pub fn new(
        menu_tx: mpsc::UnboundedSender<MenuCommand>,
        input_tx: mpsc::UnboundedSender<InputEvent>,
    ) -> Self {
        Self { menu_tx, input_tx }
    }

    pub fn send_menu(&self, command: MenuCommand) {
        let _ = self.menu_tx.send(command);
    }

    pub fn send_input(&self, event: InputEvent) {
        let _ = self.input_tx.send(event);
    }

    /// Reaches the game thread whether it is in the menu loop or in a session.
    pub fn request_quit(&self) {
        self.send_input(InputEvent::Quit);
        self.send_menu(MenuCommand::Quit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::Point;

    fn snapshot(score: u32) -> SnakeSnapshot {
        SnakeSnapshot {
            grid_size: 30,
            snake: vec![Point::new(15, 15)],
            food: Point::new(1, 1),
            walls: vec![],
            score,
            level: 1,
            speed: 12,
            best_score: 0,
            best_level: 1,
            paused: false,
            game_over: false,
        }
    }

    #[test]
    fn test_default_starts_in_menu() {
        let shared_state = SharedState::default();
        assert!(matches!(shared_state.get_state(), AppState::MainMenu));
        assert!(!shared_state.is_finished());
        assert!(!shared_state.has_context());
    }

    #[test]
    fn test_snapshot_ignored_in_menu() {
        let shared_state = SharedState::new();
        shared_state.update_snapshot(snapshot(3));
        assert!(matches!(shared_state.get_state(), AppState::MainMenu));
    }

    #[test]
    fn test_game_state_updates() {
        let shared_state = SharedState::new();
        shared_state.set_state(AppState::new_game());
        shared_state.update_snapshot(snapshot(3));
        shared_state.start_level_up(2);
        shared_state.start_game_over();

        let AppState::InGame { snapshot, level_up, game_over_started } = shared_state.get_state() else {
            panic!("expected in-game state");
        };
        assert_eq!(snapshot.map(|s| s.score), Some(3));
        assert_eq!(level_up.map(|b| b.level), Some(2));
        assert!(game_over_started.is_some());
    }

    #[test]
    fn test_request_quit_reaches_both_channels() {
        let (menu_tx, mut menu_rx) = mpsc::unbounded_channel();
        let (input_tx, mut input_rx) = mpsc::unbounded_channel();
        let sender = CommandSender::new(menu_tx, input_tx);

        sender.request_quit();

        assert_eq!(menu_rx.try_recv(), Ok(MenuCommand::Quit));
        assert_eq!(input_rx.try_recv(), Ok(InputEvent::Quit));
    }
}
