use super::game::SnakeGameUi;
use super::{draw_text_centered, font_scale, pressed_keys};
use crate::colors::to_color32;
use crate::state::{AppState, CommandSender, MenuCommand, SharedState};
use common::log;
use common::presentation::palette;
use std::time::{Duration, Instant};

const MENU_REPAINT_INTERVAL: Duration = Duration::from_millis(83);

const CONTROLS: [&str; 8] = [
    "Arrow Keys / W A S D  -> Move Snake",
    "P -> Pause / Resume",
    "M -> Toggle Background Music On/Off",
    "R -> Restart (when Game Over)",
    "Q -> Return to Menu (when Game Over)",
    "",
    "Eat food to grow and score points.",
    "Every 5 points = Level Up (new walls + speed).",
];

const FOOTER_HINT: &str = "P: Pause/Resume   |   M: Toggle Music   |   R: Restart on Game Over";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    StartGame,
    ViewControls,
    Quit,
}

impl MenuOption {
    const ALL: [MenuOption; 3] = [MenuOption::StartGame, MenuOption::ViewControls, MenuOption::Quit];

    fn label(&self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::ViewControls => "View Controls",
            MenuOption::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuScreen {
    Main,
    Controls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    None,
    Start,
    Quit,
}

struct MainMenu {
    selected: usize,
    screen: MenuScreen,
}

impl MainMenu {
    fn new() -> Self {
        Self {
            selected: 0,
            screen: MenuScreen::Main,
        }
    }

    fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    fn handle_key(&mut self, key: egui::Key) -> MenuAction {
        let count = MenuOption::ALL.len();
        match (self.screen, key) {
            (MenuScreen::Controls, egui::Key::Escape) => {
                self.screen = MenuScreen::Main;
                MenuAction::None
            }
            (MenuScreen::Controls, _) => MenuAction::None,
            (MenuScreen::Main, egui::Key::ArrowUp) => {
                self.selected = (self.selected + count - 1) % count;
                MenuAction::None
            }
            (MenuScreen::Main, egui::Key::ArrowDown) => {
                self.selected = (self.selected + 1) % count;
                MenuAction::None
            }
            (MenuScreen::Main, egui::Key::Enter) => match self.selected_option() {
                MenuOption::StartGame => MenuAction::Start,
                MenuOption::ViewControls => {
                    self.screen = MenuScreen::Controls;
                    MenuAction::None
                }
                MenuOption::Quit => MenuAction::Quit,
            },
            (MenuScreen::Main, _) => MenuAction::None,
        }
    }

    fn render(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, to_color32(palette::BLACK));

        let white = egui::Color32::WHITE;
        let gray = to_color32(palette::GRAY);

        match self.screen {
            MenuScreen::Main => {
                draw_text_centered(&painter, rect, "SNAKE GAME PRO", 48.0, to_color32(palette::ORANGE), -120.0);
                for (i, option) in MenuOption::ALL.iter().enumerate() {
                    let color = if i == self.selected {
                        to_color32(palette::YELLOW)
                    } else {
                        white
                    };
                    draw_text_centered(&painter, rect, option.label(), 32.0, color, i as f32 * 60.0 - 20.0);
                }
                draw_text_centered(&painter, rect, "Use Up/Down to move, Enter to select", 20.0, gray, 200.0);
                painter.text(
                    egui::pos2(rect.center().x, rect.max.y - 30.0 * font_scale(rect)),
                    egui::Align2::CENTER_CENTER,
                    FOOTER_HINT,
                    egui::FontId::monospace(16.0 * font_scale(rect)),
                    gray,
                );
            }
            MenuScreen::Controls => {
                draw_text_centered(&painter, rect, "CONTROLS", 44.0, to_color32(palette::ORANGE), -160.0);
                for (i, line) in CONTROLS.iter().enumerate() {
                    draw_text_centered(&painter, rect, line, 20.0, white, -40.0 + i as f32 * 30.0);
                }
                draw_text_centered(&painter, rect, "Press ESC to return", 20.0, gray, 200.0);
            }
        }
    }
}

pub struct MenuApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    shutdown_timeout: Duration,
    closing: Option<Instant>,
    menu: MainMenu,
    game_ui: SnakeGameUi,
}

impl MenuApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        shutdown_timeout: Duration,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            shutdown_timeout,
            closing: None,
            menu: MainMenu::new(),
            game_ui: SnakeGameUi::new(),
        }
    }

    fn begin_shutdown(&mut self) {
        if self.closing.is_none() {
            log!("Shutting down");
            self.command_sender.request_quit();
            self.closing = Some(Instant::now());
        }
    }

    fn shutdown_complete(&self) -> bool {
        self.shared_state.is_finished()
            || self
                .closing
                .is_some_and(|started| started.elapsed() >= self.shutdown_timeout)
    }

    fn handle_menu_keys(&mut self, ctx: &egui::Context) {
        for key in pressed_keys(ctx) {
            match self.menu.handle_key(key) {
                MenuAction::Start => {
                    self.command_sender.send_menu(MenuCommand::StartGame);
                    break;
                }
                MenuAction::Quit => {
                    self.begin_shutdown();
                    break;
                }
                MenuAction::None => {}
            }
        }
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.shutdown_complete() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.begin_shutdown();
        }

        if self.shutdown_complete() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let current_state = self.shared_state.get_state();
        let in_game = matches!(current_state, AppState::InGame { .. });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(to_color32(palette::BLACK)))
            .show(ctx, |ui| match current_state {
                AppState::MainMenu => {
                    if self.closing.is_none() {
                        self.handle_menu_keys(ctx);
                    }
                    self.menu.render(ui);
                }
                AppState::InGame {
                    snapshot,
                    level_up,
                    game_over_started,
                } => {
                    self.game_ui.render_game(
                        ui,
                        ctx,
                        &snapshot,
                        level_up,
                        game_over_started,
                        &self.command_sender,
                    );
                }
            });

        if in_game || self.closing.is_some() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(MENU_REPAINT_INTERVAL);
        }
    }
}
