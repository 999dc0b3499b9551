use crate::colors::{black_overlay, to_color32};
use crate::state::{CommandSender, LevelUpBanner};
use common::games::snake::{Direction, InputEvent, Point, SnakeSnapshot};
use common::presentation::{
    self, CellPaint, GameOverFade, palette, GAME_OVER_HINT, GAME_OVER_OVERLAY_ALPHA, GAME_OVER_TITLE,
    PAUSE_HINT, PAUSE_OVERLAY_ALPHA, PAUSE_TITLE,
};
use std::time::{Duration, Instant};

use super::super::{draw_text_centered, font_scale, pressed_keys};

pub fn key_to_input(key: egui::Key) -> Option<InputEvent> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(InputEvent::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(InputEvent::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(InputEvent::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(InputEvent::Turn(Direction::Right)),
        egui::Key::P => Some(InputEvent::TogglePause),
        egui::Key::M => Some(InputEvent::ToggleAudio),
        egui::Key::R => Some(InputEvent::Restart),
        egui::Key::Q => Some(InputEvent::ReturnToMenu),
        _ => None,
    }
}

struct Board {
    origin: egui::Pos2,
    cell_size: f32,
    grid_size: i32,
}

impl Board {
    fn new(rect: egui::Rect, grid_size: i32) -> Self {
        let cell_size = rect.width().min(rect.height()) / grid_size.max(1) as f32;
        let board_size = cell_size * grid_size as f32;
        let origin = rect.center() - egui::vec2(board_size, board_size) / 2.0;
        Self {
            origin,
            cell_size,
            grid_size,
        }
    }

    fn cell_rect(&self, cell: Point) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(cell.x as f32, cell.y as f32) * self.cell_size,
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    fn draw_grid(&self, painter: &egui::Painter) {
        let stroke = egui::Stroke::new(1.0, to_color32(palette::GRAY));
        let extent = self.cell_size * self.grid_size as f32;
        for i in 0..self.grid_size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [
                    self.origin + egui::vec2(offset, 0.0),
                    self.origin + egui::vec2(offset, extent),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    self.origin + egui::vec2(0.0, offset),
                    self.origin + egui::vec2(extent, offset),
                ],
                stroke,
            );
        }
    }

    fn paint(&self, painter: &egui::Painter, cells: &[CellPaint]) {
        for paint in cells {
            painter.rect_filled(self.cell_rect(paint.cell), 0.0, to_color32(paint.color));
        }
    }
}

#[derive(Default)]
pub struct SnakeGameUi;

impl SnakeGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &Option<SnakeSnapshot>,
        level_up: Option<LevelUpBanner>,
        game_over_started: Option<Instant>,
        command_sender: &CommandSender,
    ) {
        self.handle_input(ctx, command_sender);

        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, to_color32(palette::BLACK));

        let Some(snapshot) = snapshot else {
            draw_text_centered(&painter, rect, "Loading...", 24.0, egui::Color32::WHITE, 0.0);
            return;
        };

        let board = Board::new(rect, snapshot.grid_size);
        let t = presentation::animation_time(Duration::from_secs_f64(ctx.input(|i| i.time)));

        if let Some(started) = game_over_started {
            self.render_game_over(&painter, rect, &board, snapshot, started.elapsed(), t);
            return;
        }

        if let Some(banner) =
            level_up.and_then(|b| presentation::level_up_banner(b.level, b.started.elapsed()))
        {
            draw_text_centered(&painter, rect, banner.text, 64.0, to_color32(banner.color), 0.0);
            return;
        }

        board.draw_grid(&painter);
        board.paint(&painter, &presentation::paint_board(snapshot, t));
        self.render_hud(&painter, rect, snapshot);

        if snapshot.paused {
            painter.rect_filled(rect, 0.0, black_overlay(PAUSE_OVERLAY_ALPHA));
            draw_text_centered(&painter, rect, PAUSE_TITLE, 64.0, egui::Color32::WHITE, 0.0);
            draw_text_centered(&painter, rect, PAUSE_HINT, 24.0, to_color32(palette::GRAY), 70.0);
        }
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        for key in pressed_keys(ctx) {
            if let Some(event) = key_to_input(key) {
                command_sender.send_input(event);
            }
        }
    }

    fn render_hud(&self, painter: &egui::Painter, rect: egui::Rect, snapshot: &SnakeSnapshot) {
        let scale = font_scale(rect);
        let [score_line, best_line] = presentation::hud_lines(snapshot);
        let font = egui::FontId::monospace(24.0 * scale);
        painter.text(
            rect.min + egui::vec2(10.0, 10.0) * scale,
            egui::Align2::LEFT_TOP,
            score_line,
            font.clone(),
            egui::Color32::WHITE,
        );
        painter.text(
            rect.min + egui::vec2(10.0, 40.0) * scale,
            egui::Align2::LEFT_TOP,
            best_line,
            font,
            to_color32(palette::ORANGE),
        );
    }

    fn render_game_over(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        board: &Board,
        snapshot: &SnakeSnapshot,
        elapsed: Duration,
        t: f32,
    ) {
        board.draw_grid(painter);
        let red = to_color32(palette::RED);

        match presentation::game_over_fade(elapsed) {
            GameOverFade::Fading {
                snake_alpha,
                dim_alpha,
            } => {
                board.paint(painter, &presentation::paint_fading_board(snapshot, snake_alpha));
                painter.rect_filled(rect, 0.0, black_overlay(dim_alpha));
                draw_text_centered(painter, rect, GAME_OVER_TITLE, 56.0, red, -40.0);
            }
            GameOverFade::Finished => {
                board.paint(painter, &presentation::paint_board(snapshot, t));
                self.render_hud(painter, rect, snapshot);
                painter.rect_filled(rect, 0.0, black_overlay(GAME_OVER_OVERLAY_ALPHA));
                draw_text_centered(painter, rect, GAME_OVER_TITLE, 56.0, red, -40.0);
                draw_text_centered(
                    painter,
                    rect,
                    presentation::game_over_result_line(snapshot),
                    26.0,
                    egui::Color32::WHITE,
                    10.0,
                );
                draw_text_centered(painter, rect, GAME_OVER_HINT, 22.0, egui::Color32::WHITE, 60.0);
            }
        }
    }
}
