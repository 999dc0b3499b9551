mod game;
mod menu;

pub use menu::MenuApp;


/// Layout was tuned for a 600 px tall window; fonts scale from there.
const REFERENCE_HEIGHT: f32 = 600.0;

/// Key presses of this frame in arrival order, auto-repeat excluded.
fn pressed_keys(ctx: &egui::Context) -> Vec<egui::Key> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => Some(*key),
                _ => None,
            })
            .collect()
    })
}

fn font_scale(rect: egui::Rect) -> f32 {
    rect.height() / REFERENCE_HEIGHT
}

fn draw_text_centered(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: impl ToString,
    size: f32,
    color: egui::Color32,
    y_offset: f32,
) {
    let scale = font_scale(rect);
    painter.text(
        rect.center() + egui::vec2(0.0, y_offset * scale),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::monospace(size * scale),
        color,
    );
}
