use common::presentation::Rgba;

pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn black_overlay(alpha: u8) -> egui::Color32 {
    egui::Color32::from_black_alpha(alpha)
}
