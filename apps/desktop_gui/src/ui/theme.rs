use eframe::egui;
use monitor_core::ResultPanel;
use shared::domain::Rgb;

/// Alpha applied to band colors behind the result tiles (0x1A ≈ 10%).
pub const TILE_TINT_ALPHA: u8 = 0x1A;

pub const INK: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const MUTED_INK: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const ACTION_FILL: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

pub fn band_color(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn band_tint(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, TILE_TINT_ALPHA)
}

/// Color of the strip under the header: the band color, or white with no result.
pub fn strip_color(panel: Option<&ResultPanel>) -> egui::Color32 {
    band_color(panel.map(|p| p.info.color).unwrap_or(Rgb::WHITE))
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn monitor_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = egui::Color32::WHITE;
    visuals.window_fill = egui::Color32::WHITE;
    visuals.override_text_color = Some(INK);
    visuals.selection.bg_fill = lighten_color(ACTION_FILL, 0.8);
    visuals
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
