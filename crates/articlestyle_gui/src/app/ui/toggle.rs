//! Floating arrow button that opens and closes the settings panel.

use super::super::style::{COLOR_ACCENT, COLOR_TEXT_PRIMARY};
use super::super::ArticleApp;
use eframe::egui::{self, RichText};

const TOGGLE_MARGIN: f32 = 16.0;
const TOGGLE_SIZE: f32 = 40.0;

/// Arrow glyph: points at the panel when closed, away from it when open.
fn toggle_glyph(open: bool) -> &'static str {
    if open {
        "▶"
    } else {
        "◀"
    }
}

impl ArticleApp {
    pub(crate) fn render_toggle(&mut self, ctx: &egui::Context) {
        let open = self.panel.is_open();
        // Fixed-width panel, so its left edge is known before it is laid out.
        let edge = if open { self.panel_width } else { 0.0 };
        let area = egui::Area::new(egui::Id::new("params_panel_toggle"))
            .anchor(
                egui::Align2::RIGHT_TOP,
                egui::vec2(-(edge + TOGGLE_MARGIN), TOGGLE_MARGIN),
            )
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.add_sized(
                    [TOGGLE_SIZE, TOGGLE_SIZE],
                    egui::Button::new(
                        RichText::new(toggle_glyph(open))
                            .size(18.0)
                            .color(COLOR_TEXT_PRIMARY),
                    )
                    .fill(COLOR_ACCENT),
                )
                .on_hover_text(if open { "Hide settings" } else { "Show settings" })
                .clicked()
            });
        self.toggle_rect = Some(area.response.rect);
        if area.inner {
            self.toggle_panel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_glyph;

    #[test]
    fn glyph_flips_with_open_state() {
        assert_ne!(toggle_glyph(true), toggle_glyph(false));
    }
}
