//! Theme constants and one-time style/font application for the egui app.

use super::ArticleApp;
use articlestyle_core::{FieldValue, FontFamily};
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontDefinitions, FontId, Margin, Stroke,
    TextStyle, Visuals,
};
use tracing::{debug, warn};

pub(super) const COLOR_PANEL_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
pub(super) const COLOR_PANEL_SHADE: Color32 = Color32::from_rgb(0xF4, 0xF4, 0xF6);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1A);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6E, 0x76, 0x81);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xFE, 0xD1, 0x00);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0xFF, 0xE0, 0x4D);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0xD7, 0xD7, 0xD7);

/// Converts a catalog swatch into an egui color.
pub(super) fn swatch_color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Built-in font stack a catalog family renders with.
///
/// No font files ship with the app, so every catalog family is an alias for
/// one of egui's default stacks.
fn fallback_family(family: FontFamily) -> egui::FontFamily {
    if family.is_monospace() {
        egui::FontFamily::Monospace
    } else {
        egui::FontFamily::Proportional
    }
}

/// Registers one named egui family per catalog family.
fn install_article_families(fonts: &mut FontDefinitions) {
    for family in FontFamily::all() {
        let base = fallback_family(family);
        let stack: Vec<String> = fonts
            .families
            .get(&base)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|name| fonts.font_data.contains_key(name))
            .collect();
        if stack.is_empty() {
            warn!("no fonts available for {}; using {:?}", family.value(), base);
        }
        fonts
            .families
            .insert(egui::FontFamily::Name(family.value().into()), stack);
    }
}

impl ArticleApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            // Fonts passed to `set_fonts` take effect from the following pass.
            self.article_fonts_ready = true;
            return;
        }

        let mut fonts = FontDefinitions::default();
        install_article_families(&mut fonts);
        ctx.set_fonts(fonts);

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::light();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.panel_fill = COLOR_PANEL_BG;
        style.visuals.window_fill = COLOR_PANEL_BG;
        style.visuals.faint_bg_color = COLOR_PANEL_SHADE;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);

        style.visuals.widgets.inactive = WidgetVisuals {
            bg_fill: COLOR_PANEL_BG,
            weak_bg_fill: COLOR_PANEL_BG,
            bg_stroke: Stroke::new(1.0, COLOR_BORDER),
            corner_radius: CornerRadius::same(4),
            fg_stroke: Stroke::new(1.0, COLOR_TEXT_PRIMARY),
            expansion: 0.0,
        };
        style.visuals.widgets.hovered = WidgetVisuals {
            bg_fill: COLOR_ACCENT_HOVER,
            weak_bg_fill: COLOR_ACCENT_HOVER,
            bg_stroke: Stroke::new(1.0, COLOR_ACCENT),
            corner_radius: CornerRadius::same(4),
            fg_stroke: Stroke::new(1.0, COLOR_TEXT_PRIMARY),
            expansion: 0.5,
        };
        style.visuals.widgets.active = WidgetVisuals {
            bg_fill: COLOR_ACCENT,
            weak_bg_fill: COLOR_ACCENT,
            bg_stroke: Stroke::new(1.0, COLOR_ACCENT),
            corner_radius: CornerRadius::same(4),
            fg_stroke: Stroke::new(1.0, COLOR_TEXT_PRIMARY),
            expansion: 0.5,
        };
        style.visuals.widgets.open = style.visuals.widgets.active.clone();
        style.visuals.selection.bg_fill = COLOR_ACCENT;
        style.visuals.selection.stroke = Stroke::new(1.0, COLOR_TEXT_PRIMARY);

        style.spacing.window_margin = Margin::same(16);
        style.spacing.button_padding = egui::vec2(18.0, 10.0);
        style.spacing.item_spacing = egui::vec2(12.0, 10.0);
        style.spacing.interact_size.y = 36.0;
        style.spacing.combo_width = 320.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(31.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, egui::FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
        debug!("style applied");
    }

    /// Egui family for `family`, or its built-in stack until named fonts are live.
    pub(super) fn article_font_family(&self, family: FontFamily) -> egui::FontFamily {
        if !self.article_fonts_ready {
            return fallback_family(family);
        }
        egui::FontFamily::Name(family.value().into())
    }
}
