//! Right-side settings panel: style pickers plus Reset and Apply.

use super::super::style::{COLOR_TEXT_MUTED, COLOR_TEXT_PRIMARY};
use super::super::ArticleApp;
use articlestyle_core::{FieldValue, StyleField, StyleSelection};
use eframe::egui::{self, RichText};

/// Form button pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelAction {
    Apply,
    Reset,
}

/// Control rects from the panel's last layout, keyed by control name.
///
/// Buttons and radios are named by their label, dropdowns by field key.
#[derive(Debug, Clone, Default)]
pub(crate) struct PanelControls {
    targets: Vec<(&'static str, egui::Rect)>,
}

impl PanelControls {
    fn record(&mut self, name: &'static str, rect: egui::Rect) {
        self.targets.push((name, rect));
    }

    /// Rect of the control called `name`, if it was laid out.
    #[cfg(test)]
    pub(crate) fn rect(&self, name: &str) -> Option<egui::Rect> {
        self.targets
            .iter()
            .find(|(target, _)| *target == name)
            .map(|(_, rect)| *rect)
    }

    /// Name of the control under `pos`.
    pub(crate) fn hit(&self, pos: egui::Pos2) -> Option<&'static str> {
        self.targets
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(name, _)| *name)
    }
}

/// `Some(after)` when a picker moved away from `before`.
fn picked<T: FieldValue>(before: T, after: T) -> Option<T> {
    (before != after).then_some(after)
}

fn field_label(ui: &mut egui::Ui, field: StyleField) {
    ui.label(RichText::new(field.title()).small().color(COLOR_TEXT_MUTED));
}

fn option_combo<T: FieldValue>(
    ui: &mut egui::Ui,
    controls: &mut PanelControls,
    current: T,
) -> Option<T> {
    field_label(ui, T::FIELD);
    let mut choice = current;
    let combo = egui::ComboBox::from_id_salt(("params_panel", T::FIELD.key()))
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in T::all() {
                ui.selectable_value(&mut choice, option, option.label());
            }
        });
    controls.record(T::FIELD.key(), combo.response.rect);
    picked(current, choice)
}

fn radio_group<T: FieldValue>(
    ui: &mut egui::Ui,
    controls: &mut PanelControls,
    current: T,
) -> Option<T> {
    field_label(ui, T::FIELD);
    let mut choice = current;
    ui.horizontal(|ui| {
        for option in T::all() {
            let radio = ui.radio_value(&mut choice, option, option.label());
            controls.record(option.label(), radio.rect);
        }
    });
    picked(current, choice)
}

/// Draws every picker against `draft` and returns the edited copy.
fn pickers(
    ui: &mut egui::Ui,
    controls: &mut PanelControls,
    draft: &StyleSelection,
) -> StyleSelection {
    let mut edited = *draft;
    if let Some(value) = option_combo(ui, controls, draft.font_family) {
        edited.font_family = value;
    }
    ui.add_space(6.0);
    if let Some(value) = radio_group(ui, controls, draft.font_size) {
        edited.font_size = value;
    }
    ui.add_space(6.0);
    if let Some(value) = option_combo(ui, controls, draft.font_color) {
        edited.font_color = value;
    }
    ui.separator();
    if let Some(value) = option_combo(ui, controls, draft.background_color) {
        edited.background_color = value;
    }
    ui.add_space(6.0);
    if let Some(value) = option_combo(ui, controls, draft.content_width) {
        edited.content_width = value;
    }
    edited
}

impl ArticleApp {
    pub(crate) fn render_params_panel(&mut self, ctx: &egui::Context) {
        if !self.panel.is_open() {
            self.panel_rect = None;
            self.panel_controls = PanelControls::default();
            return;
        }

        let draft = *self.panel.draft();
        let mut action = None;
        let mut controls = PanelControls::default();
        let shown = egui::SidePanel::right("params_panel")
            .exact_width(self.panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Set parameters")
                        .heading()
                        .color(COLOR_TEXT_PRIMARY),
                );
                ui.add_space(12.0);

                let edited = pickers(ui, &mut controls, &draft);

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    let reset = ui.button("Reset");
                    controls.record("Reset", reset.rect);
                    if reset.clicked() {
                        action = Some(PanelAction::Reset);
                    }
                    let apply = ui.button("Apply");
                    controls.record("Apply", apply.rect);
                    if apply.clicked() {
                        action = Some(PanelAction::Apply);
                    }
                });
                edited
            });
        self.panel_rect = Some(shown.response.rect);
        self.panel_controls = controls;

        let edited = shown.inner;
        for field in draft.changed_fields(&edited) {
            match field {
                StyleField::FontFamily => self.panel.set_font_family(edited.font_family),
                StyleField::FontSize => self.panel.set_font_size(edited.font_size),
                StyleField::FontColor => self.panel.set_font_color(edited.font_color),
                StyleField::BackgroundColor => {
                    self.panel.set_background_color(edited.background_color)
                }
                StyleField::ContentWidth => self.panel.set_content_width(edited.content_width),
            }
        }

        if let Some(action) = action {
            self.handle_panel_action(action);
        }
    }
}
