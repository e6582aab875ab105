//! Central article area rendered with the committed style selection.

use super::super::style::swatch_color;
use super::super::ArticleApp;
use eframe::egui::{self, FontId, RichText};

/// Heading size relative to body text.
const TITLE_SCALE: f32 = 1.6;

impl ArticleApp {
    pub(crate) fn render_article(&mut self, ctx: &egui::Context) {
        let selection = *self.view.committed();
        let family = self.article_font_family(selection.font_family);
        let size = selection.font_size.px();
        let text_color = swatch_color(selection.font_color.rgb());
        let fill = swatch_color(selection.background_color.rgb());
        let max_width = selection.content_width.px();

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(fill))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(max_width);
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(width);
                            ui.add_space(24.0);
                            ui.label(
                                RichText::new(&self.article.title)
                                    .font(FontId::new(size * TITLE_SCALE, family.clone()))
                                    .color(text_color)
                                    .strong(),
                            );
                            ui.add_space(size);
                            for paragraph in &self.article.paragraphs {
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(paragraph)
                                            .font(FontId::new(size, family.clone()))
                                            .color(text_color),
                                    )
                                    .wrap(),
                                );
                                ui.add_space(size * 0.75);
                            }
                        });
                    });
            });
    }
}
