//! Native egui app: the styled article plus the collapsible settings panel.

mod input;
mod style;
mod ui;

#[cfg(test)]
mod tests;

use articlestyle_core::{
    Article, Config, ListenerRegistry, PanelController, StyleConsumer, StyleSelection,
};
use eframe::egui;
use tracing::info;

use ui::params_panel::{PanelAction, PanelControls};

#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
#[doc = "Minimum enforced window size so the panel never covers the whole article."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

/// The article view: consumer of committed style selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleView {
    committed: StyleSelection,
    revision: u64,
}

impl ArticleView {
    fn new(initial: StyleSelection) -> Self {
        Self {
            committed: initial,
            revision: 0,
        }
    }

    /// Selection the article is currently rendered with.
    pub fn committed(&self) -> &StyleSelection {
        &self.committed
    }

    /// Number of selections applied since startup.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl StyleConsumer for ArticleView {
    fn apply_style(&mut self, selection: &StyleSelection) {
        let changed = self.committed.changed_fields(selection);
        self.committed = *selection;
        self.revision = self.revision.saturating_add(1);
        info!(
            revision = self.revision,
            changed = changed.len(),
            "article style updated"
        );
    }
}

/// Native egui application shell.
///
/// Owns the article view (committed state) and the panel controller (draft
/// and open state). Input is routed once per frame before any panel renders.
pub struct ArticleApp {
    article: Article,
    view: ArticleView,
    panel: PanelController,
    listeners: ListenerRegistry,
    panel_width: f32,
    panel_rect: Option<egui::Rect>,
    toggle_rect: Option<egui::Rect>,
    panel_controls: PanelControls,
    input_trace: bool,
    style_applied: bool,
    article_fonts_ready: bool,
    window_checked: bool,
}

impl ArticleApp {
    /// Construct the app from configuration and an already loaded article.
    ///
    /// The article starts with `config.initial_selection`, and the panel
    /// draft is seeded from that same selection.
    pub fn new(config: &Config, article: Article) -> Self {
        let listeners = ListenerRegistry::new();
        let view = ArticleView::new(config.initial_selection);
        let panel = PanelController::mount(listeners.clone(), *view.committed());
        info!(
            title = %article.title,
            words = article.word_count(),
            "article loaded"
        );
        Self {
            article,
            view,
            panel,
            listeners,
            panel_width: config.panel_width,
            panel_rect: None,
            toggle_rect: None,
            panel_controls: PanelControls::default(),
            input_trace: config.input_trace,
            style_applied: false,
            article_fonts_ready: false,
            window_checked: false,
        }
    }

    pub fn view(&self) -> &ArticleView {
        &self.view
    }

    pub fn panel(&self) -> &PanelController {
        &self.panel
    }

    /// Registry of global listeners attached by the panel.
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Toggle control activated.
    pub fn toggle_panel(&mut self) {
        self.panel.toggle();
    }

    /// Run one frame of UI: route dismissal input, then render toggle, panel, and article.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.route_dismiss_input(ctx);
        self.render_toggle(ctx);
        self.render_params_panel(ctx);
        self.render_article(ctx);
    }

    /// Applies a panel form action against the article view.
    pub(crate) fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Apply => self.panel.submit(&mut self.view),
            PanelAction::Reset => self.panel.reset(&mut self.view),
        };
    }
}

impl eframe::App for ArticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.window_checked {
            let min_size = egui::vec2(MIN_WINDOW_SIZE[0], MIN_WINDOW_SIZE[1]);
            let current_size = ctx.input(|input| {
                input
                    .viewport()
                    .inner_rect
                    .map(|rect| rect.size())
                    .unwrap_or(min_size)
            });
            if current_size.x < min_size.x || current_size.y < min_size.y {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(min_size));
            }
            self.window_checked = true;
        }
        self.show(ctx);
    }
}
