//! Headless frame tests for panel routing and style application.

use super::*;
use articlestyle_core::{ContentWidth, FieldValue, FontColor, FontFamily, PanelState, StyleField};

mod dismiss_routing;

const SCREEN: egui::Vec2 = egui::vec2(1280.0, 800.0);

struct TestHarness {
    app: ArticleApp,
    ctx: egui::Context,
}

fn make_app() -> TestHarness {
    make_app_with(&Config::default())
}

fn make_app_with(config: &Config) -> TestHarness {
    TestHarness {
        app: ArticleApp::new(config, Article::sample()),
        ctx: egui::Context::default(),
    }
}

impl TestHarness {
    fn frame(&mut self, events: Vec<egui::Event>) {
        let app = &mut self.app;
        let _ = self.ctx.run(
            egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
                events,
                ..Default::default()
            },
            |ctx| app.show(ctx),
        );
    }

    /// Runs empty frames until areas have finished their sizing pass.
    fn settle(&mut self) {
        for _ in 0..3 {
            self.frame(Vec::new());
        }
    }

    /// Presses and releases the primary button at `pos` across two frames.
    fn click(&mut self, pos: egui::Pos2) {
        self.frame(press_events(pos));
        self.frame(vec![egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::default(),
        }]);
    }

    /// Opens the panel and lays it out once so its rect is known.
    fn open_panel(&mut self) {
        self.frame(Vec::new());
        self.app.toggle_panel();
        self.frame(Vec::new());
        assert!(self.app.panel.is_open());
        assert!(self.app.panel_rect.is_some());
    }
}

fn escape_event() -> egui::Event {
    egui::Event::Key {
        key: egui::Key::Escape,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

fn press_events(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::default(),
        },
    ]
}

#[test]
fn app_starts_closed_with_configured_selection() {
    let config = Config {
        initial_selection: StyleSelection {
            font_color: FontColor::from_value("gray").expect("gray"),
            ..StyleSelection::default()
        },
        ..Config::default()
    };
    let mut harness = make_app_with(&config);
    harness.frame(Vec::new());

    assert_eq!(harness.app.panel().state(), PanelState::Closed);
    assert_eq!(harness.app.view().committed(), &config.initial_selection);
    assert_eq!(harness.app.panel().draft(), &config.initial_selection);
    assert_eq!(harness.app.view().revision(), 0);
    assert!(harness.app.panel_rect.is_none());
    assert!(harness.app.toggle_rect.is_some());
}

#[test]
fn named_article_fonts_are_used_from_the_second_frame() {
    let mut harness = make_app();
    let mono = FontFamily::from_value("PT-mono").expect("mono");
    assert_eq!(
        harness.app.article_font_family(mono),
        egui::FontFamily::Monospace
    );
    harness.frame(Vec::new());
    harness.frame(Vec::new());
    assert_eq!(
        harness.app.article_font_family(mono),
        egui::FontFamily::Name("PT-mono".into())
    );
}

#[test]
fn open_panel_rect_has_configured_width() {
    let mut harness = make_app();
    harness.open_panel();
    let rect = harness.app.panel_rect.expect("panel rect");
    assert!(rect.max.x >= SCREEN.x - 1.0);
    assert!(rect.width() >= harness.app.panel_width - 1.0);
}
