//! Headless integration tests driving the app through whole frames.

use articlestyle_core::{Article, Config, FieldValue, FontSize, PanelState, StyleSelection};
use articlestyle_gui::ArticleApp;
use eframe::egui;
use tempfile::TempDir;

fn run_frame(app: &mut ArticleApp, ctx: &egui::Context, events: Vec<egui::Event>) {
    let _ = ctx.run(
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 800.0),
            )),
            events,
            ..Default::default()
        },
        |ctx| app.show(ctx),
    );
}

fn escape() -> egui::Event {
    egui::Event::Key {
        key: egui::Key::Escape,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

#[test]
fn article_file_from_config_renders_and_panel_cycles() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("article.txt");
    std::fs::write(&path, "Lakeside Notes\n\nFirst paragraph.\n\nSecond paragraph.")
        .expect("write article");

    let config = Config::from_lookup(|name| match name {
        "ARTICLE_PATH" => Some(path.display().to_string()),
        "ARTICLE_FONT_SIZE" => Some("25".to_string()),
        _ => None,
    });
    let article = config.load_article().expect("load article");
    assert_eq!(article.title, "Lakeside Notes");

    let mut app = ArticleApp::new(&config, article);
    let ctx = egui::Context::default();
    run_frame(&mut app, &ctx, Vec::new());
    assert_eq!(
        app.view().committed().font_size,
        FontSize::from_value("25").expect("25")
    );

    for _ in 0..3 {
        app.toggle_panel();
        run_frame(&mut app, &ctx, Vec::new());
        assert_eq!(app.panel().state(), PanelState::Open);
        assert_eq!(app.listeners().total(), 2);

        run_frame(&mut app, &ctx, vec![escape()]);
        assert_eq!(app.panel().state(), PanelState::Closed);
        assert_eq!(app.listeners().total(), 0);
    }
    assert_eq!(app.view().revision(), 0);
}

#[test]
fn default_config_starts_with_sample_and_default_selection() {
    let config = Config::default();
    let mut app = ArticleApp::new(&config, Article::sample());
    let ctx = egui::Context::default();
    run_frame(&mut app, &ctx, Vec::new());

    assert_eq!(app.view().committed(), &StyleSelection::default());
    assert_eq!(app.panel().draft(), &StyleSelection::default());
    assert!(!app.panel().is_open());
}
