//! Escape and outside-press routing against the laid-out panel.

use super::*;

#[test]
fn escape_closes_open_panel_and_releases_listeners() {
    let mut harness = make_app();
    harness.open_panel();
    assert_eq!(harness.app.listeners().total(), 2);

    harness.frame(vec![escape_event()]);

    assert_eq!(harness.app.panel().state(), PanelState::Closed);
    assert_eq!(harness.app.listeners().total(), 0);
    assert_eq!(harness.app.view().revision(), 0);
}

#[test]
fn press_outside_panel_closes_without_committing() {
    let mut harness = make_app();
    harness.open_panel();
    harness
        .app
        .panel
        .set_font_color(FontColor::from_value("blue").expect("blue"));

    harness.frame(press_events(egui::pos2(100.0, 100.0)));

    assert!(!harness.app.panel().is_open());
    assert_eq!(harness.app.view().revision(), 0);
    assert_eq!(harness.app.view().committed(), &StyleSelection::default());
    assert_eq!(harness.app.panel().draft().font_color.value(), "blue");
    assert_eq!(harness.app.listeners().total(), 0);
}

#[test]
fn press_inside_panel_keeps_it_open() {
    let mut harness = make_app();
    harness.open_panel();
    let rect = harness.app.panel_rect.expect("panel rect");
    let inside = egui::pos2(rect.center().x, rect.max.y - 4.0);

    harness.frame(press_events(inside));

    assert!(harness.app.panel().is_open());
    assert_eq!(harness.app.listeners().total(), 2);
}

#[test]
fn press_on_toggle_region_is_not_an_outside_press() {
    let mut harness = make_app();
    harness.open_panel();
    let toggle = harness.app.toggle_rect.expect("toggle rect");

    harness.frame(press_events(toggle.center()));

    assert!(harness.app.panel().is_open());
}

#[test]
fn dismissal_input_is_ignored_while_closed() {
    let mut harness = make_app();
    harness.frame(Vec::new());

    let mut events = press_events(egui::pos2(100.0, 100.0));
    events.push(escape_event());
    harness.frame(events);

    assert_eq!(harness.app.panel().state(), PanelState::Closed);
    assert_eq!(harness.app.listeners().total(), 0);
}

#[test]
fn press_before_panel_layout_is_inert() {
    let mut harness = make_app();
    harness.frame(Vec::new());
    harness.app.toggle_panel();
    assert!(harness.app.panel_rect.is_none());

    harness.frame(press_events(egui::pos2(100.0, 100.0)));

    assert!(harness.app.panel().is_open());
    assert!(harness.app.panel_rect.is_some());
}
