//! Dismissal input routing for the open settings panel.

use super::ArticleApp;
use articlestyle_core::{ContainsPoint, ListenerKind, Transition};
use eframe::egui;
use tracing::info;

/// Screen region that counts as "inside" the panel for outside-click checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelRegion(pub(crate) egui::Rect);

impl ContainsPoint for PanelRegion {
    type Point = egui::Pos2;

    fn contains_point(&self, point: egui::Pos2) -> bool {
        self.0.contains(point)
    }
}

/// Positions of primary-button presses in this frame's events.
fn primary_presses(events: &[egui::Event]) -> Vec<egui::Pos2> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } => Some(*pos),
            _ => None,
        })
        .collect()
}

impl ArticleApp {
    /// Regions laid out last frame that keep the panel open when pressed.
    ///
    /// Returns `None` until the panel itself has been laid out.
    pub(super) fn dismiss_boundary(&self) -> Option<Vec<PanelRegion>> {
        let panel = self.panel_rect?;
        let mut regions = vec![PanelRegion(panel)];
        regions.extend(self.toggle_rect.map(PanelRegion));
        Some(regions)
    }

    /// Feeds Escape and pointer presses to the panel while its listeners are attached.
    pub(super) fn route_dismiss_input(&mut self, ctx: &egui::Context) {
        if !self.listeners.is_listening(ListenerKind::KeyDown)
            && !self.listeners.is_listening(ListenerKind::PointerDown)
        {
            return;
        }

        let (escape, presses) = ctx.input(|input| {
            (
                input.key_pressed(egui::Key::Escape),
                primary_presses(&input.events),
            )
        });

        if escape && self.listeners.is_listening(ListenerKind::KeyDown) {
            let transition = self.panel.escape_pressed();
            if self.input_trace {
                info!(?transition, "escape routed to panel");
            }
            if transition == Transition::Closed {
                return;
            }
        }

        if presses.is_empty() || !self.listeners.is_listening(ListenerKind::PointerDown) {
            return;
        }
        // Dropdown lists render outside the panel rect.
        if egui::Popup::is_any_open(ctx) {
            if self.input_trace {
                info!(presses = presses.len(), "pointer down ignored: dropdown open");
            }
            return;
        }

        let boundary = self.dismiss_boundary();
        for pos in presses {
            let transition = self.panel.pointer_down(boundary.as_deref(), pos);
            if self.input_trace {
                info!(
                    x = pos.x,
                    y = pos.y,
                    target = self.panel_controls.hit(pos).unwrap_or("-"),
                    ?transition,
                    "pointer down routed to panel"
                );
            }
            if transition == Transition::Closed {
                break;
            }
        }
    }
}
