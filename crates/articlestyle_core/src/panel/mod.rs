//! Settings panel controller: open/close state machine plus the draft selection.
//!
//! The controller never owns committed state. Submit and reset hand a full
//! [`StyleSelection`] to a [`StyleConsumer`], which decides how to render it.

use crate::boundary::ContainsPoint;
use crate::listeners::{DismissListeners, ListenerRegistry};
use crate::options::{BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize};
use crate::selection::StyleSelection;
use tracing::{debug, info};


/// Visibility of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Effect of one event on [`PanelState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

/// Receiver of committed selections (the view being styled).
pub trait StyleConsumer {
    fn apply_style(&mut self, selection: &StyleSelection);
}

impl<F> StyleConsumer for F
where
    F: FnMut(&StyleSelection),
{
    fn apply_style(&mut self, selection: &StyleSelection) {
        (self)(selection)
    }
}

/// Owns the open/closed state and the draft copy of the style selection.
///
/// Dismissal listeners are held only while open and are released on every
/// path back to closed, including dropping the controller.
#[derive(Debug)]
pub struct PanelController {
    state: PanelState,
    draft: StyleSelection,
    registry: ListenerRegistry,
    listeners: Option<DismissListeners>,
}

impl PanelController {
    /// Mount a closed panel whose draft starts as the consumer's `current` selection.
    pub fn mount(registry: ListenerRegistry, current: StyleSelection) -> Self {
        debug!(draft = %current, "panel mounted");
        Self {
            state: PanelState::Closed,
            draft: current,
            registry,
            listeners: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// The in-progress selection shown by the pickers.
    pub fn draft(&self) -> &StyleSelection {
        &self.draft
    }

    /// Whether dismissal listeners are currently attached for this panel.
    pub fn is_listening(&self) -> bool {
        self.listeners.is_some()
    }

    /// Toggle control activated.
    pub fn toggle(&mut self) -> Transition {
        match self.state {
            PanelState::Closed => self.open(),
            PanelState::Open => self.close("toggle"),
        }
    }

    /// Escape pressed. Closes an open panel; otherwise ignored.
    pub fn escape_pressed(&mut self) -> Transition {
        if !self.is_open() {
            return Transition::Unchanged;
        }
        self.close("escape")
    }

    /// Pointer pressed at `point`.
    ///
    /// Closes an open panel when `point` falls outside `boundary`. A missing
    /// boundary (not laid out yet) makes the check inert.
    pub fn pointer_down<B>(&mut self, boundary: Option<&B>, point: B::Point) -> Transition
    where
        B: ContainsPoint + ?Sized,
    {
        if !self.is_open() {
            return Transition::Unchanged;
        }
        let Some(boundary) = boundary else {
            debug!("pointer down ignored: panel boundary unavailable");
            return Transition::Unchanged;
        };
        if boundary.contains_point(point) {
            return Transition::Unchanged;
        }
        self.close("outside click")
    }

    pub fn set_font_family(&mut self, value: FontFamily) {
        self.draft.font_family = value;
    }

    pub fn set_font_size(&mut self, value: FontSize) {
        self.draft.font_size = value;
    }

    pub fn set_font_color(&mut self, value: FontColor) {
        self.draft.font_color = value;
    }

    pub fn set_background_color(&mut self, value: BackgroundColor) {
        self.draft.background_color = value;
    }

    pub fn set_content_width(&mut self, value: ContentWidth) {
        self.draft.content_width = value;
    }

    /// Apply: hand the whole draft to `consumer` and close the panel.
    ///
    /// The form only exists while open, so a closed panel ignores submit.
    pub fn submit(&mut self, consumer: &mut impl StyleConsumer) -> Transition {
        if !self.is_open() {
            debug!("submit ignored: panel closed");
            return Transition::Unchanged;
        }
        info!(selection = %self.draft, "style applied");
        consumer.apply_style(&self.draft);
        self.close("submit")
    }

    /// Reset: restore the default draft and push it to `consumer` immediately.
    ///
    /// The open state is left as is, so this always reports
    /// [`Transition::Unchanged`].
    pub fn reset(&mut self, consumer: &mut impl StyleConsumer) -> Transition {
        self.draft = StyleSelection::default();
        info!(selection = %self.draft, "style reset to defaults");
        consumer.apply_style(&self.draft);
        Transition::Unchanged
    }

    fn open(&mut self) -> Transition {
        if self.is_open() {
            return Transition::Unchanged;
        }
        self.state = PanelState::Open;
        self.listeners = Some(DismissListeners::attach(&self.registry));
        debug!("panel opened");
        Transition::Opened
    }

    fn close(&mut self, cause: &'static str) -> Transition {
        if !self.is_open() {
            return Transition::Unchanged;
        }
        self.state = PanelState::Closed;
        self.listeners = None;
        debug!(cause, "panel closed");
        Transition::Closed
    }
}
