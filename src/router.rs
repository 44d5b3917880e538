use crate::enums::ViewKind;
use crate::layout::Layout;
use crate::layout::ScreenPos;

/// An in-plane position in a pane's data space, in voxel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePos {
    pub u: f64,
    pub v: f64,
}

/// A raw event delivered by the display substrate.
///
/// `plane` on a button press is the event position mapped into the hit
/// pane's data space; the substrate leaves it `None` when the press landed
/// outside every pane's data area.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyPress { key: String, screen: ScreenPos },
    Scroll { steps: f64, screen: ScreenPos },
    ButtonPress { screen: ScreenPos, plane: Option<PlanePos> },
}

/// What one event asks the session to do. Routing is pure; applying an
/// action is the only place state changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the cursor one slice along the pane's normal axis.
    StepSlice { view: ViewKind, delta: i64 },
    /// Jump the cursor's two in-plane coordinates for this pane.
    JumpCursor { view: ViewKind, plane: PlanePos },
    /// Adjust only this pane's local axis limits.
    Zoom { view: ViewKind, steps: f64 },
    Ignore,
}

/// Map an event to an action by hit-testing it against the pane layout.
///
/// Events outside every pane, presses without a data-space position, and
/// unrecognized keys all become [`Action::Ignore`]; nothing after startup is
/// allowed to fail the interaction loop.
pub fn route(layout: &Layout, event: &InputEvent) -> Action {
    match event {
        InputEvent::KeyPress { key, screen } => {
            let Some(view) = layout.view_at(*screen) else {
                return Action::Ignore;
            };
            match key.to_ascii_lowercase().as_str() {
                "pageup" => Action::StepSlice { view, delta: 1 },
                "pagedown" => Action::StepSlice { view, delta: -1 },
                other => {
                    log::debug!("ignoring key press {other:?} over {view:?}");
                    Action::Ignore
                }
            }
        }
        InputEvent::Scroll { steps, screen } => match layout.view_at(*screen) {
            Some(view) => Action::Zoom { view, steps: *steps },
            None => Action::Ignore,
        },
        InputEvent::ButtonPress { screen, plane } => {
            match (layout.view_at(*screen), plane) {
                (Some(view), Some(plane)) => Action::JumpCursor { view, plane: *plane },
                _ => Action::Ignore,
            }
        }
    }
}
