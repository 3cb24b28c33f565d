//! Mouse event handling.
//!
//! Mouse clicks are dispatched through the interaction registry, which
//! is populated by UI components during each render. Components define
//! their own clickable areas without modifying this handler.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let action = app.interactions.handle_click(mouse.column, mouse.row);

            // A queued dialog is modal: only its own choices are clickable
            if app.dialog().is_some() && !matches!(action, Action::SelectDialogChoice(_)) {
                return Action::None;
            }
            action
        }
        _ => Action::None,
    }
}
