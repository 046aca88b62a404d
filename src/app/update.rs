use crate::app::{handle_key, AppState};
use crate::event::AppEvent;

/// Update function following Elm Architecture.
/// Applies one event to the state in place.
/// No I/O - fully deterministic and unit testable.
pub fn update(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(key) => {
            tracing::trace!(code = ?key.code, "key");
            handle_key(state, key);
            // Cursor is solid right after a keystroke
            state.cursor_visible = true;
        }

        AppEvent::Resize { width, height } => {
            tracing::debug!(width, height, "terminal resized");
        }

        AppEvent::Tick(_) => {
            state.cursor_visible = !state.cursor_visible;
        }
    }
}
