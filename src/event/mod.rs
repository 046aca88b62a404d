use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

/// All events that can occur in the application.
/// Sourced from keyboard input and the tick timer.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Terminal was resized; the next frame redraws at the new size
    Resize { width: u16, height: u16 },

    /// Timer tick (edit cursor blink)
    Tick(DateTime<Utc>),
}
