use ratatui::Frame;

use crate::app::state::{AppState, Overlay};

pub mod components;
pub mod day;

pub use day::render_day;

/// Main view dispatcher.
/// Draws the day view, then whichever overlay is open on top of it.
pub fn render(state: &AppState, frame: &mut Frame) {
    day::render_day(frame, state, frame.area());

    match state.overlay {
        Overlay::None => {}
        Overlay::AddItem => components::render_add_item_popup(frame),
        Overlay::ConfirmDelete(id) => components::render_confirm_delete(frame, state, id),
        Overlay::Help => components::render_help_overlay(frame),
    }
}
