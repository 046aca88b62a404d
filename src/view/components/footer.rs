use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, Overlay};
use crate::model::Theme;

/// Render footer status bar with keybinding hints.
/// Shows different keybindings depending on edit mode and open overlay.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = build_footer_text(state);

    let footer = Paragraph::new(footer_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

/// Pure function: build footer text based on current mode.
fn build_footer_text(state: &AppState) -> Line<'static> {
    let hints: &[(&str, &str)] = if state.store.editing().is_some() {
        &[("type", ":title "), ("Bksp", ":erase "), ("Enter/Esc", ":done")]
    } else {
        match state.overlay {
            Overlay::AddItem => &[("t", ":task "), ("h", ":habit "), ("Esc", ":cancel")],
            Overlay::ConfirmDelete(_) => &[("y", ":delete "), ("any", ":cancel")],
            Overlay::Help => &[("any", ":close")],
            Overlay::None => &[
                ("q", ":quit "),
                ("j/k", ":move "),
                ("Enter", ":edit "),
                ("Space", ":done "),
                ("a", ":add "),
                ("d", ":delete "),
                ("?", ":help"),
            ],
        }
    };

    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(key.to_string(), Style::default().fg(Theme::INFO)),
                Span::raw(label.to_string()),
            ]
        })
        .collect();

    Line::from(spans)
}
