use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::model::{RowId, Theme};

use super::popup::centered_fixed;

/// Render the destructive delete confirmation for `id`.
pub fn render_confirm_delete(frame: &mut Frame, state: &AppState, id: RowId) {
    let Some(row) = state.store.row(id) else {
        return; // Row vanished - nothing to confirm
    };

    let area = centered_fixed(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let title = if row.title.is_empty() {
        "Untitled".to_string()
    } else {
        row.title.clone()
    };

    let text = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::from(Span::styled(
            "y to delete, any other key to keep",
            Style::default().fg(Theme::MUTED_TEXT),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Delete ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ERROR)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(Theme::SURFACE).fg(Theme::TEXT));

    frame.render_widget(paragraph, area);
}
