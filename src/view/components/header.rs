use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::{SectionKind, Theme};

/// Render header bar.
/// Shows: planner name, the fixed day, open task/habit counts, edit indicator.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header_text = build_header_text(state);

    let header = Paragraph::new(header_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
fn build_header_text(state: &AppState) -> Line<'static> {
    let open = [SectionKind::Tasks, SectionKind::Habits]
        .iter()
        .map(|kind| {
            let section = state.store.section(*kind);
            section.len() - section.completed_count()
        })
        .sum::<usize>();

    let mut spans = vec![
        Span::styled("Day Planner", Style::default().fg(Theme::ACCENT)),
        Span::raw("  "),
        Span::styled(
            state.day.format("%A, %B %-d %Y").to_string(),
            Style::default().fg(Theme::INFO),
        ),
        Span::styled(
            format!("  {} open", open),
            Style::default().fg(if open == 0 {
                Theme::SUCCESS
            } else {
                Theme::MUTED_TEXT
            }),
        ),
    ];

    if state.store.editing().is_some() {
        spans.push(Span::styled(
            "  EDITING",
            Style::default().fg(Theme::ACCENT_WARM),
        ));
    }

    Line::from(spans)
}
