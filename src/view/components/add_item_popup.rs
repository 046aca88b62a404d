use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{Category, Theme};

use super::popup::centered_fixed;

/// Render the "add new item" chooser.
/// Exactly two choices; events are never added from here.
pub fn render_add_item_popup(frame: &mut Frame) {
    let area = centered_fixed(32, 6, frame.area());

    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(build_choices())
        .block(
            Block::default()
                .title(" Add new item ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::SURFACE).fg(Theme::TEXT));

    frame.render_widget(paragraph, area);
}

fn build_choices() -> Vec<Line<'static>> {
    let choice = |key: &'static str, category: Category, label: &'static str| {
        Line::from(vec![
            Span::styled(
                format!("  {} ", key),
                Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", category.default_icon()),
                Style::default().fg(Theme::category_color(category)),
            ),
            Span::raw(label),
        ])
    };

    vec![
        choice("t", Category::Task, "Task"),
        choice("h", Category::Habit, "Habit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Esc to cancel",
            Style::default().fg(Theme::MUTED_TEXT),
        )),
    ]
}
