use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::theme::Theme;

use super::popup::centered_rect;

/// Render the help overlay.
/// Lists all keybindings grouped by category.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Build help text with keybindings grouped by category.
fn build_help_text() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        heading("MOVING"),
        Line::from("  j / k       - Next / previous row"),
        Line::from("  g / G       - First / last row"),
        Line::from(""),
        heading("ROWS"),
        Line::from("  Enter       - Edit the selected row's title"),
        Line::from("  Space / x   - Mark task or habit done / not done"),
        Line::from("  d           - Delete task or habit (asks first)"),
        Line::from("  a           - Add a task or habit"),
        Line::from(""),
        heading("EDITING"),
        Line::from("  type        - Change the title"),
        Line::from("  Backspace   - Erase last character"),
        Line::from("  Enter / Esc - Finish editing"),
        Line::from(""),
        heading("OTHER"),
        Line::from("  ?           - Toggle this help"),
        Line::from("  q           - Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_help_overlay_does_not_panic() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render_help_overlay(frame)).unwrap();
    }

    #[test]
    fn help_mentions_every_row_action() {
        let text: String = build_help_text()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for needle in ["Enter", "Space", "Delete", "Add", "Quit"] {
            assert!(text.contains(needle), "missing {}", needle);
        }
    }
}
