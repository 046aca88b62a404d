use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::AppState;
use crate::model::{Row, Section, SectionKind, Theme};

/// Render one section as a bordered, titled list.
/// The border lights up when the selection cursor is inside the section, and
/// the list scrolls so the selected row stays visible.
pub fn render_section(frame: &mut Frame, area: Rect, state: &AppState, kind: SectionKind) {
    let section = state.store.section(kind);
    let items = build_section_items(state, section);

    let cursor = state.selected.and_then(|id| section.index_of(id));
    let has_cursor = cursor.is_some();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if has_cursor {
                    Theme::ACTIVE_BORDER
                } else {
                    Theme::PANEL_BORDER
                }))
                .title(section_title(section)),
        )
        .style(Style::default().fg(Theme::TEXT));

    let mut list_state = ListState::default().with_selected(cursor);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// "Events", or "Tasks 1/2" for sections with completion.
fn section_title(section: &Section) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", section.header()),
        Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD),
    )];

    if section.kind != SectionKind::Events && !section.is_empty() {
        let done = section.completed_count();
        spans.push(Span::styled(
            format!("{}/{} ", done, section.len()),
            Style::default().fg(if done == section.len() {
                Theme::SUCCESS
            } else {
                Theme::MUTED_TEXT
            }),
        ));
    }

    Line::from(spans)
}

/// Pure function: one list item per row, or a placeholder for empty sections.
fn build_section_items(state: &AppState, section: &Section) -> Vec<ListItem<'static>> {
    if section.is_empty() {
        let hint = match section.kind {
            SectionKind::Events => "Nothing scheduled".to_string(),
            kind => format!("No {} - press a to add", kind.header().to_lowercase()),
        };
        return vec![ListItem::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Theme::MUTED_TEXT),
        )))];
    }

    section
        .rows
        .iter()
        .map(|row| ListItem::new(build_row_line(state, row)))
        .collect()
}

/// Pure function: marker, icon, completion control, title or edit field, time.
pub fn build_row_line(state: &AppState, row: &Row) -> Line<'static> {
    let is_selected = state.is_selected(row.id);
    let is_editing = state.store.is_editing(row.id);

    let mut base = Style::default().bg(if is_selected {
        Theme::SELECTION_BG
    } else {
        Theme::BACKGROUND
    });
    if row.disabled {
        base = base.add_modifier(Modifier::DIM);
    }

    let tint = row
        .accent
        .map(Theme::accent_color)
        .unwrap_or_else(|| Theme::category_color(row.category()));
    let icon = row
        .icon
        .clone()
        .unwrap_or_else(|| row.category().default_icon().to_string());

    let mut spans = vec![
        Span::styled(if is_selected { "▸ " } else { "  " }, base.fg(Theme::ACCENT)),
        Span::styled(icon, base.fg(tint)),
        Span::styled(" ", base),
    ];

    if let Some(completed) = row.completed() {
        let (mark, color) = if completed {
            ("[x] ", Theme::SUCCESS)
        } else {
            ("[ ] ", Theme::MUTED_TEXT)
        };
        spans.push(Span::styled(mark, base.fg(color)));
    }

    if is_editing {
        spans.push(Span::styled(
            row.title.clone(),
            base.fg(Theme::ACCENT_WARM).add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::styled(
            if state.cursor_visible { "█" } else { " " },
            base.fg(Theme::ACCENT_WARM),
        ));
    } else if row.title.is_empty() {
        spans.push(Span::styled(
            "Untitled",
            base.fg(Theme::MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    } else {
        let mut title_style = base.fg(if row.accent.is_some() { tint } else { Theme::TEXT });
        if row.completed() == Some(true) {
            title_style = title_style
                .fg(Theme::MUTED_TEXT)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(row.title.clone(), title_style));
    }

    if let Some(time) = row.time().filter(|t| !t.is_empty()) {
        spans.push(Span::styled(
            format!("  {}", time),
            base.fg(Theme::TIME_LABEL),
        ));
    }

    Line::from(spans)
}
