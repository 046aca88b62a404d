use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::AppState;
use crate::model::SectionKind;

use super::components::{render_footer, render_header, render_section};

/// Smallest section box that still shows one row between its borders.
const MIN_SECTION_HEIGHT: u16 = 3;

/// Render the day view: header, the three sections in fixed order, footer.
pub fn render_day(frame: &mut Frame, state: &AppState, area: Rect) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Sections
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let desired = SectionKind::ALL.map(|kind| section_height(state, kind));
    let focus = state
        .selected
        .and_then(|id| state.store.position(id))
        .and_then(|(kind, _)| SectionKind::ALL.iter().position(|k| *k == kind));
    let heights = fit_heights(desired, main_layout[1].height, focus);

    let mut constraints: Vec<Constraint> = heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(main_layout[1]);

    render_header(frame, main_layout[0], state);
    for (kind, slot) in SectionKind::ALL.iter().zip(sections.iter()) {
        if slot.height > 0 {
            render_section(frame, *slot, state, *kind);
        }
    }
    render_footer(frame, main_layout[2], state);
}

/// Rows plus borders; empty sections keep one line for their hint.
fn section_height(state: &AppState, kind: SectionKind) -> u16 {
    let rows = state.store.section(kind).len().max(1);
    u16::try_from(rows + 2).unwrap_or(u16::MAX)
}

/// Shrinks section heights until they fit `available` lines.
///
/// Sections without the cursor give up space first, down to one visible row,
/// then the focused section does. Only when even that does not fit are boxes
/// collapsed entirely, the focused one last.
fn fit_heights(desired: [u16; 3], available: u16, focus: Option<usize>) -> [u16; 3] {
    let mut heights = desired;
    let total = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));
    let mut overflow = total.saturating_sub(available);

    let others: Vec<usize> = (0..heights.len()).filter(|i| Some(*i) != focus).collect();
    let focused: Vec<usize> = focus.into_iter().collect();
    let passes = [
        (&others, MIN_SECTION_HEIGHT),
        (&focused, MIN_SECTION_HEIGHT),
        (&others, 0),
        (&focused, 0),
    ];

    for (indices, floor) in passes {
        for &i in indices.iter().rev() {
            if overflow == 0 {
                return heights;
            }
            let cut = heights[i].saturating_sub(floor).min(overflow);
            heights[i] -= cut;
            overflow -= cut;
        }
    }
    heights
}
