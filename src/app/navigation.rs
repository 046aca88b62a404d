use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppState, Overlay};
use crate::model::RowId;

/// Pure key handling.
/// Translates a keyboard event into store operations and cursor movement.
/// No I/O, fully unit testable.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Inline text entry swallows everything while a row is editing
    if let Some(id) = state.store.editing() {
        handle_edit_key(state, id, key);
        return;
    }

    match state.overlay {
        Overlay::Help => {
            state.overlay = Overlay::None;
            return;
        }
        Overlay::AddItem => {
            handle_add_item_key(state, key);
            return;
        }
        Overlay::ConfirmDelete(id) => {
            handle_confirm_delete_key(state, id, key);
            return;
        }
        Overlay::None => {}
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_selection(state, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(state, -1),
        KeyCode::Char('g') | KeyCode::Home => select_edge(state, false),
        KeyCode::Char('G') | KeyCode::End => select_edge(state, true),
        KeyCode::Enter => tap_selected(state),
        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_selected_completed(state),
        KeyCode::Char('d') | KeyCode::Delete => request_delete(state),
        KeyCode::Char('a') => state.overlay = Overlay::AddItem,
        KeyCode::Char('?') => state.overlay = Overlay::Help,
        _ => {}
    }
}

/// Text entry for the editing row. Enter or Esc commits.
fn handle_edit_key(state: &mut AppState, id: RowId, key: KeyEvent) {
    let Some(title) = state.store.row(id).map(|r| r.title.clone()) else {
        // Editing id no longer resolves; drop out of edit mode
        state.store.toggle_edit(id);
        return;
    };

    match key.code {
        KeyCode::Enter | KeyCode::Esc => state.store.toggle_edit(id),
        KeyCode::Backspace => {
            let mut title = title;
            if title.pop().is_some() {
                state.store.set_title(id, title);
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut title = title;
            title.push(c);
            state.store.set_title(id, title);
        }
        _ => {}
    }
}

/// Two-choice "add new item" modal. Either choice dismisses it.
fn handle_add_item_key(state: &mut AppState, key: KeyEvent) {
    let added = match key.code {
        KeyCode::Char('t') | KeyCode::Char('1') => Some(state.store.add_task()),
        KeyCode::Char('h') | KeyCode::Char('2') => Some(state.store.add_habit()),
        KeyCode::Esc | KeyCode::Char('q') => {
            state.overlay = Overlay::None;
            None
        }
        _ => None,
    };

    if let Some(id) = added {
        state.overlay = Overlay::None;
        state.selected = Some(id);
    }
}

/// Only `y` confirms; any other key cancels.
fn handle_confirm_delete_key(state: &mut AppState, id: RowId, key: KeyEvent) {
    state.overlay = Overlay::None;
    if key.code != KeyCode::Char('y') {
        tracing::debug!(%id, "delete cancelled");
        return;
    }

    let before = state.store.row_ids();
    let index = before.iter().position(|r| *r == id);
    if state.store.delete_row(id).is_none() {
        return;
    }

    if state.selected == Some(id) {
        let after = state.store.row_ids();
        state.selected = match index {
            Some(idx) if !after.is_empty() => after.get(idx.min(after.len() - 1)).copied(),
            _ => None,
        };
    }
}

/// Move the cursor by `delta` rows in display order, clamped to the ends.
fn move_selection(state: &mut AppState, delta: isize) {
    let ids = state.store.row_ids();
    if ids.is_empty() {
        state.selected = None;
        return;
    }

    let next = match state.selected_index() {
        Some(current) => current.saturating_add_signed(delta).min(ids.len() - 1),
        None => 0,
    };
    state.selected = Some(ids[next]);
}

fn select_edge(state: &mut AppState, last: bool) {
    let ids = state.store.row_ids();
    state.selected = if last { ids.last() } else { ids.first() }.copied();
}

/// Equivalent of tapping a row: enter edit mode on it.
fn tap_selected(state: &mut AppState) {
    let Some(row) = state.selected.and_then(|id| state.store.row(id)) else {
        return;
    };
    if row.disabled {
        return;
    }
    let id = row.id;
    state.store.toggle_edit(id);
}

fn toggle_selected_completed(state: &mut AppState) {
    let Some(row) = state.selected.and_then(|id| state.store.row(id)) else {
        return;
    };
    if row.disabled {
        return;
    }
    if let Some(completed) = row.completed() {
        let id = row.id;
        state.store.set_completed(id, !completed);
    }
}

/// Opens the delete confirmation, for enabled tasks and habits only.
fn request_delete(state: &mut AppState) {
    let Some(row) = state.selected.and_then(|id| state.store.row(id)) else {
        return;
    };
    if row.disabled || !row.is_checkable() {
        return;
    }
    state.overlay = Overlay::ConfirmDelete(row.id);
}
