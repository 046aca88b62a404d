use chrono::NaiveDate;

use crate::model::{demo_store, planner_day, PlannerStore, RowId};

/// Main application state.
/// Updated via `update(&mut state, event)`; the store owns the planner data,
/// everything else here is presentation-only.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Sections, rows and the editing row
    pub store: PlannerStore,

    /// The day shown in the header
    pub day: NaiveDate,

    /// Row the key commands act on
    pub selected: Option<RowId>,

    /// Modal currently covering the day view
    pub overlay: Overlay,

    /// Blink phase of the edit cursor, flipped on every tick
    pub cursor_visible: bool,

    /// Signal to quit the application
    pub should_quit: bool,
}

/// Modal surfaces shown on top of the day view. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,

    /// "Add new item" chooser offering Task or Habit
    AddItem,

    /// Destructive delete awaiting confirmation
    ConfirmDelete(RowId),

    /// Keybinding help
    Help,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Demo-seeded state with the cursor on the first row
    pub fn new() -> Self {
        Self::with_store(demo_store())
    }

    /// State over an arbitrary store
    pub fn with_store(store: PlannerStore) -> Self {
        let selected = store.row_ids().first().copied();
        Self {
            store,
            day: planner_day(),
            selected,
            overlay: Overlay::None,
            cursor_visible: true,
            should_quit: false,
        }
    }

    /// State with no rows at all
    pub fn empty() -> Self {
        Self::with_store(PlannerStore::new())
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected == Some(id)
    }

    /// Flat index of the selected row in display order
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.store.row_ids().iter().position(|id| *id == selected)
    }
}
