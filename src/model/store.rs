//! Section/Row store for the day view.
//!
//! Holds the three fixed sections and the single "currently editing" row.
//! Every operation addresses rows by identifier; an unknown identifier is a
//! no-op, never an error.

use serde::Serialize;

use crate::error::PlannerError;

use super::ids::{IdAllocator, RowId};
use super::row::Row;
use super::section::{Section, SectionKind};

#[derive(Debug, Clone, Serialize)]
pub struct PlannerStore {
    sections: [Section; 3],
    editing: Option<RowId>,
    #[serde(skip)]
    ids: IdAllocator,
}

impl Default for PlannerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerStore {
    /// Empty store: three sections, no rows, nothing editing.
    pub fn new() -> Self {
        Self {
            sections: SectionKind::ALL.map(Section::new),
            editing: None,
            ids: IdAllocator::new(),
        }
    }

    /// Appends a row to the end of a section. Used for seeding only; rows
    /// added by the user go through [`add_task`](Self::add_task) and
    /// [`add_habit`](Self::add_habit).
    ///
    /// The built row's category must match the section.
    pub fn seed_row(&mut self, kind: SectionKind, build: impl FnOnce(RowId) -> Row) -> RowId {
        let id = self.ids.next_row();
        let row = build(id);
        debug_assert_eq!(
            row.category(),
            kind.row_category(),
            "{:?} row seeded into {}",
            row.category(),
            kind.header()
        );
        self.section_mut(kind).rows.push(row);
        id
    }

    pub fn add_task(&mut self) -> RowId {
        let id = self.ids.next_row();
        self.insert_blank(SectionKind::Tasks, Row::task(id, ""))
    }

    pub fn add_habit(&mut self) -> RowId {
        let id = self.ids.next_row();
        self.insert_blank(SectionKind::Habits, Row::habit(id, ""))
    }

    /// Puts a freshly added row at the top of its section and starts editing it.
    fn insert_blank(&mut self, kind: SectionKind, row: Row) -> RowId {
        let id = row.id;
        self.section_mut(kind).rows.insert(0, row);
        self.editing = Some(id);
        tracing::debug!(%id, section = kind.header(), "added row");
        id
    }

    /// Enters edit mode for `id`, or leaves it if `id` is already editing.
    /// At most one row edits at a time.
    pub fn toggle_edit(&mut self, id: RowId) {
        if self.editing == Some(id) {
            self.editing = None;
            tracing::debug!(%id, "edit finished");
        } else {
            if let Some(prev) = self.editing.replace(id) {
                tracing::debug!(%prev, "edit abandoned");
            }
            tracing::debug!(%id, "edit started");
        }
    }

    pub fn set_title(&mut self, id: RowId, title: impl Into<String>) {
        match self.row_mut(id) {
            Some(row) => row.title = title.into(),
            None => tracing::trace!(%id, "set_title: no such row"),
        }
    }

    /// Inert for events, which carry no completion flag.
    pub fn set_completed(&mut self, id: RowId, completed: bool) {
        match self.row_mut(id) {
            Some(row) => {
                if row.kind.set_completed(completed) {
                    tracing::debug!(%id, completed, "completion changed");
                } else {
                    tracing::trace!(%id, "set_completed: row has no completion flag");
                }
            }
            None => tracing::trace!(%id, "set_completed: no such row"),
        }
    }

    /// Removes the first row matching `id`, scanning events, tasks, habits in
    /// that order. Clears the editing id if it pointed at the removed row.
    ///
    /// Event rows are refused here on purpose, not only in the key layer: the
    /// scan covers every section, but deleting an event must leave the events
    /// section untouched for every caller.
    pub fn delete_row(&mut self, id: RowId) -> Option<Row> {
        let (kind, index) = self.position(id)?;
        if kind == SectionKind::Events {
            tracing::debug!(%id, "delete_row: events are not deletable");
            return None;
        }

        let removed = self.section_mut(kind).rows.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        tracing::debug!(%id, section = kind.header(), "deleted row");
        Some(removed)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> &Section {
        &self.sections[Self::slot(kind)]
    }

    fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        &mut self.sections[Self::slot(kind)]
    }

    fn slot(kind: SectionKind) -> usize {
        match kind {
            SectionKind::Events => 0,
            SectionKind::Tasks => 1,
            SectionKind::Habits => 2,
        }
    }

    pub fn editing(&self) -> Option<RowId> {
        self.editing
    }

    pub fn is_editing(&self, id: RowId) -> bool {
        self.editing == Some(id)
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.rows.iter_mut())
            .find(|r| r.id == id)
    }

    /// Section and index currently holding `id`.
    pub fn position(&self, id: RowId) -> Option<(SectionKind, usize)> {
        self.sections
            .iter()
            .find_map(|s| s.index_of(id).map(|idx| (s.kind, idx)))
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Pretty JSON of the sections and the editing id.
    pub fn to_json(&self) -> Result<String, PlannerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All row ids in display order.
    pub fn row_ids(&self) -> Vec<RowId> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter().map(|r| r.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn store_with_rows() -> (PlannerStore, RowId, RowId, RowId) {
        let mut store = PlannerStore::new();
        let e = store.seed_row(SectionKind::Events, |id| Row::event(id, "Lunch", "12:00 PM"));
        let t = store.seed_row(SectionKind::Tasks, |id| Row::task(id, "Email"));
        let h = store.seed_row(SectionKind::Habits, |id| Row::habit(id, "Walk"));
        (store, e, t, h)
    }

    #[test]
    fn new_store_has_three_empty_sections_in_order() {
        let store = PlannerStore::new();
        let kinds: Vec<_> = store.sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert_eq!(store.row_count(), 0);
        assert!(store.editing().is_none());
    }

    #[test]
    fn add_task_inserts_at_front_and_starts_editing() {
        let (mut store, _, t, _) = store_with_rows();
        let id = store.add_task();

        let tasks = store.section(SectionKind::Tasks);
        assert_eq!(tasks.rows[0].id, id);
        assert_eq!(tasks.rows[0].title, "");
        assert_eq!(tasks.rows[1].id, t);
        assert_eq!(store.editing(), Some(id));
    }

    #[test]
    fn add_habit_targets_habits() {
        let (mut store, _, _, _) = store_with_rows();
        let id = store.add_habit();
        assert_eq!(store.position(id), Some((SectionKind::Habits, 0)));
        assert_eq!(store.section(SectionKind::Tasks).len(), 1);
    }

    #[test]
    fn toggle_edit_switches_between_rows() {
        let (mut store, e, t, _) = store_with_rows();
        store.toggle_edit(e);
        assert!(store.is_editing(e));
        store.toggle_edit(t);
        assert!(store.is_editing(t));
        assert!(!store.is_editing(e));
        store.toggle_edit(t);
        assert!(store.editing().is_none());
    }

    #[test]
    fn set_title_unknown_id_is_noop() {
        let (mut store, _, _, _) = store_with_rows();
        let before = store.clone();
        store.set_title(RowId::new(999), "ghost");
        assert_eq!(store.sections(), before.sections());
    }

    #[test]
    fn set_completed_on_event_is_inert() {
        let (mut store, e, _, _) = store_with_rows();
        store.set_completed(e, true);
        assert_eq!(store.row(e).unwrap().completed(), None);
    }

    #[test]
    fn delete_clears_editing_of_removed_row() {
        let (mut store, _, _, _) = store_with_rows();
        let id = store.add_task();
        assert!(store.delete_row(id).is_some());
        assert!(store.editing().is_none());
    }

    #[test]
    fn delete_keeps_editing_of_other_row() {
        let (mut store, _, t, h) = store_with_rows();
        store.toggle_edit(h);
        store.delete_row(t);
        assert_eq!(store.editing(), Some(h));
    }

    #[test]
    fn delete_event_is_refused() {
        let (mut store, e, _, _) = store_with_rows();
        assert!(store.delete_row(e).is_none());
        assert_eq!(store.section(SectionKind::Events).len(), 1);
    }

    #[test]
    fn row_ids_follow_display_order() {
        let (store, e, t, h) = store_with_rows();
        assert_eq!(store.row_ids(), vec![e, t, h]);
    }

    #[test]
    fn to_json_lists_sections_and_editing() {
        let (mut store, _, t, _) = store_with_rows();
        store.toggle_edit(t);
        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();

        assert_eq!(json["sections"].as_array().unwrap().len(), 3);
        assert_eq!(json["sections"][1]["kind"], "tasks");
        assert_eq!(json["sections"][1]["rows"][0]["title"], "Email");
        assert_eq!(json["editing"], t.get());
        assert!(json.get("ids").is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (mut store, _, t, _) = store_with_rows();
        store.delete_row(t);
        let fresh = store.add_task();
        assert_ne!(fresh, t);
    }

    #[test]
    fn added_rows_match_their_section_category() {
        let mut store = PlannerStore::new();
        let t = store.add_task();
        let h = store.add_habit();
        assert_eq!(store.row(t).unwrap().category(), Category::Task);
        assert_eq!(store.row(h).unwrap().category(), Category::Habit);
        assert!(store.section(SectionKind::Events).is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "row seeded into Tasks")]
    fn seeding_an_event_into_tasks_is_rejected() {
        let mut store = PlannerStore::new();
        store.seed_row(SectionKind::Tasks, |id| Row::event(id, "Dentist", "2:00 PM"));
    }
}
