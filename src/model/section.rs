use serde::{Deserialize, Serialize};

use super::ids::RowId;
use super::row::{Category, Row};

/// The three fixed groups of the day view, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Events,
    Tasks,
    Habits,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Events, SectionKind::Tasks, SectionKind::Habits];

    pub fn header(self) -> &'static str {
        match self {
            SectionKind::Events => "Events",
            SectionKind::Tasks => "Tasks",
            SectionKind::Habits => "Habits",
        }
    }

    pub fn row_category(self) -> Category {
        match self {
            SectionKind::Events => Category::Event,
            SectionKind::Tasks => Category::Task,
            SectionKind::Habits => Category::Habit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(kind: SectionKind, rows: Vec<Row>) -> Self {
        Self { kind, rows }
    }

    pub fn header(&self) -> &'static str {
        self.kind.header()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.completed() == Some(true)).count()
    }
}
