use serde::{Deserialize, Serialize};

use super::ids::RowId;

/// One list entry on the day view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub title: String,
    pub kind: RowKind,
    /// Suppresses interaction and dims the row.
    #[serde(default)]
    pub disabled: bool,
    /// Overrides the category's default icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Overrides the default display color.
    #[serde(default)]
    pub accent: Option<Accent>,
}

impl Row {
    pub fn new(id: RowId, title: impl Into<String>, kind: RowKind) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            disabled: false,
            icon: None,
            accent: None,
        }
    }

    pub fn event(id: RowId, title: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            RowKind::Event {
                time: Some(time.into()),
            },
        )
    }

    pub fn task(id: RowId, title: impl Into<String>) -> Self {
        Self::new(id, title, RowKind::Task { completed: false })
    }

    pub fn habit(id: RowId, title: impl Into<String>) -> Self {
        Self::new(id, title, RowKind::Habit { completed: false })
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.kind.set_completed(completed);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// `None` for events, which have no completion control.
    pub fn completed(&self) -> Option<bool> {
        match self.kind {
            RowKind::Event { .. } => None,
            RowKind::Task { completed } | RowKind::Habit { completed } => Some(completed),
        }
    }

    pub fn time(&self) -> Option<&str> {
        match &self.kind {
            RowKind::Event { time } => time.as_deref(),
            _ => None,
        }
    }

    /// Tasks and habits can be completed and deleted; events cannot.
    pub fn is_checkable(&self) -> bool {
        !matches!(self.kind, RowKind::Event { .. })
    }
}

/// Category-specific payload. Events carry a free-form time label, tasks and
/// habits carry a completion flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum RowKind {
    Event {
        #[serde(default)]
        time: Option<String>,
    },
    Task {
        #[serde(default)]
        completed: bool,
    },
    Habit {
        #[serde(default)]
        completed: bool,
    },
}

impl RowKind {
    pub fn category(&self) -> Category {
        match self {
            RowKind::Event { .. } => Category::Event,
            RowKind::Task { .. } => Category::Task,
            RowKind::Habit { .. } => Category::Habit,
        }
    }

    /// Returns false (and changes nothing) for events.
    pub fn set_completed(&mut self, value: bool) -> bool {
        match self {
            RowKind::Event { .. } => false,
            RowKind::Task { completed } | RowKind::Habit { completed } => {
                *completed = value;
                true
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Event,
    Task,
    Habit,
}

impl Category {
    pub fn default_icon(self) -> &'static str {
        match self {
            Category::Event => "◷",
            Category::Task => "✎",
            Category::Habit => "↻",
        }
    }
}

/// Override display colors a row may carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}
