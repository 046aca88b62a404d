use chrono::NaiveDate;

use super::row::{Accent, Row};
use super::section::SectionKind;
use super::store::PlannerStore;

/// The single day the planner shows.
pub fn planner_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).unwrap_or_default()
}

/// Store populated with the demo dataset: five events, two tasks, one habit.
pub fn demo_store() -> PlannerStore {
    let mut store = PlannerStore::new();

    store.seed_row(SectionKind::Events, |id| {
        Row::event(id, "Morning run", "7:00 AM").with_icon("★")
    });
    store.seed_row(SectionKind::Events, |id| Row::event(id, "Team standup", "9:30 AM"));
    store.seed_row(SectionKind::Events, |id| {
        Row::event(id, "Lunch with Sam", "12:30 PM").with_accent(Accent::Orange)
    });
    store.seed_row(SectionKind::Events, |id| {
        Row::event(id, "Design review", "3:00 PM").disabled()
    });
    store.seed_row(SectionKind::Events, |id| {
        Row::event(id, "Yoga class", "6:30 PM").with_accent(Accent::Purple)
    });

    store.seed_row(SectionKind::Tasks, |id| Row::task(id, "Pick up groceries"));
    store.seed_row(SectionKind::Tasks, |id| {
        Row::task(id, "Reply to landlord").with_completed(true)
    });

    store.seed_row(SectionKind::Habits, |id| {
        Row::habit(id, "Read 20 pages").with_accent(Accent::Green)
    });

    store
}
