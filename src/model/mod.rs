pub mod ids;
pub mod row;
pub mod section;
pub mod seed;
pub mod store;
pub mod theme;

pub use ids::{IdAllocator, RowId};
pub use row::{Accent, Category, Row, RowKind};
pub use section::{Section, SectionKind};
pub use seed::{demo_store, planner_day};
pub use store::PlannerStore;
pub use theme::Theme;
