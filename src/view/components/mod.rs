pub mod add_item_popup;
pub mod confirm_delete;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod popup;
pub mod section_list;

pub use add_item_popup::render_add_item_popup;
pub use confirm_delete::render_confirm_delete;
pub use footer::render_footer;
pub use header::render_header;
pub use help_overlay::render_help_overlay;
pub use section_list::{build_row_line, render_section};
