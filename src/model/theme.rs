use ratatui::style::Color;

use super::row::{Accent, Category};

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const SURFACE: Color = Color::Rgb(28, 28, 38);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(80, 200, 200); // teal — primary accent
    pub const ACCENT_WARM: Color = Color::Rgb(230, 160, 60); // amber — editing

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const WARNING: Color = Color::Rgb(230, 180, 60);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(80, 200, 200); // = ACCENT
    pub const SELECTION_BG: Color = Color::Rgb(40, 55, 75);

    // ── Row categories ──────────────────────────────────────────
    pub const EVENT: Color = Color::Rgb(80, 180, 220); // = INFO
    pub const TASK: Color = Color::Rgb(230, 160, 60); // = ACCENT_WARM
    pub const HABIT: Color = Color::Rgb(170, 130, 255); // soft purple
    pub const TIME_LABEL: Color = Color::Rgb(140, 145, 165);

    /// Default icon color for a row category
    pub fn category_color(category: Category) -> Color {
        match category {
            Category::Event => Self::EVENT,
            Category::Task => Self::TASK,
            Category::Habit => Self::HABIT,
        }
    }

    /// Map a row's override accent onto the palette
    pub fn accent_color(accent: Accent) -> Color {
        match accent {
            Accent::Red => Self::ERROR,
            Accent::Orange => Color::Rgb(230, 130, 60),
            Accent::Yellow => Self::WARNING,
            Accent::Green => Self::SUCCESS,
            Accent::Blue => Self::INFO,
            Accent::Purple => Self::HABIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors_defined() {
        assert_eq!(Theme::category_color(Category::Event), Theme::EVENT);
        assert_eq!(Theme::category_color(Category::Task), Theme::TASK);
        assert_eq!(Theme::category_color(Category::Habit), Theme::HABIT);
    }

    #[test]
    fn accent_colors_defined() {
        assert_eq!(Theme::accent_color(Accent::Green), Theme::SUCCESS);
        assert_eq!(Theme::accent_color(Accent::Red), Theme::ERROR);
        assert_eq!(Theme::accent_color(Accent::Purple), Theme::HABIT);
    }
}
