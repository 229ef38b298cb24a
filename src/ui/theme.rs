use crate::highlight::BarState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar_default: Color,
    pub bar_compare: Color,
    pub bar_swap: Color,
    pub bar_sorted: Color,
    pub bar_sub_sorted: Color,
}

impl Theme {
    /// Fill color for a bar in the given state
    pub fn bar_color(&self, state: BarState) -> Color {
        match state {
            BarState::Sorted => self.bar_sorted,
            BarState::Swapping => self.bar_swap,
            BarState::Comparing => self.bar_compare,
            BarState::SubSorted => self.bar_sub_sorted,
            BarState::Default => self.bar_default,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    bar_default: Color::Rgb(59, 130, 246),     // Unsorted
    bar_compare: Color::Rgb(250, 204, 21),     // Comparing
    bar_swap: Color::Rgb(239, 68, 68),         // Swap / write
    bar_sorted: Color::Rgb(34, 197, 94),       // Final position
    bar_sub_sorted: Color::Rgb(110, 231, 183), // Provisionally ordered
};
