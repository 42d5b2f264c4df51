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
    pub disk_colors: [Color; 6], // Cycled by disk size
}

impl Theme {
    /// Color for a disk of the given size
    pub fn disk_color(&self, size: u32) -> Color {
        self.disk_colors[(size as usize).saturating_sub(1) % self.disk_colors.len()]
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
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    disk_colors: [
        Color::Rgb(243, 139, 168), // Red
        Color::Rgb(250, 179, 135), // Orange
        Color::Rgb(249, 226, 175), // Yellow
        Color::Rgb(166, 227, 161), // Green
        Color::Rgb(148, 226, 213), // Teal
        Color::Rgb(137, 180, 250), // Blue
    ],
};
