use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color, // Blue
    pub comment: Color, // Grey
    pub error: Color,   // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub pointer_bg: Color, // Yellow highlight for the cell under the pointer
    pub prompt: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for cell values
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    pointer_bg: Color::Rgb(249, 226, 175),
    prompt: Color::Rgb(148, 226, 213), // Cyan/teal for echoed commands
};
