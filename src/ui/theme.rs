use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub element: Color,      // Plain pile element
    pub element_text: Color, // Value printed on an element
    pub max: Color,          // Red
    pub min: Color,          // Blue
    pub button: Color,
    pub button_text: Color,
    pub button_disabled: Color,
    pub comment: Color, // Grey
    pub primary: Color,
    pub secondary: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    element: Color::Rgb(239, 241, 245),
    element_text: Color::Black,
    max: Color::Rgb(243, 139, 168),
    min: Color::Rgb(137, 180, 250),
    button: Color::Rgb(88, 91, 112),
    button_text: Color::Black,
    button_disabled: Color::Rgb(49, 50, 68),
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),        // Blue
    secondary: Color::Rgb(250, 179, 135),      // Orange
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for hover
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
