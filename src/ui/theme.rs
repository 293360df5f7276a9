use ratatui::style::Color;

/// Application color theme constants
pub struct Theme;

impl Theme {
    pub const APP_NAME: Color = Color::Cyan;
    pub const TARGET_ID: Color = Color::Yellow;
    pub const TITLE: Color = Color::Rgb(0xf3, 0x8b, 0xa8);
    pub const ELEMENT_TEXT: Color = Color::White;
    pub const PLACEHOLDER: Color = Color::DarkGray;
    pub const HINT: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
    pub const SUCCESS: Color = Color::Green;
}
