use ratatui::style::Color;

pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FIELD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUSED_BORDER: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const ERROR_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACCEPT_TEXT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
