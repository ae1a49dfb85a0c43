use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::Cyan;
pub const GATEWAY_ADDR: Color = Color::BrightCyan;
pub const WORKING: Color = Color::Green;
pub const NOT_WORKING: Color = Color::Red;
