use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::BrightBlack;

pub const MAC_ADDR: Color = Color::BrightMagenta;

pub const SEVERITY_INFO: Color = Color::BrightBlue;
pub const SEVERITY_LOW: Color = Color::Green;
pub const SEVERITY_MEDIUM: Color = Color::Yellow;
pub const SEVERITY_HIGH: Color = Color::BrightRed;
