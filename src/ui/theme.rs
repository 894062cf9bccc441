//! Palette for the admin screen.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const BORDER: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const TEXT: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const MUTED: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const DIALOG_BORDER: Color = Color::Rgb(0x60, 0xa5, 0xfa);
/// Background of the selected row and of the name input.
pub const SELECTED_BG: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const FAILURE: Color = Color::Rgb(0xef, 0x44, 0x44);
