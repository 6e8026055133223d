//! Header highlight colors.
//!
//! `frame::cell_to_hl_group` maps these to the `TimeGrid*` highlight groups,
//! so header widgets should draw with these constants.

use ratatui::style::Color;

pub const HEADER: Color = Color::Rgb(0x56, 0x9C, 0xD6);    // #569CD6 - blue
pub const TODAY_BG: Color = Color::Rgb(0x3E, 0x44, 0x51);  // #3E4451 - background gray
pub const LINK: Color = Color::Rgb(0x4E, 0xC9, 0xB0);      // #4EC9B0 - cyan
pub const RESOURCE: Color = Color::Rgb(0xC5, 0x86, 0xC0);  // #C586C0 - purple
pub const GUTTER: Color = Color::Rgb(0x66, 0x66, 0x66);    // #666666 - dark gray
