//! Off-screen rendering into structured frames.
//!
//! Instead of drawing to a terminal, a host can request the header as lines
//! of text plus highlight ranges, and apply them to its own surface.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier},
    widgets::StatefulWidget,
};
use serde::Serialize;

use super::{colors, layout::HEADER_HEIGHT, state::HeaderState, time_grid_header::TimeGridHeader};
use crate::error::HeaderError;

/// Highlight data for a range of cells on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightMark {
    pub row: u16,
    pub start_col: u16,
    pub end_col: u16,
    pub hl_group: String,
}

/// Complete render output for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    pub lines: Vec<String>,
    pub marks: Vec<HighlightMark>,
}

impl RenderFrame {
    pub fn to_json(&self) -> Result<String, HeaderError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Renders `header` at `width` columns and returns the frame with the
/// state the host needs for hit testing.
pub fn render_frame(header: &TimeGridHeader<'_>, width: u16) -> (RenderFrame, HeaderState) {
    let area = Rect::new(0, 0, width, HEADER_HEIGHT);
    let mut buf = Buffer::empty(area);
    let mut state = HeaderState::default();
    header.render(area, &mut buf, &mut state);
    (buffer_to_render_frame(&buf, area), state)
}

/// Converts a ratatui buffer to a [`RenderFrame`].
///
/// Columns in marks are byte offsets into the line.
pub fn buffer_to_render_frame(buffer: &Buffer, area: Rect) -> RenderFrame {
    let mut lines = Vec::with_capacity(area.height as usize);
    let mut marks = Vec::new();

    for y in area.y..area.y + area.height {
        let mut line = String::with_capacity(area.width as usize);
        let mut current_hl: Option<String> = None;
        let mut hl_start_byte: u16 = 0;
        let mut current_byte: u16 = 0;
        let row = y - area.y;

        for x in area.x..area.x + area.width {
            let default_cell = Cell::default();
            let cell = buffer.cell((x, y)).unwrap_or(&default_cell);
            let symbol = if cell.symbol().is_empty() {
                " "
            } else {
                cell.symbol()
            };

            let cell_hl = cell_to_hl_group(cell);
            if cell_hl != current_hl {
                if let Some(hl) = current_hl.take() {
                    marks.push(HighlightMark {
                        row,
                        start_col: hl_start_byte,
                        end_col: current_byte,
                        hl_group: hl,
                    });
                }
                current_hl = cell_hl;
                hl_start_byte = current_byte;
            }

            line.push_str(symbol);
            current_byte += symbol.len() as u16;
        }

        if let Some(hl) = current_hl {
            marks.push(HighlightMark {
                row,
                start_col: hl_start_byte,
                end_col: current_byte,
                hl_group: hl,
            });
        }

        // Unstyled trailing blanks carry nothing
        let last_styled = marks
            .iter()
            .filter(|m| m.row == row)
            .map(|m| m.end_col as usize)
            .max()
            .unwrap_or(0);
        if last_styled < line.len() {
            let trimmed_len = last_styled + line[last_styled..].trim_end().len();
            line.truncate(trimmed_len);
        }
        lines.push(line);
    }

    RenderFrame { lines, marks }
}

/// Maps a cell style to a highlight group name.
///
/// Header colors map to `TimeGrid*` groups; a today background wins over the
/// foreground, except that a link on today keeps a `Link` suffix. Anything
/// else falls back to `Ratatui_*` naming.
fn cell_to_hl_group(cell: &Cell) -> Option<String> {
    let fg = cell.fg;
    let bg = cell.bg;
    let modifiers = cell.modifier;

    if fg == Color::Reset && bg == Color::Reset && modifiers.is_empty() {
        return None;
    }

    let base_hl = match (fg, bg) {
        (c, b) if b == colors::TODAY_BG && c == colors::LINK => Some("TimeGridTodayLink"),
        (_, b) if b == colors::TODAY_BG => Some("TimeGridToday"),
        (c, _) if c == colors::LINK => Some("TimeGridLink"),
        (c, _) if c == colors::HEADER => Some("TimeGridHeader"),
        (c, _) if c == colors::RESOURCE => Some("TimeGridResource"),
        (c, _) if c == colors::GUTTER => Some("TimeGridGutter"),
        _ => None,
    };
    if let Some(hl) = base_hl {
        return Some(hl.to_string());
    }

    let mut name = format!("Ratatui_{}", color_to_name(fg));
    if bg != Color::Reset {
        name.push_str(&format!("_on_{}", color_to_name(bg)));
    }
    if modifiers.contains(Modifier::BOLD) {
        name.push_str("_bold");
    }
    if modifiers.contains(Modifier::UNDERLINED) {
        name.push_str("_underline");
    }
    Some(name)
}

fn color_to_name(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("x{:02x}{:02x}{:02x}", r, g, b),
        Color::Indexed(i) => format!("i{}", i),
        named => format!("{named:?}").to_lowercase(),
    }
}
