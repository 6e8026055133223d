//! Content of the time gutter placeholder.

use ratatui::text::Line;

pub trait TimeGutterHeaderComponent {
    fn render(&self) -> Line<'static>;
}

impl<F: Fn() -> Line<'static>> TimeGutterHeaderComponent for F {
    fn render(&self) -> Line<'static> {
        self()
    }
}

/// Leaves the gutter blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyGutterHeader;

impl TimeGutterHeaderComponent for EmptyGutterHeader {
    fn render(&self) -> Line<'static> {
        Line::default()
    }
}
