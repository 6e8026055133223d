//! Date label component for header cells.

use chrono::NaiveDateTime;
use ratatui::{style::Style, text::Line};

use crate::{collaborators::Localizer, ui::colors};

/// Inputs handed to a date header component.
pub struct HeaderProps<'a> {
    pub date: NaiveDateTime,
    pub label: &'a str,
    pub localizer: &'a dyn Localizer,
}

/// Renders the content of a per-date header cell.
pub trait HeaderComponent {
    fn render(&self, props: &HeaderProps<'_>) -> Line<'static>;
}

impl<F: Fn(&HeaderProps<'_>) -> Line<'static>> HeaderComponent for F {
    fn render(&self, props: &HeaderProps<'_>) -> Line<'static> {
        self(props)
    }
}

/// Renders the localized label as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeader;

impl HeaderComponent for DefaultHeader {
    fn render(&self, props: &HeaderProps<'_>) -> Line<'static> {
        Line::styled(props.label.to_string(), Style::default().fg(colors::HEADER))
    }
}
