//! Resource title component for sub-header cells.

use ratatui::{style::Style, text::Line};

use crate::{model::Resource, ui::colors};

pub struct ResourceHeaderProps<'a> {
    /// Position of the entry in the full resource list.
    pub index: usize,
    pub label: &'a str,
    pub resource: &'a Resource,
}

pub trait ResourceHeaderComponent {
    fn render(&self, props: &ResourceHeaderProps<'_>) -> Line<'static>;
}

impl<F: Fn(&ResourceHeaderProps<'_>) -> Line<'static>> ResourceHeaderComponent for F {
    fn render(&self, props: &ResourceHeaderProps<'_>) -> Line<'static> {
        self(props)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResourceHeader;

impl ResourceHeaderComponent for DefaultResourceHeader {
    fn render(&self, props: &ResourceHeaderProps<'_>) -> Line<'static> {
        Line::styled(props.label.to_string(), Style::default().fg(colors::RESOURCE))
    }
}
