//! Output of the last render pass.
//!
//! The host keeps a [`HeaderState`] next to the grid body and reads column
//! areas from it to keep body columns aligned with the header.

use ratatui::layout::{Position, Rect};

use crate::ui::cell::DrillDownLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRegion {
    pub area: Rect,
    pub link: DrillDownLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    area: Rect,
    gutter: Rect,
    columns: Vec<Rect>,
    links: Vec<LinkRegion>,
}

impl HeaderState {
    /// Drops everything recorded by the previous pass.
    pub(crate) fn reset(&mut self, area: Rect) {
        self.area = area;
        self.gutter = Rect::default();
        self.columns.clear();
        self.links.clear();
    }

    pub(crate) fn set_gutter(&mut self, gutter: Rect) {
        self.gutter = gutter;
    }

    pub(crate) fn push_column(&mut self, column: Rect) {
        self.columns.push(column);
    }

    pub(crate) fn push_link(&mut self, area: Rect, link: DrillDownLink) {
        self.links.push(LinkRegion { area, link });
    }

    /// Full area the header was drawn into.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn gutter(&self) -> Rect {
        self.gutter
    }

    /// One area per date, in range order.
    pub fn column_areas(&self) -> &[Rect] {
        &self.columns
    }

    pub fn links(&self) -> &[LinkRegion] {
        &self.links
    }

    pub fn link_at(&self, pos: Position) -> Option<&DrillDownLink> {
        self.links
            .iter()
            .find(|region| region.area.contains(pos))
            .map(|region| &region.link)
    }
}
