//! Header row of a time-grid view.
//!
//! One column per date, each optionally subdivided into the resources that
//! work on that date. Column widths are proportional to the number of
//! matching resources.
//!
//! ```text
//! ┌────────┬──────────────────────┬──────────┐
//! │ gutter │        12 Mon        │  13 Tue  │  date row
//! │        │  Room A  │  Room B   │  Room B  │  resource row
//! └────────┴──────────────────────┴──────────┘
//! ```

use chrono::NaiveDateTime;
use crossterm::event::Event;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::{
    collaborators::{
        Accessors, Clock, DrilldownResolver, FixedScrollbar, Getters, Localizer, ScrollbarMeasure,
    },
    config::HeaderConfig,
    error::HeaderError,
    model::{ResourceEntry, ResourceId, View},
    ui::{
        cell::{render_header_cell, CellContext, HeaderCell},
        colors,
        components::{Components, ResourceHeaderProps},
        drilldown::{DrillDownCallback, DrillDownNavigator},
        layout::{
            centered, column_constraints, column_rows, flex_weight, header_split,
            matching_resources, reserve_scrollbar, resource_split,
        },
        state::HeaderState,
    },
};

/// Sub-header cell for one resource on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCell {
    /// Position of the resource in the full resource list.
    pub index: usize,
    pub id: ResourceId,
    pub content: Line<'static>,
}

/// Content block for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateColumn {
    pub weight: usize,
    pub cell: HeaderCell,
    pub resources: Vec<ResourceCell>,
}

/// Everything a render pass draws, derived from the current inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLayout {
    pub gutter_width: u16,
    pub gutter: Line<'static>,
    /// Width reserved for the body's scrollbar; 0 unless the body overflows.
    pub scrollbar_reserve: u16,
    pub rtl: bool,
    pub columns: Vec<DateColumn>,
}

pub struct TimeGridHeader<'a> {
    range: &'a [NaiveDateTime],
    resources: &'a [ResourceEntry],
    width: u16,
    rtl: bool,
    is_overflowing: bool,
    clock: &'a dyn Clock,
    localizer: &'a dyn Localizer,
    drilldown: &'a dyn DrilldownResolver,
    getters: &'a dyn Getters,
    accessors: &'a dyn Accessors,
    components: &'a Components,
    scrollbar: &'a dyn ScrollbarMeasure,
    navigator: DrillDownNavigator<'a>,
}

impl<'a> TimeGridHeader<'a> {
    pub fn builder() -> TimeGridHeaderBuilder<'a> {
        TimeGridHeaderBuilder::default()
    }

    fn cell_context(&self) -> CellContext<'a> {
        CellContext {
            today: self.clock.now(),
            localizer: self.localizer,
            drilldown: self.drilldown,
            getters: self.getters,
            header: self.components.header(),
        }
    }

    /// Date header cells for the whole range, without resource rows.
    pub fn header_cells(&self) -> Vec<HeaderCell> {
        let ctx = self.cell_context();
        self.range
            .iter()
            .map(|&date| render_header_cell(&ctx, date))
            .collect()
    }

    /// Computes the header structure for the current inputs.
    pub fn layout(&self) -> HeaderLayout {
        tracing::trace!(
            dates = self.range.len(),
            resources = self.resources.len(),
            "time grid header layout"
        );

        let ctx = self.cell_context();
        let resource_header = self.components.resource_header();

        let columns = self
            .range
            .iter()
            .map(|&date| {
                let resources = matching_resources(self.resources, date)
                    .map(|(index, entry, resource)| {
                        let label = self.accessors.resource_title(resource);
                        ResourceCell {
                            index,
                            id: entry.id.clone(),
                            content: resource_header.render(&ResourceHeaderProps {
                                index,
                                label: &label,
                                resource,
                            }),
                        }
                    })
                    .collect();

                DateColumn {
                    weight: flex_weight(self.resources, date),
                    cell: render_header_cell(&ctx, date),
                    resources,
                }
            })
            .collect();

        HeaderLayout {
            gutter_width: self.width,
            gutter: self.components.time_gutter_header().render(),
            scrollbar_reserve: if self.is_overflowing {
                self.scrollbar.scrollbar_size()
            } else {
                0
            },
            rtl: self.rtl,
            columns,
        }
    }

    /// Handles input against the links recorded in `state` by the last render.
    ///
    /// Returns `true` if the event activated a drill-down link.
    pub fn on_event(&self, ev: &Event, state: &HeaderState) -> bool {
        self.navigator.on_event(ev, state)
    }

    pub fn navigator(&self) -> DrillDownNavigator<'a> {
        self.navigator
    }
}

impl StatefulWidget for &TimeGridHeader<'_> {
    type State = HeaderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut HeaderState) {
        state.reset(area);
        let layout = self.layout();

        let area = reserve_scrollbar(area, layout.scrollbar_reserve, layout.rtl);
        let constraints = column_constraints(
            layout
                .columns
                .iter()
                .map(|c| (c.weight, c.cell.label_width())),
        );
        let (gutter, column_areas) = header_split(area, layout.gutter_width, &constraints);

        state.set_gutter(gutter);
        Paragraph::new(layout.gutter)
            .style(Style::default().fg(colors::GUTTER))
            .render(gutter, buf);

        for (column, column_area) in layout.columns.into_iter().zip(column_areas) {
            state.push_column(column_area);
            let [date_row, resource_row] = column_rows(column_area);

            // Label and link region share one rect
            let label_area = centered(date_row, column.cell.label_width());
            buf.set_style(date_row, column.cell.style);
            Paragraph::new(column.cell.content).render(label_area, buf);
            if let Some(link) = column.cell.link {
                state.push_link(label_area, link);
            }

            let cell_areas = resource_split(resource_row, column.resources.len());
            for (cell, cell_area) in column.resources.into_iter().zip(cell_areas) {
                Paragraph::new(cell.content)
                    .alignment(Alignment::Center)
                    .render(cell_area, buf);
            }
        }
    }
}

/// Collects and validates the header's inputs.
#[derive(Default)]
pub struct TimeGridHeaderBuilder<'a> {
    range: Option<&'a [NaiveDateTime]>,
    resources: &'a [ResourceEntry],
    width: u16,
    rtl: bool,
    is_overflowing: bool,
    clock: Option<&'a dyn Clock>,
    localizer: Option<&'a dyn Localizer>,
    drilldown: Option<&'a dyn DrilldownResolver>,
    getters: Option<&'a dyn Getters>,
    accessors: Option<&'a dyn Accessors>,
    components: Option<&'a Components>,
    scrollbar: Option<&'a dyn ScrollbarMeasure>,
    on_drill_down: Option<DrillDownCallback<'a>>,
}

impl<'a> TimeGridHeaderBuilder<'a> {
    pub fn range(mut self, range: &'a [NaiveDateTime]) -> Self {
        self.range = Some(range);
        self
    }

    pub fn resources(mut self, resources: &'a [ResourceEntry]) -> Self {
        self.resources = resources;
        self
    }

    /// Applies gutter width, direction and overflow from `config`.
    pub fn config(mut self, config: &HeaderConfig) -> Self {
        self.width = config.width;
        self.rtl = config.rtl;
        self.is_overflowing = config.is_overflowing;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn overflowing(mut self, is_overflowing: bool) -> Self {
        self.is_overflowing = is_overflowing;
        self
    }

    pub fn clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn localizer(mut self, localizer: &'a dyn Localizer) -> Self {
        self.localizer = Some(localizer);
        self
    }

    pub fn drilldown(mut self, drilldown: &'a dyn DrilldownResolver) -> Self {
        self.drilldown = Some(drilldown);
        self
    }

    pub fn getters(mut self, getters: &'a dyn Getters) -> Self {
        self.getters = Some(getters);
        self
    }

    pub fn accessors(mut self, accessors: &'a dyn Accessors) -> Self {
        self.accessors = Some(accessors);
        self
    }

    pub fn components(mut self, components: &'a Components) -> Self {
        self.components = Some(components);
        self
    }

    pub fn scrollbar(mut self, scrollbar: &'a dyn ScrollbarMeasure) -> Self {
        self.scrollbar = Some(scrollbar);
        self
    }

    pub fn on_drill_down(mut self, callback: &'a dyn Fn(NaiveDateTime, View)) -> Self {
        self.on_drill_down = Some(callback);
        self
    }

    pub fn build(self) -> Result<TimeGridHeader<'a>, HeaderError> {
        static DEFAULT_SCROLLBAR: FixedScrollbar = FixedScrollbar(1);

        let range = self
            .range
            .filter(|r| !r.is_empty())
            .ok_or(HeaderError::MissingInput("range"))?;

        Ok(TimeGridHeader {
            range,
            resources: self.resources,
            width: self.width,
            rtl: self.rtl,
            is_overflowing: self.is_overflowing,
            clock: self.clock.ok_or(HeaderError::MissingInput("clock"))?,
            localizer: self.localizer.ok_or(HeaderError::MissingInput("localizer"))?,
            drilldown: self.drilldown.ok_or(HeaderError::MissingInput("drilldown"))?,
            getters: self.getters.ok_or(HeaderError::MissingInput("getters"))?,
            accessors: self.accessors.ok_or(HeaderError::MissingInput("accessors"))?,
            components: self.components.ok_or(HeaderError::MissingInput("components"))?,
            scrollbar: self.scrollbar.unwrap_or(&DEFAULT_SCROLLBAR),
            navigator: DrillDownNavigator::new(self.on_drill_down),
        })
    }
}
