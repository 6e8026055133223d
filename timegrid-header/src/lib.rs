//! Header row of a time-grid calendar view.
//!
//! Renders one column per visible date, subdivided into the resources that
//! work on that date, with "today" highlighting and drill-down links into a
//! more detailed view. Everything is derived from the inputs on each render
//! pass; the only state is the [`HeaderState`] the host keeps for hit testing.
//!
//! ```ignore
//! let header = TimeGridHeader::builder()
//!     .range(&week)
//!     .resources(&rooms)
//!     .config(&config)
//!     .clock(&SystemClock)
//!     .localizer(&localizer)
//!     .drilldown(&|_| Some(View::Day))
//!     .getters(&NoDayProps)
//!     .accessors(&TitleAccessor)
//!     .components(&components)
//!     .on_drill_down(&navigate)
//!     .build()?;
//!
//! f.render_stateful_widget(&header, area, &mut header_state);
//! ```

pub mod collaborators;
pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod ui;

pub use collaborators::{
    Accessors, ChronoLocalizer, Clock, DayProp, DrilldownResolver, FixedScrollbar, FormatKey,
    Getters, Localizer, NoDayProps, ScrollbarMeasure, SystemClock, TitleAccessor,
};
pub use config::HeaderConfig;
pub use error::HeaderError;
pub use log::setup_logger;
pub use model::{load_resources, Resource, ResourceEntry, ResourceId, ResourceList, View, WorkingDays};
pub use ui::{
    cell::{DrillDownLink, HeaderCell},
    components::Components,
    frame::{render_frame, RenderFrame},
    state::HeaderState,
    TimeGridHeader, TimeGridHeaderBuilder,
};
