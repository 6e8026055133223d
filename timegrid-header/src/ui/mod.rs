//! ratatui rendering of the time-grid header.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     time_grid_header.rs                         │
//! │  TimeGridHeader ── layout() ── StatefulWidget ── HeaderState    │
//! └───────────┬──────────────────────┬──────────────────┬───────────┘
//!             │                      │                  │
//!             ▼                      ▼                  ▼
//!   layout.rs (weights,       cell.rs (date cells,  drilldown.rs
//!   constraints, splits)      today, links)         (link activation)
//!                                    │
//!                                    ▼
//!                     components/ (Header, ResourceHeader,
//!                                  TimeGutterHeader slots)
//! ```
//!
//! ## Modules
//!
//! - `time_grid_header` - Header component, builder and widget
//! - `layout` - Flex weights and area calculations
//! - `cell` - Date header cell renderer
//! - `components` - Overridable renderer slots
//! - `drilldown` - Drill-down activation from input events
//! - `state` - Per-pass render output used for hit testing and alignment
//! - `frame` - Off-screen rendering to lines and highlight marks

pub mod cell;
pub mod colors;
pub mod components;
pub mod drilldown;
pub mod frame;
pub mod layout;
pub mod state;
pub mod time_grid_header;

pub use time_grid_header::{TimeGridHeader, TimeGridHeaderBuilder};
