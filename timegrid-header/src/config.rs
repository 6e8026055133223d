//! Header configuration supplied by the host as JSON.

use serde::Deserialize;

use crate::{collaborators::ChronoLocalizer, error::HeaderError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Width of the time gutter, matching the time axis of the grid body.
    pub width: u16,
    pub rtl: bool,
    /// Whether the grid body currently shows a vertical scrollbar.
    pub is_overflowing: bool,
    /// chrono pattern for date labels.
    pub day_format: Option<String>,
}

impl HeaderConfig {
    pub fn from_json(json: &str) -> Result<Self, HeaderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn localizer(&self) -> ChronoLocalizer {
        self.day_format
            .as_deref()
            .map(ChronoLocalizer::new)
            .unwrap_or_default()
    }
}
