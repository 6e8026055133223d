//! Capabilities injected by the owning calendar.
//!
//! Each seam is a small trait with a built-in implementation; closures
//! implement the single-method ones so tests can substitute them inline.

use chrono::{Local, NaiveDateTime};
use ratatui::style::Style;

use crate::model::{Resource, View};

/// Format keys understood by a [`Localizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatKey {
    /// Label of a per-date header cell.
    Day,
}

pub trait Localizer {
    fn format(&self, date: NaiveDateTime, key: FormatKey) -> String;
}

/// Localizer backed by chrono format strings.
#[derive(Debug, Clone)]
pub struct ChronoLocalizer {
    day_format: String,
}

impl ChronoLocalizer {
    pub const DEFAULT_DAY_FORMAT: &'static str = "%d %a";

    pub fn new(day_format: impl Into<String>) -> Self {
        Self {
            day_format: day_format.into(),
        }
    }
}

impl Default for ChronoLocalizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DAY_FORMAT)
    }
}

impl Localizer for ChronoLocalizer {
    fn format(&self, date: NaiveDateTime, key: FormatKey) -> String {
        match key {
            FormatKey::Day => date.format(&self.day_format).to_string(),
        }
    }
}

/// Source of "now" for today highlighting.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<F: Fn() -> NaiveDateTime> Clock for F {
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// Decides which view, if any, a date header drills down into.
pub trait DrilldownResolver {
    fn drilldown_view(&self, date: NaiveDateTime) -> Option<View>;
}

impl<F: Fn(NaiveDateTime) -> Option<View>> DrilldownResolver for F {
    fn drilldown_view(&self, date: NaiveDateTime) -> Option<View> {
        self(date)
    }
}

/// Per-date decoration, e.g. holiday shading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayProp {
    pub class_name: Option<String>,
    pub style: Style,
}

pub trait Getters {
    fn day_prop(&self, date: NaiveDateTime) -> DayProp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDayProps;

impl Getters for NoDayProps {
    fn day_prop(&self, _date: NaiveDateTime) -> DayProp {
        DayProp::default()
    }
}

impl<F: Fn(NaiveDateTime) -> DayProp> Getters for F {
    fn day_prop(&self, date: NaiveDateTime) -> DayProp {
        self(date)
    }
}

pub trait Accessors {
    fn resource_title(&self, resource: &Resource) -> String;
}

/// Reads [`Resource::title`], falling back to an empty label.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleAccessor;

impl Accessors for TitleAccessor {
    fn resource_title(&self, resource: &Resource) -> String {
        resource.title.clone().unwrap_or_default()
    }
}

/// Measures the scrollbar of the grid body so the header can reserve its width.
pub trait ScrollbarMeasure {
    fn scrollbar_size(&self) -> u16;
}

/// Fixed scrollbar width; terminal scrollbars are one cell wide.
#[derive(Debug, Clone, Copy)]
pub struct FixedScrollbar(pub u16);

impl Default for FixedScrollbar {
    fn default() -> Self {
        FixedScrollbar(1)
    }
}

impl ScrollbarMeasure for FixedScrollbar {
    fn scrollbar_size(&self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn friday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_chrono_localizer_default_format() {
        let l = ChronoLocalizer::default();
        assert_eq!(l.format(friday(), FormatKey::Day), "16 Fri");
    }

    #[test]
    fn test_chrono_localizer_custom_format() {
        let l = ChronoLocalizer::new("%a %m/%d");
        assert_eq!(l.format(friday(), FormatKey::Day), "Fri 10/16");
    }

    #[test]
    fn test_closure_collaborators() {
        let clock = || friday();
        assert_eq!(Clock::now(&clock), friday());

        let resolver = |_d: NaiveDateTime| Some(View::Day);
        assert_eq!(resolver.drilldown_view(friday()), Some(View::Day));
    }

    #[test]
    fn test_title_accessor_falls_back_to_empty() {
        assert_eq!(TitleAccessor.resource_title(&Resource::default()), "");
        assert_eq!(TitleAccessor.resource_title(&Resource::new("Room A")), "Room A");
    }
}
