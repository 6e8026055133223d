//! Calendar data consumed by the header: resources, working days and views.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::HeaderError;

/// Set of weekdays a resource is schedulable on.
///
/// Bit `n` is set when weekday `n` (0 = Sunday ..= 6 = Saturday) is a working day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingDays(u8);

impl WorkingDays {
    /// Builds a set from weekday integers, rejecting anything outside `0..=6`.
    pub fn from_days<I: IntoIterator<Item = u8>>(days: I) -> Result<Self, HeaderError> {
        days.into_iter().try_fold(WorkingDays(0), |set, day| {
            if day > 6 {
                return Err(HeaderError::InvalidWeekday(day));
            }
            Ok(WorkingDays(set.0 | 1 << day))
        })
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_sunday()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Weekday integers in ascending order.
    pub fn days(self) -> impl Iterator<Item = u8> {
        (0..7u8).filter(move |d| self.0 & (1 << d) != 0)
    }
}

impl TryFrom<Vec<u8>> for WorkingDays {
    type Error = HeaderError;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        WorkingDays::from_days(days)
    }
}

impl From<WorkingDays> for Vec<u8> {
    fn from(set: WorkingDays) -> Self {
        set.days().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId(id.to_string())
    }
}

/// A schedulable entity that subdivides date columns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Resource {
    #[serde(default)]
    pub title: Option<String>,
    /// `None` means active every weekday.
    #[serde(default)]
    pub working_days: Option<WorkingDays>,
}

impl Resource {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            working_days: None,
        }
    }

    pub fn with_working_days(mut self, days: WorkingDays) -> Self {
        self.working_days = Some(days);
        self
    }

    /// Whether this resource works on the weekday of `date`.
    ///
    /// An absent or empty working-day set places no constraint.
    pub fn works_on(&self, date: NaiveDateTime) -> bool {
        match self.working_days {
            Some(days) if !days.is_empty() => days.contains(date.weekday()),
            _ => true,
        }
    }
}

/// One `(id, resource)` pair. A `None` resource is a malformed entry and is
/// skipped by the header.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceEntry {
    pub id: ResourceId,
    #[serde(default)]
    pub resource: Option<Resource>,
}

impl ResourceEntry {
    pub fn new(id: impl Into<ResourceId>, resource: Resource) -> Self {
        Self {
            id: id.into(),
            resource: Some(resource),
        }
    }
}

pub type ResourceList = Vec<ResourceEntry>;

/// Parses a resource list such as
/// `[{"id": "1", "resource": {"title": "Room A", "working_days": [1, 2]}}]`.
pub fn load_resources(json: &str) -> Result<ResourceList, HeaderError> {
    Ok(serde_json::from_str(json)?)
}

/// Calendar view a header cell can drill down into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Month,
    Week,
    WorkWeek,
    Day,
    Agenda,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::Month => "month",
            View::Week => "week",
            View::WorkWeek => "work_week",
            View::Day => "day",
            View::Agenda => "agenda",
        };
        f.write_str(name)
    }
}

/// Day-granularity equality; time of day is ignored.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_working_days_membership() {
        let days = WorkingDays::from_days([1, 2]).unwrap();
        assert!(days.contains(Weekday::Mon));
        assert!(days.contains(Weekday::Tue));
        assert!(!days.contains(Weekday::Sun));
        assert_eq!(days.days().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_working_days_rejects_out_of_range() {
        assert!(matches!(
            WorkingDays::from_days([1, 7]),
            Err(HeaderError::InvalidWeekday(7))
        ));
    }

    #[test]
    fn test_resource_without_working_days_works_every_day() {
        let r = Resource::new("Room A");
        // 2024-01-07 is a Sunday
        for d in 7..14 {
            assert!(r.works_on(at(2024, 1, d, 9)));
        }
    }

    #[test]
    fn test_empty_working_days_is_unconstrained() {
        let r = Resource::new("Room A").with_working_days(WorkingDays::default());
        assert!(r.works_on(at(2024, 1, 7, 0)));
    }

    #[test]
    fn test_resource_respects_working_days() {
        let r = Resource::new("Mon only").with_working_days(WorkingDays::from_days([1]).unwrap());
        assert!(r.works_on(at(2024, 1, 8, 0)));
        assert!(!r.works_on(at(2024, 1, 9, 0)));
    }

    #[test]
    fn test_load_resources() {
        let json = r#"[
            {"id": "1", "resource": {"title": "Room A", "working_days": [1]}},
            {"id": "2", "resource": null},
            {"id": "3", "resource": {"title": "Room C"}}
        ]"#;
        let list = load_resources(json).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, ResourceId::from("1"));
        assert!(list[1].resource.is_none());
        assert!(list[2].resource.as_ref().unwrap().working_days.is_none());
    }

    #[test]
    fn test_load_resources_rejects_bad_weekday() {
        let json = r#"[{"id": "1", "resource": {"working_days": [9]}}]"#;
        assert!(matches!(load_resources(json), Err(HeaderError::Config(_))));
    }

    #[test]
    fn test_same_day_ignores_time() {
        assert!(same_day(at(2024, 3, 1, 0), at(2024, 3, 1, 23)));
        assert!(!same_day(at(2024, 3, 1, 23), at(2024, 3, 2, 0)));
    }

    #[test]
    fn test_view_serde_names() {
        let v: View = serde_json::from_str("\"work_week\"").unwrap();
        assert_eq!(v, View::WorkWeek);
        assert_eq!(View::WorkWeek.to_string(), "work_week");
    }
}
