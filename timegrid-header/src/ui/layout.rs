//! Date/resource layout calculations.
//!
//! Column weights are derived from resource working days on every pass;
//! nothing here keeps state between renders.

use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::model::{Resource, ResourceEntry};

/// Height of the header: date row plus resource row.
pub const HEADER_HEIGHT: u16 = 2;

/// Resources working on the weekday of `date`, in list order.
///
/// Yields the entry's index in `resources` alongside it. Entries without a
/// resource are skipped.
pub fn matching_resources<'r>(
    resources: &'r [ResourceEntry],
    date: NaiveDateTime,
) -> impl Iterator<Item = (usize, &'r ResourceEntry, &'r Resource)> + 'r {
    resources.iter().enumerate().filter_map(move |(idx, entry)| {
        let resource = entry.resource.as_ref()?;
        resource.works_on(date).then_some((idx, entry, resource))
    })
}

/// Flex weight of the column for `date`: the number of resources working that day.
pub fn flex_weight(resources: &[ResourceEntry], date: NaiveDateTime) -> usize {
    matching_resources(resources, date).count()
}

/// Horizontal constraint for each date column.
///
/// A weighted column fills proportionally. A zero-weight column keeps the
/// width of its label, unless every column is zero-weight, in which case
/// they share the width evenly.
pub fn column_constraints(columns: impl Iterator<Item = (usize, u16)> + Clone) -> Vec<Constraint> {
    let all_zero = columns.clone().all(|(weight, _)| weight == 0);
    columns
        .map(|(weight, label_width)| match weight {
            0 if all_zero => Constraint::Fill(1),
            0 => Constraint::Length(label_width),
            w => Constraint::Fill(u16::try_from(w).unwrap_or(u16::MAX)),
        })
        .collect()
}

/// Removes the scrollbar gutter from the trailing edge, or the leading edge
/// under right-to-left layout.
pub fn reserve_scrollbar(area: Rect, size: u16, rtl: bool) -> Rect {
    let size = size.min(area.width);
    let x = if rtl { area.x + size } else { area.x };
    Rect {
        x,
        width: area.width - size,
        ..area
    }
}

/// Splits a header row into the time gutter and the date columns.
pub fn header_split(area: Rect, gutter_width: u16, columns: &[Constraint]) -> (Rect, Vec<Rect>) {
    let constraints = std::iter::once(Constraint::Length(gutter_width)).chain(columns.iter().copied());
    let areas = Layout::horizontal(constraints).split(area);
    (areas[0], areas[1..].to_vec())
}

/// Splits a date column into its date row and resource row.
pub fn column_rows(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area)
}

/// Splits a resource row evenly between `count` sub-header cells.
pub fn resource_split(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal(std::iter::repeat(Constraint::Fill(1)).take(count))
        .split(area)
        .to_vec()
}

/// Area a centered label of `width` cells occupies inside `row`.
///
/// Uses the same offset as ratatui's centered alignment.
pub fn centered(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    Rect {
        x: row.x + (row.width / 2).saturating_sub(width / 2),
        width,
        ..row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkingDays;
    use chrono::NaiveDate;

    // 2026-10-12 is a Monday
    fn monday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 12)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn tuesday() -> NaiveDateTime {
        monday() + chrono::Duration::days(1)
    }

    fn entry(id: &str, days: &[u8]) -> ResourceEntry {
        ResourceEntry::new(
            id,
            Resource::new(id).with_working_days(WorkingDays::from_days(days.iter().copied()).unwrap()),
        )
    }

    #[test]
    fn test_weights_follow_working_days() {
        let resources = vec![entry("1", &[1]), entry("2", &[1, 2])];
        assert_eq!(flex_weight(&resources, monday()), 2);
        assert_eq!(flex_weight(&resources, tuesday()), 1);
    }

    #[test]
    fn test_weight_is_additive() {
        let resources = vec![
            entry("1", &[1]),
            entry("2", &[1]),
            entry("3", &[1]),
            entry("4", &[2]),
        ];
        assert_eq!(flex_weight(&resources, monday()), 3);
        assert_eq!(flex_weight(&resources, tuesday()), 1);
    }

    #[test]
    fn test_empty_resources_weigh_zero() {
        assert_eq!(flex_weight(&[], monday()), 0);
    }

    #[test]
    fn test_matching_keeps_order_and_skips_missing() {
        let resources = vec![
            entry("a", &[2]),
            ResourceEntry {
                id: "broken".into(),
                resource: None,
            },
            ResourceEntry::new("b", Resource::new("b")),
            entry("c", &[1, 2]),
        ];
        let ids: Vec<(usize, &str)> = matching_resources(&resources, tuesday())
            .map(|(idx, e, _)| (idx, e.id.0.as_str()))
            .collect();
        assert_eq!(ids, vec![(0, "a"), (2, "b"), (3, "c")]);
        assert_eq!(flex_weight(&resources, tuesday()), 3);
    }

    #[test]
    fn test_column_constraints() {
        let cols = [(2usize, 6u16), (0, 6), (1, 6)];
        assert_eq!(
            column_constraints(cols.iter().copied()),
            vec![Constraint::Fill(2), Constraint::Length(6), Constraint::Fill(1)]
        );

        let zero = [(0usize, 6u16), (0, 6)];
        assert_eq!(
            column_constraints(zero.iter().copied()),
            vec![Constraint::Fill(1), Constraint::Fill(1)]
        );
    }

    #[test]
    fn test_reserve_scrollbar() {
        let area = Rect::new(0, 0, 40, 2);
        assert_eq!(reserve_scrollbar(area, 2, false), Rect::new(0, 0, 38, 2));
        assert_eq!(reserve_scrollbar(area, 2, true), Rect::new(2, 0, 38, 2));
        assert_eq!(reserve_scrollbar(Rect::new(0, 0, 1, 2), 3, false).width, 0);
    }

    #[test]
    fn test_centered_label_area() {
        let row = Rect::new(10, 0, 20, 1);
        assert_eq!(centered(row, 6), Rect::new(17, 0, 6, 1));
        // odd label in an even row leans right, as ratatui draws it
        assert_eq!(centered(row, 7), Rect::new(17, 0, 7, 1));
        assert_eq!(centered(Rect::new(0, 0, 7, 1), 7), Rect::new(0, 0, 7, 1));
        assert_eq!(centered(row, 40), row);
    }

    #[test]
    fn test_header_split_proportional() {
        let (gutter, cols) = header_split(
            Rect::new(0, 0, 34, 2),
            4,
            &[Constraint::Fill(2), Constraint::Fill(1)],
        );
        assert_eq!(gutter, Rect::new(0, 0, 4, 2));
        assert_eq!(cols[0].width, 20);
        assert_eq!(cols[1].width, 10);
        assert_eq!(cols[1].x, 24);
    }
}
