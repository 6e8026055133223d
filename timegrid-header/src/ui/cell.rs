//! Date header cell renderer, shared by the per-date content blocks and the
//! flat `header_cells` list.

use chrono::NaiveDateTime;
use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

use crate::{
    collaborators::{DrilldownResolver, FormatKey, Getters, Localizer},
    model::{same_day, View},
    ui::{
        colors,
        components::{HeaderComponent, HeaderProps},
    },
};

pub const HEADER_CLASS: &str = "timegrid-header";
pub const TODAY_CLASS: &str = "today";

/// Navigation target bound to a header cell when it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillDownLink {
    pub date: NaiveDateTime,
    pub view: View,
}

/// A rendered date header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub date: NaiveDateTime,
    pub content: Line<'static>,
    pub classes: Vec<String>,
    pub style: Style,
    /// `Some` when the label is wrapped in an activatable link.
    pub link: Option<DrillDownLink>,
}

impl HeaderCell {
    pub fn is_today(&self) -> bool {
        self.classes.iter().any(|c| c == TODAY_CLASS)
    }

    /// Width of the label in cells.
    pub fn label_width(&self) -> u16 {
        u16::try_from(self.content.width()).unwrap_or(u16::MAX)
    }
}

/// Collaborators a cell needs; `today` is read once per render pass.
pub struct CellContext<'a> {
    pub today: NaiveDateTime,
    pub localizer: &'a dyn Localizer,
    pub drilldown: &'a dyn DrilldownResolver,
    pub getters: &'a dyn Getters,
    pub header: &'a dyn HeaderComponent,
}

pub fn render_header_cell(ctx: &CellContext<'_>, date: NaiveDateTime) -> HeaderCell {
    let label = ctx.localizer.format(date, FormatKey::Day);
    let day_prop = ctx.getters.day_prop(date);
    let is_today = same_day(date, ctx.today);

    let mut classes = vec![HEADER_CLASS.to_string()];
    classes.extend(day_prop.class_name);

    let mut style = Style::default().patch(day_prop.style);
    if is_today {
        classes.push(TODAY_CLASS.to_string());
        style = style.bg(colors::TODAY_BG);
    }

    let content = ctx.header.render(&HeaderProps {
        date,
        label: &label,
        localizer: ctx.localizer,
    });

    let link = ctx
        .drilldown
        .drilldown_view(date)
        .map(|view| DrillDownLink { date, view });
    let content = match link {
        Some(_) => content.patch_style(
            Style::default()
                .fg(colors::LINK)
                .add_modifier(Modifier::UNDERLINED),
        ),
        None => content,
    };

    HeaderCell {
        date,
        content,
        classes,
        style,
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collaborators::{ChronoLocalizer, DayProp, NoDayProps},
        ui::components::DefaultHeader,
    };
    use chrono::NaiveDate;
    use ratatui::style::Color;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn no_drilldown(_: NaiveDateTime) -> Option<View> {
        None
    }

    fn day_drilldown(_: NaiveDateTime) -> Option<View> {
        Some(View::Day)
    }

    fn ctx<'a>(
        today: NaiveDateTime,
        localizer: &'a ChronoLocalizer,
        drilldown: &'a dyn DrilldownResolver,
        getters: &'a dyn Getters,
    ) -> CellContext<'a> {
        CellContext {
            today,
            localizer,
            drilldown,
            getters,
            header: &DefaultHeader,
        }
    }

    #[test]
    fn test_today_ignores_time_of_day() {
        let l = ChronoLocalizer::default();
        let c = ctx(at(16, 23, 59), &l, &no_drilldown, &NoDayProps);

        let cell = render_header_cell(&c, at(16, 0, 0));
        assert!(cell.is_today());
        assert_eq!(cell.style.bg, Some(colors::TODAY_BG));

        let cell = render_header_cell(&c, at(17, 0, 0));
        assert!(!cell.is_today());
        assert_eq!(cell.style.bg, None);
    }

    #[test]
    fn test_label_from_localizer() {
        let l = ChronoLocalizer::new("%A");
        let c = ctx(at(1, 0, 0), &l, &no_drilldown, &NoDayProps);
        let cell = render_header_cell(&c, at(16, 0, 0));
        assert_eq!(cell.content.to_string(), "Friday");
        assert_eq!(cell.label_width(), 6);
    }

    #[test]
    fn test_link_only_when_view_resolved() {
        let l = ChronoLocalizer::default();

        let plain = render_header_cell(&ctx(at(1, 0, 0), &l, &no_drilldown, &NoDayProps), at(16, 0, 0));
        assert_eq!(plain.link, None);
        assert!(!plain.content.style.add_modifier.contains(Modifier::UNDERLINED));

        let linked = render_header_cell(&ctx(at(1, 0, 0), &l, &day_drilldown, &NoDayProps), at(16, 0, 0));
        assert_eq!(
            linked.link,
            Some(DrillDownLink {
                date: at(16, 0, 0),
                view: View::Day
            })
        );
        assert!(linked.content.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_day_prop_merged_with_today() {
        let l = ChronoLocalizer::default();
        let holiday = |_: NaiveDateTime| DayProp {
            class_name: Some("holiday".into()),
            style: Style::default().fg(Color::Red),
        };
        let c = ctx(at(16, 8, 0), &l, &no_drilldown, &holiday);
        let cell = render_header_cell(&c, at(16, 0, 0));

        assert_eq!(cell.classes, vec![HEADER_CLASS, "holiday", TODAY_CLASS]);
        assert_eq!(cell.style.fg, Some(Color::Red));
        assert_eq!(cell.style.bg, Some(colors::TODAY_BG));
    }
}
