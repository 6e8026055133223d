//! Drill-down activation.
//!
//! Links are bound to `(date, view)` when a cell is rendered; activating one
//! relays exactly that pair to the host callback.

use chrono::NaiveDateTime;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{model::View, ui::cell::DrillDownLink, ui::state::HeaderState};

/// Host callback receiving the drill-down target.
pub type DrillDownCallback<'a> = &'a dyn Fn(NaiveDateTime, View);

#[derive(Clone, Copy, Default)]
pub struct DrillDownNavigator<'a> {
    on_drill_down: Option<DrillDownCallback<'a>>,
}

impl<'a> DrillDownNavigator<'a> {
    pub fn new(on_drill_down: Option<DrillDownCallback<'a>>) -> Self {
        Self { on_drill_down }
    }

    /// Notifies the host of `link`. Without a callback this does nothing.
    pub fn activate(&self, link: &DrillDownLink) {
        match self.on_drill_down {
            Some(notify) => {
                tracing::debug!("drill down to {} ({})", link.date, link.view);
                notify(link.date, link.view);
            }
            None => tracing::trace!("drill down to {} ignored: no handler", link.date),
        }
    }

    /// Handles an input event against the links of the last render pass.
    ///
    /// Returns `true` if the event hit a link and was consumed.
    pub fn on_event(&self, ev: &Event, state: &HeaderState) -> bool {
        let Some(pos) = activation_point(ev) else {
            return false;
        };
        match state.link_at(pos) {
            Some(link) => {
                self.activate(link);
                true
            }
            None => false,
        }
    }
}

/// Position of a left-button press, if `ev` is one.
fn activation_point(ev: &Event) -> Option<Position> {
    match ev {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Position::new(*column, *row)),
        _ => None,
    }
}
