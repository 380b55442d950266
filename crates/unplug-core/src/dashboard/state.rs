use serde::{Deserialize, Serialize};

use crate::catalog::{Alternative, AlternativeId};

/// Number of alternatives displayed at any time.
pub const DISPLAY_COUNT: usize = 4;

/// The mutable dashboard aggregate.
///
/// Created by `initialize`, discarded at teardown. All writes go through the
/// controller's intent handlers; the rendering layer only ever sees
/// read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Identifies one dashboard lifetime.
    pub session_id: String,
    pub is_locked: bool,
    /// Exactly [`DISPLAY_COUNT`] entries with unique ids, drawn from the
    /// master pool.
    pub displayed: Vec<Alternative>,
    /// `None` or the id of a displayed entry. A selection referencing an
    /// alternative that is not displayed is illegal state.
    pub selected_id: Option<AlternativeId>,
    pub is_modal_expanded: bool,
    /// Monotonic within a session: set once when entrance transitions fire.
    #[serde(default)]
    pub has_entered_view: bool,
}

impl DashboardState {
    pub(crate) fn new(displayed: Vec<Alternative>, selected_id: Option<AlternativeId>) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            is_locked: true,
            displayed,
            selected_id,
            is_modal_expanded: false,
            has_entered_view: false,
        }
    }

    /// Whether `id` is currently displayed.
    pub fn is_displayed(&self, id: &str) -> bool {
        self.displayed.iter().any(|a| a.id == id)
    }

    /// Ordinal position of a displayed alternative.
    ///
    /// Together with `has_entered_view` this is the only input the
    /// presentation layer needs for staggered entrance timing: position `i`
    /// delays proportionally to `i`. Timing curves and durations stay out of
    /// the state model.
    pub fn stagger_index(&self, id: &str) -> Option<usize> {
        self.displayed.iter().position(|a| a.id == id)
    }

    /// The currently selected alternative, if any.
    pub fn selected(&self) -> Option<&Alternative> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.displayed.iter().find(|a| a.id == id))
    }
}
