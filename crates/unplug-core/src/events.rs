use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Alternative, AlternativeId};

/// Every state change in the dashboard produces an Event.
/// The GUI polls for events; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A fresh dashboard session was created.
    DashboardInitialized {
        session_id: String,
        displayed: Vec<AlternativeId>,
        selected_id: Option<AlternativeId>,
        at: DateTime<Utc>,
    },
    LockToggled {
        is_locked: bool,
        at: DateTime<Utc>,
    },
    AlternativeSelected {
        id: AlternativeId,
        at: DateTime<Utc>,
    },
    /// Displayed subset replaced by a fresh random sample; selection cleared.
    AlternativesShuffled {
        displayed: Vec<AlternativeId>,
        at: DateTime<Utc>,
    },
    ModalExpanded {
        at: DateTime<Utc>,
    },
    ModalCollapsed {
        at: DateTime<Utc>,
    },
    /// Staggered entrance transitions fired; emitted at most once per session.
    ViewEntered {
        at: DateTime<Utc>,
    },
    /// Full read-only snapshot the rendering layer redraws from.
    StateSnapshot {
        session_id: String,
        is_locked: bool,
        displayed: Vec<Alternative>,
        selected_id: Option<AlternativeId>,
        is_modal_expanded: bool,
        has_entered_view: bool,
        at: DateTime<Utc>,
    },
}
