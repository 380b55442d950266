//! Dashboard state controller.
//!
//! The controller owns all mutable view state and exposes the intent
//! handlers a presentation layer invokes in response to user taps and
//! lifecycle events. It is single-threaded and event-driven: every handler
//! mutates synchronously and returns before the next event arrives.
//!
//! ## State transitions
//!
//! ```text
//! (uninitialized) -> initialize -> active
//! active: toggle_lock | select | shuffle | expand/collapse | mark_entered
//! ```
//!
//! There is no terminal state; teardown simply discards the aggregate.

use chrono::Utc;

use super::sampler::Sampler;
use super::state::{DashboardState, DISPLAY_COUNT};
use crate::catalog::Alternative;
use crate::error::StateError;
use crate::events::Event;

/// Core dashboard controller.
///
/// Commands return `Ok` with the produced [`Event`] when state changed
/// (idempotent handlers return `Ok(None)` on a no-op) and `Err` on the
/// caller-contract violations of [`StateError`]. On error, state is always
/// left untouched.
#[derive(Debug)]
pub struct DashboardController {
    state: Option<DashboardState>,
    sampler: Sampler,
}

impl DashboardController {
    /// Create an uninitialized controller drawing shuffle randomness from
    /// OS entropy.
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// Create an uninitialized controller with an optional fixed shuffle
    /// seed (reproducible sampling for tests and debugging).
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            state: None,
            sampler: Sampler::new(seed),
        }
    }

    /// Resume a controller around a previously produced state.
    ///
    /// The state is trusted to have been produced by this controller;
    /// invariants are not re-checked.
    pub fn from_state(state: DashboardState, seed: Option<u64>) -> Self {
        Self {
            state: Some(state),
            sampler: Sampler::new(seed),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&DashboardState> {
        self.state.as_ref()
    }

    /// Build a full state snapshot event for the rendering layer.
    pub fn snapshot(&self) -> Result<Event, StateError> {
        let state = self.state.as_ref().ok_or(StateError::NotInitialized)?;
        Ok(Event::StateSnapshot {
            session_id: state.session_id.clone(),
            is_locked: state.is_locked,
            displayed: state.displayed.clone(),
            selected_id: state.selected_id.clone(),
            is_modal_expanded: state.is_modal_expanded,
            has_entered_view: state.has_entered_view,
            at: Utc::now(),
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create the dashboard aggregate from the master pool.
    ///
    /// Displays the first [`DISPLAY_COUNT`] entries in master order and
    /// pre-selects the third. Re-initializing replaces the aggregate
    /// wholesale and mints a new session id.
    pub fn initialize(&mut self, master_pool: &[Alternative]) -> Result<Event, StateError> {
        Self::check_pool(master_pool)?;
        let displayed: Vec<Alternative> = master_pool[..DISPLAY_COUNT].to_vec();
        let selected_id = Some(displayed[2].id.clone());
        let state = DashboardState::new(displayed, selected_id);
        let event = Event::DashboardInitialized {
            session_id: state.session_id.clone(),
            displayed: state.displayed.iter().map(|a| a.id.clone()).collect(),
            selected_id: state.selected_id.clone(),
            at: Utc::now(),
        };
        self.state = Some(state);
        Ok(event)
    }

    /// Flip the lock. Never fails after initialization.
    pub fn toggle_lock(&mut self) -> Result<Event, StateError> {
        let state = self.state_mut()?;
        state.is_locked = !state.is_locked;
        Ok(Event::LockToggled {
            is_locked: state.is_locked,
            at: Utc::now(),
        })
    }

    /// Mark a displayed alternative as active.
    ///
    /// Fails with `UnknownAlternative` if `id` is not in the displayed
    /// subset. The frontend only ever passes ids it got from rendering the
    /// current subset, so this firing means frontend and state have
    /// desynchronized -- surfaced rather than swallowed.
    pub fn select(&mut self, id: &str) -> Result<Event, StateError> {
        let state = self.state_mut()?;
        if !state.is_displayed(id) {
            return Err(StateError::UnknownAlternative { id: id.to_string() });
        }
        state.selected_id = Some(id.to_string());
        Ok(Event::AlternativeSelected {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Replace the displayed subset with a fresh uniform sample from the
    /// master pool and clear the selection.
    ///
    /// Clearing unconditionally is deliberate: the active alternative may
    /// not survive the shuffle, and a selection referencing an entry that is
    /// no longer displayed would be illegal state. The user re-chooses from
    /// the new set.
    pub fn shuffle(&mut self, master_pool: &[Alternative]) -> Result<Event, StateError> {
        if self.state.is_none() {
            return Err(StateError::NotInitialized);
        }
        Self::check_pool(master_pool)?;
        let displayed = self.sampler.sample(master_pool, DISPLAY_COUNT);
        let state = self.state.as_mut().ok_or(StateError::NotInitialized)?;
        state.displayed = displayed;
        state.selected_id = None;
        Ok(Event::AlternativesShuffled {
            displayed: state.displayed.iter().map(|a| a.id.clone()).collect(),
            at: Utc::now(),
        })
    }

    /// Expand the blocked-apps detail modal. Idempotent.
    ///
    /// While expanded the rendering layer de-emphasizes the underlying
    /// dashboard and keeps an equal-size placeholder in the summary-card
    /// slot so the surrounding layout does not reflow.
    pub fn expand(&mut self) -> Result<Option<Event>, StateError> {
        let state = self.state_mut()?;
        if state.is_modal_expanded {
            return Ok(None);
        }
        state.is_modal_expanded = true;
        Ok(Some(Event::ModalExpanded { at: Utc::now() }))
    }

    /// Collapse the blocked-apps detail modal. Idempotent.
    pub fn collapse(&mut self) -> Result<Option<Event>, StateError> {
        let state = self.state_mut()?;
        if !state.is_modal_expanded {
            return Ok(None);
        }
        state.is_modal_expanded = false;
        Ok(Some(Event::ModalCollapsed { at: Utc::now() }))
    }

    /// One-way `false -> true` entrance flag, set when the dashboard is
    /// first presented. Later calls are no-ops.
    pub fn mark_entered(&mut self) -> Result<Option<Event>, StateError> {
        let state = self.state_mut()?;
        if state.has_entered_view {
            return Ok(None);
        }
        state.has_entered_view = true;
        Ok(Some(Event::ViewEntered { at: Utc::now() }))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn state_mut(&mut self) -> Result<&mut DashboardState, StateError> {
        self.state.as_mut().ok_or(StateError::NotInitialized)
    }

    fn check_pool(pool: &[Alternative]) -> Result<(), StateError> {
        if pool.len() < DISPLAY_COUNT {
            return Err(StateError::InsufficientPoolSize {
                required: DISPLAY_COUNT,
                actual: pool.len(),
            });
        }
        Ok(())
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}
