//! Dashboard view-state model.
//!
//! A single controller owns all mutable dashboard state (lock toggle,
//! displayed alternatives and selection, blocked-apps modal, entrance flag)
//! and exposes intent handlers for the presentation layer.

mod controller;
mod sampler;
mod state;


pub use controller::DashboardController;
pub use sampler::Sampler;
pub use state::{DashboardState, DISPLAY_COUNT};
