//! # Unplug Core Library
//!
//! This library provides the core logic for Unplug, a screen-time-management
//! app. It implements a CLI-first philosophy where every dashboard intent is
//! available via a standalone CLI binary, with any GUI being a thin
//! presentation skin over the same core library.
//!
//! ## Architecture
//!
//! - **Dashboard controller**: a single-threaded view-state machine (lock
//!   toggle, alternative selection and shuffle, blocked-apps modal, entrance
//!   flag); the presentation layer invokes intents and redraws from state
//!   snapshots
//! - **Catalog**: static seed data (blocked apps, master alternatives pool)
//!   with an optional TOML override
//! - **Config**: TOML-based application configuration
//!
//! ## Key Components
//!
//! - [`DashboardController`]: the dashboard state machine
//! - [`Catalog`]: blocked apps and alternative activities
//! - [`Config`]: application configuration management
//! - [`Event`]: state-change notifications the frontend polls for

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod metrics;

pub use catalog::{Alternative, AlternativeId, BlockedApp, Catalog, MIN_POOL_SIZE};
pub use config::Config;
pub use dashboard::{DashboardController, DashboardState, DISPLAY_COUNT};
pub use error::{CatalogError, ConfigError, CoreError, Result, StateError};
pub use events::Event;
pub use metrics::{AppUsage, UsageSummary};
