//! Static seed data for the dashboard.
//!
//! The catalog is the data-loading collaborator of the state controller: it
//! supplies the blocked-apps list and the master pool of alternative
//! activities. Entries are immutable for the lifetime of a session -- the
//! controller only ever reads them.
//!
//! A built-in catalog ships with the crate; users can replace it with a TOML
//! file referenced from the app configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Unique identifier for an alternative activity.
pub type AlternativeId = String;

/// Minimum number of alternatives a catalog must provide to fill the
/// displayed subset.
pub const MIN_POOL_SIZE: usize = 4;

/// An app the user has chosen to block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedApp {
    pub id: String,
    pub name: String,
    /// Opaque display hint (hex accent color) for the presentation layer.
    pub color: String,
}

/// A "premium alternative" activity offered in place of a blocked app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub title: String,
    pub subtitle: String,
    /// Opaque symbol name for the presentation layer.
    pub icon: String,
    /// Opaque display hint (hex accent color) for the presentation layer.
    pub color: String,
}

/// The full seed data set: blocked apps plus the master alternatives pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub blocked_apps: Vec<BlockedApp>,
    pub alternatives: Vec<Alternative>,
}

impl Catalog {
    /// The built-in mock catalog.
    pub fn built_in() -> Self {
        fn app(id: &str, name: &str, color: &str) -> BlockedApp {
            BlockedApp {
                id: id.into(),
                name: name.into(),
                color: color.into(),
            }
        }
        fn alt(id: &str, title: &str, subtitle: &str, icon: &str, color: &str) -> Alternative {
            Alternative {
                id: id.into(),
                title: title.into(),
                subtitle: subtitle.into(),
                icon: icon.into(),
                color: color.into(),
            }
        }
        Self {
            blocked_apps: vec![
                app("instagram", "Instagram", "#e1306c"),
                app("tiktok", "TikTok", "#00f2ea"),
                app("youtube", "YouTube", "#ff0000"),
                app("x", "X", "#1d9bf0"),
            ],
            alternatives: vec![
                alt(
                    "read-chapter",
                    "Read a chapter",
                    "Pick up where you left off",
                    "book",
                    "#f59e0b",
                ),
                alt(
                    "short-walk",
                    "Take a walk",
                    "10 minutes outside",
                    "footprints",
                    "#22c55e",
                ),
                alt(
                    "stretch",
                    "Stretch",
                    "Loosen up your back",
                    "figure",
                    "#38bdf8",
                ),
                alt(
                    "call-friend",
                    "Call a friend",
                    "Someone you miss",
                    "phone",
                    "#a78bfa",
                ),
                alt(
                    "journal",
                    "Journal",
                    "Three lines, no pressure",
                    "pencil",
                    "#f472b6",
                ),
                alt(
                    "breathe",
                    "Breathe",
                    "One minute of calm",
                    "wind",
                    "#2dd4bf",
                ),
                alt(
                    "make-tea",
                    "Make tea",
                    "A proper cup, slowly",
                    "cup",
                    "#fb923c",
                ),
                alt(
                    "sketch",
                    "Sketch",
                    "Whatever is in front of you",
                    "scribble",
                    "#94a3b8",
                ),
            ],
        }
    }

    /// Load a user catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let catalog: Self =
            toml::from_str(&content).map_err(|e| CatalogError::ParseFailed(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check id uniqueness and the minimum pool size.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for id in self
            .blocked_apps
            .iter()
            .map(|a| &a.id)
            .chain(self.alternatives.iter().map(|a| &a.id))
        {
            if !seen.insert(id.as_str()) {
                return Err(CatalogError::DuplicateId { id: id.clone() });
            }
        }
        if self.alternatives.len() < MIN_POOL_SIZE {
            return Err(CatalogError::PoolTooSmall {
                required: MIN_POOL_SIZE,
                actual: self.alternatives.len(),
            });
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::built_in()
    }
}
