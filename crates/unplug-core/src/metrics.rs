//! Static usage-metrics mock data.
//!
//! The dashboard's metric cards render from a [`UsageSummary`]. Like the
//! catalog, these numbers are fixed for a session; the controller never
//! writes them.

use serde::{Deserialize, Serialize};

/// Per-app usage line in the breakdown list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsage {
    /// Catalog id of the app.
    pub app_id: String,
    pub minutes: u32,
}

/// The usage numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Minutes on screen so far today.
    pub screen_time_today_min: u32,
    /// Rolling daily average, minutes.
    pub daily_average_min: u32,
    /// Times the phone was picked up today.
    pub pickups: u32,
    /// Opens of blocked apps that the lock intercepted.
    pub blocked_attempts: u32,
    /// Heaviest apps first.
    pub top_apps: Vec<AppUsage>,
}

impl UsageSummary {
    /// The reference mock numbers.
    pub fn mock() -> Self {
        Self {
            screen_time_today_min: 187,
            daily_average_min: 244,
            pickups: 58,
            blocked_attempts: 12,
            top_apps: vec![
                AppUsage {
                    app_id: "instagram".into(),
                    minutes: 64,
                },
                AppUsage {
                    app_id: "youtube".into(),
                    minutes: 51,
                },
                AppUsage {
                    app_id: "tiktok".into(),
                    minutes: 37,
                },
            ],
        }
    }
}

impl Default for UsageSummary {
    fn default() -> Self {
        Self::mock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn top_apps_reference_catalog_ids() {
        let summary = UsageSummary::mock();
        let catalog = Catalog::built_in();
        for entry in &summary.top_apps {
            assert!(
                catalog.blocked_apps.iter().any(|a| a.id == entry.app_id),
                "unknown app id {}",
                entry.app_id
            );
        }
    }

    #[test]
    fn top_apps_sorted_heaviest_first() {
        let summary = UsageSummary::mock();
        let minutes: Vec<u32> = summary.top_apps.iter().map(|a| a.minutes).collect();
        let mut sorted = minutes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(minutes, sorted);
    }
}
