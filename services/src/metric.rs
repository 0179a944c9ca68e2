//! Resolution of raw metric history into one current value per metric.
//!
//! Storage keeps every snapshot of a metric. Readers only want the latest
//! enabled one for each `(category, name)` pair, so a company's rows go through
//! two steps: drop the ones whose status text does not read as enabled, then
//! keep the newest survivor of each group.

use db::models::metric::Model as Metric;
use std::collections::HashMap;

/// Status fragments that mark a metric as switched on.
pub const ENABLED_MARKERS: [&str; 10] = [
    "is Enabled",
    "is Active",
    "is enabled",
    "is active",
    "ACTIVE",
    "AcTive",
    "Active",
    "active",
    "Enabled",
    "enabled",
];

/// Status fragments that switch a metric off, whatever else the text says.
pub const DISABLED_MARKERS: [&str; 6] = ["Disabled", "disabled", "inactive", "INACTIVE", "NA", "N/A"];

/// Classifies a free-text status.
///
/// Plain case-sensitive substring tests, not word matches: `"FINANCIAL"`
/// contains `"NA"` and therefore disables.
pub fn is_enabled(status: &str) -> bool {
    let has_enabled = ENABLED_MARKERS.iter().any(|m| status.contains(m));
    let has_disabled = DISABLED_MARKERS.iter().any(|m| status.contains(m));

    has_enabled && !has_disabled
}

/// Drops disabled rows and keeps the newest row per `(category, name)`.
///
/// A row only replaces the current pick when its `recorded_at` is strictly
/// later, so on a tie the row seen first wins. Output order is unspecified.
pub fn resolve_latest<I>(metrics: I) -> Vec<Metric>
where
    I: IntoIterator<Item = Metric>,
{
    let mut latest: HashMap<(String, String), Metric> = HashMap::new();

    for metric in metrics {
        if !is_enabled(&metric.status) {
            continue;
        }

        let key = (metric.category.clone(), metric.name.clone());
        let newer = latest
            .get(&key)
            .is_none_or(|current| metric.recorded_at > current.recorded_at);
        if newer {
            latest.insert(key, metric);
        }
    }

    latest.into_values().collect()
}
