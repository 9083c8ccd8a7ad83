//! Main menu row formatting.

use crate::aggregator::PackageStatus;

/// Format one aligned row per package.
///
/// Names are left-aligned to the longest name; versions are right-aligned to
/// the longest installed or latest version. A package with an update gets
/// `→ <latest>` appended.
pub fn format_package_rows(statuses: &[PackageStatus]) -> Vec<String> {
    let name_width = statuses
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let version_width = statuses
        .iter()
        .flat_map(|s| {
            std::iter::once(s.installed_version.as_str()).chain(s.latest_version.as_deref())
        })
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0);

    statuses
        .iter()
        .map(|status| {
            let row = format!(
                "{:<nw$} {:>vw$}",
                status.name,
                status.installed_version,
                nw = name_width,
                vw = version_width
            );
            match status.latest_version.as_deref() {
                Some(latest) if status.has_update() => {
                    format!("{} → {:>vw$}", row, latest, vw = version_width)
                }
                _ => row,
            }
        })
        .collect()
}
