//! Formatting shared by the help built-in and dispatch errors.

use super::registry::Registry;

/// Formats every registered subcommand as an aligned, name-sorted listing.
///
/// Each line is a tab, the name padded to one past the longest name, and the
/// first line of the synopsis.
pub fn format_listing(registry: &Registry) -> String {
    let mut entries = registry.list();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let width = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    entries
        .iter()
        .map(|(name, synopsis)| {
            let summary = synopsis.lines().next().unwrap_or_default();
            format!("\t{name:<width$}{summary}\n")
        })
        .collect()
}

/// Base name of an invoked executable path.
pub fn base_name(path: &str) -> &str {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
