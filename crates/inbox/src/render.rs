//! Text shown by the extension
//!
//! Pure functions over a [`Summary`]; no host dependencies.

use crate::aggregate::Summary;
use crate::preferences::Preferences;

/// Pick the singular or plural form for `count`
pub(crate) fn plural<'a>(count: u64, one: &'a str, other: &'a str) -> &'a str {
    if count == 1 { one } else { other }
}

/// Expanded title, e.g. "3 unread conversations"
pub fn expanded_title(total: u64) -> String {
    format!(
        "{} {}",
        total,
        plural(total, "unread conversation", "unread conversations")
    )
}

/// Collapsed status text: the total as a plain number
pub fn status(total: u64) -> String {
    total.to_string()
}

/// Expanded body.
///
/// Account lines (visible categories only) come first when `show_accounts`
/// is on, then a blank line if category lines follow, then one line per visible nonzero category.
pub fn body(summary: &Summary, prefs: &Preferences) -> String {
    let mut lines: Vec<String> = Vec::new();

    if prefs.show_accounts {
        lines.extend(
            summary
                .accounts
                .iter()
                .filter(|a| a.unread > 0)
                .map(|a| format!("{} ({})", a.account, a.unread)),
        );
    }

    let category_lines: Vec<String> = summary
        .categories
        .visible()
        .map(|(_, name, count)| format!("{} ({})", name, count))
        .collect();

    if prefs.show_accounts && prefs.show_all && !lines.is_empty() && !category_lines.is_empty() {
        lines.push(String::new());
    }
    lines.extend(category_lines);

    lines.join("\n")
}
