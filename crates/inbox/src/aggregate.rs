//! Unread-count aggregation across accounts and categories
//!
//! One pass queries every selected account in turn, classifies the returned
//! label rows by canonical name and folds them into [`CategoryTotals`].
//! A failing account contributes nothing; the pass never aborts.

use log::{debug, info, warn};

use crate::models::{Account, CanonicalName, Category, CategoryTotals, LabelRow, PrimaryLabel};
use crate::preferences::Preferences;
use crate::provider::LabelProvider;

/// Unread conversations found for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUnread {
    pub account: Account,
    /// Sum of the account's visible category counts
    pub unread: u64,
    /// Sectioned-inbox rows outside the known categories. Reported only;
    /// never added to `unread` or the grand total.
    pub uncategorized: u32,
}

/// Result of one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Unread conversations across visible categories
    pub total_unread: u64,
    /// Accounts with a nonzero visible subtotal, in query order
    pub accounts: Vec<AccountUnread>,
    /// Category totals after hidden categories were removed
    pub categories: CategoryTotals,
    /// Unread conversations dropped by hidden categories
    pub hidden_unread: u64,
    /// Accounts whose query failed
    pub failed_accounts: Vec<Account>,
    /// URI of the last label seen with unread mail, for deep-linking
    pub label_uri: Option<String>,
}

impl Summary {
    pub fn is_visible(&self) -> bool {
        self.total_unread > 0
    }
}

/// Counts for one account's label rows
#[derive(Debug, Default)]
struct AccountTally {
    per_category: Vec<(Category, String, u32)>,
    uncategorized: u32,
    label_uri: Option<String>,
}

impl AccountTally {
    /// Sum of the counts whose category passes `counted`
    fn subtotal(&self, counted: impl Fn(Category) -> bool) -> u64 {
        self.per_category
            .iter()
            .filter(|(category, _, _)| counted(*category))
            .fold(0u64, |acc, (_, _, n)| acc.saturating_add(u64::from(*n)))
    }
}

/// Classify one account's rows.
///
/// With sectioned-inbox rows present, each row is matched against the
/// category table. Without them, the primary label's row stands in for the
/// whole account and is counted as Personal.
fn tally_account(rows: &[LabelRow], primary: &PrimaryLabel) -> AccountTally {
    let mut tally = AccountTally::default();
    let sectioned = rows
        .iter()
        .any(|row| CanonicalName::is_sectioned(&row.canonical_name));

    if !sectioned {
        let primary_name = primary.canonical_name();
        if let Some(row) = rows.iter().find(|row| row.canonical_name == primary_name) {
            if row.unread_count > 0 {
                tally.label_uri = row.uri.clone();
            }
            tally
                .per_category
                .push((Category::Personal, String::new(), row.unread_count));
        }
        return tally;
    }

    for row in rows {
        if !CanonicalName::is_sectioned(&row.canonical_name) {
            continue;
        }
        match Category::from_canonical_name(&row.canonical_name) {
            Some(category) => {
                if category == Category::Personal && row.unread_count > 0 {
                    tally.label_uri = row.uri.clone();
                }
                tally
                    .per_category
                    .push((category, row.display_name.clone(), row.unread_count));
            }
            None => {
                debug!(
                    "Uncategorized sectioned label {} ({} unread)",
                    row.canonical_name, row.unread_count
                );
                tally.uncategorized = tally.uncategorized.saturating_add(row.unread_count);
            }
        }
    }
    tally
}

/// Run one aggregation pass over `accounts`.
pub fn aggregate(
    accounts: &[Account],
    provider: &dyn LabelProvider,
    prefs: &Preferences,
) -> Summary {
    let mut summary = Summary::default();

    for account in accounts {
        let rows = match provider.query_labels(account) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Error opening labels for {}: {}", account, e);
                summary.failed_accounts.push(account.clone());
                continue;
            }
        };

        if rows.is_empty() {
            info!("No inbox information found for {}", account);
            continue;
        }

        let tally = tally_account(&rows, &prefs.primary_label);
        let unread = tally.subtotal(|category| !prefs.is_hidden(category));
        for (category, name, count) in &tally.per_category {
            summary.categories.add(*category, name, *count);
        }
        if tally.label_uri.is_some() {
            summary.label_uri = tally.label_uri.clone();
        }

        if unread > 0 {
            summary.accounts.push(AccountUnread {
                account: account.clone(),
                unread,
                uncategorized: tally.uncategorized,
            });
        }
    }

    for category in Category::RENDER_ORDER {
        if prefs.is_hidden(category) {
            summary.hidden_unread = summary
                .hidden_unread
                .saturating_add(summary.categories.remove(category));
        }
    }
    summary.total_unread = summary.categories.total();

    debug!(
        "Aggregated {} unread across {} account(s), {} hidden, {} failed",
        summary.total_unread,
        summary.accounts.len(),
        summary.hidden_unread,
        summary.failed_accounts.len()
    );
    summary
}
