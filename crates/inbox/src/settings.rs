//! Settings-screen helpers
//!
//! The settings screen itself belongs to the host. These helpers compute what
//! it shows for the accounts picker.

use std::collections::BTreeSet;

use crate::models::{Account, AccountSource};
use crate::preferences::Preferences;
use crate::render::plural;

/// Contents of the multi-select accounts preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountsPreference {
    /// Every linked account, in host order
    pub entries: Vec<Account>,
    /// Accounts currently checked
    pub selected: BTreeSet<Account>,
    /// Summary line under the preference title
    pub summary: String,
}

/// Summary for the accounts picker, e.g. "1 of 2 accounts selected".
/// The plural form follows the number of linked accounts.
pub fn accounts_summary(selected: usize, total: usize) -> String {
    let noun = plural(u64::try_from(total).unwrap_or(u64::MAX), "account", "accounts");
    format!("{} of {} {} selected", selected, total, noun)
}

/// Build the accounts picker. With no stored selection every account is
/// checked, matching how the update pass treats a missing selection.
pub fn accounts_preference(source: &dyn AccountSource, prefs: &Preferences) -> AccountsPreference {
    let entries = source.list_accounts();
    let selected: BTreeSet<Account> = match &prefs.accounts {
        Some(selected) => selected.clone(),
        None => entries.iter().cloned().collect(),
    };
    let summary = accounts_summary(selected.len(), entries.len());
    AccountsPreference {
        entries,
        selected,
        summary,
    }
}
