//! Display and filtering preferences for the extension
//!
//! Preferences are a plain value handed to each update pass. They are read
//! from a [`config::PreferenceStore`] by the host or the CLI.

use config::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Account, AccountSource, Category, PrimaryLabel};

/// Preference keys, as stored by the settings screen
pub mod keys {
    pub const ACCOUNTS: &str = "pref_inbox_accounts";
    pub const LABEL: &str = "pref_inbox_label";
    pub const HIDDEN_CATEGORIES: &str = "pref_hidden_categories";
    pub const SHOW_ACCOUNTS: &str = "pref_show_accounts";
    pub const SHOW_ALL: &str = "pref_show_all";
}

/// User configuration for one update pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected accounts. `None` means every linked account.
    pub accounts: Option<BTreeSet<Account>>,
    /// Label counted when an account has no sectioned inbox
    pub primary_label: PrimaryLabel,
    /// Categories left out of the total and the body
    pub hidden_categories: BTreeSet<Category>,
    /// Render one line per account
    pub show_accounts: bool,
    /// Render every category; when off only Personal is counted
    pub show_all: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            accounts: None,
            primary_label: PrimaryLabel::Inbox,
            hidden_categories: BTreeSet::new(),
            show_accounts: false,
            show_all: true,
        }
    }
}

impl Preferences {
    /// Read preferences from the store, falling back to defaults per key.
    /// Unknown category names in the hidden set are logged and ignored.
    pub fn from_store(store: &PreferenceStore) -> Self {
        let defaults = Self::default();

        let accounts = store
            .get_string_set(keys::ACCOUNTS)
            .map(|set| set.into_iter().map(Account::from).collect());

        let primary_label = store
            .get_string(keys::LABEL)
            .map(PrimaryLabel::from_option)
            .unwrap_or(defaults.primary_label);

        let hidden_categories = store
            .get_string_set(keys::HIDDEN_CATEGORIES)
            .unwrap_or_default()
            .iter()
            .filter_map(|name| match name.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    log::warn!("Ignoring hidden category preference: {}", e);
                    None
                }
            })
            .collect();

        Self {
            accounts,
            primary_label,
            hidden_categories,
            show_accounts: store.get_bool(keys::SHOW_ACCOUNTS, defaults.show_accounts),
            show_all: store.get_bool(keys::SHOW_ALL, defaults.show_all),
        }
    }

    /// Write these preferences into a store
    pub fn write_to(&self, store: &mut PreferenceStore) {
        match &self.accounts {
            Some(accounts) => {
                store.set_string_set(keys::ACCOUNTS, accounts.iter().map(|a| a.0.clone()))
            }
            None => {
                store.remove(keys::ACCOUNTS);
            }
        }
        store.set_string(keys::LABEL, self.primary_label.to_option());
        store.set_string_set(
            keys::HIDDEN_CATEGORIES,
            self.hidden_categories.iter().map(|c| c.default_name()),
        );
        store.set_bool(keys::SHOW_ACCOUNTS, self.show_accounts);
        store.set_bool(keys::SHOW_ALL, self.show_all);
    }

    /// Resolve the accounts to query. Without an explicit selection every
    /// linked account is used, in host order.
    pub fn selected_accounts(&self, source: &dyn AccountSource) -> Vec<Account> {
        match &self.accounts {
            Some(selected) => selected.iter().cloned().collect(),
            None => source.list_accounts(),
        }
    }

    /// Whether a category is left out of the total and the body
    pub fn is_hidden(&self, category: Category) -> bool {
        self.hidden_categories.contains(&category)
            || (!self.show_all && category != Category::Personal)
    }

    /// Builder method to select accounts
    pub fn with_accounts<I, A>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Account>,
    {
        self.accounts = Some(accounts.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to hide a category
    pub fn hiding(mut self, category: Category) -> Self {
        self.hidden_categories.insert(category);
        self
    }

    pub fn with_show_accounts(mut self, show: bool) -> Self {
        self.show_accounts = show;
        self
    }

    pub fn with_show_all(mut self, show: bool) -> Self {
        self.show_all = show;
        self
    }

    pub fn with_primary_label(mut self, label: PrimaryLabel) -> Self {
        self.primary_label = label;
        self
    }
}
