//! In-memory label provider
//!
//! Holds a fixed response per account. Used in tests and as the backing
//! store for JSON snapshots.

use std::collections::HashMap;

use super::{LabelProvider, ProviderError};
use crate::models::{Account, LabelRow};

/// In-memory implementation of LabelProvider
///
/// Accounts without an entry answer [`ProviderError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabelProvider {
    responses: HashMap<Account, Result<Vec<LabelRow>, ProviderError>>,
}

impl InMemoryLabelProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the rows returned for an account
    pub fn with_rows(mut self, account: impl Into<Account>, rows: Vec<LabelRow>) -> Self {
        self.set_rows(account, rows);
        self
    }

    /// Builder method to make an account's query fail
    pub fn with_error(mut self, account: impl Into<Account>, error: ProviderError) -> Self {
        self.set_error(account, error);
        self
    }

    pub fn set_rows(&mut self, account: impl Into<Account>, rows: Vec<LabelRow>) {
        self.responses.insert(account.into(), Ok(rows));
    }

    pub fn set_error(&mut self, account: impl Into<Account>, error: ProviderError) {
        self.responses.insert(account.into(), Err(error));
    }

    /// Accounts with a configured response
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.responses.keys().cloned().collect();
        accounts.sort();
        accounts
    }
}

impl LabelProvider for InMemoryLabelProvider {
    fn query_labels(&self, account: &Account) -> Result<Vec<LabelRow>, ProviderError> {
        self.responses
            .get(account)
            .cloned()
            .unwrap_or(Err(ProviderError::NotFound))
    }
}
