//! Account model representing one linked mail account

use serde::{Deserialize, Serialize};
use std::fmt;

/// A linked mail account, identified by an opaque name (usually the email
/// address). Ordering is by name so account lines render deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(pub String);

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Account {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Source of the accounts linked on the device
///
/// The account list is owned by the host; the extension only reads it to
/// resolve the default selection ("all accounts") and the settings summary.
pub trait AccountSource {
    /// All linked Google accounts, in host order
    fn list_accounts(&self) -> Vec<Account>;
}

/// Fixed account list, used by the CLI and in tests
#[derive(Debug, Clone, Default)]
pub struct StaticAccountSource {
    accounts: Vec<Account>,
}

impl StaticAccountSource {
    pub fn new<I, A>(accounts: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Account>,
    {
        Self {
            accounts: accounts.into_iter().map(Into::into).collect(),
        }
    }
}

impl AccountSource for StaticAccountSource {
    fn list_accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_display() {
        let account = Account::new("a@x.com");
        assert_eq!(account.to_string(), "a@x.com");
        assert_eq!(account.as_str(), "a@x.com");
    }

    #[test]
    fn test_account_ordering() {
        let mut accounts = vec![Account::from("b@x.com"), Account::from("a@x.com")];
        accounts.sort();
        assert_eq!(accounts[0].as_str(), "a@x.com");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Account::new("a@x.com")).unwrap();
        assert_eq!(json, "\"a@x.com\"");
    }

    #[test]
    fn test_static_source() {
        let source = StaticAccountSource::new(["a@x.com", "b@x.com"]);
        assert_eq!(source.list_accounts().len(), 2);
    }
}
