//! Label provider backed by a JSON snapshot file
//!
//! Snapshot format: an object keyed by account name. Each value is either the
//! account's label rows or an error entry:
//!
//! ```json
//! {
//!   "a@x.com": [
//!     { "canonical_name": "^sq_ig_i_personal", "display_name": "Personal", "unread_count": 3 }
//!   ],
//!   "b@x.com": { "error": "permission_denied", "message": "opening provider" }
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::{InMemoryLabelProvider, LabelProvider, ProviderError};
use crate::models::{Account, LabelRow};

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotEntry {
    Rows(Vec<LabelRow>),
    Error(SnapshotError),
}

#[derive(Deserialize)]
struct SnapshotError {
    error: SnapshotErrorKind,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum SnapshotErrorKind {
    NotFound,
    PermissionDenied,
    NoSuchTable,
    Malformed,
}

impl From<SnapshotError> for ProviderError {
    fn from(e: SnapshotError) -> Self {
        match e.error {
            SnapshotErrorKind::NotFound => ProviderError::NotFound,
            SnapshotErrorKind::PermissionDenied => ProviderError::PermissionDenied(e.message),
            SnapshotErrorKind::NoSuchTable => ProviderError::NoSuchTable,
            SnapshotErrorKind::Malformed => ProviderError::Malformed(e.message),
        }
    }
}

/// Replays recorded provider responses
#[derive(Debug, Clone, Default)]
pub struct SnapshotLabelProvider {
    inner: InMemoryLabelProvider,
}

impl SnapshotLabelProvider {
    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, SnapshotEntry> =
            serde_json::from_str(json).context("Invalid snapshot JSON")?;

        let mut inner = InMemoryLabelProvider::new();
        for (account, entry) in entries {
            match entry {
                SnapshotEntry::Rows(rows) => inner.set_rows(account, rows),
                SnapshotEntry::Error(e) => inner.set_error(account, e.into()),
            }
        }
        Ok(Self { inner })
    }

    /// Accounts recorded in the snapshot
    pub fn accounts(&self) -> Vec<Account> {
        self.inner.accounts()
    }
}

impl LabelProvider for SnapshotLabelProvider {
    fn query_labels(&self, account: &Account) -> Result<Vec<LabelRow>, ProviderError> {
        self.inner.query_labels(account)
    }
}
