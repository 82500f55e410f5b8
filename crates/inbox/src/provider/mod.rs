//! Label-information provider contract
//!
//! The provider is owned by the mail app. This module only describes how it
//! is queried (authority, projection, permission) and defines the trait the
//! host implements so the aggregation can run without any platform code.

mod memory;
mod snapshot;

pub use memory::InMemoryLabelProvider;
pub use snapshot::SnapshotLabelProvider;

use crate::models::{Account, LabelRow};

/// Authority of the Gmail label provider
pub const AUTHORITY: &str = "com.google.android.gm";

/// Package that hosts the provider
pub const PROVIDER_PACKAGE: &str = "com.google.android.gm";

/// Permission required to read the provider
pub const READ_PERMISSION: &str = "com.google.android.gm.permission.READ_CONTENT_PROVIDER";

/// Package launched when the extension is clicked
pub const CLICK_PACKAGE: &str = "com.google.android.apps.inbox";

/// Protection level at which a permission is signature-only
pub const PROTECTION_SIGNATURE: i32 = 2;

/// Provider column names
pub mod columns {
    pub const NUM_UNREAD_CONVERSATIONS: &str = "numUnreadConversations";
    pub const URI: &str = "labelUri";
    pub const CANONICAL_NAME: &str = "canonicalName";
    pub const NAME: &str = "name";
}

/// The fixed column projection. No selection is passed; the labels table
/// does not support one.
pub const PROJECTION: [&str; 4] = [
    columns::NUM_UNREAD_CONVERSATIONS,
    columns::URI,
    columns::CANONICAL_NAME,
    columns::NAME,
];

/// Failure of a single label query
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("label provider not found")]
    NotFound,

    #[error("permission denial: {0}")]
    PermissionDenied(String),

    #[error("no such table: labels")]
    NoSuchTable,

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Query capability over the label-information provider
pub trait LabelProvider {
    /// Fetch every label row for `account` using [`PROJECTION`].
    fn query_labels(&self, account: &Account) -> Result<Vec<LabelRow>, ProviderError>;
}

impl<P: LabelProvider + ?Sized> LabelProvider for &P {
    fn query_labels(&self, account: &Account) -> Result<Vec<LabelRow>, ProviderError> {
        (**self).query_labels(account)
    }
}

impl<P: LabelProvider + ?Sized> LabelProvider for Box<P> {
    fn query_labels(&self, account: &Account) -> Result<Vec<LabelRow>, ProviderError> {
        (**self).query_labels(account)
    }
}

/// Content URI of the labels table for an account
pub fn labels_uri(account: &Account) -> String {
    format!("content://{}/{}/labels", AUTHORITY, account.as_str())
}

/// A permission declared by the provider package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionInfo {
    pub name: String,
    pub protection_level: i32,
}

/// A content provider exported by the provider package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub authority: String,
    pub read_permission: Option<String>,
}

/// What the package manager reports about the provider package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    pub permissions: Vec<PermissionInfo>,
    pub providers: Vec<ProviderInfo>,
}

/// Whether the installed mail app supports label queries.
///
/// `package` is `None` when the app is not installed. Queries are safe only
/// if the read permission is grantable to third parties and the labels
/// provider is guarded by exactly that permission.
pub fn can_read_labels(package: Option<&PackageInfo>) -> bool {
    let Some(package) = package else {
        return false;
    };

    let allow_read = package
        .permissions
        .iter()
        .any(|p| p.name == READ_PERMISSION && p.protection_level < PROTECTION_SIGNATURE);
    if !allow_read {
        return false;
    }

    package
        .providers
        .iter()
        .any(|p| p.authority == AUTHORITY && p.read_permission.as_deref() == Some(READ_PERMISSION))
}
