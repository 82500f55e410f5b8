//! Label rows as returned by the label-information provider

use serde::{Deserialize, Serialize};

/// Well-known canonical label names used by the Gmail label provider
pub struct CanonicalName;

impl CanonicalName {
    pub const INBOX: &'static str = "^i";
    pub const PRIORITY_INBOX: &'static str = "^iim";
    pub const STARRED: &'static str = "^t";
    pub const SENT: &'static str = "^f";
    pub const DRAFTS: &'static str = "^r";
    pub const ALL_MAIL: &'static str = "^all";
    pub const SPAM: &'static str = "^s";
    pub const TRASH: &'static str = "^k";

    /// Shared prefix of every sectioned-inbox label
    pub const SECTIONED_INBOX_PREFIX: &'static str = "^sq_ig_i_";
    pub const PERSONAL: &'static str = "^sq_ig_i_personal";
    pub const SOCIAL: &'static str = "^sq_ig_i_social";
    pub const UPDATES: &'static str = "^sq_ig_i_notification";
    pub const FORUMS: &'static str = "^sq_ig_i_group";
    pub const PROMOTIONS: &'static str = "^sq_ig_i_promo";

    /// Whether `name` belongs to the sectioned inbox
    pub fn is_sectioned(name: &str) -> bool {
        name.starts_with(Self::SECTIONED_INBOX_PREFIX)
    }
}

/// One row of the label table for an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRow {
    /// Canonical name, e.g. "^i" or "^sq_ig_i_social". Empty for user labels
    /// on some provider versions.
    #[serde(default)]
    pub canonical_name: String,
    /// Human-readable label name
    #[serde(default)]
    pub display_name: String,
    /// Number of unread conversations
    #[serde(default)]
    pub unread_count: u32,
    /// Deep-link locator for the label
    #[serde(default)]
    pub uri: Option<String>,
}

impl LabelRow {
    pub fn new(canonical_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            display_name: display_name.into(),
            unread_count: 0,
            uri: None,
        }
    }

    /// Builder method to set unread count
    pub fn with_unread_count(mut self, count: u32) -> Self {
        self.unread_count = count;
        self
    }

    /// Builder method to set the label URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}

/// The label counted when an account has no sectioned-inbox data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrimaryLabel {
    #[default]
    Inbox,
    PriorityInbox,
    /// Any other label, by canonical name
    Custom(String),
}

impl PrimaryLabel {
    /// Parse the stored option value. "i" and "p" are the short codes the
    /// settings screen writes; anything else is taken as a canonical name.
    pub fn from_option(value: &str) -> Self {
        match value {
            "" | "i" | CanonicalName::INBOX => Self::Inbox,
            "p" | CanonicalName::PRIORITY_INBOX => Self::PriorityInbox,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The short code or canonical name stored in preferences
    pub fn to_option(&self) -> &str {
        match self {
            Self::Inbox => "i",
            Self::PriorityInbox => "p",
            Self::Custom(name) => name,
        }
    }

    pub fn canonical_name(&self) -> &str {
        match self {
            Self::Inbox => CanonicalName::INBOX,
            Self::PriorityInbox => CanonicalName::PRIORITY_INBOX,
            Self::Custom(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sectioned_prefix() {
        assert!(CanonicalName::is_sectioned(CanonicalName::SOCIAL));
        assert!(CanonicalName::is_sectioned("^sq_ig_i_travel"));
        assert!(!CanonicalName::is_sectioned(CanonicalName::INBOX));
        assert!(!CanonicalName::is_sectioned(""));
    }

    #[test]
    fn test_primary_label_options() {
        assert_eq!(PrimaryLabel::from_option("i"), PrimaryLabel::Inbox);
        assert_eq!(PrimaryLabel::from_option(""), PrimaryLabel::Inbox);
        assert_eq!(PrimaryLabel::from_option("p"), PrimaryLabel::PriorityInbox);
        assert_eq!(PrimaryLabel::PriorityInbox.canonical_name(), "^iim");

        let custom = PrimaryLabel::from_option("^t");
        assert_eq!(custom.canonical_name(), "^t");
        assert_eq!(custom.to_option(), "^t");
    }

    #[test]
    fn test_row_deserializes_with_defaults() {
        let row: LabelRow = serde_json::from_str(r#"{"canonical_name": "^i"}"#).unwrap();
        assert_eq!(row.unread_count, 0);
        assert!(row.uri.is_none());
        assert!(row.display_name.is_empty());
    }
}
