//! The extension update pass
//!
//! [`InboxExtension`] ties the account source and label provider to the
//! aggregation and produces the payload the host displays.

use log::info;
use serde::Serialize;

use crate::aggregate::{Summary, aggregate};
use crate::models::AccountSource;
use crate::preferences::Preferences;
use crate::provider::{CLICK_PACKAGE, LabelProvider, labels_uri};
use crate::render;

/// Icon shown next to the count
pub const ICON: &str = "ic_inbox";

/// Why the host asked for an update. Only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateReason {
    Unknown,
    Initial,
    Periodic,
    SettingsChanged,
    ContentChanged,
    ScreenOn,
    Manual,
}

impl UpdateReason {
    /// Map the host's numeric reason code
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Initial,
            2 => Self::Periodic,
            3 => Self::SettingsChanged,
            4 => Self::ContentChanged,
            5 => Self::ScreenOn,
            6 => Self::Manual,
            _ => Self::Unknown,
        }
    }
}

/// Launch action attached to the extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickAction {
    /// Package whose launch intent is started
    pub package: String,
    /// Label that last had unread mail, if any
    pub label_uri: Option<String>,
}

/// Payload handed to the host after an update pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionData {
    pub visible: bool,
    pub status: String,
    pub expanded_title: String,
    pub icon: String,
    pub expanded_body: String,
    pub click_intent: ClickAction,
}

impl ExtensionData {
    /// Build the payload for an aggregation result
    pub fn from_summary(summary: &Summary, prefs: &Preferences) -> Self {
        let total = summary.total_unread;
        Self {
            visible: summary.is_visible(),
            status: render::status(total),
            expanded_title: render::expanded_title(total),
            icon: ICON.to_string(),
            expanded_body: render::body(summary, prefs),
            click_intent: ClickAction {
                package: CLICK_PACKAGE.to_string(),
                label_uri: summary.label_uri.clone(),
            },
        }
    }
}

/// Receives the payload of each update pass
pub trait ExtensionPublisher {
    fn publish_update(&self, data: &ExtensionData);
}

/// Unread-count extension over an injected provider and account source
pub struct InboxExtension<P, S> {
    provider: P,
    accounts: S,
}

impl<P: LabelProvider, S: AccountSource> InboxExtension<P, S> {
    pub fn new(provider: P, accounts: S) -> Self {
        Self { provider, accounts }
    }

    /// The account source used to resolve the default selection
    pub fn account_source(&self) -> &S {
        &self.accounts
    }

    /// URIs to watch for changes. Nothing new to register on reconnect.
    pub fn on_initialize(&self, is_reconnect: bool, prefs: &Preferences) -> Vec<String> {
        if is_reconnect {
            return Vec::new();
        }
        prefs
            .selected_accounts(&self.accounts)
            .iter()
            .map(labels_uri)
            .collect()
    }

    /// Run one update pass and return the aggregation result
    pub fn summarize(&self, prefs: &Preferences) -> Summary {
        let accounts = prefs.selected_accounts(&self.accounts);
        aggregate(&accounts, &self.provider, prefs)
    }

    /// Run one update pass and build the payload
    pub fn on_update(&self, reason: UpdateReason, prefs: &Preferences) -> ExtensionData {
        info!("Updating unread counts ({:?})", reason);
        let summary = self.summarize(prefs);
        ExtensionData::from_summary(&summary, prefs)
    }

    /// Run one update pass and hand the payload to `publisher`
    pub fn update_and_publish(
        &self,
        reason: UpdateReason,
        prefs: &Preferences,
        publisher: &dyn ExtensionPublisher,
    ) -> ExtensionData {
        let data = self.on_update(reason, prefs);
        publisher.publish_update(&data);
        data
    }
}
