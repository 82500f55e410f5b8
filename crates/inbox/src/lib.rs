//! Inbox crate - Unread-count logic for the inbox extension
//!
//! This crate provides platform-independent functionality including:
//! - Domain models (Account, LabelRow, Category, PrimaryLabel)
//! - The label-provider contract and in-memory/snapshot providers
//! - Preferences read from the shared preference store
//! - Aggregation of unread counts across accounts and categories
//! - Rendering of the extension payload
//!
//! The host platform is reached only through traits, so everything here runs
//! in plain unit tests. The `ffi` module exports it to Kotlin/Swift.

uniffi::setup_scaffolding!();

pub mod aggregate;
pub mod extension;
pub mod ffi;
pub mod models;
pub mod preferences;
pub mod provider;
pub mod render;
pub mod settings;

pub use aggregate::{AccountUnread, Summary, aggregate};
pub use extension::{ClickAction, ExtensionData, ExtensionPublisher, InboxExtension, UpdateReason};
pub use models::{
    Account, AccountSource, CanonicalName, Category, CategoryTotals, LabelRow, PrimaryLabel,
    StaticAccountSource,
};
pub use preferences::Preferences;
pub use provider::{
    InMemoryLabelProvider, LabelProvider, PackageInfo, ProviderError, SnapshotLabelProvider,
    can_read_labels, labels_uri,
};
pub use settings::{AccountsPreference, accounts_preference, accounts_summary};
