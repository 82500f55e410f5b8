//! FFI-friendly type wrappers for UniFFI export
//!
//! These types convert internal Rust types to FFI-compatible versions:
//! - `Account` → `String`
//! - `BTreeSet` → `Vec`
//! - `PrimaryLabel` → its stored option string

use std::collections::BTreeSet;

use crate::extension::ExtensionData;
use crate::models::{Account, Category, LabelRow, PrimaryLabel};
use crate::preferences::Preferences;
use crate::provider::{PackageInfo, PermissionInfo, ProviderError, ProviderInfo};
use crate::settings::AccountsPreference;

// ============================================================================
// Error Types
// ============================================================================

/// FFI-friendly error type
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum InboxError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl From<anyhow::Error> for InboxError {
    fn from(e: anyhow::Error) -> Self {
        InboxError::Config {
            message: format!("{:#}", e),
        }
    }
}

/// Error a host label query may raise
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiProviderError {
    #[error("label provider not found")]
    NotFound,

    #[error("permission denial: {message}")]
    PermissionDenied { message: String },

    #[error("no such table: labels")]
    NoSuchTable,

    #[error("malformed provider response: {message}")]
    Malformed { message: String },
}

// Raised when the foreign side throws something outside the declared enum,
// e.g. a NullPointerException from a broken provider.
impl From<uniffi::UnexpectedUniFFICallbackError> for FfiProviderError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        FfiProviderError::Malformed { message: e.reason }
    }
}

impl From<FfiProviderError> for ProviderError {
    fn from(e: FfiProviderError) -> Self {
        match e {
            FfiProviderError::NotFound => ProviderError::NotFound,
            FfiProviderError::PermissionDenied { message } => {
                ProviderError::PermissionDenied(message)
            }
            FfiProviderError::NoSuchTable => ProviderError::NoSuchTable,
            FfiProviderError::Malformed { message } => ProviderError::Malformed(message),
        }
    }
}

// ============================================================================
// Label Types
// ============================================================================

/// FFI-friendly label row, one per cursor row of the labels query
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabelRow {
    pub canonical_name: Option<String>,
    pub display_name: Option<String>,
    pub unread_count: i32,
    pub uri: Option<String>,
}

impl From<FfiLabelRow> for LabelRow {
    fn from(r: FfiLabelRow) -> Self {
        Self {
            canonical_name: r.canonical_name.unwrap_or_default(),
            display_name: r.display_name.unwrap_or_default(),
            // Cursor ints are signed; a negative count is treated as empty
            unread_count: u32::try_from(r.unread_count).unwrap_or(0),
            uri: r.uri,
        }
    }
}

/// FFI-friendly category
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiCategory {
    Personal,
    Social,
    Updates,
    Forums,
    Promotions,
}

impl From<Category> for FfiCategory {
    fn from(c: Category) -> Self {
        match c {
            Category::Personal => FfiCategory::Personal,
            Category::Social => FfiCategory::Social,
            Category::Updates => FfiCategory::Updates,
            Category::Forums => FfiCategory::Forums,
            Category::Promotions => FfiCategory::Promotions,
        }
    }
}

// ============================================================================
// Preferences
// ============================================================================

/// FFI-friendly preferences
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPreferences {
    /// Selected accounts; `None` selects every linked account
    pub accounts: Option<Vec<String>>,
    /// "i", "p", or a canonical label name
    pub primary_label: String,
    /// Category names (display or canonical) to hide
    pub hidden_categories: Vec<String>,
    pub show_accounts: bool,
    pub show_all: bool,
}

impl From<FfiPreferences> for Preferences {
    fn from(p: FfiPreferences) -> Self {
        let hidden_categories: BTreeSet<Category> = p
            .hidden_categories
            .iter()
            .filter_map(|name| match name.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    log::warn!("Ignoring hidden category: {}", e);
                    None
                }
            })
            .collect();

        Self {
            accounts: p
                .accounts
                .map(|accounts| accounts.into_iter().map(Account::from).collect()),
            primary_label: PrimaryLabel::from_option(&p.primary_label),
            hidden_categories,
            show_accounts: p.show_accounts,
            show_all: p.show_all,
        }
    }
}

impl From<Preferences> for FfiPreferences {
    fn from(p: Preferences) -> Self {
        Self {
            accounts: p
                .accounts
                .map(|accounts| accounts.into_iter().map(|a| a.0).collect()),
            primary_label: p.primary_label.to_option().to_string(),
            hidden_categories: p
                .hidden_categories
                .iter()
                .map(|c| c.default_name().to_string())
                .collect(),
            show_accounts: p.show_accounts,
            show_all: p.show_all,
        }
    }
}

// ============================================================================
// Extension Payload
// ============================================================================

/// FFI-friendly extension payload
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExtensionData {
    pub visible: bool,
    pub status: String,
    pub expanded_title: String,
    pub icon: String,
    pub expanded_body: String,
    /// Package to launch on click
    pub click_package: String,
    /// Label to open, when one had unread mail
    pub click_uri: Option<String>,
}

impl From<ExtensionData> for FfiExtensionData {
    fn from(d: ExtensionData) -> Self {
        Self {
            visible: d.visible,
            status: d.status,
            expanded_title: d.expanded_title,
            icon: d.icon,
            expanded_body: d.expanded_body,
            click_package: d.click_intent.package,
            click_uri: d.click_intent.label_uri,
        }
    }
}

/// FFI-friendly accounts picker contents
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAccountsPreference {
    pub entries: Vec<String>,
    pub selected: Vec<String>,
    pub summary: String,
}

impl From<AccountsPreference> for FfiAccountsPreference {
    fn from(p: AccountsPreference) -> Self {
        Self {
            entries: p.entries.into_iter().map(|a| a.0).collect(),
            selected: p.selected.into_iter().map(|a| a.0).collect(),
            summary: p.summary,
        }
    }
}

// ============================================================================
// Package Info
// ============================================================================

/// FFI-friendly permission declaration
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPermissionInfo {
    pub name: String,
    pub protection_level: i32,
}

/// FFI-friendly provider declaration
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProviderInfo {
    pub authority: String,
    pub read_permission: Option<String>,
}

/// FFI-friendly package info for the mail app
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPackageInfo {
    pub permissions: Vec<FfiPermissionInfo>,
    pub providers: Vec<FfiProviderInfo>,
}

impl From<FfiPackageInfo> for PackageInfo {
    fn from(p: FfiPackageInfo) -> Self {
        Self {
            permissions: p
                .permissions
                .into_iter()
                .map(|perm| PermissionInfo {
                    name: perm.name,
                    protection_level: perm.protection_level,
                })
                .collect(),
            providers: p
                .providers
                .into_iter()
                .map(|prov| ProviderInfo {
                    authority: prov.authority,
                    read_permission: prov.read_permission,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Callback Traits
// ============================================================================

/// Host-side label query, typically a ContentResolver query on
/// `labels_uri(account)` with the fixed projection
#[uniffi::export(callback_interface)]
pub trait LabelProviderCallback: Send + Sync {
    fn query_labels(&self, account: String) -> Result<Vec<FfiLabelRow>, FfiProviderError>;
}

/// Host-side list of linked Google accounts
#[uniffi::export(callback_interface)]
pub trait AccountSourceCallback: Send + Sync {
    fn list_accounts(&self) -> Vec<String>;
}

// ============================================================================
// Log Callback
// ============================================================================

/// Log level for FFI callback
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<log::Level> for FfiLogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => FfiLogLevel::Error,
            log::Level::Warn => FfiLogLevel::Warn,
            log::Level::Info => FfiLogLevel::Info,
            log::Level::Debug => FfiLogLevel::Debug,
            log::Level::Trace => FfiLogLevel::Trace,
        }
    }
}

impl From<FfiLogLevel> for log::Level {
    fn from(level: FfiLogLevel) -> Self {
        match level {
            FfiLogLevel::Error => log::Level::Error,
            FfiLogLevel::Warn => log::Level::Warn,
            FfiLogLevel::Info => log::Level::Info,
            FfiLogLevel::Debug => log::Level::Debug,
            FfiLogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Callback interface for receiving log messages from Rust
///
/// Android hosts forward these to `android.util.Log`.
#[uniffi::export(callback_interface)]
pub trait LogCallback: Send + Sync {
    fn on_log(&self, level: FfiLogLevel, target: String, message: String);
}
