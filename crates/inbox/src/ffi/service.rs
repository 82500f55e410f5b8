//! InboxService facade for UniFFI export
//!
//! Wraps [`InboxExtension`] around host callbacks so the Kotlin side only has
//! to run the labels query and publish the returned payload.

use std::path::PathBuf;
use std::sync::Arc;

use config::PreferenceStore;

use crate::extension::{InboxExtension, UpdateReason};
use crate::ffi::types::*;
use crate::models::{Account, AccountSource, Category, LabelRow};
use crate::preferences::Preferences;
use crate::provider::{LabelProvider, PackageInfo, ProviderError};

/// Adapts the host's label callback to [`LabelProvider`]
struct CallbackLabelProvider(Box<dyn LabelProviderCallback>);

impl LabelProvider for CallbackLabelProvider {
    fn query_labels(&self, account: &Account) -> Result<Vec<LabelRow>, ProviderError> {
        let rows = self.0.query_labels(account.as_str().to_string())?;
        Ok(rows.into_iter().map(LabelRow::from).collect())
    }
}

/// Adapts the host's account callback to [`AccountSource`]
struct CallbackAccountSource(Box<dyn AccountSourceCallback>);

impl AccountSource for CallbackAccountSource {
    fn list_accounts(&self) -> Vec<Account> {
        self.0.list_accounts().into_iter().map(Account::from).collect()
    }
}

/// Main service object for the extension
///
/// Created once by the host extension service. Every method is synchronous;
/// the host runs at most one update at a time.
#[derive(uniffi::Object)]
pub struct InboxService {
    extension: InboxExtension<CallbackLabelProvider, CallbackAccountSource>,
}

#[uniffi::export]
impl InboxService {
    /// Create a service over the host's label query and account list
    #[uniffi::constructor]
    pub fn new(
        provider: Box<dyn LabelProviderCallback>,
        accounts: Box<dyn AccountSourceCallback>,
    ) -> Arc<Self> {
        Arc::new(Self {
            extension: InboxExtension::new(
                CallbackLabelProvider(provider),
                CallbackAccountSource(accounts),
            ),
        })
    }

    /// Content URIs to register as watched
    pub fn watch_uris(&self, is_reconnect: bool, prefs: FfiPreferences) -> Vec<String> {
        self.extension
            .on_initialize(is_reconnect, &Preferences::from(prefs))
    }

    /// Run one update pass
    ///
    /// # Arguments
    /// * `reason_code` - The host's update reason, logged only
    /// * `prefs` - Current preference values
    pub fn update(&self, reason_code: i32, prefs: FfiPreferences) -> FfiExtensionData {
        let reason = UpdateReason::from_code(reason_code);
        self.extension
            .on_update(reason, &Preferences::from(prefs))
            .into()
    }

    /// Contents of the accounts picker on the settings screen
    pub fn accounts_preference(&self, prefs: FfiPreferences) -> FfiAccountsPreference {
        let prefs = Preferences::from(prefs);
        crate::settings::accounts_preference(self.extension.account_source(), &prefs).into()
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Content URI of an account's labels table
#[uniffi::export]
pub fn labels_uri(account: String) -> String {
    crate::provider::labels_uri(&Account::from(account))
}

/// The column projection to pass to the labels query
#[uniffi::export]
pub fn labels_projection() -> Vec<String> {
    crate::provider::PROJECTION
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Summary line for the accounts picker
#[uniffi::export]
pub fn accounts_summary(selected: u32, total: u32) -> String {
    crate::settings::accounts_summary(selected as usize, total as usize)
}

/// Category for a canonical label name, if it is one
#[uniffi::export]
pub fn category_for_canonical_name(canonical_name: String) -> Option<FfiCategory> {
    Category::from_canonical_name(&canonical_name).map(FfiCategory::from)
}

/// Whether the installed mail app supports label queries
///
/// Pass `None` when the package is not installed.
#[uniffi::export]
pub fn can_read_labels(package: Option<FfiPackageInfo>) -> bool {
    let package = package.map(PackageInfo::from);
    crate::provider::can_read_labels(package.as_ref())
}

/// Default preference values
#[uniffi::export]
pub fn default_preferences() -> FfiPreferences {
    Preferences::default().into()
}

/// Read preferences from a JSON preference file
///
/// A missing file yields the defaults.
#[uniffi::export]
pub fn load_preferences(path: String) -> Result<FfiPreferences, InboxError> {
    if path.is_empty() {
        return Err(InboxError::InvalidArgument {
            message: "preferences path is empty".to_string(),
        });
    }
    let store = PreferenceStore::open(PathBuf::from(path))?;
    Ok(Preferences::from_store(&store).into())
}

/// Write preferences to a JSON preference file, keeping unrelated keys
#[uniffi::export]
pub fn save_preferences(path: String, prefs: FfiPreferences) -> Result<(), InboxError> {
    if path.is_empty() {
        return Err(InboxError::InvalidArgument {
            message: "preferences path is empty".to_string(),
        });
    }
    let mut store = PreferenceStore::open(PathBuf::from(path))?;
    Preferences::from(prefs).write_to(&mut store);
    store.save()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct FakeProvider;

    impl LabelProviderCallback for FakeProvider {
        fn query_labels(&self, account: String) -> Result<Vec<FfiLabelRow>, FfiProviderError> {
            match account.as_str() {
                "a@x.com" => Ok(vec![FfiLabelRow {
                    canonical_name: Some("^sq_ig_i_personal".to_string()),
                    display_name: Some("Personal".to_string()),
                    unread_count: 1,
                    uri: None,
                }]),
                _ => Err(FfiProviderError::Malformed {
                    message: "NullPointerException".to_string(),
                }),
            }
        }
    }

    struct FakeAccounts(Mutex<Vec<String>>);

    impl AccountSourceCallback for FakeAccounts {
        fn list_accounts(&self) -> Vec<String> {
            self.0.lock().map(|a| a.clone()).unwrap_or_default()
        }
    }

    fn service() -> Arc<InboxService> {
        InboxService::new(
            Box::new(FakeProvider),
            Box::new(FakeAccounts(Mutex::new(vec![
                "a@x.com".to_string(),
                "b@x.com".to_string(),
            ]))),
        )
    }

    #[test]
    fn test_update_skips_failing_account() {
        let data = service().update(4, default_preferences());
        assert!(data.visible);
        assert_eq!(data.status, "1");
        assert_eq!(data.expanded_body, "Personal (1)");
        assert_eq!(data.click_package, "com.google.android.apps.inbox");
    }

    #[test]
    fn test_watch_uris() {
        let uris = service().watch_uris(false, default_preferences());
        assert_eq!(uris.len(), 2);
    }

    #[test]
    fn test_accounts_preference() {
        let pref = service().accounts_preference(default_preferences());
        assert_eq!(pref.summary, "2 of 2 accounts selected");
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(labels_projection().len(), 4);
        assert_eq!(
            category_for_canonical_name("^sq_ig_i_social".to_string()),
            Some(FfiCategory::Social)
        );
        assert_eq!(category_for_canonical_name("^i".to_string()), None);
        assert!(!can_read_labels(None));
    }

    #[test]
    fn test_preferences_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json").to_string_lossy().to_string();

        let mut prefs = default_preferences();
        prefs.show_accounts = true;
        prefs.hidden_categories = vec!["Forums".to_string()];
        save_preferences(path.clone(), prefs).unwrap();

        let loaded = load_preferences(path).unwrap();
        assert!(loaded.show_accounts);
        assert_eq!(loaded.hidden_categories, vec!["Forums".to_string()]);
    }

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(matches!(
            load_preferences(String::new()),
            Err(InboxError::InvalidArgument { .. })
        ));
    }
}
