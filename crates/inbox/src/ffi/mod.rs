//! FFI bindings for UniFFI export
//!
//! This module provides Kotlin/Swift bindings so an Android extension service
//! can delegate its update pass to Rust.
//!
//! ## Usage from Kotlin
//!
//! ```kotlin
//! initializeLogging(AndroidLogCallback(), FfiLogLevel.INFO)
//!
//! val service = InboxService(ContentResolverLabels(contentResolver), GoogleAccounts(accountManager))
//!
//! // onInitialize
//! addWatchContentUris(service.watchUris(isReconnect, prefs).toTypedArray())
//!
//! // onUpdateData
//! val data = service.update(reason, prefs)
//! publishUpdate(data.toExtensionData())
//! ```

mod logging;
mod service;
mod types;

pub use logging::{initialize_logging, set_log_level};
pub use service::*;
pub use types::*;
