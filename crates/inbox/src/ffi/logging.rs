//! `log` backend that forwards records to the host through [`LogCallback`]

use std::sync::{OnceLock, RwLock};

use log::{Level, Log, Metadata, Record};

use super::types::{FfiLogLevel, LogCallback};

static HOST_LOGGER: OnceLock<HostLogger> = OnceLock::new();
static INSTALLED: OnceLock<bool> = OnceLock::new();

struct HostLogger {
    callback: RwLock<Option<Box<dyn LogCallback>>>,
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && self.callback.read().is_ok_and(|cb| cb.is_some())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(guard) = self.callback.read() {
            if let Some(callback) = guard.as_ref() {
                callback.on_log(
                    FfiLogLevel::from(record.level()),
                    record.target().to_string(),
                    record.args().to_string(),
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Route Rust logs to the host.
///
/// The first call installs the global logger; later calls swap the callback
/// and level. Returns false if a different logger was already installed, in
/// which case the callback is kept but receives nothing.
#[uniffi::export]
pub fn initialize_logging(callback: Box<dyn LogCallback>, max_level: FfiLogLevel) -> bool {
    let logger = HOST_LOGGER.get_or_init(|| HostLogger {
        callback: RwLock::new(None),
    });
    if let Ok(mut guard) = logger.callback.write() {
        *guard = Some(callback);
    }

    let installed = *INSTALLED.get_or_init(|| log::set_logger(logger).is_ok());
    set_log_level(max_level);
    installed
}

/// Change the maximum level forwarded to the host
#[uniffi::export]
pub fn set_log_level(level: FfiLogLevel) {
    log::set_max_level(Level::from(level).to_level_filter());
}
