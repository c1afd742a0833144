use crate::domain::logging::LogLevel;

/// The platform's system log (os_log, logcat, ...), used by the bridge host
/// when the secondary channel is enabled.
pub trait SystemLogPort: Send + Sync {
    fn write(&self, level: LogLevel, tag: &str, message: &str);
}
