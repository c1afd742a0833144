use crate::domain::logging::LogLevel;
use crate::ports::SystemLogPort;

/// System log backed by the `log` facade. The tag becomes the record target,
/// so whichever backend the host installed (logcat, os_log, env_logger) sees
/// it as the logging component.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogCrateSink {
    pub fn new() -> Self {
        Self
    }

    fn map_level(level: LogLevel) -> Option<log::Level> {
        match level {
            LogLevel::Silent => None,
            LogLevel::Error => Some(log::Level::Error),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Debug => Some(log::Level::Debug),
        }
    }
}

impl SystemLogPort for LogCrateSink {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        if let Some(level) = Self::map_level(level) {
            log::log!(target: tag, level, "{}", message);
        }
    }
}
