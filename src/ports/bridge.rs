use crate::domain::logging::{LogRecord, LoggerError};
use async_trait::async_trait;

/// Port for the one-way channel to the native shell.
///
/// Both calls are notifications: the far side acknowledges with `Ok(())` and
/// an `Err` only ever describes a transport failure.
#[async_trait(?Send)]
pub trait BridgePort: Send + Sync {
    async fn log(&self, record: LogRecord) -> Result<(), LoggerError>;

    async fn set_use_syslog(&self, use_syslog: bool) -> Result<(), LoggerError>;
}
