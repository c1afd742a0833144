use crate::adapters::global_console;
use crate::bridge_host::LoggerBridgeHost;
use crate::domain::logging::{LogRecord, LoggerError};
use crate::ports::BridgePort;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use super::LogCrateSink;

/// Bridge whose far side lives in the same process. Calls are delivered to
/// the host synchronously.
#[derive(Clone)]
pub struct InProcessBridge {
    host: Arc<Mutex<LoggerBridgeHost>>,
}

impl InProcessBridge {
    pub fn new(host: Arc<Mutex<LoggerBridgeHost>>) -> Self {
        Self { host }
    }

    pub fn with_default_host() -> Self {
        let host = LoggerBridgeHost::new(global_console::console(), Arc::new(LogCrateSink::new()));
        Self::new(Arc::new(Mutex::new(host)))
    }

    pub fn host(&self) -> Arc<Mutex<LoggerBridgeHost>> {
        Arc::clone(&self.host)
    }
}

#[async_trait(?Send)]
impl BridgePort for InProcessBridge {
    async fn log(&self, record: LogRecord) -> Result<(), LoggerError> {
        self.host.lock().log(&record);
        Ok(())
    }

    async fn set_use_syslog(&self, use_syslog: bool) -> Result<(), LoggerError> {
        self.host.lock().set_use_syslog(use_syslog);
        Ok(())
    }
}
