use crate::domain::logging::{flatten_message, format_line, LogLevel, LogRecord, LoggerError};
use crate::ports::{ConsolePort, SystemLogPort};
use serde_json::Value;
use std::sync::Arc;

/// Receiving end of the logger bridge, run by the native shell.
///
/// Filtering already happened on the portable side, so the host emits every
/// record it is handed except `silent` ones.
pub struct LoggerBridgeHost {
    level: LogLevel,
    use_syslog: bool,
    console: Arc<dyn ConsolePort>,
    system_log: Arc<dyn SystemLogPort>,
}

impl LoggerBridgeHost {
    pub fn new(console: Arc<dyn ConsolePort>, system_log: Arc<dyn SystemLogPort>) -> Self {
        Self {
            level: LogLevel::Debug,
            use_syslog: false,
            console,
            system_log,
        }
    }

    pub fn use_syslog(&self) -> bool {
        self.use_syslog
    }

    pub fn set_use_syslog(&mut self, use_syslog: bool) {
        self.use_syslog = use_syslog;
    }

    pub fn log(&self, record: &LogRecord) {
        let level = record.log_level();
        if !self.level.allows(level) {
            return;
        }

        let line = format_line(&record.tag, &record.label, &record.message);
        if self.use_syslog {
            self.system_log.write(level, &record.tag, &line);
        } else {
            self.console.log(&line);
        }
    }

    /// Entry point for plugin calls arriving as JSON.
    pub fn handle_call(&mut self, method: &str, payload: &Value) -> Result<(), LoggerError> {
        match method {
            "log" => {
                self.log(&record_from_payload(payload));
                Ok(())
            }
            "setUseSyslog" => {
                if let Some(use_syslog) = payload.get("use").and_then(Value::as_bool) {
                    self.set_use_syslog(use_syslog);
                }
                Ok(())
            }
            other => Err(LoggerError::unknown_method(other)),
        }
    }
}

fn record_from_payload(payload: &Value) -> LogRecord {
    let text = |key: &str| {
        payload
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let level = payload
        .get("level")
        .and_then(Value::as_u64)
        .and_then(|level| u8::try_from(level).ok())
        .unwrap_or(LogLevel::Info.ordinal());

    LogRecord {
        level,
        tag: text("tag"),
        label: text("label"),
        message: payload.get("message").map(flatten_message).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_payload_defaults() {
        let record = record_from_payload(&json!({}));
        assert_eq!(record.log_level(), LogLevel::Info);
        assert_eq!(record.tag, "");
        assert_eq!(record.label, "");
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_record_from_payload_fields() {
        let record = record_from_payload(&json!({
            "level": 1,
            "tag": "App",
            "label": "🔴",
            "message": ["failed", { "code": 3 }]
        }));
        assert_eq!(record.log_level(), LogLevel::Error);
        assert_eq!(record.tag, "App");
        assert_eq!(record.message, "failed {\"code\":3}");
    }

    #[test]
    fn test_record_from_payload_huge_level_is_info() {
        let record = record_from_payload(&json!({ "level": 100000 }));
        assert_eq!(record.log_level(), LogLevel::Info);
    }
}
