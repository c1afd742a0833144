#![allow(dead_code)]

use async_trait::async_trait;
use hybrid_logger::ports::{BridgePort, ClockPort, ConsolePort, SystemLogPort};
use hybrid_logger::{LogLevel, LogRecord, LoggerError, Platform, PlatformKind};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// Console double that remembers every call as `(channel, text)`.
#[derive(Default)]
pub struct RecordingConsole {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingConsole {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, channel: &str, text: &str) {
        self.entries.lock().push((channel.to_string(), text.to_string()));
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, text)| text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear_entries(&self) {
        self.entries.lock().clear();
    }
}

impl ConsolePort for RecordingConsole {
    fn log(&self, message: &str) {
        self.push("log", message);
    }

    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn clear(&self) {
        self.push("clear", "");
    }

    fn count(&self, label: &str) {
        self.push("count", label);
    }

    fn count_reset(&self, label: &str) {
        self.push("countReset", label);
    }

    fn group(&self, label: &str) {
        self.push("group", label);
    }

    fn group_collapsed(&self, label: &str) {
        self.push("groupCollapsed", label);
    }

    fn group_end(&self) {
        self.push("groupEnd", "");
    }

    fn dir(&self, value: &Value) {
        self.push("dir", &value.to_string());
    }

    fn trace(&self) {
        self.push("trace", "");
    }

    fn table(&self, data: &Value, columns: Option<&[String]>) {
        let text = match columns {
            Some(columns) => format!("{data} [{}]", columns.join(",")),
            None => data.to_string(),
        };
        self.push("table", &text);
    }
}

/// Bridge double. With `failing()` every call is rejected like a closed
/// transport.
#[derive(Default)]
pub struct RecordingBridge {
    fail: bool,
    records: Mutex<Vec<LogRecord>>,
    syslog_calls: Mutex<Vec<bool>>,
}

impl RecordingBridge {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn syslog_calls(&self) -> Vec<bool> {
        self.syslog_calls.lock().clone()
    }
}

#[async_trait(?Send)]
impl BridgePort for RecordingBridge {
    async fn log(&self, record: LogRecord) -> Result<(), LoggerError> {
        if self.fail {
            return Err(LoggerError::bridge("transport closed"));
        }
        self.records.lock().push(record);
        Ok(())
    }

    async fn set_use_syslog(&self, use_syslog: bool) -> Result<(), LoggerError> {
        if self.fail {
            return Err(LoggerError::bridge("transport closed"));
        }
        self.syslog_calls.lock().push(use_syslog);
        Ok(())
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(start),
        })
    }

    pub fn advance(&self, millis: f64) {
        *self.now.lock() += millis;
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> f64 {
        *self.now.lock()
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[derive(Default)]
pub struct RecordingSystemLog {
    entries: Mutex<Vec<(LogLevel, String, String)>>,
}

impl RecordingSystemLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<(LogLevel, String, String)> {
        self.entries.lock().clone()
    }
}

impl SystemLogPort for RecordingSystemLog {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        self.entries
            .lock()
            .push((level, tag.to_string(), message.to_string()));
    }
}

pub struct Harness {
    pub platform: Platform,
    pub console: Arc<RecordingConsole>,
    pub bridge: Arc<RecordingBridge>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(kind: PlatformKind) -> Harness {
    harness_with_bridge(kind, RecordingBridge::new())
}

pub fn harness_with_bridge(kind: PlatformKind, bridge: Arc<RecordingBridge>) -> Harness {
    let console = RecordingConsole::new();
    let clock = ManualClock::new(1_000.0);
    let platform = Platform::new()
        .with_kind(kind)
        .with_console(console.clone())
        .with_clock(clock.clone())
        .with_bridge(bridge.clone());

    Harness {
        platform,
        console,
        bridge,
        clock,
    }
}
