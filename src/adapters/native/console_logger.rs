use crate::ports::ConsolePort;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Native console using stdout/stderr.
///
/// Mirrors the browser console closely enough for desktop runs: warnings and
/// errors go to stderr, groups indent, counters are kept per label.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    depth: AtomicUsize,
    counters: Mutex<HashMap<String, u64>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&self, message: &str) -> String {
        let depth = self.depth.load(Ordering::Relaxed);
        if depth == 0 {
            return message.to_string();
        }
        let pad = "  ".repeat(depth);
        message
            .lines()
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn out(&self, message: &str) {
        println!("{}", self.indent(message));
    }

    fn err(&self, message: &str) {
        eprintln!("{}", self.indent(message));
    }

    pub(crate) fn bump(&self, label: &str) -> u64 {
        let mut counters = self.counters.lock();
        let count = counters.entry(label.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

impl ConsolePort for ConsoleLogger {
    fn log(&self, message: &str) {
        self.out(message);
    }

    fn debug(&self, message: &str) {
        self.out(message);
    }

    fn info(&self, message: &str) {
        self.out(message);
    }

    fn warn(&self, message: &str) {
        self.err(message);
    }

    fn error(&self, message: &str) {
        self.err(message);
    }

    fn count(&self, label: &str) {
        let count = self.bump(label);
        self.out(&format!("{label}: {count}"));
    }

    fn count_reset(&self, label: &str) {
        self.counters.lock().remove(label);
    }

    fn group(&self, label: &str) {
        self.out(label);
        self.depth.fetch_add(1, Ordering::Relaxed);
    }

    fn group_collapsed(&self, label: &str) {
        self.group(label);
    }

    fn group_end(&self) {
        let _ = self
            .depth
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |d| d.checked_sub(1));
    }

    fn dir(&self, value: &Value) {
        let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.out(&rendered);
    }

    fn trace(&self) {
        self.err(&format!("Trace\n{}", std::backtrace::Backtrace::force_capture()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = ConsoleLogger::new();
        logger.log("test");
    }

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.debug("test debug");
        logger.info("test info");
        logger.warn("test warn");
        logger.error("test error");
        logger.dir(&serde_json::json!({ "a": 1 }));
        logger.clear();
    }

    #[test]
    fn test_counters_are_per_label() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.bump("a"), 1);
        assert_eq!(logger.bump("a"), 2);
        assert_eq!(logger.bump("b"), 1);
        logger.count_reset("a");
        assert_eq!(logger.bump("a"), 1);
    }

    #[test]
    fn test_group_end_never_underflows() {
        let logger = ConsoleLogger::new();
        logger.group_end();
        logger.group("outer");
        logger.group_end();
        logger.group_end();
        assert_eq!(logger.depth.load(Ordering::Relaxed), 0);
    }
}
