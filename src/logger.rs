use crate::domain::logging::{
    format_elapsed, format_line, LabelTable, LevelSelector, LogLevel, LogRecord, LoggerError,
    LoggerOptions, PlatformKind, TimerLabel, TimerRegistry,
};
use crate::platform::Platform;
use crate::ports::{BridgePort, ConfigPort, ConsolePort};
use futures::FutureExt;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

const ERROR_PREFIX: &str = "[Logger]";

fn log_error(console: &dyn ConsolePort, error: &LoggerError) {
    console.error(&format!("{ERROR_PREFIX} {error}"));
}

/// Level-filtered, tagged logger.
///
/// In a browser the formatted line goes straight to the console. Inside the
/// native shell the raw record is sent over the bridge, which formats it on
/// the other side. Logging never fails: bridge errors are reported on the
/// console error channel and otherwise dropped.
pub struct Logger {
    level: LogLevel,
    tag: String,
    labels: LabelTable,
    use_syslog: bool,
    timers: TimerRegistry,
    platform: Platform,
}

impl Logger {
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_platform(tag, LoggerOptions::default(), Platform::new())
    }

    pub fn with_options(tag: impl Into<String>, options: LoggerOptions) -> Self {
        Self::with_platform(tag, options, Platform::new())
    }

    pub fn with_platform(tag: impl Into<String>, options: LoggerOptions, platform: Platform) -> Self {
        let mut logger = Self {
            level: LogLevel::Info,
            tag: tag.into(),
            labels: LabelTable::new(),
            use_syslog: false,
            timers: TimerRegistry::new(),
            platform,
        };
        logger.apply_options(options);
        logger
    }

    /// Reads the `plugins.Logger` section of `config`, then applies `options`
    /// on top of it.
    pub fn from_config(
        tag: impl Into<String>,
        config: &dyn ConfigPort,
        options: LoggerOptions,
        platform: Platform,
    ) -> Self {
        let resolved = LoggerOptions::from_config(config).merge(options);
        Self::with_platform(tag, resolved, platform)
    }

    fn apply_options(&mut self, options: LoggerOptions) {
        if let Some(level) = options.level {
            self.level = level;
        }
        if let Some(labels) = &options.labels {
            self.labels.apply_map(labels);
        }
        if let Some(use_syslog) = options.use_syslog {
            self.use_syslog = use_syslog;
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn level_name(&self) -> &'static str {
        self.level.name()
    }

    /// Unknown names leave the level unchanged.
    pub fn set_level_name(&mut self, name: &str) {
        if let Some(level) = LogLevel::from_name(name) {
            self.level = level;
        }
    }

    pub fn labels(&self) -> BTreeMap<String, String> {
        self.labels.snapshot()
    }

    /// Entries whose key is not a level name are ignored.
    pub fn set_labels(&mut self, labels: &HashMap<String, String>) {
        self.labels.apply_map(labels);
    }

    pub fn set_label(&mut self, level: LogLevel, label: impl Into<String>) {
        self.labels.set(level, label);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// An empty tag is ignored.
    pub fn set_tag(&mut self, tag: &str) {
        if !tag.is_empty() {
            self.tag = tag.to_string();
        }
    }

    pub fn use_syslog(&self) -> bool {
        self.use_syslog
    }

    /// Only iOS has a secondary system log channel, so only there is the
    /// native side told about the change.
    pub fn set_use_syslog(&mut self, use_syslog: bool) {
        self.use_syslog = use_syslog;

        if self.platform.kind() == PlatformKind::Ios {
            let bridge = Arc::clone(self.platform.bridge());
            let console = Arc::clone(self.platform.console());
            self.platform.spawner().spawn(
                async move {
                    if let Err(err) = bridge.set_use_syslog(use_syslog).await {
                        log_error(console.as_ref(), &err);
                    }
                }
                .boxed_local(),
            );
        }
    }

    /// Accepts any message and drops it, so callers can dispatch on a level
    /// name without special-casing `silent`.
    pub fn silent(&self, _message: &str) {}

    pub fn error(&self, message: &str) {
        self.log_message(LogLevel::Error, &self.tag, message);
    }

    pub fn warn(&self, message: &str) {
        self.log_message(LogLevel::Warn, &self.tag, message);
    }

    pub fn info(&self, message: &str) {
        self.log_message(LogLevel::Info, &self.tag, message);
    }

    pub fn log(&self, message: &str) {
        self.info(message);
    }

    pub fn debug(&self, message: &str) {
        self.log_message(LogLevel::Debug, &self.tag, message);
    }

    /// Unknown level names log at `info`.
    pub fn log_at_level<'a>(&self, level: impl Into<LevelSelector<'a>>, message: &str) {
        self.log_message(level.into().resolve(), &self.tag, message);
    }

    /// Like `log_at_level`, with a one-off tag.
    pub fn log_with_tag_at_level<'a>(
        &self,
        level: impl Into<LevelSelector<'a>>,
        tag: &str,
        message: &str,
    ) {
        self.log_message(level.into().resolve(), tag, message);
    }

    fn log_message(&self, level: LogLevel, tag: &str, message: &str) {
        if !self.level.allows(level) {
            return;
        }

        let label = self.labels.get(level);

        if self.platform.is_native() {
            self.send(LogRecord::new(level, tag, label, message));
        } else {
            self.platform
                .console()
                .write(level, &format_line(tag, label, message));
        }
    }

    fn send(&self, record: LogRecord) {
        let bridge: Arc<dyn BridgePort> = Arc::clone(self.platform.bridge());
        let console = Arc::clone(self.platform.console());
        self.platform.spawner().spawn(
            async move {
                if let Err(err) = bridge.log(record).await {
                    log_error(console.as_ref(), &err);
                }
            }
            .boxed_local(),
        );
    }

    /// Logs a structured value at `info`.
    pub fn dir<T: Serialize + ?Sized>(&self, value: &T) {
        if !self.level.allows(LogLevel::Info) {
            return;
        }

        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                log_error(
                    self.platform.console().as_ref(),
                    &LoggerError::serialization(e.to_string()),
                );
                return;
            }
        };

        if !self.platform.is_native() {
            self.platform.console().dir(&json);
            return;
        }

        if json.is_object() {
            let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string());
            self.info(&format!("{}: {rendered}", short_type_name::<T>()));
        } else {
            self.info(&json.to_string());
        }
    }

    pub fn trace(&self) {
        if self.platform.is_native() {
            let stack = std::backtrace::Backtrace::force_capture();
            self.info(&format!("trace\n{stack}"));
        } else {
            self.platform.console().trace();
        }
    }

    /// Tabular listing on web. Native platforms have no equivalent.
    pub fn table<T: Serialize + ?Sized>(&self, data: &T, columns: Option<&[String]>) {
        if self.platform.is_native() {
            return;
        }
        match serde_json::to_value(data) {
            Ok(json) => self.platform.console().table(&json, columns),
            Err(e) => log_error(
                self.platform.console().as_ref(),
                &LoggerError::serialization(e.to_string()),
            ),
        }
    }

    pub fn clear(&self) {
        if !self.platform.is_native() {
            self.platform.console().clear();
        }
    }

    pub fn count<'a>(&self, label: impl Into<Option<&'a str>>) {
        if !self.platform.is_native() {
            self.platform.console().count(console_label(label.into()));
        }
    }

    pub fn count_reset<'a>(&self, label: impl Into<Option<&'a str>>) {
        if !self.platform.is_native() {
            self.platform.console().count_reset(console_label(label.into()));
        }
    }

    pub fn group(&self, label: &str) {
        if !self.platform.is_native() {
            self.platform.console().group(label);
        }
    }

    pub fn group_collapsed(&self, label: &str) {
        if !self.platform.is_native() {
            self.platform.console().group_collapsed(label);
        }
    }

    pub fn group_end(&self) {
        if !self.platform.is_native() {
            self.platform.console().group_end();
        }
    }

    /// Starts a timer. No label (or an empty one) selects the default timer.
    pub fn time<'a>(&mut self, label: impl Into<Option<&'a str>>) {
        let label = TimerLabel::resolve(label.into());
        self.timers.start(label, self.platform.clock().now());
    }

    pub fn time_log<'a>(&self, label: impl Into<Option<&'a str>>) {
        let label = TimerLabel::resolve(label.into());
        self.report_timer(&label);
    }

    pub fn time_end<'a>(&mut self, label: impl Into<Option<&'a str>>) {
        let label = TimerLabel::resolve(label.into());
        self.report_timer(&label);
        self.timers.remove(&label);
    }

    /// Whether a timer with this label is running.
    pub fn has_timer<'a>(&self, label: impl Into<Option<&'a str>>) -> bool {
        self.timers.contains(&TimerLabel::resolve(label.into()))
    }

    fn report_timer(&self, label: &TimerLabel) {
        match self.timers.elapsed(label, self.platform.clock().now()) {
            Some(elapsed) => self.info(&format!("{label}: {}", format_elapsed(elapsed))),
            None => self.warn(&format!("timer '{label}' does not exist")),
        }
    }
}

fn console_label(label: Option<&str>) -> &str {
    match label {
        Some(name) if !name.is_empty() => name,
        _ => TimerLabel::DEFAULT_NAME,
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
