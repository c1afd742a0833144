use crate::domain::logging::LogLevel;
use serde_json::Value;

/// Console port - the in-process output channel.
///
/// - WASM: the browser `console` object
/// - Native: stdout/stderr
///
/// Call sites receive it through `Platform`; nothing rebinds a global console.
pub trait ConsolePort: Send + Sync {
    /// Generic channel.
    fn log(&self, message: &str);

    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    fn clear(&self) {}

    fn count(&self, _label: &str) {}

    fn count_reset(&self, _label: &str) {}

    fn group(&self, _label: &str) {}

    fn group_collapsed(&self, _label: &str) {}

    fn group_end(&self) {}

    /// Interactive listing of a structured value.
    fn dir(&self, value: &Value) {
        self.log(&value.to_string());
    }

    fn trace(&self) {}

    /// Tabular listing; `columns` restricts which properties are shown.
    fn table(&self, _data: &Value, _columns: Option<&[String]>) {}

    /// Writes a line to the channel matching `level`.
    fn write(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => self.error(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Info => self.info(message),
            LogLevel::Debug => self.debug(message),
            LogLevel::Silent => self.log(message),
        }
    }
}
