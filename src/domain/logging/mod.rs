pub mod config;
pub mod error;
pub mod labels;
pub mod operations;
pub mod timers;
pub mod types;

pub use config::{LoggerOptions, PLUGIN_SCOPE};
pub use error::LoggerError;
pub use labels::LabelTable;
pub use operations::{elapsed_millis, flatten_message, format_elapsed, format_line};
pub use timers::TimerRegistry;
pub use types::{LevelSelector, LogLevel, LogRecord, PlatformKind, TimerLabel};
