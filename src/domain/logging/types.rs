use super::error::LoggerError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const LEVEL_NAMES: [&str; 5] = ["silent", "error", "warn", "info", "debug"];

/// Log severity. The discriminant is the filtering order: a logger whose
/// threshold is `Info` emits `Error`, `Warn` and `Info`, never `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Silent,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Case-sensitive lookup against the level names.
    pub fn from_name(name: &str) -> Option<Self> {
        LEVEL_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether a logger with `self` as threshold emits `level`.
    pub fn allows(self, level: LogLevel) -> bool {
        level != LogLevel::Silent && level <= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LoggerError::unknown_level(s))
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawLevel::deserialize(deserializer)?;
        raw.resolve()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid log level: {raw:?}")))
    }
}

/// A level as it may appear in configuration: a name or an ordinal.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawLevel {
    Name(String),
    Ordinal(u64),
}

impl RawLevel {
    pub(crate) fn resolve(&self) -> Option<LogLevel> {
        match self {
            RawLevel::Name(name) => LogLevel::from_name(name),
            RawLevel::Ordinal(index) => usize::try_from(*index)
                .ok()
                .and_then(LogLevel::from_index),
        }
    }
}

/// Argument of `Logger::log_at_level`: either a level or its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSelector<'a> {
    Level(LogLevel),
    Name(&'a str),
}

impl LevelSelector<'_> {
    /// Unknown names fall back to `Info`.
    pub fn resolve(self) -> LogLevel {
        match self {
            LevelSelector::Level(level) => level,
            LevelSelector::Name(name) => LogLevel::from_name(name).unwrap_or(LogLevel::Info),
        }
    }
}

impl From<LogLevel> for LevelSelector<'_> {
    fn from(level: LogLevel) -> Self {
        LevelSelector::Level(level)
    }
}

impl<'a> From<&'a str> for LevelSelector<'a> {
    fn from(name: &'a str) -> Self {
        LevelSelector::Name(name)
    }
}

impl<'a> From<&'a String> for LevelSelector<'a> {
    fn from(name: &'a String) -> Self {
        LevelSelector::Name(name.as_str())
    }
}

/// Raw record handed across the bridge. The receiving side formats it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub level: u8,
    pub tag: String,
    pub label: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        tag: impl Into<String>,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: level.ordinal(),
            tag: tag.into(),
            label: label.into(),
            message: message.into(),
        }
    }

    /// Out-of-range levels decode as `Info`.
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_index(self.level as usize).unwrap_or(LogLevel::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerLabel {
    Default,
    Named(String),
}

impl TimerLabel {
    pub const DEFAULT_NAME: &'static str = "default";

    /// A missing or empty label selects the default timer.
    pub fn resolve(label: Option<&str>) -> Self {
        match label {
            Some(name) if !name.is_empty() => TimerLabel::Named(name.to_string()),
            _ => TimerLabel::Default,
        }
    }
}

impl fmt::Display for TimerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerLabel::Default => f.write_str(Self::DEFAULT_NAME),
            TimerLabel::Named(name) => f.write_str(name),
        }
    }
}

/// Where the portable code is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    #[default]
    Web,
    Ios,
    Android,
}

impl PlatformKind {
    /// Unrecognised names are treated as `Web`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ios" => PlatformKind::Ios,
            "android" => PlatformKind::Android,
            _ => PlatformKind::Web,
        }
    }

    pub fn is_native(self) -> bool {
        !matches!(self, PlatformKind::Web)
    }
}
