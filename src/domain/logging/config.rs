use super::types::LogLevel;
use crate::ports::ConfigPort;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Config keys live under the plugin's own section of the app config.
pub const PLUGIN_SCOPE: &str = "plugins.Logger";

/// Construction-time settings. Absent fields keep whatever was there before,
/// so options can be layered over values read from the app config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerOptions {
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: Option<LogLevel>,
    #[serde(default, deserialize_with = "lenient_labels")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub use_syslog: Option<bool>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(
            labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_use_syslog(mut self, use_syslog: bool) -> Self {
        self.use_syslog = Some(use_syslog);
        self
    }

    /// Reads `level`, `labels` and `useSyslog` from the plugin section.
    /// Missing or mistyped entries are left unset.
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let key = |name: &str| format!("{PLUGIN_SCOPE}.{name}");

        Self {
            level: config
                .value(&key("level"))
                .as_ref()
                .and_then(Value::as_str)
                .and_then(LogLevel::from_name),
            labels: config.value(&key("labels")).as_ref().and_then(labels_from_value),
            use_syslog: config.value(&key("useSyslog")).as_ref().and_then(Value::as_bool),
        }
    }

    /// Fields set in `overrides` win.
    pub fn merge(self, overrides: LoggerOptions) -> Self {
        Self {
            level: overrides.level.or(self.level),
            labels: overrides.labels.or(self.labels),
            use_syslog: overrides.use_syslog.or(self.use_syslog),
        }
    }
}

fn level_from_value(value: &Value) -> Option<LogLevel> {
    match value {
        Value::String(name) => LogLevel::from_name(name),
        Value::Number(n) => n
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(LogLevel::from_index),
        _ => None,
    }
}

fn labels_from_value(value: &Value) -> Option<HashMap<String, String>> {
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|label| (k.clone(), label.to_string())))
            .collect(),
    )
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<LogLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(level_from_value))
}

fn lenient_labels<'de, D>(deserializer: D) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(labels_from_value))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_bool))
}
