use super::types::LogLevel;
use std::collections::{BTreeMap, HashMap};

/// Per-level decorative markers. Every level always has an entry; an empty
/// string means "no label".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: [String; 5],
}

impl LabelTable {
    pub const DEFAULT_LABELS: [(LogLevel, &'static str); 5] = [
        (LogLevel::Silent, ""),
        (LogLevel::Error, "🔴"),
        (LogLevel::Warn, "🟠"),
        (LogLevel::Info, "🟢"),
        (LogLevel::Debug, "🔎"),
    ];

    pub fn new() -> Self {
        Self {
            labels: Self::DEFAULT_LABELS.map(|(_, label)| label.to_string()),
        }
    }

    pub fn get(&self, level: LogLevel) -> &str {
        &self.labels[level as usize]
    }

    pub fn set(&mut self, level: LogLevel, label: impl Into<String>) {
        self.labels[level as usize] = label.into();
    }

    /// Applies a name→label mapping. Names that are not level names are
    /// skipped.
    pub fn apply<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, label) in entries {
            if let Some(level) = LogLevel::from_name(name) {
                self.set(level, label);
            }
        }
    }

    pub fn apply_map(&mut self, labels: &HashMap<String, String>) {
        self.apply(labels.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    /// Owned copy keyed by level name.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        LogLevel::ALL
            .iter()
            .map(|level| (level.name().to_string(), self.get(*level).to_string()))
            .collect()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new()
    }
}
