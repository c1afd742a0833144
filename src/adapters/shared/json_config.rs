use crate::domain::logging::LoggerError;
use crate::ports::ConfigPort;
use serde_json::Value;

/// Config source backed by an in-memory JSON document, such as the parsed
/// `capacitor.config.json`.
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    root: Value,
}

impl JsonConfig {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoggerError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| LoggerError::config(format!("Failed to parse config: {e}")))
    }
}

impl ConfigPort for JsonConfig {
    fn value(&self, key_path: &str) -> Option<Value> {
        key_path
            .split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.root, |node, segment| node.get(segment))
            .cloned()
    }
}
