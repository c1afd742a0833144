use serde_json::Value;

/// Read-only access to the application config.
pub trait ConfigPort: Send + Sync {
    /// Looks up a dotted key path such as `plugins.Logger.level`.
    fn value(&self, key_path: &str) -> Option<Value>;
}
