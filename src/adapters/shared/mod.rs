/// Adapters usable on every target.

pub mod json_config;

pub use json_config::JsonConfig;
