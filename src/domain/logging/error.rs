use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    UnknownLevel(String),
    Bridge(String),
    Config(String),
    Serialization(String),
    UnknownMethod(String),
    Environment(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::UnknownLevel(name) => write!(f, "Unknown log level: {name}"),
            LoggerError::Bridge(msg) => write!(f, "Bridge call failed: {msg}"),
            LoggerError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            LoggerError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
            LoggerError::UnknownMethod(method) => write!(f, "Unknown bridge method: {method}"),
            LoggerError::Environment(msg) => write!(f, "Environment error: {msg}"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl LoggerError {
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel(name.into())
    }

    pub fn bridge(message: impl Into<String>) -> Self {
        LoggerError::Bridge(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        LoggerError::Config(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        LoggerError::Serialization(message.into())
    }

    pub fn unknown_method(method: impl Into<String>) -> Self {
        LoggerError::UnknownMethod(method.into())
    }

    pub fn environment(message: impl Into<String>) -> Self {
        LoggerError::Environment(message.into())
    }
}
