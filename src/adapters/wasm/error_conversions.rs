use crate::domain::logging::LoggerError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to LoggerError for WASM infrastructure
impl From<JsValue> for LoggerError {
    fn from(err: JsValue) -> Self {
        LoggerError::bridge(
            err.as_string()
                .or_else(|| {
                    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                        .ok()
                        .and_then(|message| message.as_string())
                })
                .unwrap_or_else(|| "Unknown JavaScript error".to_string()),
        )
    }
}

/// Conversion from LoggerError to JsValue for WASM boundary
impl From<LoggerError> for JsValue {
    fn from(error: LoggerError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
