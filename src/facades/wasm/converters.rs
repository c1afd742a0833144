use crate::domain::logging::{LevelSelector, LogLevel};
use js_sys::{Object, Reflect};
use serde_wasm_bindgen::from_value;
use std::collections::{BTreeMap, HashMap};
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn is_missing(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// A level given from JS as an ordinal or a name. Anything else is `None`.
pub fn js_value_to_level(value: &JsValue) -> Option<LogLevel> {
    if let Some(index) = value.as_f64() {
        if index >= 0.0 && index.fract() == 0.0 {
            return LogLevel::from_index(index as usize);
        }
        return None;
    }
    value.as_string().and_then(|name| LogLevel::from_name(&name))
}

/// Like `js_value_to_level`, but unresolvable values log at `info`.
pub fn js_value_to_selector(value: &JsValue) -> LogLevel {
    match value.as_string() {
        Some(name) => LevelSelector::Name(&name).resolve(),
        None => js_value_to_level(value).unwrap_or(LogLevel::Info),
    }
}

/// Plain JS object into a name→label map; non-string values are dropped.
pub fn js_value_to_labels(value: JsValue) -> HashMap<String, String> {
    from_value::<serde_json::Value>(value)
        .ok()
        .and_then(|json| {
            json.as_object().map(|object| {
                object
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|label| (k.clone(), label.to_string())))
                    .collect()
            })
        })
        .unwrap_or_default()
}

pub fn labels_to_js_value(labels: &BTreeMap<String, String>) -> JsValue {
    let obj = Object::new();
    for (level, label) in labels {
        let _ = Reflect::set(&obj, &JsValue::from_str(level), &JsValue::from_str(label));
    }
    obj.into()
}

pub fn js_value_to_json(value: JsValue) -> Result<serde_json::Value, JsValue> {
    if value.is_undefined() {
        return Ok(serde_json::Value::Null);
    }
    from_value(value).map_err(to_js_error)
}
