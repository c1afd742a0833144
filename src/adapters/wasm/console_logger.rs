use crate::ports::ConsolePort;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn debug(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn clear();

    #[wasm_bindgen(js_namespace = console)]
    fn count(label: &str);

    #[wasm_bindgen(js_namespace = console, js_name = countReset)]
    fn count_reset(label: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn group(label: &str);

    #[wasm_bindgen(js_namespace = console, js_name = groupCollapsed)]
    fn group_collapsed(label: &str);

    #[wasm_bindgen(js_namespace = console, js_name = groupEnd)]
    fn group_end();

    #[wasm_bindgen(js_namespace = console)]
    fn dir(value: &JsValue);

    #[wasm_bindgen(js_namespace = console)]
    fn trace();

    #[wasm_bindgen(js_namespace = console, js_name = table)]
    fn table_with_columns(data: &JsValue, columns: &JsValue);
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for ConsoleLogger {
    fn log(&self, message: &str) {
        log(message);
    }

    fn debug(&self, message: &str) {
        debug(message);
    }

    fn info(&self, message: &str) {
        info(message);
    }

    fn warn(&self, message: &str) {
        warn(message);
    }

    fn error(&self, message: &str) {
        error(message);
    }

    fn clear(&self) {
        clear();
    }

    fn count(&self, label: &str) {
        count(label);
    }

    fn count_reset(&self, label: &str) {
        count_reset(label);
    }

    fn group(&self, label: &str) {
        group(label);
    }

    fn group_collapsed(&self, label: &str) {
        group_collapsed(label);
    }

    fn group_end(&self) {
        group_end();
    }

    fn dir(&self, value: &Value) {
        match serde_wasm_bindgen::to_value(value) {
            Ok(js_value) => dir(&js_value),
            Err(_) => log(&value.to_string()),
        }
    }

    fn trace(&self) {
        trace();
    }

    fn table(&self, data: &Value, columns: Option<&[String]>) {
        let data = match serde_wasm_bindgen::to_value(data) {
            Ok(data) => data,
            Err(_) => return log(&data.to_string()),
        };
        let columns = match columns {
            Some(columns) => columns
                .iter()
                .map(|c| JsValue::from_str(c))
                .collect::<js_sys::Array>()
                .into(),
            None => JsValue::UNDEFINED,
        };
        table_with_columns(&data, &columns);
    }
}
