use super::converters;
use crate::adapters::JsonConfig;
use crate::domain::logging::LoggerOptions;
use crate::logger::Logger;
use crate::platform::Platform;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

fn options_from_js(options: JsValue) -> Result<LoggerOptions, JsValue> {
    if converters::is_missing(&options) {
        return Ok(LoggerOptions::default());
    }
    from_value(options).map_err(converters::to_js_error)
}

/// `Logger` as seen from JavaScript.
#[wasm_bindgen(js_name = Logger)]
pub struct JsLogger {
    inner: Logger,
}

#[wasm_bindgen(js_class = Logger)]
impl JsLogger {
    #[wasm_bindgen(constructor)]
    pub fn new(tag: String, options: JsValue) -> Result<JsLogger, JsValue> {
        let options = options_from_js(options)?;
        Ok(Self {
            inner: Logger::with_options(tag, options),
        })
    }

    /// Builds a logger from a parsed app config (`{ plugins: { Logger: ... } }`).
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(tag: String, config: JsValue, options: JsValue) -> Result<JsLogger, JsValue> {
        let config = JsonConfig::new(converters::js_value_to_json(config)?);
        let options = options_from_js(options)?;
        Ok(Self {
            inner: Logger::from_config(tag, &config, options, Platform::new()),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn level(&self) -> u8 {
        self.inner.level().ordinal()
    }

    /// Accepts an ordinal or a level name; anything else is ignored.
    #[wasm_bindgen(setter)]
    pub fn set_level(&mut self, level: JsValue) {
        if let Some(level) = converters::js_value_to_level(&level) {
            self.inner.set_level(level);
        }
    }

    #[wasm_bindgen(getter = levelName)]
    pub fn level_name(&self) -> String {
        self.inner.level_name().to_string()
    }

    #[wasm_bindgen(setter = levelName)]
    pub fn set_level_name(&mut self, name: String) {
        self.inner.set_level_name(&name);
    }

    #[wasm_bindgen(getter)]
    pub fn labels(&self) -> JsValue {
        converters::labels_to_js_value(&self.inner.labels())
    }

    #[wasm_bindgen(setter)]
    pub fn set_labels(&mut self, labels: JsValue) {
        self.inner.set_labels(&converters::js_value_to_labels(labels));
    }

    #[wasm_bindgen(getter)]
    pub fn tag(&self) -> String {
        self.inner.tag().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_tag(&mut self, tag: String) {
        self.inner.set_tag(&tag);
    }

    #[wasm_bindgen(getter = useSyslog)]
    pub fn use_syslog(&self) -> bool {
        self.inner.use_syslog()
    }

    #[wasm_bindgen(setter = useSyslog)]
    pub fn set_use_syslog(&mut self, use_syslog: bool) {
        self.inner.set_use_syslog(use_syslog);
    }

    pub fn silent(&self, message: &str) {
        self.inner.silent(message);
    }

    pub fn error(&self, message: &str) {
        self.inner.error(message);
    }

    pub fn warn(&self, message: &str) {
        self.inner.warn(message);
    }

    pub fn info(&self, message: &str) {
        self.inner.info(message);
    }

    pub fn log(&self, message: &str) {
        self.inner.log(message);
    }

    pub fn debug(&self, message: &str) {
        self.inner.debug(message);
    }

    #[wasm_bindgen(js_name = logAtLevel)]
    pub fn log_at_level(&self, level: JsValue, message: &str) {
        self.inner
            .log_at_level(converters::js_value_to_selector(&level), message);
    }

    #[wasm_bindgen(js_name = logWithTagAtLevel)]
    pub fn log_with_tag_at_level(&self, level: JsValue, tag: &str, message: &str) {
        self.inner
            .log_with_tag_at_level(converters::js_value_to_selector(&level), tag, message);
    }

    pub fn dir(&self, value: JsValue) {
        match converters::js_value_to_json(value) {
            Ok(json) => self.inner.dir(&json),
            Err(e) => self.inner.error(&format!(
                "Cannot display value: {}",
                e.as_string().unwrap_or_default()
            )),
        }
    }

    pub fn trace(&self) {
        self.inner.trace();
    }

    pub fn table(&self, data: JsValue, columns: Option<Vec<String>>) {
        match converters::js_value_to_json(data) {
            Ok(json) => self.inner.table(&json, columns.as_deref()),
            Err(e) => self.inner.error(&format!(
                "Cannot display value: {}",
                e.as_string().unwrap_or_default()
            )),
        }
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn count(&self, label: Option<String>) {
        self.inner.count(label.as_deref());
    }

    #[wasm_bindgen(js_name = countReset)]
    pub fn count_reset(&self, label: Option<String>) {
        self.inner.count_reset(label.as_deref());
    }

    pub fn group(&self, label: Option<String>) {
        self.inner.group(label.as_deref().unwrap_or_default());
    }

    #[wasm_bindgen(js_name = groupCollapsed)]
    pub fn group_collapsed(&self, label: Option<String>) {
        self.inner.group_collapsed(label.as_deref().unwrap_or_default());
    }

    #[wasm_bindgen(js_name = groupEnd)]
    pub fn group_end(&self) {
        self.inner.group_end();
    }

    pub fn time(&mut self, label: Option<String>) {
        self.inner.time(label.as_deref());
    }

    #[wasm_bindgen(js_name = timeLog)]
    pub fn time_log(&self, label: Option<String>) {
        self.inner.time_log(label.as_deref());
    }

    #[wasm_bindgen(js_name = timeEnd)]
    pub fn time_end(&mut self, label: Option<String>) {
        self.inner.time_end(label.as_deref());
    }
}
