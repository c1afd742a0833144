use super::environment::capacitor;
use crate::domain::logging::{LogRecord, LoggerError};
use crate::ports::BridgePort;
use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub const PLUGIN_NAME: &str = "LoggerBridge";

#[derive(Serialize)]
struct UseSyslog {
    #[serde(rename = "use")]
    use_syslog: bool,
}

/// Calls the native `LoggerBridge` plugin registered with Capacitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacitorBridge;

impl CapacitorBridge {
    pub fn new() -> Self {
        Self
    }

    fn plugin() -> Result<JsValue, LoggerError> {
        let plugins = Reflect::get(&capacitor()?, &JsValue::from_str("Plugins"))?;
        let plugin = Reflect::get(&plugins, &JsValue::from_str(PLUGIN_NAME))?;
        if plugin.is_undefined() {
            return Err(LoggerError::bridge(format!("{PLUGIN_NAME} plugin is not registered")));
        }
        Ok(plugin)
    }

    async fn call<T: Serialize>(method: &str, payload: &T) -> Result<(), LoggerError> {
        let plugin = Self::plugin()?;
        let arg = serde_wasm_bindgen::to_value(payload)
            .map_err(|e| LoggerError::serialization(e.to_string()))?;

        let function = Reflect::get(&plugin, &JsValue::from_str(method))?
            .dyn_into::<Function>()
            .map_err(|_| LoggerError::bridge(format!("{PLUGIN_NAME}.{method} is not a function")))?;

        let result = function.call1(&plugin, &arg)?;
        if let Ok(promise) = result.dyn_into::<Promise>() {
            JsFuture::from(promise).await?;
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl BridgePort for CapacitorBridge {
    async fn log(&self, record: LogRecord) -> Result<(), LoggerError> {
        Self::call("log", &record).await
    }

    async fn set_use_syslog(&self, use_syslog: bool) -> Result<(), LoggerError> {
        Self::call("setUseSyslog", &UseSyslog { use_syslog }).await
    }
}
