use crate::domain::logging::{LoggerError, PlatformKind};
use js_sys::{Function, Reflect};
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;
use web_sys::DedicatedWorkerGlobalScope;

pub fn get_global_scope() -> Result<JsValue, LoggerError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window()
        .ok_or_else(|| LoggerError::environment("Neither DedicatedWorkerGlobalScope nor Window found"))?;
    Ok(JsValue::from(window))
}

/// The `Capacitor` runtime object injected by the native shell.
pub fn capacitor() -> Result<JsValue, LoggerError> {
    let capacitor = Reflect::get(&js_sys::global(), &JsValue::from_str("Capacitor"))?;
    if capacitor.is_undefined() || capacitor.is_null() {
        return Err(LoggerError::environment("Capacitor runtime not found"));
    }
    Ok(capacitor)
}

fn capacitor_platform_name() -> Result<String, LoggerError> {
    let capacitor = capacitor()?;
    let get_platform = Reflect::get(&capacitor, &JsValue::from_str("getPlatform"))?
        .dyn_into::<Function>()?;
    get_platform
        .call0(&capacitor)?
        .as_string()
        .ok_or_else(|| LoggerError::environment("Capacitor.getPlatform() did not return a string"))
}

// JS values are not Sync, so only the resolved kind is cached.
static PLATFORM: Lazy<PlatformKind> = Lazy::new(|| {
    capacitor_platform_name()
        .map(|name| PlatformKind::from_name(&name))
        .unwrap_or_default()
});

/// `ios`/`android` when running inside the native shell, otherwise `web`.
pub fn platform_kind() -> PlatformKind {
    *PLATFORM
}
