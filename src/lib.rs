#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod bridge_host;
pub mod logger;
pub mod measure;

pub use bridge_host::LoggerBridgeHost;
pub use domain::logging::{
    LabelTable, LevelSelector, LogLevel, LogRecord, LoggerError, LoggerOptions, PlatformKind,
};
pub use logger::Logger;
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}

/// Installs `env_logger` as the `log` backend so the native system log sink
/// has somewhere to write. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_env_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(cfg!(test))
        .try_init();
}
