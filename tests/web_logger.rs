#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use hybrid_logger::{LogLevel, Logger, LoggerOptions, Platform, PlatformKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_browser_is_not_native() {
    let platform = Platform::new();
    assert_eq!(platform.kind(), PlatformKind::Web);
}

#[wasm_bindgen_test]
fn test_logs_to_browser_console() {
    let mut logger = Logger::with_options("Test", LoggerOptions::new().with_level(LogLevel::Debug));
    logger.error("error line");
    logger.warn("warn line");
    logger.info("info line");
    logger.debug("debug line");
    logger.dir(&serde_json::json!({ "nested": { "ok": true } }));
    logger.group("group");
    logger.count(None);
    logger.group_end();

    logger.time("browser");
    logger.time_end("browser");
    assert!(!logger.has_timer("browser"));
}

#[wasm_bindgen_test]
fn test_syslog_toggle_is_local_on_web() {
    let mut logger = Logger::new("Test");
    logger.set_use_syslog(true);
    assert!(logger.use_syslog());
}
