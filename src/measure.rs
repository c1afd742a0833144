use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Times `$block` on `$logger` when debug mode is on.
#[macro_export]
macro_rules! time_it {
    ($logger:expr, $label:expr, $block:expr) => {{
        let debug = $crate::measure::debug_mode() && $logger.platform().clock().is_available();
        if debug {
            $logger.time($label);
        }
        let result = $block;
        if debug {
            $logger.time_end($label);
        }
        result
    }};
}

pub use crate::time_it;
