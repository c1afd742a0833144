/// Default console instance - implementation selected at compile time.
///
/// WASM builds write to the browser console, native builds to stdout/stderr.

use crate::ports::ConsolePort;
use once_cell::sync::Lazy;
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::ConsoleLogger;

static CONSOLE: Lazy<Arc<dyn ConsolePort>> =
    Lazy::new(|| -> Arc<dyn ConsolePort> { Arc::new(ConsoleLogger::new()) });

/// Shared handle to the default console.
#[inline]
pub fn console() -> Arc<dyn ConsolePort> {
    Arc::clone(&CONSOLE)
}
