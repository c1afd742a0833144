/// Adapters module - platform-specific implementations of ports.

pub mod global_console;
pub mod shared;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{Clock, ConsoleLogger, Spawner};
#[cfg(target_arch = "wasm32")]
pub use wasm::{Clock, ConsoleLogger, Spawner};

pub use global_console::console;
pub use shared::JsonConfig;

use crate::domain::logging::PlatformKind;
use crate::ports::BridgePort;
use std::sync::Arc;

/// Environment check for the current process. Evaluated once.
pub fn detect_platform() -> PlatformKind {
    #[cfg(target_arch = "wasm32")]
    {
        wasm::environment::platform_kind()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::environment::platform_kind()
    }
}

/// Bridge to the native shell for the current target.
pub fn default_bridge() -> Arc<dyn BridgePort> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(wasm::CapacitorBridge::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(native::InProcessBridge::with_default_host())
    }
}
