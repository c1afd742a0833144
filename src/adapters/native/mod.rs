/// Native adapters - implementations for native Rust (non-WASM).

pub mod bridge;
pub mod clock;
pub mod console_logger;
pub mod environment;
pub mod spawner;
pub mod system_log;

pub use bridge::InProcessBridge;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use spawner::Spawner;
pub use system_log::LogCrateSink;
