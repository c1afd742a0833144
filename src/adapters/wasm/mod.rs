/// WASM adapters - implementations using browser and Capacitor APIs.

pub mod bridge;
pub mod clock;
pub mod console_logger;
pub mod environment;
pub mod error_conversions;
pub mod spawner;

pub use bridge::CapacitorBridge;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use spawner::Spawner;
