/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The logger core only talks to these traits; `adapters` provides the browser
/// and native implementations.

pub mod bridge;
pub mod clock;
pub mod config;
pub mod console;
pub mod spawner;
pub mod system_log;

pub use bridge::BridgePort;
pub use clock::ClockPort;
pub use config::ConfigPort;
pub use console::ConsolePort;
pub use spawner::SpawnerPort;
pub use system_log::SystemLogPort;
