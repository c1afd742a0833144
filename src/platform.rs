/// Platform - Dependency injection container for all ports.
///
/// Every `Logger` owns a `Platform`. Clones share the same adapters; the
/// defaults are chosen for the build target and the detected environment.

use crate::domain::logging::PlatformKind;
use crate::ports::{BridgePort, ClockPort, ConsolePort, SpawnerPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    kind: PlatformKind,
    console: Arc<dyn ConsolePort>,
    clock: Arc<dyn ClockPort>,
    bridge: Arc<dyn BridgePort>,
    spawner: Arc<dyn SpawnerPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            kind: crate::adapters::detect_platform(),
            console: crate::adapters::console(),
            clock: Arc::new(crate::adapters::Clock::new()),
            bridge: crate::adapters::default_bridge(),
            spawner: Arc::new(crate::adapters::Spawner::new()),
        }
    }

    pub fn with_kind(mut self, kind: PlatformKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_console(mut self, console: Arc<dyn ConsolePort>) -> Self {
        self.console = console;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_bridge(mut self, bridge: Arc<dyn BridgePort>) -> Self {
        self.bridge = bridge;
        self
    }

    pub fn with_spawner(mut self, spawner: Arc<dyn SpawnerPort>) -> Self {
        self.spawner = spawner;
        self
    }

    #[inline]
    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    /// True when log records go over the bridge instead of the console.
    #[inline]
    pub fn is_native(&self) -> bool {
        self.kind.is_native()
    }

    #[inline]
    pub fn console(&self) -> &Arc<dyn ConsolePort> {
        &self.console
    }

    #[inline]
    pub fn clock(&self) -> &Arc<dyn ClockPort> {
        &self.clock
    }

    #[inline]
    pub fn bridge(&self) -> &Arc<dyn BridgePort> {
        &self.bridge
    }

    #[inline]
    pub fn spawner(&self) -> &Arc<dyn SpawnerPort> {
        &self.spawner
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
