use crate::ports::SpawnerPort;
use futures::future::LocalBoxFuture;

/// Queues tasks on the browser microtask loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spawner;

impl Spawner {
    pub fn new() -> Self {
        Self
    }
}

impl SpawnerPort for Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
