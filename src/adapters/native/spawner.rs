use crate::ports::SpawnerPort;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::cell::RefCell;

thread_local! {
    static POOL: RefCell<LocalPool> = RefCell::new(LocalPool::new());
    static HANDLE: LocalSpawner = POOL.with(|pool| pool.borrow().spawner());
}

/// Queues tasks on a per-thread `LocalPool` and polls it until nothing can
/// make progress. Tasks that are still pending stay queued and are polled
/// again on the next spawn from the same thread, so the caller never waits on
/// the bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spawner;

impl Spawner {
    pub fn new() -> Self {
        Self
    }

    /// Polls queued tasks on the current thread without blocking.
    pub fn run_pending() {
        POOL.with(|pool| {
            // Already running further up this thread's stack: that loop picks
            // up whatever was just queued.
            if let Ok(mut pool) = pool.try_borrow_mut() {
                pool.run_until_stalled();
            }
        });
    }
}

impl SpawnerPort for Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        let queued = HANDLE.with(|handle| handle.spawn_local(task));
        if queued.is_ok() {
            Self::run_pending();
        }
    }
}
