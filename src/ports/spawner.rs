use futures::future::LocalBoxFuture;

/// Runs fire-and-forget tasks. Nothing awaits the spawned work.
pub trait SpawnerPort: Send + Sync {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
