//! Cancellable delayed tasks
//!
//! Every task spawned through a [`TaskScope`] is aborted when the scope is
//! dropped, so no delayed callback outlives the component that owns it.

use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::AbortHandle;

/// Handle to one scheduled task
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    handle: AbortHandle,
}

impl ScheduledTask {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[derive(Debug, Default)]
pub struct TaskScope {
    tasks: Mutex<Vec<AbortHandle>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay`
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    pub fn spawn<Fut>(&self, future: Fut) -> ScheduledTask
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future).abort_handle();
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle.clone());
        ScheduledTask { handle }
    }

    /// Tasks spawned and not yet finished
    pub fn pending(&self) -> usize {
        self.tasks.lock().iter().filter(|task| !task.is_finished()).count()
    }

    pub fn cancel_all(&self) {
        for task in self.tasks.lock().drain(..) {
            task.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_callback_runs_after_delay() {
        let scope = TaskScope::new();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        scope.schedule(Duration::from_millis(1000), move || flag.store(true, Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(!fired.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scope_cancels_tasks() {
        let fired = Arc::new(AtomicBool::new(false));
        {
            let scope = TaskScope::new();
            let flag = fired.clone();
            scope.schedule(Duration::from_millis(10), move || flag.store(true, Ordering::SeqCst));
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_single_task() {
        let scope = TaskScope::new();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let task = scope.schedule(Duration::from_millis(10), move || flag.store(true, Ordering::SeqCst));
        task.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(task.is_finished());
        assert_eq!(scope.pending(), 0);
    }
}
