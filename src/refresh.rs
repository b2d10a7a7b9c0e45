//! Fixed-interval refresh loop.
//!
//! [`RefreshLoop::start`] spawns a tokio task that ticks a shared
//! [`Tick`] target every period until the returned [`RefreshHandle`] is
//! stopped or dropped. Ticks never overlap: a slow tick delays the next one
//! instead of bursting to catch up. A tick that panics is logged and the
//! loop carries on with the next period.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::dashboard::{Tick, TickReport};

/// Shortest accepted period.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Starts refresh loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshLoop;

impl RefreshLoop {
    /// Tick `target` every `period`, first one `period` from now.
    ///
    /// Periods below [`MIN_PERIOD`] are raised to it. Must be called from
    /// inside a tokio runtime.
    pub fn start<T>(target: Arc<Mutex<T>>, period: Duration) -> RefreshHandle
    where
        T: Tick + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let ticks = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&ticks);

        info!("refresh loop started, period {period:?}");

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = interval.tick() => {
                        let outcome = {
                            let mut guard = target.lock().unwrap_or_else(PoisonError::into_inner);
                            panic::catch_unwind(AssertUnwindSafe(|| guard.tick()))
                        };
                        let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                        match outcome {
                            Ok(report) if !report.is_clean() => {
                                debug!("tick {} finished with draw failures", report.tick);
                            }
                            Ok(_) => {}
                            Err(_) => warn!("tick {attempt} panicked, continuing"),
                        }
                    }
                }
            }

            info!("refresh loop stopped after {} ticks", counter.load(Ordering::SeqCst));
        });

        RefreshHandle { shutdown, task: Some(task), ticks }
    }
}

/// Tick `target` exactly `count` times, one `period` apart, first one
/// `period` from now. Returns the reports in order.
///
/// Unlike [`RefreshLoop`] this borrows the target and runs on the caller's
/// task, so the count is exact. Periods below [`MIN_PERIOD`] are raised to it.
pub async fn run_ticks<T: Tick>(target: &mut T, period: Duration, count: u64) -> Vec<TickReport> {
    let period = period.max(MIN_PERIOD);
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut reports = Vec::new();
    for _ in 0..count {
        interval.tick().await;
        reports.push(target.tick());
    }
    reports
}

/// Control handle for a running refresh loop.
///
/// Dropping the handle aborts the loop.
#[derive(Debug)]
pub struct RefreshHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
}

impl RefreshHandle {
    /// Ticks attempted so far, including any that panicked.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    /// True while the loop task is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Signal the loop to stop and wait for it. Returns the total tick
    /// count; no tick runs after this returns.
    pub async fn stop(mut self) -> u64 {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("refresh loop ended abnormally: {e}");
            }
        }
        self.ticks()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[derive(Default)]
    struct Counter {
        ticks: u64,
    }

    impl Tick for Counter {
        fn tick(&mut self) -> TickReport {
            self.ticks += 1;
            TickReport { tick: self.ticks, line: None, spark: None }
        }
    }

    /// Panics on its second tick only.
    #[derive(Default)]
    struct PanicsOnce {
        calls: u64,
    }

    impl Tick for PanicsOnce {
        fn tick(&mut self) -> TickReport {
            self.calls += 1;
            assert!(self.calls != 2, "tick {} blew up", self.calls);
            TickReport { tick: self.calls, line: None, spark: None }
        }
    }

    fn counter() -> Arc<Mutex<Counter>> {
        Arc::new(Mutex::new(Counter::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_period() {
        let target = counter();
        let handle = RefreshLoop::start(Arc::clone(&target), Duration::from_millis(4200));

        sleep(Duration::from_millis(4100)).await;
        assert_eq!(handle.ticks(), 0);

        sleep(Duration::from_millis(8600)).await;
        assert_eq!(handle.ticks(), 3);
        assert!(handle.is_running());

        assert_eq!(handle.stop().await, 3);
        assert_eq!(target.lock().unwrap().ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_stop() {
        let target = counter();
        let handle = RefreshLoop::start(Arc::clone(&target), Duration::from_millis(100));

        sleep(Duration::from_millis(250)).await;
        let total = handle.stop().await;

        sleep(Duration::from_secs(10)).await;
        assert_eq!(target.lock().unwrap().ticks, total);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts() {
        let target = counter();
        let handle = RefreshLoop::start(Arc::clone(&target), Duration::from_millis(100));
        sleep(Duration::from_millis(150)).await;
        drop(handle);

        let seen = target.lock().unwrap().ticks;
        sleep(Duration::from_secs(5)).await;
        assert_eq!(target.lock().unwrap().ticks, seen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_raised() {
        let handle = RefreshLoop::start(counter(), Duration::ZERO);
        sleep(Duration::from_millis(5)).await;
        assert!(handle.ticks() >= 1);
        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_poisoned_lock_recovered() {
        let target = counter();
        {
            let target = Arc::clone(&target);
            let _ = std::thread::spawn(move || {
                let _guard = target.lock().unwrap();
                panic!("poison the lock");
            })
            .join();
        }
        assert!(target.is_poisoned());

        let handle = RefreshLoop::start(Arc::clone(&target), Duration::from_millis(100));
        sleep(Duration::from_millis(350)).await;
        assert_eq!(handle.stop().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_tick_keeps_loop_alive() {
        let target = Arc::new(Mutex::new(PanicsOnce::default()));
        let handle = RefreshLoop::start(Arc::clone(&target), Duration::from_millis(100));

        sleep(Duration::from_millis(1050)).await;
        assert!(handle.is_running());
        assert_eq!(handle.ticks(), 10);

        assert_eq!(handle.stop().await, 10);
        assert_eq!(target.lock().unwrap_or_else(PoisonError::into_inner).calls, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_ticks_is_exact() {
        let mut target = Counter::default();
        let start = Instant::now();

        let reports = run_ticks(&mut target, Duration::from_millis(1000), 5).await;

        assert_eq!(target.ticks, 5);
        assert_eq!(reports.iter().map(|r| r.tick).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(start.elapsed(), Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_ticks_zero_returns_immediately() {
        let mut target = Counter::default();
        let start = Instant::now();
        assert!(run_ticks(&mut target, Duration::from_secs(60), 0).await.is_empty());
        assert_eq!(target.ticks, 0);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
