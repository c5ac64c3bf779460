//! Repeating schedules that drive the countdown ticks

use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard,
    },
    time::Duration,
};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Callback invoked on every scheduled tick
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Identifies one repeating schedule of a [`Scheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleHandle(u64);

impl ScheduleHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Something that can call a callback at a fixed interval until cancelled
pub trait Scheduler: Send + Sync {
    /// Start calling `callback` every `interval`, first call one interval from now
    fn schedule(&self, interval: Duration, callback: TickCallback) -> ScheduleHandle;

    /// Stop a schedule. Unknown or already cancelled handles are ignored.
    fn cancel(&self, handle: ScheduleHandle);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scheduler running each schedule as a task on a tokio runtime
#[derive(Debug)]
pub struct TokioScheduler {
    runtime: Handle,
    next_id: AtomicU64,
    tasks: Mutex<HashMap<u64, JoinHandle<()>>>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(1),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    /// Number of schedules that have not been cancelled
    pub fn active(&self) -> usize {
        lock(&self.tasks).len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, interval: Duration, mut callback: TickCallback) -> ScheduleHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        // Keep the map locked until the task is registered so a callback
        // cancelling itself always finds its own entry
        let mut tasks = lock(&self.tasks);
        let task = self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            // A delayed tick is not replayed, the next one just sees a later "now"
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                callback();
            }
        });
        tasks.insert(id, task);

        debug!("Scheduled tick {} every {:?}", id, interval);
        ScheduleHandle(id)
    }

    fn cancel(&self, handle: ScheduleHandle) {
        if let Some(task) = lock(&self.tasks).remove(&handle.0) {
            task.abort();
            debug!("Cancelled tick {}", handle.0);
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in lock(&self.tasks).drain() {
            task.abort();
        }
    }
}

struct ManualEntry {
    interval: Duration,
    callback: Option<TickCallback>,
}

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    entries: BTreeMap<u64, ManualEntry>,
    cancelled: Vec<ScheduleHandle>,
}

/// Scheduler that only fires when driven by hand.
///
/// Intended for deterministic tests together with
/// [`ManualClock`](super::ManualClock).
#[derive(Default)]
pub struct ManualScheduler {
    inner: Mutex<ManualInner>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every live schedule once, in creation order.
    ///
    /// Returns how many callbacks ran.
    pub fn fire_all(&self) -> usize {
        let ids: Vec<u64> = lock(&self.inner).entries.keys().copied().collect();
        ids.into_iter()
            .filter(|&id| self.fire(ScheduleHandle(id)))
            .count()
    }

    /// Invoke one schedule once. Returns false if it is not live.
    pub fn fire(&self, handle: ScheduleHandle) -> bool {
        // The callback is taken out so it may cancel itself without deadlocking
        let callback = lock(&self.inner)
            .entries
            .get_mut(&handle.0)
            .and_then(|entry| entry.callback.take());

        let Some(mut callback) = callback else {
            return false;
        };
        callback();

        if let Some(entry) = lock(&self.inner).entries.get_mut(&handle.0) {
            entry.callback = Some(callback);
        }
        true
    }

    /// Whether `handle` is still scheduled
    pub fn is_active(&self, handle: ScheduleHandle) -> bool {
        lock(&self.inner).entries.contains_key(&handle.0)
    }

    /// Number of live schedules
    pub fn active(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    /// Handles of every live schedule, oldest first
    pub fn handles(&self) -> Vec<ScheduleHandle> {
        lock(&self.inner).entries.keys().copied().map(ScheduleHandle).collect()
    }

    /// Interval a live schedule was created with
    pub fn interval_of(&self, handle: ScheduleHandle) -> Option<Duration> {
        lock(&self.inner).entries.get(&handle.0).map(|entry| entry.interval)
    }

    /// Every handle that has been cancelled, in order, duplicates included
    pub fn cancelled(&self) -> Vec<ScheduleHandle> {
        lock(&self.inner).cancelled.clone()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, interval: Duration, callback: TickCallback) -> ScheduleHandle {
        let mut inner = lock(&self.inner);
        inner.next_id += 1;
        let id = inner.next_id;
        inner.entries.insert(
            id,
            ManualEntry {
                interval,
                callback: Some(callback),
            },
        );
        ScheduleHandle(id)
    }

    fn cancel(&self, handle: ScheduleHandle) {
        let mut inner = lock(&self.inner);
        if inner.entries.remove(&handle.0).is_some() {
            inner.cancelled.push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn counter() -> (Arc<AtomicUsize>, TickCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        let callback: TickCallback = Box::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    #[test]
    fn manual_fires_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let (count, callback) = counter();
        let handle = scheduler.schedule(Duration::from_secs(1), callback);

        assert_eq!(scheduler.interval_of(handle), Some(Duration::from_secs(1)));
        assert_eq!(scheduler.fire_all(), 1);
        assert_eq!(scheduler.fire_all(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert_eq!(scheduler.fire_all(), 0);
        assert!(!scheduler.fire(handle));
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.cancelled(), vec![handle]);
    }

    #[test]
    fn manual_handles_are_distinct() {
        let scheduler = ManualScheduler::new();
        let (_, first) = counter();
        let (_, second) = counter();
        let a = scheduler.schedule(Duration::from_secs(1), first);
        let b = scheduler.schedule(Duration::from_secs(1), second);
        assert_ne!(a, b);

        scheduler.cancel(a);
        assert!(!scheduler.is_active(a));
        assert!(scheduler.is_active(b));
    }

    #[test]
    fn manual_callback_can_cancel_itself() {
        let scheduler = Arc::new(ManualScheduler::new());
        let slot: Arc<Mutex<Option<ScheduleHandle>>> = Arc::new(Mutex::new(None));

        let callback_scheduler = Arc::clone(&scheduler);
        let callback_slot = Arc::clone(&slot);
        let handle = scheduler.schedule(
            Duration::from_secs(1),
            Box::new(move || {
                if let Some(handle) = callback_slot.lock().unwrap().take() {
                    callback_scheduler.cancel(handle);
                }
            }),
        );
        *slot.lock().unwrap() = Some(handle);

        assert!(scheduler.fire(handle));
        assert!(!scheduler.is_active(handle));
        assert_eq!(scheduler.fire_all(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_ticks_every_interval() {
        let scheduler = TokioScheduler::new(Handle::current());
        let (count, callback) = counter();
        let handle = scheduler.schedule(Duration::from_secs(1), callback);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        scheduler.cancel(handle);
        assert_eq!(scheduler.active(), 0);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_cancel_is_idempotent() {
        let scheduler = TokioScheduler::new(Handle::current());
        let (_, callback) = counter();
        let handle = scheduler.schedule(Duration::from_secs(1), callback);
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        scheduler.cancel(ScheduleHandle(999));
        assert_eq!(scheduler.active(), 0);
    }
}
