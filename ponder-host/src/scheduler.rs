//! Periodic autosave.
//!
//! The [`AutosaveScheduler`] registers one repeating task per storage service
//! with a [`HostTimer`]. The task fires for the first time one hour after
//! registration and then every hour. Each firing calls [`Autosave::autosave`]
//! synchronously and ignores the outcome; the storage service logs its own
//! failures. There is no retry or backoff, so a failed tick is followed by the
//! next one at the normal period boundary.
//!
//! # Architecture
//!
//! The scheduler only depends on the narrow [`HostTimer`] trait. [`TokioTimer`]
//! implements it by spawning one tokio task per registration, so ticks of a
//! single registration never overlap.
//!
//! # Example
//!
//! ```no_run
//! use ponder_host::scheduler::{AutosaveScheduler, TokioTimer};
//! use ponder_host::storage::{MemoryRecordStore, StorageService};
//! use ponder_core::Snapshot;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let storage: Arc<StorageService<Snapshot>> =
//!     Arc::new(StorageService::new("notes", Arc::new(MemoryRecordStore::new())));
//!
//! let scheduler = AutosaveScheduler::new(Arc::new(TokioTimer::current()?));
//! let handle = scheduler.schedule_autosave(storage);
//!
//! // Later: stop scheduling further ticks
//! handle.cancel();
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Delay before the first autosave.
pub const AUTOSAVE_INITIAL_DELAY: Duration = Duration::from_secs(60 * 60);

/// Time between autosaves.
pub const AUTOSAVE_PERIOD: Duration = Duration::from_secs(60 * 60);

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("No tokio runtime is running on this thread")]
    NoRuntime,
}

// ============================================================================
// Host Boundary
// ============================================================================

/// Something whose whole state can be flushed to durable storage.
pub trait Autosave: Send + Sync {
    fn name(&self) -> &str;

    /// Save everything, reporting failures internally. Must not panic.
    fn autosave(&self);
}

/// Callback run on every tick of a repeating task.
pub type RepeatingTask = Box<dyn FnMut() + Send + 'static>;

/// The host's facility for running a callback on a fixed schedule.
pub trait HostTimer: Send + Sync {
    /// Run `task` once after `initial_delay`, then every `period`, until the
    /// returned handle is cancelled.
    fn register_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        task: RepeatingTask,
    ) -> TaskHandle;
}

/// Cancels a repeating task.
///
/// Cancelling stops further ticks from being scheduled. A tick that is already
/// running finishes normally. Dropping the handle does not cancel the task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    cancel_tx: Arc<watch::Sender<bool>>,
}

/// The timer-side half of a [`TaskHandle`].
#[derive(Debug, Clone)]
pub struct CancelSignal {
    cancel_rx: watch::Receiver<bool>,
}

impl TaskHandle {
    /// Create a handle and the signal a timer implementation watches.
    pub fn pair() -> (Self, CancelSignal) {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        (
            Self {
                cancel_tx: Arc::new(cancel_tx),
            },
            CancelSignal { cancel_rx },
        )
    }

    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }
}

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.cancel_rx.borrow()
    }

    /// Resolves once the handle is cancelled. Never resolves if every handle
    /// is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.cancel_rx.borrow_and_update() {
                return;
            }
            if self.cancel_rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

// ============================================================================
// TokioTimer
// ============================================================================

/// [`HostTimer`] backed by a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime the caller is running on.
    pub fn current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SchedulerError::NoRuntime)
    }
}

impl HostTimer for TokioTimer {
    fn register_repeating(
        &self,
        initial_delay: Duration,
        period: Duration,
        mut task: RepeatingTask,
    ) -> TaskHandle {
        let (handle, mut cancel) = TaskHandle::pair();

        if period.is_zero() {
            warn!("Refusing to register a repeating task with a zero period");
            handle.cancel();
            return handle;
        }

        let start = {
            let _guard = self.handle.enter();
            Instant::now() + initial_delay
        };

        self.handle.spawn(async move {
            let mut ticks = interval_at(start, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        debug!("Repeating task received cancel signal");
                        break;
                    }
                    _ = ticks.tick() => task(),
                }
            }
        });

        handle
    }
}

// ============================================================================
// AutosaveScheduler
// ============================================================================

/// Registers hourly autosave tasks with a host timer.
#[derive(Clone)]
pub struct AutosaveScheduler {
    timer: Arc<dyn HostTimer>,
}

impl AutosaveScheduler {
    pub fn new(timer: Arc<dyn HostTimer>) -> Self {
        Self { timer }
    }

    /// Register the hourly autosave for `target`.
    ///
    /// Call at most once per target; a second registration results in two
    /// independent tasks saving the same data.
    pub fn schedule_autosave(&self, target: Arc<dyn Autosave>) -> TaskHandle {
        info!(
            storage = %target.name(),
            "Scheduling autosave every {} minutes",
            AUTOSAVE_PERIOD.as_secs() / 60
        );

        self.timer.register_repeating(
            AUTOSAVE_INITIAL_DELAY,
            AUTOSAVE_PERIOD,
            Box::new(move || {
                debug!(storage = %target.name(), "Autosave tick");
                target.autosave();
            }),
        )
    }
}
