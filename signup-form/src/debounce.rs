//! Trailing-edge debounce.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::scheduler::{Scheduler, TimerHandle};

/// Default quiet period.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
struct DebounceState {
    pending: Option<TimerHandle>,
    /// Bumped on every call and cancel; a firing timer whose generation is
    /// stale does nothing.
    generation: u64,
}

/// Collapses bursts of calls into one trailing call.
///
/// Each [`call`](Self::call) cancels the pending invocation and schedules a
/// new one `delay` later with the latest arguments. If calls keep arriving
/// faster than `delay`, `f` runs once, after the last of them. There is no
/// leading-edge call.
///
/// Clones share the same timer state.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use signup_form::debounce::Debouncer;
/// use signup_form::scheduler::ManualScheduler;
///
/// let clock = ManualScheduler::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let debounced = Debouncer::new(
///     Arc::new(clock.clone()),
///     Duration::from_millis(500),
///     move |text: String| sink.lock().unwrap().push(text),
/// );
///
/// debounced.call("a".into());
/// debounced.call("ab".into());
/// clock.advance(Duration::from_millis(500));
/// assert_eq!(*seen.lock().unwrap(), vec!["ab".to_string()]);
/// ```
pub struct Debouncer<A> {
    state: Arc<Mutex<DebounceState>>,
    f: Arc<dyn Fn(A) + Send + Sync>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(scheduler: Arc<dyn Scheduler>, delay: Duration, f: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(DebounceState::default())),
            f: Arc::new(f),
            scheduler,
            delay,
        }
    }

    /// Restart the quiet period with new arguments.
    pub fn call(&self, args: A) {
        let generation = {
            let mut state = self.lock();
            if let Some(handle) = state.pending.take() {
                handle.cancel();
            }
            state.generation += 1;
            state.generation
        };

        let state = Arc::clone(&self.state);
        let f = Arc::clone(&self.f);
        // Scheduled outside the lock: a scheduler may run the task synchronously.
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                {
                    let mut state = state.lock().unwrap_or_else(|p| p.into_inner());
                    if state.generation != generation {
                        return;
                    }
                    state.pending = None;
                }
                f(args);
            }),
        );

        let mut state = self.lock();
        if state.generation == generation {
            state.pending = Some(handle);
        } else {
            handle.cancel();
        }
    }

    /// Drop the pending invocation, if any.
    pub fn cancel_pending(&self) {
        let mut state = self.lock();
        state.generation += 1;
        if let Some(handle) = state.pending.take() {
            handle.cancel();
        }
    }
}

impl<A> Debouncer<A> {
    /// Whether an invocation is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.lock().pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn lock(&self) -> MutexGuard<'_, DebounceState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            f: Arc::clone(&self.f),
            scheduler: Arc::clone(&self.scheduler),
            delay: self.delay,
        }
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}
