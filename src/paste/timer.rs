//! Single re-armable clear timer with stale-fire detection.
//!
//! One worker thread owns the deferred action for the timer's whole
//! lifetime. Arming replaces the pending deadline and bumps a generation
//! counter; a firing whose generation is no longer current is a designed
//! no-op. This gives the invariant the paste pipeline relies on: rapid
//! repeated activations scrub the clipboard exactly once, after the *last*
//! activation's delay, and never scrub a newer secret.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Deferred action run by the timer worker when a deadline fires.
pub type TimerAction = Box<dyn Fn() + Send>;

#[derive(Debug)]
struct TimerState {
    /// Bumped on every arm and cancel; a deadline fires only if its
    /// captured generation still matches.
    generation: u64,
    /// The single pending deadline, tagged with the generation that armed it.
    deadline: Option<(u64, Instant)>,
    shutdown: bool,
}

#[derive(Debug)]
struct TimerInner {
    state: Mutex<TimerState>,
    wake: Condvar,
}

impl TimerInner {
    fn lock(&self) -> MutexGuard<'_, TimerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Cancelable single-shot deferred action.
///
/// At most one deadline is armed at any instant; re-arming invalidates the
/// previous one. Dropping the timer abandons any pending firing without
/// executing it.
pub struct ClearTimer {
    inner: Arc<TimerInner>,
    delay: Duration,
    worker: Option<JoinHandle<()>>,
}

impl ClearTimer {
    /// Spawns the worker thread that will run `action` on each firing.
    pub fn new(delay: Duration, action: TimerAction) -> Self {
        let inner = Arc::new(TimerInner {
            state: Mutex::new(TimerState {
                generation: 0,
                deadline: None,
                shutdown: false,
            }),
            wake: Condvar::new(),
        });

        let worker_inner = Arc::clone(&inner);
        let worker = match thread::Builder::new()
            .name("clear-timer".to_string())
            .spawn(move || worker_loop(worker_inner, action))
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn clear-timer worker, scrubbing disabled");
                None
            }
        };

        Self {
            inner,
            delay,
            worker,
        }
    }

    /// Arms (or re-arms) the timer for one delay from now.
    ///
    /// Any previously pending firing becomes stale. Returns the new
    /// generation, useful for logging.
    pub fn arm(&self) -> u64 {
        let mut state = self.inner.lock();
        state.generation += 1;
        let generation = state.generation;
        state.deadline = Some((generation, Instant::now() + self.delay));
        self.inner.wake.notify_all();
        generation
    }

    /// Cancels any pending firing without executing it.
    pub fn cancel(&self) {
        let mut state = self.inner.lock();
        state.generation += 1;
        state.deadline = None;
        self.inner.wake.notify_all();
    }

    /// Current generation counter (monotonically increasing).
    pub fn generation(&self) -> u64 {
        self.inner.lock().generation
    }
}

impl Drop for ClearTimer {
    fn drop(&mut self) {
        {
            let mut state = self.inner.lock();
            state.shutdown = true;
            state.deadline = None;
            self.inner.wake.notify_all();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn worker_loop(inner: Arc<TimerInner>, action: TimerAction) {
    let mut state = inner.lock();
    loop {
        if state.shutdown {
            return;
        }
        match state.deadline {
            None => {
                state = inner.wake.wait(state).unwrap_or_else(|e| e.into_inner());
            }
            Some((generation, due)) => {
                let now = Instant::now();
                if now < due {
                    let (guard, _) = inner
                        .wake
                        .wait_timeout(state, due - now)
                        .unwrap_or_else(|e| e.into_inner());
                    state = guard;
                } else if state.generation == generation {
                    state.deadline = None;
                    // Run the action without holding the lock so a slow
                    // clear never blocks arm() from the paste path.
                    drop(state);
                    action();
                    tracing::debug!(generation, "deferred clear fired");
                    state = inner.lock();
                } else {
                    // A re-arm slipped in between the timeout elapsing and
                    // this wake-up; the replacement deadline lies in the
                    // future and the next iteration waits on it.
                    tracing::debug!(generation, "stale timer firing skipped");
                }
            }
        }
    }
}
