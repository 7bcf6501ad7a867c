//! Real-time periodic ticking of a [`Transit`].
//!
//! # Timing model
//!
//! [`start`] hands the `Transit` and the observer to a dedicated worker
//! thread, which publishes the departure snapshot immediately and then
//! ticks: sleep one period, advance the run by exactly that period in
//! simulated seconds, publish the snapshot — so simulated time moves in
//! fixed steps of `1 / refresh_hz` even when the OS sleeps a little long.
//!
//! # Ownership & termination
//!
//! Each `start` call owns its own private thread and `Transit`; concurrent
//! runs share nothing.  The thread exits exactly once, on whichever comes
//! first:
//! - **arrival** — terminal snapshot published, `on_complete` called;
//! - **cancellation** — [`CancelHandle::cancel`] raises the stop flag and
//!   joins the thread, so once `cancel` returns no further callback can
//!   fire.  Cancelling twice, or after arrival, is a no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::{AnimResult, Journey, Transit, TransitObserver};

/// Validate `journey` and begin publishing snapshots to `observer`.
///
/// Every snapshot, the departure state included, is delivered on the run's
/// worker thread.
///
/// A degenerate journey (`start == end`) never creates a thread: the single
/// terminal snapshot and `on_complete` are delivered synchronously and the
/// returned handle is already finished.
///
/// # Errors
///
/// [`AnimError::InvalidSpeed`], [`AnimError::InvalidRefreshRate`], or
/// [`AnimError::Coordinate`] if the journey is invalid, and
/// [`AnimError::Io`] if the OS refuses the thread.  On every error path no
/// callback has fired: the worker thread, which owns all publishing for a
/// non-degenerate run, only exists once `start` is past all failure points.
pub fn start<O>(journey: Journey, mut observer: O) -> AnimResult<CancelHandle>
where
    O: TransitObserver + Send + 'static,
{
    let mut transit = Transit::new(journey)?;

    if transit.journey().is_degenerate() {
        let terminal = transit.advance(0.0);
        observer.on_update(&terminal);
        observer.on_complete();
        return Ok(CancelHandle::finished());
    }

    let period = transit.journey().tick_period();
    let dt_secs = period.as_secs_f64();

    let stop = Arc::new(AtomicBool::new(false));
    let done = Arc::new(AtomicBool::new(false));

    let worker = thread::Builder::new().name("vt-anim-tick".into()).spawn({
        let stop = Arc::clone(&stop);
        let done = Arc::clone(&done);
        move || {
            observer.on_update(&transit.initial());
            loop {
                thread::sleep(period);
                // The flag is re-checked after every sleep, so a cancelled
                // run publishes nothing past the tick it was cancelled in.
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                let snapshot = transit.advance(dt_secs);
                observer.on_update(&snapshot);
                if snapshot.completed {
                    observer.on_complete();
                    break;
                }
            }
            done.store(true, Ordering::SeqCst);
        }
    })?;

    Ok(CancelHandle {
        stop,
        done,
        worker: Some(worker),
    })
}

/// Exclusive handle to one running transit.
///
/// Dropping the handle without cancelling detaches the run; it ticks on to
/// natural arrival.
pub struct CancelHandle {
    stop:   Arc<AtomicBool>,
    done:   Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl CancelHandle {
    /// A handle for a run that finished before any thread was needed.
    fn finished() -> Self {
        Self {
            stop:   Arc::new(AtomicBool::new(true)),
            done:   Arc::new(AtomicBool::new(true)),
            worker: None,
        }
    }

    /// Stop the run and wait for its thread to exit.
    ///
    /// Synchronous: once this returns, no further `on_update` or
    /// `on_complete` fires.  Idempotent: a second call, or a call after
    /// natural arrival, does nothing.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    /// Block until the run arrives naturally (or has been cancelled).
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    /// `true` once the run's thread has exited, whether by arrival or
    /// cancellation.
    pub fn is_finished(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}
