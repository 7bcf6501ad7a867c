//! `vt-anim` — drives a single vessel along a straight path over time.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`journey`]   | `Journey` — the fixed parameters of one simulated transit     |
//! | [`state`]     | `TransitSnapshot` — one published position/heading state      |
//! | [`transit`]   | `Transit` — the deterministic tick-by-tick state machine      |
//! | [`observer`]  | `TransitObserver` callbacks, `NoopObserver`                   |
//! | [`scheduler`] | `start` — real-time periodic ticking, `CancelHandle`          |
//! | [`error`]     | `AnimError`, `AnimResult<T>`                                  |
//!
//! # Two ways to drive a transit
//!
//! 1. **Deterministic** — construct a [`Transit`] and call
//!    [`Transit::advance`] with your own time deltas.  No threads, no clock;
//!    this is what tests and offline renderers use.
//! 2. **Real-time** — call [`scheduler::start`] with an observer.  A worker
//!    thread ticks at the journey's refresh rate and publishes each snapshot
//!    via [`TransitObserver::on_update`], ending with exactly one
//!    [`TransitObserver::on_complete`] on arrival.  The returned
//!    [`CancelHandle`] stops the run synchronously.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_anim::{Journey, NoopObserver, scheduler};
//! use vt_core::GeoPoint;
//!
//! let journey = Journey {
//!     start:      GeoPoint::new(22.1696, 91.4996),
//!     end:        GeoPoint::new(22.2637, 91.7159),
//!     speed_kmh:  20.0,
//!     refresh_hz: 2.0,
//! };
//! let mut handle = scheduler::start(journey, NoopObserver)?;
//! // ... later:
//! handle.cancel();
//! ```

pub mod error;
pub mod journey;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod transit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AnimError, AnimResult};
pub use journey::Journey;
pub use observer::{NoopObserver, TransitObserver};
pub use scheduler::{CancelHandle, start};
pub use state::TransitSnapshot;
pub use transit::Transit;
