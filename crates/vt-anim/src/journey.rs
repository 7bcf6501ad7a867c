//! The fixed parameters of one simulated transit.

use std::time::Duration;

use vt_core::GeoPoint;

/// Start/end/speed/refresh-rate for a single run.
///
/// Plain data, immutable for the run's lifetime.  Typically built from
/// literals or loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and handed to [`Transit::new`][crate::Transit::new]
/// or [`scheduler::start`][crate::scheduler::start], which validate it.
///
/// `start == end` is legal: a zero-distance journey that completes
/// immediately.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journey {
    pub start: GeoPoint,
    pub end:   GeoPoint,

    /// Travel speed in km/h.  Must be positive and finite.
    pub speed_kmh: f64,

    /// Update cadence in ticks per second.  Must be positive and finite.
    pub refresh_hz: f64,
}

impl Journey {
    /// The tick period implied by `refresh_hz`.
    ///
    /// # Panics
    /// Panics if `refresh_hz` is not positive and finite.  Journeys that
    /// passed [`Transit::new`][crate::Transit::new] validation always are.
    #[inline]
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.refresh_hz)
    }

    /// Zero-distance journey?  Completes immediately, without a timer.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
