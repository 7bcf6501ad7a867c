//! The deterministic transit state machine.

use vt_core::GeoPoint;

use crate::{AnimError, AnimResult, Journey, TransitSnapshot};

/// Single-owner state machine for one journey.
///
/// Validates the [`Journey`] once at construction, derives the run's
/// constants (total distance, total travel time, constant heading) once,
/// then advances tick by tick via [`Transit::advance`].
///
/// `Transit` knows nothing about clocks or threads — callers supply the
/// elapsed delta per tick.  The real-time wrapper lives in
/// [`scheduler`][crate::scheduler]; tests and offline renderers drive this
/// directly.
#[derive(Clone, Debug)]
pub struct Transit {
    journey:      Journey,
    distance_km:  f64,
    travel_secs:  f64,
    heading_deg:  f64,
    elapsed_secs: f64,
    completed:    bool,
}

impl Transit {
    /// Validate `journey` and derive the run constants.
    ///
    /// Fails fast — before any state exists — on a non-positive or
    /// non-finite speed or refresh rate, or an out-of-range endpoint.
    pub fn new(journey: Journey) -> AnimResult<Transit> {
        if !(journey.speed_kmh.is_finite() && journey.speed_kmh > 0.0) {
            return Err(AnimError::InvalidSpeed(journey.speed_kmh));
        }
        if !(journey.refresh_hz.is_finite() && journey.refresh_hz > 0.0) {
            return Err(AnimError::InvalidRefreshRate(journey.refresh_hz));
        }
        GeoPoint::checked(journey.start.lat, journey.start.lon)?;
        GeoPoint::checked(journey.end.lat, journey.end.lon)?;

        let distance_km = journey.start.distance_km(journey.end);
        let travel_secs = distance_km / journey.speed_kmh * 3600.0;
        let heading_deg = journey.start.initial_bearing_deg(journey.end);

        Ok(Transit {
            journey,
            distance_km,
            travel_secs,
            heading_deg,
            elapsed_secs: 0.0,
            completed: false,
        })
    }

    // ── Run constants ─────────────────────────────────────────────────────

    #[inline]
    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    /// Great-circle distance of the whole run, km.
    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total travel time, seconds.  0 for a degenerate journey.
    #[inline]
    pub fn travel_secs(&self) -> f64 {
        self.travel_secs
    }

    /// The constant heading of the run, degrees in `[0, 360)`.
    #[inline]
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    // ── State ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The synthetic departure snapshot: elapsed 0, position = start.
    ///
    /// Not meaningful for a degenerate journey, whose first and only
    /// snapshot is the terminal one from [`Transit::advance`].
    pub fn initial(&self) -> TransitSnapshot {
        TransitSnapshot {
            elapsed_secs: 0.0,
            position:     self.journey.start,
            heading_deg:  self.heading_deg,
            completed:    false,
        }
    }

    /// Advance the run by `dt_secs` simulated seconds and return the new
    /// snapshot.
    ///
    /// Once progress reaches 1 the returned snapshot is terminal: its
    /// position is the end point exactly and `completed` is `true`.  Further
    /// calls return the same terminal snapshot without advancing — though
    /// the scheduler never makes them.
    ///
    /// A degenerate journey (zero distance, zero travel time) is terminal on
    /// the first call regardless of `dt_secs`; there is no division by zero.
    pub fn advance(&mut self, dt_secs: f64) -> TransitSnapshot {
        if self.completed {
            return self.terminal();
        }

        self.elapsed_secs += dt_secs;

        let progress = if self.travel_secs > 0.0 {
            self.elapsed_secs / self.travel_secs
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.completed = true;
            return self.terminal();
        }

        TransitSnapshot {
            elapsed_secs: self.elapsed_secs,
            position:     self.journey.start.lerp(self.journey.end, progress),
            heading_deg:  self.heading_deg,
            completed:    false,
        }
    }

    fn terminal(&self) -> TransitSnapshot {
        TransitSnapshot {
            elapsed_secs: self.elapsed_secs,
            position:     self.journey.end,
            heading_deg:  self.heading_deg,
            completed:    true,
        }
    }
}
