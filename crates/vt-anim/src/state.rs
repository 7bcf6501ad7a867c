//! One published position/heading state.

use vt_core::GeoPoint;

/// A snapshot of the vessel's state at one tick.
///
/// Published via [`TransitObserver::on_update`][crate::TransitObserver]
/// and returned by [`Transit::advance`][crate::Transit::advance].
///
/// Across the snapshots of a single run:
/// - `elapsed_secs` never decreases,
/// - `heading_deg` is identical (the path is straight, so the bearing is
///   computed once at departure and never recomputed from the moving
///   position),
/// - `completed` becomes `true` exactly once, on the final snapshot, whose
///   `position` is the journey's end point exactly — a deliberate clamp,
///   never an interpolated near-end value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitSnapshot {
    /// Simulated seconds since departure.
    pub elapsed_secs: f64,

    /// Current coordinate.
    pub position: GeoPoint,

    /// Compass heading in degrees clockwise from north, in `[0, 360)`.
    pub heading_deg: f64,

    /// `true` only on the terminal snapshot.
    pub completed: bool,
}
