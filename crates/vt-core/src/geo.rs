//! Geographic coordinate type and kinematics primitives.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  A single
//! animated vessel carries no memory pressure, and the animator's contract
//! that interpolation returns the exact endpoints at progress 0 and 1 wants
//! full float precision.
//!
//! All operations here are pure and stateless: safe to call from any thread.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres (spherical approximation).
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Construct without range validation.  Intended for literal constants;
    /// use [`GeoPoint::checked`] for untrusted input.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct with range validation: lat ∈ [-90, 90], lon ∈ [-180, 180].
    ///
    /// Non-finite values fail the range check as well.
    pub fn checked(lat: f64, lon: f64) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Spherical-Earth approximation (±0.5 % vs. the ellipsoid) — plenty for
    /// travel-time and display purposes at coastal scale.  Symmetric, and
    /// exactly 0 for coincident points.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Initial compass bearing from `self` toward `other`, in degrees
    /// clockwise from north, normalized into `[0, 360)`.
    ///
    /// Standard forward-azimuth formula:
    /// `θ = atan2(sin Δλ · cos φ2, cos φ1 · sin φ2 − sin φ1 · cos φ2 · cos Δλ)`.
    ///
    /// The bearing of a point toward itself is geometrically undefined;
    /// returns `0.0` for coincident points rather than NaN.
    pub fn initial_bearing_deg(self, other: GeoPoint) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        (y.atan2(x).to_degrees() + 360.0).rem_euclid(360.0)
    }

    /// Linear (planar) interpolation between `self` and `other`, component
    /// by component.
    ///
    /// `t` is not clamped — callers wanting a bounded result clamp to
    /// `[0, 1]` first.  At `t = 0` returns `self` exactly and at `t = 1`
    /// returns `other` exactly (float equality), which is why this uses the
    /// `a·(1−t) + b·t` form rather than `a + t·(b−a)`.
    ///
    /// Planar is deliberate: over the tens-of-kilometre paths this animator
    /// targets, a straight lat/lon blend is visually indistinguishable from
    /// the geodesic and avoids iterative great-circle waypoint math.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat * (1.0 - t) + other.lat * t,
            lon: self.lon * (1.0 - t) + other.lon * t,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
