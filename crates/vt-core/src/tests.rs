//! Unit tests for vt-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    // Chattogram outer anchorage → Patenga, the reference run used
    // throughout the workspace tests.
    const ANCHORAGE: GeoPoint = GeoPoint { lat: 22.1696, lon: 91.4996 };
    const PATENGA:   GeoPoint = GeoPoint { lat: 22.2637, lon: 91.7159 };

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude_approx_distance() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let d_ab = ANCHORAGE.distance_km(PATENGA);
        let d_ba = PATENGA.distance_km(ANCHORAGE);
        assert_eq!(d_ab, d_ba);
    }

    #[test]
    fn anchorage_run_distance() {
        // Haversine on the mean-radius sphere gives 24.60 km for this pair.
        let d = ANCHORAGE.distance_km(PATENGA);
        assert!((d - 24.6).abs() < 0.5, "got {d}");
    }

    #[test]
    fn anchorage_run_bearing() {
        // Forward azimuth for this pair is 64.79°.
        let b = ANCHORAGE.initial_bearing_deg(PATENGA);
        assert!((63.0..=67.0).contains(&b), "got {b}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);
        let north = origin.initial_bearing_deg(GeoPoint::new(1.0, 0.0));
        let east  = origin.initial_bearing_deg(GeoPoint::new(0.0, 1.0));
        let south = origin.initial_bearing_deg(GeoPoint::new(-1.0, 0.0));
        let west  = origin.initial_bearing_deg(GeoPoint::new(0.0, -1.0));
        assert!(north.abs() < 1e-9, "got {north}");
        assert!((east - 90.0).abs() < 1e-9, "got {east}");
        assert!((south - 180.0).abs() < 1e-9, "got {south}");
        assert!((west - 270.0).abs() < 1e-9, "got {west}");
    }

    #[test]
    fn bearing_always_in_range() {
        let points = [
            GeoPoint::new(22.17, 91.50),
            GeoPoint::new(-33.86, 151.21),
            GeoPoint::new(51.50, -0.12),
            GeoPoint::new(-54.80, -68.30),
        ];
        for a in points {
            for b in points {
                let deg = a.initial_bearing_deg(b);
                assert!((0.0..360.0).contains(&deg), "bearing {deg} for {a} → {b}");
            }
        }
    }

    #[test]
    fn bearing_of_coincident_points_is_zero() {
        let p = GeoPoint::new(22.17, 91.50);
        assert_eq!(p.initial_bearing_deg(p), 0.0);
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = GeoPoint::new(22.1696, 91.4996);
        let b = GeoPoint::new(22.2637, 91.7159);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(20.0, 40.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 15.0).abs() < 1e-12, "got {}", mid.lat);
        assert!((mid.lon - 30.0).abs() < 1e-12, "got {}", mid.lon);
    }

    #[test]
    fn lerp_is_unclamped() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 1.0);
        let past = a.lerp(b, 2.0);
        assert!((past.lat - 2.0).abs() < 1e-12, "got {}", past.lat);
    }

    #[test]
    fn display() {
        let p = GeoPoint::new(22.1696, 91.4996);
        assert_eq!(p.to_string(), "(22.169600, 91.499600)");
    }
}

#[cfg(test)]
mod checked {
    use crate::{CoreError, GeoPoint};

    #[test]
    fn in_range_accepted() {
        assert!(GeoPoint::checked(90.0, 180.0).is_ok());
        assert!(GeoPoint::checked(-90.0, -180.0).is_ok());
        assert!(GeoPoint::checked(0.0, 0.0).is_ok());
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let err = GeoPoint::checked(90.1, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::LatitudeOutOfRange(_)));
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        let err = GeoPoint::checked(0.0, -180.5).unwrap_err();
        assert!(matches!(err, CoreError::LongitudeOutOfRange(_)));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(GeoPoint::checked(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::checked(0.0, f64::INFINITY).is_err());
    }
}
