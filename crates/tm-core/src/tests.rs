//! Unit tests for tm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{FrameToken, RunId};

    #[test]
    fn next_increments() {
        assert_eq!(RunId(0).next(), RunId(1));
        assert_eq!(FrameToken(41).next(), FrameToken(42));
    }

    #[test]
    fn next_wraps() {
        assert_eq!(RunId(u32::MAX).next(), RunId(0));
    }

    #[test]
    fn display() {
        assert_eq!(RunId(7).to_string(), "RunId(7)");
    }
}

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{Waypoint, distance};

    fn random_point(rng: &mut SmallRng) -> Waypoint {
        Waypoint::new(rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0))
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let p = random_point(&mut rng);
            assert_eq!(distance(p, p), 0.0, "at {p}");
        }
    }

    #[test]
    fn symmetric() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn never_nan_or_negative() {
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..1_000 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            let d = distance(a, b);
            assert!(d.is_finite() && d >= 0.0, "{a} -> {b}: {d}");
        }
        // Antipodes push h to (or past) 1.
        let d = distance(Waypoint::new(0.0, 0.0), Waypoint::new(180.0, 0.0));
        assert!(d.is_finite());
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on the mean sphere.
        let a = Waypoint::new(-88.0, 30.0);
        let b = Waypoint::new(-88.0, 31.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Waypoint::new(0.0, 0.0);
        let b = Waypoint::new(2.0, 4.0);
        assert_eq!(Waypoint::lerp(a, b, 0.0), a);
        assert_eq!(Waypoint::lerp(a, b, 1.0), b);
        assert_eq!(Waypoint::lerp(a, b, 0.5), Waypoint::new(1.0, 2.0));
    }

    #[test]
    fn lng_lat_array_order() {
        let p = Waypoint::from([6.5, 0.25]);
        assert_eq!(p.lng, 6.5);
        assert_eq!(p.lat, 0.25);
        assert_eq!(<[f64; 2]>::from(p), [6.5, 0.25]);
    }

    #[test]
    fn display() {
        assert_eq!(Waypoint::new(1.0, -2.5).to_string(), "[1.000000, -2.500000]");
    }
}

#[cfg(test)]
mod path {
    use crate::{CoreError, Path, Waypoint, path_length};

    #[test]
    fn empty_path_rejected() {
        assert!(matches!(Path::new(vec![]), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn non_finite_rejected() {
        let result = Path::from_lng_lat(&[[0.0, 0.0], [f64::NAN, 1.0]]);
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn single_waypoint_has_zero_length() {
        let p = Path::from_lng_lat(&[[3.0, 4.0]]).unwrap();
        assert_eq!(p.length_m(), 0.0);
        assert_eq!(p.segment_count(), 0);
        assert_eq!(p.cumulative_m(), vec![0.0]);
        assert!(p.segment(0).is_none());
    }

    #[test]
    fn two_point_length_equals_distance() {
        let a = Waypoint::new(6.437242318843829, 0.2184366253244292);
        let b = Waypoint::new(5.634441549807484, 0.3830445174890471);
        let p = Path::new(vec![a, b]).unwrap();
        assert_eq!(p.length_m(), a.distance_m(b));
        assert_eq!(path_length(&[a, b]), a.distance_m(b));
    }

    #[test]
    fn cumulative_matches_length() {
        let p = Path::from_lng_lat(&[[0.0, 0.0], [0.0, 1.0], [0.0, 1.0], [1.0, 1.0]]).unwrap();
        let cum = p.cumulative_m();
        assert_eq!(cum.len(), 4);
        assert_eq!(cum[0], 0.0);
        assert_eq!(cum[1], cum[2], "duplicate waypoint adds no distance");
        assert_eq!(cum[3], p.length_m());
    }

    #[test]
    fn segment_endpoints() {
        let p = Path::from_lng_lat(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]).unwrap();
        assert_eq!(p.segment(1), Some((Waypoint::new(1.0, 1.0), Waypoint::new(2.0, 0.0))));
        assert_eq!(p.first(), Waypoint::new(0.0, 0.0));
        assert_eq!(p.last(), Waypoint::new(2.0, 0.0));
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn geojson_feature_collection() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "Point", "coordinates": [9.0, 9.0] } },
                { "type": "Feature", "properties": {},
                  "geometry": { "type": "LineString",
                                "coordinates": [[6.4, 0.2], [5.6, 0.4], [5.3, 1.2, 10.0]] } }
            ]
        }"#;
        let p = Path::from_geojson_str(text).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.first(), Waypoint::new(6.4, 0.2));
        assert_eq!(p.last(), Waypoint::new(5.3, 1.2));
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn geojson_without_line_string() {
        let text = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#;
        assert!(matches!(Path::from_geojson_str(text), Err(CoreError::Parse(_))));
    }

    #[cfg(feature = "geojson")]
    #[test]
    fn geojson_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, r#"{{ "type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]] }}"#).unwrap();
        let p = Path::from_geojson_file(file.path()).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.last(), Waypoint::new(3.0, 4.0));

        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = Path::from_geojson_file(&dir.path().join("missing.geojson"));
        assert!(matches!(missing, Err(CoreError::Io(_))));
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameTime, Speed};

    #[test]
    fn frame_time_arithmetic() {
        let t = FrameTime(1_000.0);
        assert_eq!((t + 500.0).millis(), 1_500.0);
        assert_eq!(FrameTime(1_500.0) - t, 500.0);
        assert_eq!(FrameTime(3_000.0).secs_since(t), 2.0);
        // Out-of-order timestamps clamp to zero elapsed.
        assert_eq!(FrameTime(0.0).since(t), 0.0);
    }

    #[test]
    fn kmh_conversion() {
        let s = Speed::from_kmh(36.0);
        assert!((s.mps() - 10.0).abs() < 1e-12);
        assert!((s.kmh() - 36.0).abs() < 1e-12);
    }

    #[test]
    fn duration_from_speed() {
        let s = Speed::from_mps(4.0);
        assert_eq!(s.duration_secs(1_000.0), 250.0);
        assert_eq!(s.distance_after(2.5), 10.0);
    }

    #[test]
    fn validity() {
        assert!(Speed::from_mps(1.0).is_valid());
        assert!(!Speed::from_mps(0.0).is_valid());
        assert!(!Speed::from_mps(-3.0).is_valid());
        assert!(!Speed::from_mps(f64::NAN).is_valid());
        assert!(!Speed::from_mps(f64::INFINITY).is_valid());
    }
}
