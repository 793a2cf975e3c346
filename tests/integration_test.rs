//! Integration tests for reprojection through proj4rs and Web Mercator

use approx::assert_abs_diff_eq;

use geokit::{
    haversine_distance_meters, lon_lat_to_mercator, mercator_to_lon_lat, vincenty_distance_meters,
    GeoError, Point, Reprojector, NZTM, PA_SOUTH_STATE_PLANE, WEB_MERCATOR, WGS84,
};

const PHILADELPHIA: (f64, f64) = (-75.171409, 39.946146);
const PHILADELPHIA_STATE_PLANE: (f64, f64) = (2_691_389.0, 233_794.0);

#[test]
fn test_wgs84_to_state_plane() {
    let reprojector = Reprojector::new();
    let p = reprojector
        .reproject(&WGS84, &PA_SOUTH_STATE_PLANE, PHILADELPHIA.0, PHILADELPHIA.1)
        .unwrap();

    assert_abs_diff_eq!(p.x, PHILADELPHIA_STATE_PLANE.0, epsilon = 1.0);
    assert_abs_diff_eq!(p.y, PHILADELPHIA_STATE_PLANE.1, epsilon = 1.0);
}

#[test]
fn test_state_plane_to_wgs84() {
    let reprojector = Reprojector::new();
    let forward = reprojector
        .reproject(&WGS84, &PA_SOUTH_STATE_PLANE, PHILADELPHIA.0, PHILADELPHIA.1)
        .unwrap();
    let back = reprojector
        .reproject(&PA_SOUTH_STATE_PLANE, &WGS84, forward.x, forward.y)
        .unwrap();

    assert_abs_diff_eq!(back.x, PHILADELPHIA.0, epsilon = 0.00001);
    assert_abs_diff_eq!(back.y, PHILADELPHIA.1, epsilon = 0.00001);

    // the rounded reference coordinates land within the same tolerance
    let reference = reprojector
        .reproject(&PA_SOUTH_STATE_PLANE, &WGS84, PHILADELPHIA_STATE_PLANE.0, PHILADELPHIA_STATE_PLANE.1)
        .unwrap();
    assert_abs_diff_eq!(reference.x, PHILADELPHIA.0, epsilon = 0.00001);
    assert_abs_diff_eq!(reference.y, PHILADELPHIA.1, epsilon = 0.00001);
}

#[test]
fn test_state_plane_to_web_mercator_matches_manual_composition() {
    let reprojector = Reprojector::new();
    let (x, y) = PHILADELPHIA_STATE_PLANE;

    let direct = reprojector.reproject(&PA_SOUTH_STATE_PLANE, &WEB_MERCATOR, x, y).unwrap();

    let lon_lat = reprojector.reproject(&PA_SOUTH_STATE_PLANE, &WGS84, x, y).unwrap();
    let manual = lon_lat_to_mercator(lon_lat.x, lon_lat.y).unwrap();

    assert_abs_diff_eq!(direct.x, manual.x, epsilon = 1e-6);
    assert_abs_diff_eq!(direct.y, manual.y, epsilon = 1e-6);
}

#[test]
fn test_web_mercator_to_state_plane() {
    let reprojector = Reprojector::new();
    let merc = lon_lat_to_mercator(PHILADELPHIA.0, PHILADELPHIA.1).unwrap();

    let p = reprojector.reproject(&WEB_MERCATOR, &PA_SOUTH_STATE_PLANE, merc.x, merc.y).unwrap();
    assert_abs_diff_eq!(p.x, PHILADELPHIA_STATE_PLANE.0, epsilon = 1.0);
    assert_abs_diff_eq!(p.y, PHILADELPHIA_STATE_PLANE.1, epsilon = 1.0);
}

#[test]
fn test_web_mercator_routes_do_not_cache_sentinel() {
    let reprojector = Reprojector::new();
    reprojector.reproject(&WEB_MERCATOR, &NZTM, 19_455_000.0, -5_050_000.0).unwrap();
    reprojector.reproject(&NZTM, &WEB_MERCATOR, 1_748_735.0, 5_427_711.0).unwrap();

    // only WGS84 -> NZTM and NZTM -> WGS84 were built
    assert_eq!(reprojector.cached_transform_count(), 2);
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let reprojector = Reprojector::new();
    let a = reprojector.reproject(&WGS84, &NZTM, 174.7762, -41.2865).unwrap();
    let b = reprojector.reproject(&WGS84, &NZTM, 174.7762, -41.2865).unwrap();
    assert_eq!(a, b);
    assert_eq!(reprojector.cached_transform_count(), 1);
}

#[test]
fn test_invalid_latitude_to_web_mercator() {
    let reprojector = Reprojector::new();
    for lat in [90.0, -90.0, 150.0, -150.0] {
        let result = reprojector.reproject(&WGS84, &WEB_MERCATOR, 0.0, lat);
        assert!(matches!(result, Err(GeoError::InvalidInput(_))), "lat {lat}");
    }
}

#[test]
fn test_batch_reprojection() {
    let reprojector = Reprojector::new();
    let points = vec![Point::new(0.0, 0.0), Point::new(45.0, 0.0), Point::new(0.0, 60.0)];
    let projected = reprojector.reproject_batch(&WGS84, &WEB_MERCATOR, &points).unwrap();

    assert_abs_diff_eq!(projected[1].x, 5_009_377.09, epsilon = 0.5);
    assert_abs_diff_eq!(projected[2].y, 8_399_737.89, epsilon = 0.5);
}

#[test]
fn test_srid_lookup_miss_is_none() {
    let reprojector = Reprojector::new();
    assert_eq!(reprojector.get_coordinate_system_by_srid(4326), Some(&*WGS84));
    assert!(reprojector.get_coordinate_system_by_srid(32633).is_none());
}

#[test]
fn test_mercator_round_trip_grid() {
    let mut lon = -540.0;
    while lon <= 540.0 {
        let mut lat = -89.5;
        while lat <= 89.5 {
            let p = lon_lat_to_mercator(lon, lat).unwrap();
            let back = mercator_to_lon_lat(p.x, p.y);

            let expected_lon = lon - ((lon + 180.0) / 360.0).floor() * 360.0;
            assert!(back.x >= -180.0 && back.x < 180.0, "lon {} out of range", back.x);
            assert_abs_diff_eq!(back.x, expected_lon, epsilon = 1e-8);
            assert_abs_diff_eq!(back.y, lat, epsilon = 1e-8);
            lat += 17.9;
        }
        lon += 37.3;
    }
}

#[test]
fn test_distance_formulas_agree_roughly() {
    // Philadelphia to New York: both formulas within half a percent of each other
    let h = haversine_distance_meters(PHILADELPHIA.0, PHILADELPHIA.1, -74.0060, 40.7128);
    let v = vincenty_distance_meters(PHILADELPHIA.0, PHILADELPHIA.1, -74.0060, 40.7128);
    assert!(v.is_finite());
    assert!((h - v).abs() / v < 0.005, "haversine {h} vs vincenty {v}");
    assert!(v > 125_000.0 && v < 135_000.0, "vincenty {v}");
}
