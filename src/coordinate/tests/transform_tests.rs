//! Tests for the coordinate transformer

extern crate std;

use std::f64::consts::PI;

use crate::coordinate::{
    BoundingBox, CoordinateSystem, CoordinateTransformer, Point,
    MAX_LATITUDE, WEB_MERCATOR_EXTENT,
};
use crate::coordinate::errors::ProjectionError;

// Sample coordinate (St Lucia campus, Brisbane)
const SAMPLE_LON: f64 = 153.0184252962559;
const SAMPLE_LAT: f64 = -27.489617778602657;

// Half the Web Mercator circumference in meters, pi * 6378137
const HALF_CIRCUMFERENCE: f64 = 20037508.342789244;

#[test]
fn test_reference_point_forward_projection() {
    let transformer = CoordinateTransformer;
    let result = transformer.wgs84_to_web_mercator(SAMPLE_LON, SAMPLE_LAT).unwrap();

    // Reference spherical Web Mercator computation
    let expected_x = SAMPLE_LON * HALF_CIRCUMFERENCE / 180.0;
    let expected_y = f64::ln(f64::tan((90.0 + SAMPLE_LAT) * PI / 360.0))
        / (PI / 180.0) * HALF_CIRCUMFERENCE / 180.0;

    std::assert!((result.x - expected_x).abs() < 1e-6,
                 "x was {}, expected {}", result.x, expected_x);
    std::assert!((result.y - expected_y).abs() < 1e-6,
                 "y was {}, expected {}", result.y, expected_y);
}

#[test]
fn test_round_trip_recovers_input() {
    let transformer = CoordinateTransformer;
    let inputs = [
        (SAMPLE_LON, SAMPLE_LAT),
        (0.0, 0.0),
        (-122.4194, 37.7749),
        (179.9, -84.9),
    ];

    for (lon, lat) in inputs {
        let projected = transformer.wgs84_to_web_mercator(lon, lat).unwrap();
        let recovered = transformer.web_mercator_to_wgs84(projected.x, projected.y).unwrap();

        std::assert!((recovered.x - lon).abs() < 1e-9,
                     "longitude drifted: {} -> {}", lon, recovered.x);
        std::assert!((recovered.y - lat).abs() < 1e-9,
                     "latitude drifted: {} -> {}", lat, recovered.y);
    }
}

#[test]
fn test_identical_inputs_yield_identical_outputs() {
    let transformer = CoordinateTransformer;
    let first = transformer.wgs84_to_web_mercator(SAMPLE_LON, SAMPLE_LAT).unwrap();
    let second = transformer.wgs84_to_web_mercator(SAMPLE_LON, SAMPLE_LAT).unwrap();

    std::assert_eq!(first.x, second.x);
    std::assert_eq!(first.y, second.y);
}

#[test]
fn test_latitudes_near_poles_are_rejected() {
    let transformer = CoordinateTransformer;

    for lat in [90.0, -90.0, 89.9, -89.9, 85.06] {
        let result = transformer.wgs84_to_web_mercator(0.0, lat);
        std::assert!(matches!(result,
            Err(ProjectionError::OutsideProjectionDomain { axis: "latitude", .. })),
            "latitude {} should be outside the projection domain", lat);
    }
}

#[test]
fn test_latitude_limit_is_inclusive() {
    let transformer = CoordinateTransformer;

    let at_limit = transformer.wgs84_to_web_mercator(0.0, MAX_LATITUDE).unwrap();
    std::assert!((at_limit.y - WEB_MERCATOR_EXTENT).abs() < 1.0);

    let at_negative_limit = transformer.wgs84_to_web_mercator(0.0, -MAX_LATITUDE).unwrap();
    std::assert!((at_negative_limit.y + WEB_MERCATOR_EXTENT).abs() < 1.0);
}

#[test]
fn test_longitude_out_of_range_is_rejected() {
    let transformer = CoordinateTransformer;

    std::assert!(transformer.wgs84_to_web_mercator(180.1, 0.0).is_err());
    std::assert!(transformer.wgs84_to_web_mercator(-200.0, 0.0).is_err());

    // The antimeridian itself is valid
    let edge = transformer.wgs84_to_web_mercator(180.0, 0.0).unwrap();
    std::assert!((edge.x - WEB_MERCATOR_EXTENT).abs() < 1e-6);
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    let transformer = CoordinateTransformer;

    std::assert!(transformer.wgs84_to_web_mercator(f64::NAN, 0.0).is_err());
    std::assert!(transformer.wgs84_to_web_mercator(0.0, f64::INFINITY).is_err());
    std::assert!(transformer.web_mercator_to_wgs84(f64::NAN, 0.0).is_err());
}

#[test]
fn test_inverse_outside_extent_is_rejected() {
    let transformer = CoordinateTransformer;

    std::assert!(transformer.web_mercator_to_wgs84(2.1e7, 0.0).is_err());
    std::assert!(transformer.web_mercator_to_wgs84(0.0, -2.1e7).is_err());
}

#[test]
fn test_same_crs_transform_is_identity() {
    let transformer = CoordinateTransformer;
    let point = Point::new(SAMPLE_LON, SAMPLE_LAT);

    let result = transformer.transform_point(
        &point, &CoordinateSystem::WGS84, &CoordinateSystem::WGS84).unwrap();

    std::assert_eq!(result.x, point.x);
    std::assert_eq!(result.y, point.y);
}

#[test]
fn test_z_coordinate_passes_through() {
    let transformer = CoordinateTransformer;
    let point = Point::new_3d(SAMPLE_LON, SAMPLE_LAT, 27.5);

    let result = transformer.transform_point(
        &point, &CoordinateSystem::WGS84, &CoordinateSystem::WebMercator).unwrap();

    std::assert!(result.has_z());
    std::assert_eq!(result.z, Some(27.5));
}

#[test]
fn test_transform_bbox_matches_corner_points() {
    let transformer = CoordinateTransformer;
    let bbox = BoundingBox::new(153.00600502724035, -27.502944163432616,
                                SAMPLE_LON, SAMPLE_LAT);

    let result = transformer.transform_bbox(
        &bbox, &CoordinateSystem::WGS84, &CoordinateSystem::WebMercator).unwrap();

    let min_corner = transformer.wgs84_to_web_mercator(bbox.min_x, bbox.min_y).unwrap();
    let max_corner = transformer.wgs84_to_web_mercator(bbox.max_x, bbox.max_y).unwrap();

    std::assert_eq!(result.min_x, min_corner.x);
    std::assert_eq!(result.min_y, min_corner.y);
    std::assert_eq!(result.max_x, max_corner.x);
    std::assert_eq!(result.max_y, max_corner.y);
    std::assert_eq!(result.epsg, Some(3857));
}
