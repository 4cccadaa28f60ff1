//! Property-based tests for the roll solver.
//!
//! Run with: cargo test -p rig-roll -- proptest

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use nalgebra::{UnitQuaternion, Vector3};
use proptest::prelude::*;
use rig_roll::{
    Axis, RollDirection, RollError, RollParams, Transform, raw_angle_degrees, solve_roll,
    wrap_degrees,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

fn arb_direction() -> impl Strategy<Value = RollDirection> {
    prop_oneof![Just(RollDirection::Forward), Just(RollDirection::Backward)]
}

fn arb_params() -> impl Strategy<Value = RollParams> {
    (
        0.0..1000.0f64,
        0.01..50.0f64,
        0.0..5.0f64,
        arb_axis(),
        arb_direction(),
    )
        .prop_map(|(distance, radius, speed, axis, direction)| RollParams {
            distance,
            radius,
            speed,
            axis,
            direction,
        })
}

/// Rigid transform with a random orientation and translation.
fn arb_transform() -> impl Strategy<Value = Transform> {
    (
        prop::array::uniform3(-3.2..3.2f64),
        prop::array::uniform3(-100.0..100.0f64),
    )
        .prop_map(|([r, p, y], [tx, ty, tz])| {
            Transform::from_rotation_translation(
                &UnitQuaternion::from_euler_angles(r, p, y),
                Vector3::new(tx, ty, tz),
            )
        })
}

/// Shortest distance between two angles on the circle, in degrees.
fn circular_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The wrapped angle always lies in [0, 360).
    #[test]
    fn angle_in_range(transform in arb_transform(), params in arb_params()) {
        let out = solve_roll(&transform, &params).unwrap();
        prop_assert!(out.rotation_delta_degrees >= 0.0);
        prop_assert!(out.rotation_delta_degrees < 360.0);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn solve_is_pure(transform in arb_transform(), params in arb_params()) {
        let a = solve_roll(&transform, &params).unwrap();
        let b = solve_roll(&transform, &params).unwrap();
        prop_assert_eq!(a.rotation_delta_degrees.to_bits(), b.rotation_delta_degrees.to_bits());
        prop_assert_eq!(a.output_transform, b.output_transform);
        prop_assert_eq!(a.euler_degrees, b.euler_degrees);
    }

    /// One circumference further along lands on the same wrapped angle.
    #[test]
    fn full_revolution_wraps(distance in 0.0..500.0f64, radius in 0.05..20.0f64) {
        let params = RollParams::with_radius(radius).distance(distance);
        let later = params.distance(distance + params.circumference());

        let a = solve_roll(&Transform::identity(), &params).unwrap();
        let b = solve_roll(&Transform::identity(), &later).unwrap();
        prop_assert!(circular_difference(a.rotation_delta_degrees, b.rotation_delta_degrees) < 1e-6);
    }

    /// Wrapping is consistent with the unwrapped angle.
    #[test]
    fn wrapped_matches_unwrapped(transform in arb_transform(), params in arb_params()) {
        let out = solve_roll(&transform, &params).unwrap();
        prop_assert_eq!(out.rotation_delta_degrees, wrap_degrees(out.unwrapped_degrees));
    }

    /// The unwrapped angle never exceeds the raw angle times speed (|projection| <= 1 for rigid transforms).
    #[test]
    fn projection_bounds_angle(transform in arb_transform(), params in arb_params()) {
        let out = solve_roll(&transform, &params).unwrap();
        let bound = raw_angle_degrees(params.distance, params.radius) * params.speed;
        prop_assert!(out.projection.abs() <= 1.0 + 1e-12);
        prop_assert!(out.unwrapped_degrees.abs() <= bound * (1.0 + 1e-12) + 1e-12);
    }

    /// Rolling never moves the translation row.
    #[test]
    fn translation_preserved(transform in arb_transform(), params in arb_params()) {
        let out = solve_roll(&transform, &params).unwrap();
        let delta = out.output_transform.translation() - transform.translation();
        prop_assert!(delta.norm() < 1e-9);
    }

    /// Non-positive radii are always rejected.
    #[test]
    fn non_positive_radius_rejected(radius in -10.0..=0.0f64, params in arb_params()) {
        let err = solve_roll(&Transform::identity(), &params.radius(radius)).unwrap_err();
        let is_invalid = matches!(err, RollError::InvalidParameter { .. });
        prop_assert!(is_invalid);
    }
}
