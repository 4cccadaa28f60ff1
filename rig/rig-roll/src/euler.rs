//! Euler angle helpers and rotation interpolation.
//!
//! Angles are in degrees with XYZ rotation order: roll about X is applied
//! first, then pitch about Y, then yaw about Z.

use nalgebra::UnitQuaternion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RollError, RollResult};

/// Roll, pitch and yaw in degrees (XYZ order).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// Rotation about X, in degrees.
    pub roll: f64,
    /// Rotation about Y, in degrees.
    pub pitch: f64,
    /// Rotation about Z, in degrees.
    pub yaw: f64,
}

impl EulerAngles {
    /// Create from degrees.
    #[must_use]
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// No rotation.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Decompose a rotation.
    ///
    /// Pitch is reported in `[-90, 90]`; roll and yaw in `[-180, 180]`.
    #[must_use]
    pub fn from_quaternion(rotation: &UnitQuaternion<f64>) -> Self {
        let (roll, pitch, yaw) = rotation.euler_angles();
        Self::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
    }

    /// Compose back into a rotation.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        let (roll, pitch, yaw) = self.to_radians();
        UnitQuaternion::from_euler_angles(roll, pitch, yaw)
    }

    /// `(roll, pitch, yaw)` in radians.
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64, f64) {
        (
            self.roll.to_radians(),
            self.pitch.to_radians(),
            self.yaw.to_radians(),
        )
    }

    /// `[roll, pitch, yaw]` in degrees.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from([roll, pitch, yaw]: [f64; 3]) -> Self {
        Self::new(roll, pitch, yaw)
    }
}

/// Interpolate between two orientations along the shortest arc.
///
/// Both endpoints are converted to quaternions, slerped at `t`, and the
/// result is decomposed back to Euler angles. Going through quaternions avoids
/// the gimbal artefacts of blending the three angles independently.
///
/// # Errors
///
/// Returns [`RollError::InvalidParameter`] if `t` is outside `[0, 1]` or not
/// finite, and [`RollError::DegenerateInput`] if the two orientations are
/// half a turn apart, where the arc is not unique.
///
/// # Example
///
/// ```
/// use rig_roll::{interpolate_euler, EulerAngles};
///
/// let from = EulerAngles::new(0.0, 0.0, 0.0);
/// let to = EulerAngles::new(0.0, 0.0, 90.0);
/// let mid = interpolate_euler(&from, &to, 0.5).unwrap();
/// assert!((mid.yaw - 45.0).abs() < 1e-9);
/// ```
pub fn interpolate_euler(from: &EulerAngles, to: &EulerAngles, t: f64) -> RollResult<EulerAngles> {
    if !(t.is_finite() && (0.0..=1.0).contains(&t)) {
        return Err(RollError::invalid_parameter(
            "t",
            t,
            "must be finite and within [0, 1]",
        ));
    }

    let a = from.to_quaternion();
    let b = to.to_quaternion();
    let blended = a
        .try_slerp(&b, t, f64::EPSILON)
        .ok_or_else(|| RollError::degenerate("orientations are opposite; slerp is ambiguous"))?;

    Ok(EulerAngles::from_quaternion(&blended))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_zero_is_identity() {
        let q = EulerAngles::zero().to_quaternion();
        assert!(q.angle() < 1e-12);
    }

    #[test]
    fn test_single_axis_round_trip() {
        let e = EulerAngles::new(30.0, 0.0, 0.0);
        let q = e.to_quaternion();
        let expected = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 30f64.to_radians());
        assert!(q.angle_to(&expected) < 1e-12);

        let back = EulerAngles::from_quaternion(&q);
        assert_relative_eq!(back.roll, 30.0, epsilon = 1e-9);
        assert_relative_eq!(back.pitch, 0.0, epsilon = 1e-9);
        assert_relative_eq!(back.yaw, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_round_trip() {
        let e = EulerAngles::new(10.0, -25.0, 140.0);
        let back = EulerAngles::from_quaternion(&e.to_quaternion());
        assert_relative_eq!(back.roll, 10.0, epsilon = 1e-9);
        assert_relative_eq!(back.pitch, -25.0, epsilon = 1e-9);
        assert_relative_eq!(back.yaw, 140.0, epsilon = 1e-9);
    }

    #[test]
    fn test_xyz_order() {
        // Roll applies before yaw: Y -> Z under roll, then Z is fixed by yaw
        let q = EulerAngles::new(90.0, 0.0, 90.0).to_quaternion();
        let y = q * Vector3::y();
        assert_relative_eq!(y, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let from = EulerAngles::new(10.0, 20.0, 30.0);
        let to = EulerAngles::new(-40.0, 5.0, 60.0);

        let start = interpolate_euler(&from, &to, 0.0).unwrap();
        assert!(start.to_quaternion().angle_to(&from.to_quaternion()) < 1e-9);

        let end = interpolate_euler(&from, &to, 1.0).unwrap();
        assert!(end.to_quaternion().angle_to(&to.to_quaternion()) < 1e-9);
    }

    #[test]
    fn test_interpolate_midpoint_single_axis() {
        let from = EulerAngles::new(0.0, 0.0, 0.0);
        let to = EulerAngles::new(0.0, 0.0, 90.0);
        let mid = interpolate_euler(&from, &to, 0.5).unwrap();
        assert_relative_eq!(mid.yaw, 45.0, epsilon = 1e-9);
        assert_relative_eq!(mid.roll, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interpolate_takes_shortest_arc() {
        // 170 and -170 degrees are 20 degrees apart the short way
        let from = EulerAngles::new(0.0, 0.0, 170.0);
        let to = EulerAngles::new(0.0, 0.0, -170.0);
        let mid = interpolate_euler(&from, &to, 0.5).unwrap();
        assert_relative_eq!(mid.yaw.abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interpolate_rejects_bad_factor() {
        let a = EulerAngles::zero();
        assert!(interpolate_euler(&a, &a, -0.1).is_err());
        assert!(interpolate_euler(&a, &a, 1.5).is_err());
        assert!(interpolate_euler(&a, &a, f64::NAN).is_err());
    }

    #[test]
    fn test_array_conversions() {
        let e: EulerAngles = [1.0, 2.0, 3.0].into();
        assert_eq!(e.to_array(), [1.0, 2.0, 3.0]);
    }
}
