//! Roll solve output.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EulerAngles, Transform};

/// Result of solving a rolling rotation.
///
/// # Example
///
/// ```
/// use rig_roll::{solve_roll, RollParams, Transform};
///
/// // Half a circumference on a unit wheel rolling about world X
/// let params = RollParams::with_radius(1.0).distance(std::f64::consts::PI);
/// let out = solve_roll(&Transform::identity(), &params).unwrap();
///
/// assert!((out.rotation_delta_degrees - 180.0).abs() < 1e-9);
/// assert!((out.revolutions() - 0.5).abs() < 1e-12);
/// println!("{}", out.summary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RollOutput {
    /// Incremental rotation wrapped into `[0, 360)` degrees.
    pub rotation_delta_degrees: f64,
    /// The same angle before wrapping; keeps the revolution count.
    pub unwrapped_degrees: f64,
    /// Dot product of the signed rolling axis with the reference direction.
    pub projection: f64,
    /// The input transform with the incremental rotation applied locally.
    pub output_transform: Transform,
    /// Euler decomposition of the output transform's rotation.
    pub euler_degrees: EulerAngles,
}

impl RollOutput {
    /// The wrapped angle in radians.
    #[must_use]
    pub fn rotation_delta_radians(&self) -> f64 {
        self.rotation_delta_degrees.to_radians()
    }

    /// Signed number of full turns represented by the unwrapped angle.
    #[must_use]
    pub fn revolutions(&self) -> f64 {
        self.unwrapped_degrees / crate::FULL_TURN_DEGREES
    }

    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "RollOutput: delta {:.4} deg (unwrapped {:.4}, projection {:.4}), \
             euler ({:.4}, {:.4}, {:.4})",
            self.rotation_delta_degrees,
            self.unwrapped_degrees,
            self.projection,
            self.euler_degrees.roll,
            self.euler_degrees.pitch,
            self.euler_degrees.yaw
        )
    }
}
