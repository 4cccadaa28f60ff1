//! Rolling-without-slipping solver.
//!
//! The arc length travelled equals the distance, so the fraction of a full
//! revolution is `distance / circumference`. That angle is scaled by how well
//! the wheel's rolling axis lines up with the reference travel direction and
//! by the speed multiplier, wrapped into `[0, 360)`, and applied as a local
//! rotation about the rolling axis.

use nalgebra::{Unit, UnitQuaternion, Vector3};
use tracing::{debug, trace, warn};

use crate::{EulerAngles, RollError, RollOutput, RollParams, RollResult, Transform};

/// Degrees in one revolution.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Axis rows shorter than this cannot carry a direction.
const AXIS_EPSILON: f64 = 1e-12;

/// Fixed "forward travel" direction the rolling axis is projected onto (`+X`).
#[inline]
#[must_use]
pub fn reference_direction() -> Vector3<f64> {
    Vector3::x()
}

/// Fraction of a revolution for `distance` on a wheel of `radius`, in degrees.
///
/// Not wrapped. The caller guarantees `radius > 0`.
#[inline]
#[must_use]
pub fn raw_angle_degrees(distance: f64, radius: f64) -> f64 {
    (distance / (std::f64::consts::TAU * radius)) * FULL_TURN_DEGREES
}

/// Wrap an angle into `[0, 360)`.
///
/// # Example
///
/// ```
/// use rig_roll::wrap_degrees;
///
/// assert_eq!(wrap_degrees(370.0), 10.0);
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// assert_eq!(wrap_degrees(720.0), 0.0);
/// ```
#[must_use]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid rounds tiny negatives up to exactly 360; abs folds -0.0
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped.abs()
    }
}

/// Solves rolling rotations for a fixed set of parameters.
///
/// Parameters are validated once at construction; [`RollSolver::solve`] can
/// then be called for any number of transforms.
///
/// # Example
///
/// ```
/// use rig_roll::{Axis, RollParams, RollSolver, Transform};
///
/// let solver = RollSolver::new(RollParams::with_radius(0.5).distance(1.0).axis(Axis::X)).unwrap();
/// let out = solver.solve(&Transform::identity()).unwrap();
/// assert!(out.rotation_delta_degrees >= 0.0 && out.rotation_delta_degrees < 360.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RollSolver {
    params: RollParams,
}

impl RollSolver {
    /// Create a solver.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidParameter`] if `params` fails
    /// [`RollParams::validate`].
    pub fn new(params: RollParams) -> RollResult<Self> {
        if let Err(err) = params.validate() {
            warn!(error = %err, "Rejected roll parameters");
            return Err(err);
        }
        Ok(Self { params })
    }

    /// The validated parameters.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &RollParams {
        &self.params
    }

    /// Signed rolling-axis vector of `transform` (basis row, negated when
    /// rolling backward).
    ///
    /// # Errors
    ///
    /// Returns [`RollError::DegenerateInput`] if the basis row has zero
    /// length, i.e. the transform has zero scale on that axis.
    pub fn rolling_axis(&self, transform: &Transform) -> RollResult<Vector3<f64>> {
        let axis = transform.basis(self.params.axis) * self.params.direction.sign();
        let length = axis.norm();
        if !length.is_finite() || length <= AXIS_EPSILON {
            warn!(axis = ?self.params.axis, "Rolling axis has zero length");
            return Err(RollError::degenerate(format!(
                "transform has zero scale on the {:?} axis",
                self.params.axis
            )));
        }
        Ok(axis)
    }

    /// Solve the rolling rotation for `transform`.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::DegenerateInput`] if the rolling axis has zero
    /// length or the basis is too flat to decompose into a rotation, and
    /// [`RollError::InvalidParameter`] if the rolled angle overflows.
    pub fn solve(&self, transform: &Transform) -> RollResult<RollOutput> {
        let axis = self.rolling_axis(transform)?;
        let params = &self.params;

        let raw = raw_angle_degrees(params.distance, params.radius);
        let projection = axis.dot(&reference_direction());
        let unwrapped = raw * projection * params.speed;
        if !unwrapped.is_finite() {
            warn!(raw, projection, speed = params.speed, "Roll angle overflowed");
            return Err(RollError::invalid_parameter(
                "distance",
                params.distance,
                "rolled angle overflows for this radius and speed",
            ));
        }
        let wrapped = wrap_degrees(unwrapped);

        trace!(raw, projection, unwrapped, "Roll angle before wrapping");

        // Normalising cannot fail: the length was checked above
        let unit_axis = Unit::new_normalize(axis);
        let increment = Transform::from_axis_angle(&unit_axis, wrapped.to_radians());
        let output_transform = increment.then(transform);

        // A flat input row can fold two output rows together; fall back to
        // composing the input rotation with the spin
        let rotation = output_transform
            .rotation()
            .or_else(|| {
                let spin = UnitQuaternion::from_axis_angle(&unit_axis, wrapped.to_radians());
                transform.rotation().map(|input| input * spin)
            })
            .ok_or_else(|| {
                RollError::degenerate("transform has more than one zero-length basis row")
            })?;
        let euler_degrees = EulerAngles::from_quaternion(&rotation);

        debug!(
            axis = ?params.axis,
            direction = ?params.direction,
            distance = params.distance,
            radius = params.radius,
            speed = params.speed,
            delta_degrees = wrapped,
            "Solved roll rotation"
        );

        Ok(RollOutput {
            rotation_delta_degrees: wrapped,
            unwrapped_degrees: unwrapped,
            projection,
            output_transform,
            euler_degrees,
        })
    }
}

/// Solve a rolling rotation in one call.
///
/// # Errors
///
/// Returns [`RollError::InvalidParameter`] for out-of-range parameters
/// (e.g. `radius <= 0`) and [`RollError::DegenerateInput`] when the rolling
/// axis has zero length.
///
/// # Example
///
/// ```
/// use rig_roll::{solve_roll, RollError, RollParams, Transform};
///
/// let err = solve_roll(&Transform::identity(), &RollParams::with_radius(0.0)).unwrap_err();
/// assert!(matches!(err, RollError::InvalidParameter { .. }));
/// ```
pub fn solve_roll(transform: &Transform, params: &RollParams) -> RollResult<RollOutput> {
    RollSolver::new(*params)?.solve(transform)
}

/// Roll angle driven by time instead of distance, in degrees.
///
/// `degrees(speed * time / radius)`: the wheel covers `speed * time` units of
/// arc. The result is not wrapped.
///
/// # Errors
///
/// Returns [`RollError::InvalidParameter`] if `radius <= 0` or any input is
/// not finite.
///
/// # Example
///
/// ```
/// use rig_roll::time_roll_degrees;
///
/// // One radian per second on a unit wheel
/// let angle = time_roll_degrees(2.0, 1.0, 1.0).unwrap();
/// assert!((angle - 2f64.to_degrees()).abs() < 1e-12);
/// ```
pub fn time_roll_degrees(time: f64, speed: f64, radius: f64) -> RollResult<f64> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(RollError::invalid_parameter(
            "radius",
            radius,
            "must be finite and > 0",
        ));
    }
    if !time.is_finite() {
        return Err(RollError::invalid_parameter("time", time, "must be finite"));
    }
    if !speed.is_finite() {
        return Err(RollError::invalid_parameter("speed", speed, "must be finite"));
    }
    let angle = (speed * time / radius).to_degrees();
    if !angle.is_finite() {
        return Err(RollError::invalid_parameter(
            "time",
            time,
            "rolled angle overflows for this radius and speed",
        ));
    }
    Ok(angle)
}
