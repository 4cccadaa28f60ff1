//! Rolling rotation from travelled distance.
//!
//! This crate answers "how far has this wheel turned?" for rigging helpers:
//!
//! - **Roll solver** - Distance, radius and speed to a wrapped rotation angle,
//!   applied to an input transform about one of its basis axes
//! - **Time roll** - The simpler speed-times-time variant
//! - **Euler helpers** - XYZ decomposition and slerp-based interpolation
//! - **Transform** - 4x4 row-vector transform used at the boundary
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no host or engine dependencies. Every
//! function is pure: nothing is cached between calls and everything can be
//! called from any thread.
//!
//! # Convention
//!
//! Transforms use **row-vector convention** with the translation in the last
//! row. Rows 0, 1 and 2 are the X, Y and Z basis vectors; the rolling axis is
//! read from the row selected by [`Axis`]. The reference travel direction is
//! world `+X` (see [`reference_direction`]).
//!
//! # Algorithm
//!
//! 1. Read the rolling axis from the transform, negated for
//!    [`RollDirection::Backward`]
//! 2. `angle = distance / (2 * PI * radius) * 360`
//! 3. Scale by `dot(axis, +X)` and by `speed`
//! 4. Wrap into `[0, 360)`
//! 5. Rotate about the axis in the transform's local frame, then decompose to
//!    Euler angles
//!
//! # Example
//!
//! ```
//! use rig_roll::{solve_roll, Axis, RollDirection, RollParams, Transform};
//! use nalgebra::Vector3;
//!
//! let wheel = Transform::from_translation(Vector3::new(0.0, 0.5, 0.0));
//! let params = RollParams::with_radius(0.5)
//!     .distance(3.0)
//!     .axis(Axis::X)
//!     .direction(RollDirection::Forward);
//!
//! let out = solve_roll(&wheel, &params).unwrap();
//! assert!((0.0..360.0).contains(&out.rotation_delta_degrees));
//! println!("roll = {:.2} deg", out.euler_degrees.roll);
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod euler;
mod params;
mod result;
mod solver;
mod transform;

pub use error::{RollError, RollResult};
pub use euler::{EulerAngles, interpolate_euler};
pub use params::{Axis, RollDirection, RollParams};
pub use result::RollOutput;
pub use solver::{
    FULL_TURN_DEGREES, RollSolver, raw_angle_degrees, reference_direction, solve_roll,
    time_roll_degrees, wrap_degrees,
};
pub use transform::Transform;
