//! Rotation and deformation kernel for procedural rigging helpers.
//!
//! This umbrella crate re-exports the kernel crates behind one dependency:
//! the rolling-rotation solver and the compression-driven wrinkle deformer.
//! Both are Layer 0 (no host, engine or GPU dependencies) and pure, so host
//! adapters can call them from any evaluation thread.
//!
//! # Quick Start
//!
//! ```
//! use deform_kernel::prelude::*;
//!
//! // Wheel rolling along +X
//! let wheel = Transform::from_translation(Vector3::new(0.0, 0.35, 0.0));
//! let roll = solve_roll(&wheel, &RollParams::with_radius(0.35).distance(2.0)).unwrap();
//! assert!((0.0..360.0).contains(&roll.rotation_delta_degrees));
//!
//! // Squeezed edge drives a wrinkle
//! let rest = MeshSample::new(
//!     vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
//!     AdjacencyList::from_edges(2, &[[0, 1]]).unwrap(),
//! )
//! .unwrap();
//! let current = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
//! let out = deform_wrinkles(&rest, &current, &WrinkleParams::with_intensity(0.5)).unwrap();
//! assert_eq!(out.displacement, vec![0.5, 0.5]);
//! ```
//!
//! # Module Organization
//!
//! - [`roll`] - Rolling rotation from travelled distance, Euler helpers,
//!   row-vector [`roll::Transform`]
//! - [`wrinkle`] - Adjacency, compression field, wrinkle displacement
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` on parameters and outputs

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

// =============================================================================
// Re-exports
// =============================================================================

/// Rolling rotation from travelled distance.
pub use rig_roll as roll;

/// Compression field and wrinkle displacement.
pub use mesh_wrinkle as wrinkle;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for kernel users.
///
/// ```
/// use deform_kernel::prelude::*;
///
/// let params = RollParams::default().axis(Axis::Z);
/// assert_eq!(params.axis, Axis::Z);
/// ```
pub mod prelude {
    pub use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

    pub use rig_roll::{
        Axis, EulerAngles, RollDirection, RollError, RollOutput, RollParams, RollResult,
        RollSolver, Transform, interpolate_euler, solve_roll, time_roll_degrees,
    };

    pub use mesh_wrinkle::{
        AdjacencyList, CompressionField, CompressionParams, MeshSample, WrinkleError,
        WrinkleOutput, WrinkleParams, WrinkleResult, apply_displacement, compute_compression,
        compute_compression_with, deform_wrinkles, wrinkle_displacement,
    };
}

// =============================================================================
// Tests
// =============================================================================
