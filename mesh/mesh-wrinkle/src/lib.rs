//! Surface compression and wrinkle displacement for deforming meshes.
//!
//! This crate measures how much each vertex's neighbourhood has been
//! squeezed relative to a rest pose, and uses that to drive a displacement:
//!
//! - **Adjacency** - Symmetric one-ring relation built from faces or edges
//! - **Compression field** - Per-vertex average edge shortening in `[0, 1]`
//! - **Wrinkle displacement** - Intensity, envelope and painted weights
//!   applied along a fixed local axis
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no host or engine dependencies. Inputs are
//! plain position buffers and an explicit [`AdjacencyList`]; nothing is
//! cached between calls.
//!
//! # Algorithm
//!
//! For vertex `v` and each neighbour `n`:
//!
//! ```text
//! delta = |rest[n] - rest[v]| - |current[n] - current[v]|
//! ```
//!
//! Only positive deltas (shortened edges) count. `compression[v]` is their
//! mean, clamped to 1; a vertex with no shortened edge has compression 0.
//! Large meshes are evaluated in parallel with rayon.
//!
//! # Example
//!
//! ```
//! use mesh_wrinkle::{deform_wrinkles, MeshSample, WrinkleParams};
//! use nalgebra::{Point3, Vector3};
//!
//! let rest = MeshSample::from_triangles(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     &[[0, 1, 2], [0, 2, 3]],
//! )
//! .unwrap();
//!
//! // Squash the quad along X
//! let current: Vec<_> = rest.positions().iter().map(|p| Point3::new(p.x * 0.5, p.y, 0.0)).collect();
//!
//! let params = WrinkleParams::with_intensity(0.8).axis(Vector3::z());
//! let out = deform_wrinkles(&rest, &current, &params).unwrap();
//!
//! assert!(out.compression.as_slice().iter().all(|&c| c > 0.0));
//! assert!(out.positions.iter().all(|p| p.z > 0.0));
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

mod adjacency;
mod compression;
mod displacement;
mod error;
mod field;
mod params;
mod result;
mod sample;

pub use adjacency::AdjacencyList;
pub use compression::{compute_compression, compute_compression_with, vertex_compression};
pub use displacement::{apply_displacement, deform_wrinkles, wrinkle_displacement};
pub use error::{WrinkleError, WrinkleResult};
pub use field::CompressionField;
pub use params::{CompressionParams, DEFAULT_PARALLEL_THRESHOLD, WrinkleParams};
pub use result::WrinkleOutput;
pub use sample::MeshSample;
