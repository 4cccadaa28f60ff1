//! Compression field from rest and current neighbour distances.
//!
//! For each vertex, every neighbour edge is measured in the rest pose and in
//! the current pose. Edges that got shorter contribute `rest - current`;
//! edges that kept or gained length are skipped. The contributing shortenings
//! are averaged and clamped to `[0, 1]`.

use nalgebra::Point3;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::adjacency::AdjacencyList;
use crate::error::{WrinkleError, WrinkleResult};
use crate::field::CompressionField;
use crate::params::CompressionParams;
use crate::sample::MeshSample;

/// Compute the compression field with default parameters.
///
/// # Errors
///
/// Returns [`WrinkleError::ShapeMismatch`] if `current` does not hold one
/// position per rest vertex.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::{compute_compression, AdjacencyList, MeshSample};
/// use nalgebra::Point3;
///
/// // A single edge of rest length 2, squeezed to 1
/// let rest = MeshSample::new(
///     vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
///     AdjacencyList::from_edges(2, &[[0, 1]]).unwrap(),
/// )
/// .unwrap();
/// let current = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
///
/// let field = compute_compression(&rest, &current).unwrap();
/// assert_eq!(field.as_slice(), &[1.0, 1.0]);
/// ```
pub fn compute_compression(
    rest: &MeshSample,
    current: &[Point3<f64>],
) -> WrinkleResult<CompressionField> {
    compute_compression_with(rest, current, &CompressionParams::default())
}

/// Compute the compression field.
///
/// Vertices are independent, so meshes at or above
/// [`CompressionParams::parallel_threshold`] are evaluated with rayon. Both
/// paths produce identical values.
///
/// The adjacency must be symmetric; this is checked in debug builds only.
///
/// # Errors
///
/// Returns [`WrinkleError::ShapeMismatch`] if `current` does not hold one
/// position per rest vertex.
pub fn compute_compression_with(
    rest: &MeshSample,
    current: &[Point3<f64>],
    params: &CompressionParams,
) -> WrinkleResult<CompressionField> {
    let vertex_count = rest.vertex_count();
    if current.len() != vertex_count {
        warn!(
            expected = vertex_count,
            actual = current.len(),
            "Current positions do not match the rest sample"
        );
        return Err(WrinkleError::shape_mismatch(
            "current positions",
            vertex_count,
            current.len(),
        ));
    }
    debug_assert!(
        rest.adjacency().is_symmetric(),
        "compression requires a symmetric adjacency"
    );

    let positions = rest.positions();
    let adjacency = rest.adjacency();
    let parallel = params.is_parallel(vertex_count);

    let values: Vec<f64> = if parallel {
        (0..vertex_count)
            .into_par_iter()
            .map(|v| vertex_compression(positions, current, adjacency, v))
            .collect()
    } else {
        (0..vertex_count)
            .map(|v| vertex_compression(positions, current, adjacency, v))
            .collect()
    };

    let field = CompressionField::from_values(values);
    debug!(
        vertices = vertex_count,
        edges = adjacency.edge_count(),
        parallel,
        compressed = field.compressed_count(),
        saturated = field.saturated_count(),
        "Computed compression field"
    );

    Ok(field)
}

/// Compression of a single vertex.
///
/// `rest` and `current` must both cover every index in `adjacency`; the
/// caller guarantees this (as [`compute_compression_with`] does). A vertex
/// with no shortened edge, or no neighbours at all, has compression 0.
#[must_use]
pub fn vertex_compression(
    rest: &[Point3<f64>],
    current: &[Point3<f64>],
    adjacency: &AdjacencyList,
    vertex: usize,
) -> f64 {
    let (Some(rest_v), Some(current_v)) = (rest.get(vertex), current.get(vertex)) else {
        return 0.0;
    };

    let mut total = 0.0;
    let mut contributing = 0_u32;

    for &n in adjacency.neighbors(vertex) {
        let n = n as usize;
        let (Some(rest_n), Some(current_n)) = (rest.get(n), current.get(n)) else {
            continue;
        };

        let rest_dist = (rest_n - rest_v).norm();
        let current_dist = (current_n - current_v).norm();
        let delta = rest_dist - current_dist;

        // NaN fails this test too
        if delta > 0.0 {
            total += delta;
            contributing += 1;
        }
    }

    if contributing == 0 {
        0.0
    } else {
        (total / f64::from(contributing)).min(1.0)
    }
}
