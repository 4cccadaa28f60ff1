//! Property-based tests for the compression field and wrinkle displacement.
//!
//! Run with: cargo test -p mesh-wrinkle -- proptest

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use mesh_wrinkle::{
    AdjacencyList, CompressionParams, MeshSample, WrinkleError, WrinkleParams, compute_compression,
    compute_compression_with, deform_wrinkles,
};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

/// Grid of `n x n` vertices triangulated into `2 (n-1)^2` faces.
fn grid_faces(n: u32) -> Vec<[u32; 3]> {
    let mut faces = Vec::new();
    for y in 0..n - 1 {
        for x in 0..n - 1 {
            let i = y * n + x;
            faces.push([i, i + 1, i + n + 1]);
            faces.push([i, i + n + 1, i + n]);
        }
    }
    faces
}

/// A random grid-topology mesh with independent rest and current positions.
fn arb_deformed_grid() -> impl Strategy<Value = (MeshSample, Vec<Point3<f64>>)> {
    (2u32..6).prop_flat_map(|n| {
        let count = (n * n) as usize;
        (
            prop::collection::vec(arb_point(), count),
            prop::collection::vec(arb_point(), count),
        )
            .prop_map(move |(rest, current)| {
                let sample = MeshSample::from_triangles(rest, &grid_faces(n)).unwrap();
                (sample, current)
            })
    })
}

/// Random symmetric adjacency over `count` vertices.
fn arb_edges(count: u32) -> impl Strategy<Value = Vec<[u32; 2]>> {
    prop::collection::vec((0..count, 0..count).prop_map(|(a, b)| [a, b]), 0..32)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every value is clamped to [0, 1].
    #[test]
    fn values_in_unit_interval((rest, current) in arb_deformed_grid()) {
        let field = compute_compression(&rest, &current).unwrap();
        prop_assert_eq!(field.len(), rest.vertex_count());
        for &c in field.as_slice() {
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    /// Comparing a pose against itself gives zero everywhere.
    #[test]
    fn identical_pose_is_zero((rest, _current) in arb_deformed_grid()) {
        let field = compute_compression(&rest, rest.positions()).unwrap();
        prop_assert!(field.as_slice().iter().all(|&c| c == 0.0));
    }

    /// Uniform scaling up only stretches edges.
    #[test]
    fn uniform_stretch_is_zero((rest, _current) in arb_deformed_grid(), factor in 1.5..4.0f64) {
        let stretched: Vec<_> = rest.positions().iter().map(|p| Point3::from(p.coords * factor)).collect();
        let field = compute_compression(&rest, &stretched).unwrap();
        prop_assert!(field.as_slice().iter().all(|&c| c == 0.0));
    }

    /// Parallel and sequential evaluation agree exactly.
    #[test]
    fn parallel_matches_sequential((rest, current) in arb_deformed_grid()) {
        let seq = compute_compression_with(&rest, &current, &CompressionParams::sequential()).unwrap();
        let par = compute_compression_with(&rest, &current, &CompressionParams::parallel()).unwrap();
        prop_assert_eq!(seq, par);
    }

    /// Edge-list adjacency is always symmetric and loop-free.
    #[test]
    fn edge_adjacency_symmetric(edges in arb_edges(12)) {
        let adjacency = AdjacencyList::from_edges(12, &edges).unwrap();
        prop_assert!(adjacency.is_symmetric());
        for v in 0..12 {
            prop_assert!(adjacency.neighbors(v).iter().all(|&n| n as usize != v));
        }
    }

    /// A wrong-length current buffer is always a shape mismatch.
    #[test]
    fn length_mismatch_rejected((rest, current) in arb_deformed_grid()) {
        let mut current = current;
        current.push(Point3::origin());
        let err = compute_compression(&rest, &current).unwrap_err();
        let is_mismatch = matches!(err, WrinkleError::ShapeMismatch { .. });
        prop_assert!(is_mismatch);
    }

    /// Displacement moves vertices only along the wrinkle axis, by at most intensity.
    #[test]
    fn displacement_along_axis(
        (rest, current) in arb_deformed_grid(),
        intensity in 0.0..=1.0f64,
    ) {
        let params = WrinkleParams::with_intensity(intensity).axis(Vector3::z());
        let out = deform_wrinkles(&rest, &current, &params).unwrap();

        for ((moved, original), &d) in out.positions.iter().zip(&current).zip(&out.displacement) {
            prop_assert_eq!(moved.x, original.x);
            prop_assert_eq!(moved.y, original.y);
            prop_assert!(d >= 0.0 && d <= intensity);
        }
        prop_assert!(out.max_displacement <= intensity);
    }
}
