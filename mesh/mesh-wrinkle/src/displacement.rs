//! Wrinkle displacement driven by a compression field.

use nalgebra::{Point3, Unit, Vector3};
use tracing::{debug, warn};

use crate::compression::compute_compression_with;
use crate::error::{WrinkleError, WrinkleResult};
use crate::field::CompressionField;
use crate::params::WrinkleParams;
use crate::result::WrinkleOutput;
use crate::sample::MeshSample;

/// Scalar displacement `intensity * compression[v]` for every vertex.
///
/// # Errors
///
/// Returns [`WrinkleError::InvalidParameter`] if `intensity` is outside
/// `[0, 1]`.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::{compute_compression, wrinkle_displacement, AdjacencyList, MeshSample};
/// use nalgebra::Point3;
///
/// let rest = MeshSample::new(
///     vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
///     AdjacencyList::from_edges(2, &[[0, 1]]).unwrap(),
/// )
/// .unwrap();
/// let field = compute_compression(&rest, &[Point3::origin(), Point3::new(1.5, 0.0, 0.0)]).unwrap();
///
/// let displacement = wrinkle_displacement(&field, 0.5).unwrap();
/// assert_eq!(displacement, vec![0.25, 0.25]);
/// ```
pub fn wrinkle_displacement(field: &CompressionField, intensity: f64) -> WrinkleResult<Vec<f64>> {
    WrinkleParams::with_intensity(intensity).validate(field.len())?;
    Ok(field.as_slice().iter().map(|c| intensity * c).collect())
}

/// Move each position by `displacement[v]` along `axis`.
///
/// # Errors
///
/// Returns [`WrinkleError::ShapeMismatch`] if the buffers differ in length.
/// Nothing is moved in that case.
pub fn apply_displacement(
    positions: &mut [Point3<f64>],
    displacement: &[f64],
    axis: &Unit<Vector3<f64>>,
) -> WrinkleResult<()> {
    if displacement.len() != positions.len() {
        return Err(WrinkleError::shape_mismatch(
            "displacement",
            positions.len(),
            displacement.len(),
        ));
    }
    for (p, &d) in positions.iter_mut().zip(displacement) {
        *p += axis.as_ref() * d;
    }
    Ok(())
}

/// Compute compression and push a copy of `current` along the wrinkle axis.
///
/// Only compressed vertices move; stretched and untouched regions keep their
/// current positions exactly.
///
/// # Errors
///
/// Returns [`WrinkleError::ShapeMismatch`] if `current` or the weights do not
/// match the rest vertex count, and [`WrinkleError::InvalidParameter`] for an
/// out-of-range intensity, envelope or weight, or a degenerate axis.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::{deform_wrinkles, MeshSample, WrinkleParams};
/// use nalgebra::Point3;
///
/// let rest = MeshSample::from_triangles(
///     vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)],
///     &[[0, 1, 2]],
/// )
/// .unwrap();
/// let current = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)];
///
/// let out = deform_wrinkles(&rest, &current, &WrinkleParams::with_intensity(1.0)).unwrap();
/// assert!(out.vertices_displaced > 0);
/// assert!(out.positions[1].y > current[1].y);
/// ```
pub fn deform_wrinkles(
    rest: &MeshSample,
    current: &[Point3<f64>],
    params: &WrinkleParams,
) -> WrinkleResult<WrinkleOutput> {
    if let Err(err) = params.validate(rest.vertex_count()) {
        warn!(error = %err, "Rejected wrinkle parameters");
        return Err(err);
    }
    let axis = params.unit_axis()?;

    let compression = compute_compression_with(rest, current, &params.compression)?;
    let displacement: Vec<f64> = compression
        .as_slice()
        .iter()
        .enumerate()
        .map(|(v, c)| params.gain(v) * c)
        .collect();

    let mut positions = current.to_vec();
    apply_displacement(&mut positions, &displacement, &axis)?;

    let vertices_displaced = displacement.iter().filter(|&&d| d != 0.0).count();
    let max_displacement = displacement.iter().map(|d| d.abs()).fold(0.0, f64::max);

    debug!(
        vertices = positions.len(),
        displaced = vertices_displaced,
        max_displacement,
        intensity = params.intensity,
        envelope = params.envelope,
        "Applied wrinkle displacement"
    );

    Ok(WrinkleOutput {
        positions,
        compression,
        displacement,
        vertices_displaced,
        max_displacement,
    })
}
