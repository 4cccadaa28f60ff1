//! Parameters for compression and wrinkle displacement.

use nalgebra::{Unit, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{WrinkleError, WrinkleResult};

/// Vertex count at which compression switches to data-parallel evaluation.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Axes shorter than this cannot carry a displacement direction.
const AXIS_EPSILON: f64 = 1e-12;

/// Parameters for the compression field.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::CompressionParams;
///
/// let params = CompressionParams::default();
/// assert_eq!(params.parallel_threshold, 4096);
///
/// // Force one code path, e.g. for profiling
/// assert!(!CompressionParams::sequential().is_parallel(1_000_000));
/// assert!(CompressionParams::parallel().is_parallel(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompressionParams {
    /// Meshes with at least this many vertices are evaluated with rayon.
    pub parallel_threshold: usize,
}

impl Default for CompressionParams {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CompressionParams {
    /// Always evaluate on the calling thread.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Always evaluate with rayon.
    #[must_use]
    pub const fn parallel() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }

    /// Set the parallel threshold.
    #[must_use]
    pub const fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a mesh of `vertex_count` vertices takes the parallel path.
    #[inline]
    #[must_use]
    pub const fn is_parallel(&self, vertex_count: usize) -> bool {
        vertex_count >= self.parallel_threshold
    }
}

/// Parameters for wrinkle displacement.
///
/// `displacement[v] = envelope * weight[v] * intensity * compression[v]`,
/// applied along `axis`. With no weights every vertex has weight 1.
///
/// The default intensity is 0, so a default deformer leaves the mesh
/// untouched until it is dialled up.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::WrinkleParams;
/// use nalgebra::Vector3;
///
/// let params = WrinkleParams::with_intensity(0.6)
///     .envelope(0.5)
///     .axis(Vector3::z())
///     .weights(vec![1.0, 0.0, 0.25]);
///
/// assert!(params.validate(3).is_ok());
/// assert!((params.gain(2) - 0.6 * 0.5 * 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrinkleParams {
    /// Strength of the effect, in `[0, 1]`.
    pub intensity: f64,
    /// Global blend of the deformer, in `[0, 1]`.
    pub envelope: f64,
    /// Local direction the surface is pushed along. Normalised before use.
    pub axis: Vector3<f64>,
    /// Optional painted per-vertex weights.
    pub weights: Option<Vec<f64>>,
    /// Settings for the compression pass.
    pub compression: CompressionParams,
}

impl Default for WrinkleParams {
    fn default() -> Self {
        Self {
            intensity: 0.0,
            envelope: 1.0,
            axis: Vector3::y(),
            weights: None,
            compression: CompressionParams::default(),
        }
    }
}

impl WrinkleParams {
    /// Create params with the given intensity, everything else default.
    #[must_use]
    pub fn with_intensity(intensity: f64) -> Self {
        Self {
            intensity,
            ..Default::default()
        }
    }

    /// Set the intensity.
    #[must_use]
    pub fn intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the envelope.
    #[must_use]
    pub fn envelope(mut self, envelope: f64) -> Self {
        self.envelope = envelope;
        self
    }

    /// Set the displacement axis.
    #[must_use]
    pub fn axis(mut self, axis: Vector3<f64>) -> Self {
        self.axis = axis;
        self
    }

    /// Set painted weights, one per vertex.
    #[must_use]
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the compression settings.
    #[must_use]
    pub fn compression(mut self, compression: CompressionParams) -> Self {
        self.compression = compression;
        self
    }

    /// Painted weight of `vertex`, 1 when unpainted.
    #[inline]
    #[must_use]
    pub fn weight(&self, vertex: usize) -> f64 {
        self.weights
            .as_ref()
            .and_then(|w| w.get(vertex).copied())
            .unwrap_or(1.0)
    }

    /// Combined scale for `vertex`: `envelope * weight * intensity`.
    #[inline]
    #[must_use]
    pub fn gain(&self, vertex: usize) -> f64 {
        self.envelope * self.weight(vertex) * self.intensity
    }

    /// Normalised displacement axis.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::InvalidParameter`] if the axis is zero or not
    /// finite.
    pub fn unit_axis(&self) -> WrinkleResult<Unit<Vector3<f64>>> {
        let length = self.axis.norm();
        if !length.is_finite() || length <= AXIS_EPSILON {
            return Err(WrinkleError::invalid_parameter(
                "axis",
                length,
                "must be a finite, non-zero vector",
            ));
        }
        Ok(Unit::new_normalize(self.axis))
    }

    /// Check every parameter for a mesh of `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::InvalidParameter`] if intensity or envelope is
    /// outside `[0, 1]`, a weight is not finite, or the axis is degenerate;
    /// [`WrinkleError::ShapeMismatch`] if the weights do not cover every
    /// vertex.
    pub fn validate(&self, vertex_count: usize) -> WrinkleResult<()> {
        check_unit_interval("intensity", self.intensity)?;
        check_unit_interval("envelope", self.envelope)?;
        self.unit_axis()?;

        if let Some(weights) = &self.weights {
            if weights.len() != vertex_count {
                return Err(WrinkleError::shape_mismatch(
                    "weights",
                    vertex_count,
                    weights.len(),
                ));
            }
            if let Some(&bad) = weights.iter().find(|w| !w.is_finite()) {
                return Err(WrinkleError::invalid_parameter(
                    "weights",
                    bad,
                    "every weight must be finite",
                ));
            }
        }
        Ok(())
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> WrinkleResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(WrinkleError::invalid_parameter(
            name,
            value,
            "must lie in [0, 1]",
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = WrinkleParams::default();
        assert_eq!(params.intensity, 0.0);
        assert_eq!(params.envelope, 1.0);
        assert_eq!(params.axis, Vector3::y());
        assert!(params.weights.is_none());
        assert_eq!(params.compression, CompressionParams::default());
        assert!(params.validate(10).is_ok());
    }

    #[test]
    fn test_parallel_switch() {
        let params = CompressionParams::default();
        assert!(!params.is_parallel(DEFAULT_PARALLEL_THRESHOLD - 1));
        assert!(params.is_parallel(DEFAULT_PARALLEL_THRESHOLD));
        assert!(CompressionParams::default().parallel_threshold(8).is_parallel(8));
    }

    #[test]
    fn test_intensity_range() {
        assert!(WrinkleParams::with_intensity(1.0).validate(0).is_ok());
        let err = WrinkleParams::with_intensity(1.5).validate(0).unwrap_err();
        assert!(matches!(
            err,
            WrinkleError::InvalidParameter {
                name: "intensity",
                ..
            }
        ));
        assert!(WrinkleParams::with_intensity(-0.1).validate(0).is_err());
        assert!(WrinkleParams::with_intensity(f64::NAN).validate(0).is_err());
        assert!(WrinkleParams::default().envelope(2.0).validate(0).is_err());
    }

    #[test]
    fn test_zero_axis_rejected() {
        let err = WrinkleParams::default()
            .axis(Vector3::zeros())
            .validate(0)
            .unwrap_err();
        assert!(matches!(err, WrinkleError::InvalidParameter { name: "axis", .. }));
    }

    #[test]
    fn test_axis_normalised() {
        let axis = WrinkleParams::default()
            .axis(Vector3::new(0.0, 0.0, 3.0))
            .unit_axis()
            .unwrap();
        assert_eq!(axis.into_inner(), Vector3::z());
    }

    #[test]
    fn test_weights_must_match() {
        let params = WrinkleParams::with_intensity(0.5).weights(vec![1.0, 0.5]);
        assert!(params.validate(2).is_ok());

        let err = params.validate(3).unwrap_err();
        assert!(matches!(
            err,
            WrinkleError::ShapeMismatch {
                what: "weights",
                expected: 3,
                actual: 2
            }
        ));

        let bad = WrinkleParams::default().weights(vec![f64::NAN]);
        assert!(bad.validate(1).is_err());
    }

    #[test]
    fn test_gain() {
        let params = WrinkleParams::with_intensity(0.8)
            .envelope(0.5)
            .weights(vec![0.25, 1.0]);
        assert_eq!(params.gain(0), 0.8 * 0.5 * 0.25);
        assert_eq!(params.gain(1), 0.8 * 0.5);
        assert_eq!(WrinkleParams::with_intensity(0.3).gain(99), 0.3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json() {
        let params: WrinkleParams = serde_json::from_str(r#"{ "intensity": 0.4 }"#).unwrap();
        assert_eq!(params.intensity, 0.4);
        assert_eq!(params.envelope, 1.0);
        assert_eq!(params.compression.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }
}
