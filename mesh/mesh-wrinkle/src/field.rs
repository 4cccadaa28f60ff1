//! Per-vertex compression values.

// Vertex counts stay far below 2^52.
#![allow(clippy::cast_precision_loss)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compression of each vertex, every value in `[0, 1]`.
///
/// 0 means the one-ring kept or grew its rest lengths; 1 means the average
/// shortening reached one scene unit (saturated).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompressionField {
    values: Vec<f64>,
}

impl CompressionField {
    pub(crate) const fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Compression of `vertex`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn value(&self, vertex: usize) -> Option<f64> {
        self.values.get(vertex).copied()
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the field covers no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in vertex order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consume the field, returning the values.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Largest value, 0 for an empty field.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Mean value, 0 for an empty field.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().sum::<f64>() / self.values.len() as f64
        }
    }

    /// Vertices with any compression.
    #[must_use]
    pub fn compressed_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }

    /// Vertices clamped at full compression.
    #[must_use]
    pub fn saturated_count(&self) -> usize {
        self.values.iter().filter(|&&v| v >= 1.0).count()
    }
}

impl AsRef<[f64]> for CompressionField {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
