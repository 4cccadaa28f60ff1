//! Wrinkle deformation output.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::CompressionField;

/// Result of a wrinkle deformation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WrinkleOutput {
    /// Current positions with the displacement applied.
    pub positions: Vec<Point3<f64>>,
    /// Compression field the displacement was driven by.
    pub compression: CompressionField,
    /// Scalar displacement of each vertex along the wrinkle axis.
    pub displacement: Vec<f64>,
    /// Number of vertices that actually moved.
    pub vertices_displaced: usize,
    /// Largest displacement magnitude applied.
    pub max_displacement: f64,
}

impl WrinkleOutput {
    /// `true` if no vertex moved.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.vertices_displaced == 0
    }

    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "WrinkleOutput: {}/{} vertices displaced (max {:.4}), \
             compression mean {:.4}, {} saturated",
            self.vertices_displaced,
            self.positions.len(),
            self.max_displacement,
            self.compression.mean(),
            self.compression.saturated_count()
        )
    }
}
