//! Rest-state mesh sample.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::adjacency::AdjacencyList;
use crate::error::{WrinkleError, WrinkleResult};

/// Undeformed positions plus the neighbour relation compression is measured over.
///
/// A sample is built once per rest pose and can be shared by any number of
/// compression evaluations.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::MeshSample;
/// use nalgebra::Point3;
///
/// let rest = MeshSample::from_triangles(
///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     &[[0, 1, 2]],
/// )
/// .unwrap();
/// assert_eq!(rest.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MeshSample {
    positions: Vec<Point3<f64>>,
    adjacency: AdjacencyList,
}

impl MeshSample {
    /// Pair rest positions with an adjacency relation.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::ShapeMismatch`] if the adjacency does not cover
    /// exactly one entry per position.
    pub fn new(positions: Vec<Point3<f64>>, adjacency: AdjacencyList) -> WrinkleResult<Self> {
        if adjacency.vertex_count() != positions.len() {
            return Err(WrinkleError::shape_mismatch(
                "adjacency",
                positions.len(),
                adjacency.vertex_count(),
            ));
        }
        Ok(Self {
            positions,
            adjacency,
        })
    }

    /// Rest positions with adjacency derived from triangle faces.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::InvalidNeighbor`] if a face references a
    /// missing vertex.
    pub fn from_triangles(positions: Vec<Point3<f64>>, faces: &[[u32; 3]]) -> WrinkleResult<Self> {
        let adjacency = AdjacencyList::from_triangles(positions.len(), faces)?;
        Ok(Self {
            positions,
            adjacency,
        })
    }

    /// Rest positions.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Neighbour relation.
    #[inline]
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// `true` if the sample has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MeshSample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            positions: Vec<Point3<f64>>,
            adjacency: AdjacencyList,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.positions, raw.adjacency).map_err(de::Error::custom)
    }
}
