//! Vertex adjacency for neighbourhood sampling.
//!
//! Compression compares each vertex with its one-ring, so the relation has to
//! be symmetric and free of self-loops. Every constructor here guarantees both.

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{WrinkleError, WrinkleResult};

/// Neighbour lists, one per vertex.
///
/// # Example
///
/// ```
/// use mesh_wrinkle::AdjacencyList;
///
/// // Two triangles sharing the edge 1-2
/// let adjacency = AdjacencyList::from_triangles(4, &[[0, 1, 2], [2, 1, 3]]).unwrap();
/// assert_eq!(adjacency.edge_count(), 5);
/// assert_eq!(adjacency.degree(1), 3);
/// assert!(adjacency.is_symmetric());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AdjacencyList {
    neighbors: Vec<Vec<u32>>,
}

impl AdjacencyList {
    /// Adjacency with `vertex_count` isolated vertices.
    #[must_use]
    pub fn isolated(vertex_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); vertex_count],
        }
    }

    /// Build from triangle faces; every face edge becomes a neighbour pair.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::InvalidNeighbor`] if a face references a
    /// vertex `>= vertex_count`.
    pub fn from_triangles(vertex_count: usize, faces: &[[u32; 3]]) -> WrinkleResult<Self> {
        let mut neighbors = vec![Vec::new(); vertex_count];
        for &[i0, i1, i2] in faces {
            for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
                Self::add_edge(&mut neighbors, a, b)?;
            }
        }
        Ok(Self { neighbors })
    }

    /// Build from an undirected edge list.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::InvalidNeighbor`] if an edge references a
    /// vertex `>= vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[[u32; 2]]) -> WrinkleResult<Self> {
        let mut neighbors = vec![Vec::new(); vertex_count];
        for &[a, b] in edges {
            Self::add_edge(&mut neighbors, a, b)?;
        }
        Ok(Self { neighbors })
    }

    /// Take a caller-supplied relation as-is.
    ///
    /// Self-loops and repeated entries are dropped. The relation is *not*
    /// symmetrised; check [`AdjacencyList::is_symmetric`] if the source is
    /// untrusted.
    ///
    /// # Errors
    ///
    /// Returns [`WrinkleError::InvalidNeighbor`] for any entry
    /// `>= lists.len()`.
    pub fn from_neighbor_lists(lists: Vec<Vec<u32>>) -> WrinkleResult<Self> {
        let vertex_count = lists.len();
        let mut neighbors = Vec::with_capacity(vertex_count);

        for (vertex, list) in lists.into_iter().enumerate() {
            let mut cleaned: Vec<u32> = Vec::with_capacity(list.len());
            for neighbor in list {
                if neighbor as usize >= vertex_count {
                    return Err(WrinkleError::InvalidNeighbor {
                        vertex,
                        neighbor,
                        vertex_count,
                    });
                }
                if neighbor as usize != vertex && !cleaned.contains(&neighbor) {
                    cleaned.push(neighbor);
                }
            }
            neighbors.push(cleaned);
        }

        Ok(Self { neighbors })
    }

    /// Add an undirected edge, skipping self-loops and duplicates.
    fn add_edge(neighbors: &mut [Vec<u32>], a: u32, b: u32) -> WrinkleResult<()> {
        let vertex_count = neighbors.len();
        for (vertex, neighbor) in [(b, a), (a, b)] {
            if neighbor as usize >= vertex_count {
                return Err(WrinkleError::InvalidNeighbor {
                    vertex: vertex as usize,
                    neighbor,
                    vertex_count,
                });
            }
        }
        if a == b {
            return Ok(());
        }

        if !neighbors[a as usize].contains(&b) {
            neighbors[a as usize].push(b);
        }
        if !neighbors[b as usize].contains(&a) {
            neighbors[b as usize].push(a);
        }
        Ok(())
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbours of `vertex`; empty for an out-of-range index.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[u32] {
        self.neighbors.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Number of neighbours of `vertex`.
    #[inline]
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// `true` if there are no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Number of undirected edges (symmetric relations count each pair once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// `true` if every `n` in `neighbors(v)` also lists `v`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.neighbors.iter().enumerate().all(|(vertex, list)| {
            list.iter().all(|&n| {
                self.neighbors(n as usize)
                    .iter()
                    .any(|&back| back as usize == vertex)
            })
        })
    }
}

/// Deserialized lists go through [`AdjacencyList::from_neighbor_lists`].
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AdjacencyList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            neighbors: Vec<Vec<u32>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_neighbor_lists(raw.neighbors).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_from_triangle() {
        let adj = AdjacencyList::from_triangles(3, &[[0, 1, 2]]).unwrap();
        assert_eq!(adj.vertex_count(), 3);
        assert_eq!(adj.edge_count(), 3);
        for v in 0..3 {
            assert_eq!(adj.degree(v), 2);
        }
        assert!(adj.is_symmetric());
    }

    #[test]
    fn shared_edges_are_deduplicated() {
        let adj = AdjacencyList::from_triangles(4, &[[0, 1, 2], [0, 2, 3]]).unwrap();
        assert_eq!(adj.edge_count(), 5);
        assert_eq!(adj.degree(0), 3);
        assert_eq!(adj.degree(1), 2);
    }

    #[test]
    fn edges_are_symmetric() {
        let adj = AdjacencyList::from_edges(3, &[[0, 1], [1, 0], [1, 2]]).unwrap();
        assert_eq!(adj.neighbors(0), &[1]);
        assert_eq!(adj.neighbors(1), &[0, 2]);
        assert_eq!(adj.neighbors(2), &[1]);
        assert!(adj.is_symmetric());
    }

    #[test]
    fn self_loops_dropped() {
        let adj = AdjacencyList::from_edges(2, &[[0, 0], [0, 1]]).unwrap();
        assert_eq!(adj.neighbors(0), &[1]);

        let adj = AdjacencyList::from_neighbor_lists(vec![vec![0, 1, 1], vec![0]]).unwrap();
        assert_eq!(adj.neighbors(0), &[1]);
        assert!(adj.is_symmetric());
    }

    #[test]
    fn out_of_range_rejected() {
        let err = AdjacencyList::from_triangles(3, &[[0, 1, 5]]).unwrap_err();
        assert!(matches!(
            err,
            WrinkleError::InvalidNeighbor {
                neighbor: 5,
                vertex_count: 3,
                ..
            }
        ));

        let err = AdjacencyList::from_neighbor_lists(vec![vec![1], vec![2]]).unwrap_err();
        assert!(matches!(
            err,
            WrinkleError::InvalidNeighbor {
                vertex: 1,
                neighbor: 2,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn asymmetric_lists_detected() {
        let adj = AdjacencyList::from_neighbor_lists(vec![vec![1], vec![]]).unwrap();
        assert!(!adj.is_symmetric());
    }

    #[test]
    fn isolated_and_out_of_range_queries() {
        let adj = AdjacencyList::isolated(2);
        assert_eq!(adj.vertex_count(), 2);
        assert_eq!(adj.edge_count(), 0);
        assert!(adj.neighbors(7).is_empty());
        assert!(AdjacencyList::default().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_indices() {
        let json = r#"{ "neighbors": [[1, 1, 0], [0]] }"#;
        let adj: AdjacencyList = serde_json::from_str(json).unwrap();
        assert_eq!(adj.neighbors(0), &[1]);
        assert!(adj.is_symmetric());

        let err = serde_json::from_str::<AdjacencyList>(r#"{ "neighbors": [[5], []] }"#);
        assert!(err.unwrap_err().to_string().contains("neighbour 5"));
    }
}
