//! Graph data types and result structures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::error::{GraphError, GraphResult};

/// Vertex index in `[0, n)`.
pub type VertexId = usize;

/// Edge weight. Signed; zero and negative weights are valid.
pub type Weight = i64;

/// Largest vertex count an [`EdgeSet`] accepts.
///
/// The engines allocate per-vertex arrays of length `n`.
pub const MAX_VERTICES: usize = 1 << 24;

/// An undirected weighted edge.
///
/// `(src, dest)` and `(dest, src)` denote the same edge; use
/// [`Edge::canonical`] when comparing edges by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: VertexId,
    pub dest: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: VertexId, dest: VertexId, weight: Weight) -> Self {
        Self { src, dest, weight }
    }

    /// Order-independent identity of the edge: `(min, max)` of its endpoints.
    pub fn canonical(&self) -> (VertexId, VertexId) {
        if self.src <= self.dest {
            (self.src, self.dest)
        } else {
            (self.dest, self.src)
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {}", self.src, self.dest, self.weight)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((src, dest, weight): (VertexId, VertexId, Weight)) -> Self {
        Self { src, dest, weight }
    }
}

/// One graph instance: vertex count, redundancy budget and edge list.
///
/// Every endpoint is checked against `n` at construction, so the engines can
/// index their per-vertex arrays without further validation.
///
/// # Construction
///
/// ```
/// use spanr::graph::{Edge, EdgeSet};
///
/// let set = EdgeSet::new(3, 1, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2)]).unwrap();
/// assert_eq!(set.k(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSet {
    n: usize,
    k: usize,
    edges: Vec<Edge>,
}

impl EdgeSet {
    /// Build a validated edge set.
    ///
    /// A non-positive `k` requests zero redundant edges.
    ///
    /// # Errors
    /// [`GraphError::TooManyVertices`] if `n > MAX_VERTICES`,
    /// [`GraphError::InvalidVertex`] if any endpoint is `>= n`.
    pub fn new(n: usize, k: i64, edges: Vec<Edge>) -> GraphResult<Self> {
        if n > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                n,
                limit: MAX_VERTICES,
            });
        }
        validate_edges(&edges, n)?;
        Ok(Self {
            n,
            k: usize::try_from(k).unwrap_or(0),
            edges,
        })
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of redundant edges requested.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check that every weight lies in `[min, max]`.
    ///
    /// # Errors
    /// [`GraphError::InvalidWeightRange`] if `min > max`, otherwise
    /// [`GraphError::WeightOutOfRange`] for the first offending edge.
    pub fn validate_weights(&self, min: Weight, max: Weight) -> GraphResult<()> {
        if min > max {
            return Err(GraphError::InvalidWeightRange { min, max });
        }
        match self.edges.iter().find(|e| e.weight < min || e.weight > max) {
            Some(edge) => Err(GraphError::WeightOutOfRange {
                weight: edge.weight,
                min,
                max,
            }),
            None => Ok(()),
        }
    }
}

/// Validate that every endpoint is within `[0, n)`.
pub fn validate_edges(edges: &[Edge], n: usize) -> GraphResult<()> {
    for edge in edges {
        for vertex in [edge.src, edge.dest] {
            if vertex >= n {
                return Err(GraphError::InvalidVertex {
                    vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
                    n,
                });
            }
        }
    }
    Ok(())
}

/// Spanning tree (or forest) algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MSTMethod {
    /// Union-find over the globally sorted edge list. Spans every component.
    Kruskal,
    /// Frontier growth from vertex 0. Spans only the component of vertex 0.
    Prim,
    /// Frontier growth restarted from each unvisited vertex. Spans every component.
    PrimForest,
    /// Brute force over edge subsets. Small connected graphs only.
    Exhaustive,
}

impl MSTMethod {
    pub const ALL: [MSTMethod; 4] = [
        MSTMethod::Kruskal,
        MSTMethod::Prim,
        MSTMethod::PrimForest,
        MSTMethod::Exhaustive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MSTMethod::Kruskal => "kruskal",
            MSTMethod::Prim => "prim",
            MSTMethod::PrimForest => "prim-forest",
            MSTMethod::Exhaustive => "exhaustive",
        }
    }

    /// Heading used in the plain-text report.
    pub fn title(&self) -> &'static str {
        match self {
            MSTMethod::Kruskal => "Kruskal's Algorithm",
            MSTMethod::Prim => "Prim's Algorithm",
            MSTMethod::PrimForest => "Prim's Algorithm (spanning forest)",
            MSTMethod::Exhaustive => "Exhaustive Search",
        }
    }
}

impl fmt::Display for MSTMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MSTMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MSTMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown MST method '{s}'"))
    }
}

/// Result of minimum spanning tree algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MSTResult {
    /// Selected edges, in the order the algorithm accepted them.
    pub edges: Vec<Edge>,
    /// Sum of the selected edge weights.
    pub total_weight: Weight,
}

impl MSTResult {
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
