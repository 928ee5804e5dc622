use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::trace;

use super::types::{GraphError, VertexId, Weight};

/// Directed weighted graph for the shortest-path core.
///
/// The node index of every vertex equals its identity; companion tables
/// (potentials, distance rows) are indexed by that identity directly.
/// Absent edges are not stored at all, so no "no edge" weight value can
/// ever enter a relaxation.
pub struct Graph {
    pub(crate) inner: DiGraph<VertexId, Weight>,
}

impl Graph {
    /// Build from a square matrix of `Option<Weight>` cells, where `None`
    /// means "no edge". Diagonal cells are ignored; the algorithms never
    /// look at a vertex's edge to itself.
    pub fn from_matrix(rows: &[Vec<Option<Weight>>]) -> Result<Self, GraphError> {
        let size = rows.len();
        let mut inner = DiGraph::new();
        for id in 0..size {
            inner.add_node(id);
        }
        for (u, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::MalformedGraph {
                    reason: format!(
                        "row {} has {} cells, expected {}",
                        u,
                        row.len(),
                        size
                    ),
                });
            }
            for (v, cell) in row.iter().enumerate() {
                if u == v {
                    continue;
                }
                if let Some(weight) = cell {
                    inner.add_edge(NodeIndex::new(u), NodeIndex::new(v), *weight);
                }
            }
        }
        Ok(Self { inner })
    }

    /// Build from an explicit edge list. Self-loops are kept (the
    /// shortest-path procedures skip them); endpoints out of range fail
    /// fast rather than being silently dropped.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId, Weight)],
    ) -> Result<Self, GraphError> {
        let mut inner = DiGraph::new();
        for id in 0..vertex_count {
            inner.add_node(id);
        }
        for &(u, v, weight) in edges {
            if u >= vertex_count || v >= vertex_count {
                return Err(GraphError::MalformedGraph {
                    reason: format!(
                        "edge {} -> {} references a vertex outside 0..{}",
                        u, v, vertex_count
                    ),
                });
            }
            inner.add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
        }
        Ok(Self { inner })
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate all edges as `(source, target, weight)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Add a virtual source with a zero-weight edge to every vertex.
    ///
    /// The original graph is left untouched; the augmented copy exists only
    /// to seed the potential computation and is stripped afterwards.
    pub fn augment(&self) -> AugmentedGraph {
        let mut inner = self.inner.clone();
        let source = inner.add_node(self.vertex_count());
        for id in 0..self.vertex_count() {
            inner.add_edge(source, NodeIndex::new(id), 0);
        }
        trace!(
            vertices = inner.node_count(),
            edges = inner.edge_count(),
            "augmented graph with virtual source"
        );
        AugmentedGraph { inner, source }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edges().eq(other.edges())
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

/// A graph plus its virtual source, as consumed by the relaxation run.
pub struct AugmentedGraph {
    pub(crate) inner: DiGraph<VertexId, Weight>,
    pub(crate) source: NodeIndex,
}

impl AugmentedGraph {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Remove the virtual source, restoring the original vertex set, edge
    /// set, and ordering exactly. Inverse of [`Graph::augment`].
    pub fn strip(mut self) -> Graph {
        // The source was appended last, so removing it leaves every other
        // node index and every original edge index in place.
        debug_assert_eq!(self.source.index(), self.inner.node_count() - 1);
        self.inner.remove_node(self.source);
        Graph { inner: self.inner }
    }
}
