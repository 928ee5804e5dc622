use tracing::{debug, info};

use super::bellman_ford;
use super::builder::Graph;
use super::dijkstra;
use super::reweight::reweight;
use super::types::{GraphError, VertexId, Weight};

/// V×V shortest-path distances in the original weight space.
///
/// Row `u` holds the distances from vertex `u`; `None` marks an
/// unreachable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<Weight>>,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.cells[u * self.size + v]
    }

    fn set(&mut self, u: VertexId, v: VertexId, d: Option<Weight>) {
        self.cells[u * self.size + v] = d;
    }

    /// Iterate rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Weight>]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// Johnson's algorithm: all-pairs shortest paths with negative edge
/// weights allowed, negative cycles reported.
///
/// Augments the graph with a virtual source, derives potentials with one
/// negative-cycle-aware relaxation run, strips the source, reweights every
/// edge to a non-negative weight, runs Dijkstra once per vertex, and maps
/// each distance back into the original weight space.
pub fn johnson(graph: &Graph) -> Result<DistanceMatrix, GraphError> {
    let augmented = graph.augment();
    let h = bellman_ford::potentials(&augmented)?;
    let graph = augmented.strip();
    debug!(potentials = ?h, "virtual source stripped");

    let view = reweight(&graph, &h);
    let vertex_count = graph.vertex_count();
    let mut matrix = DistanceMatrix::new(vertex_count);

    for u in 0..vertex_count {
        let dist = dijkstra::shortest_paths(&view, u);
        for (v, d) in dist.iter().enumerate() {
            // Un-reweight: d'(u,v) - h[u] + h[v] is the original-space
            // distance; unreached stays unreached.
            matrix.set(u, v, d.map(|d| d + h[v] - h[u]));
        }
    }

    info!(
        vertices = vertex_count,
        edges = graph.edge_count(),
        "all-pairs distances computed"
    );
    Ok(matrix)
}
