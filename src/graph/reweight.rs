use petgraph::graph::EdgeIndex;
use petgraph::visit::EdgeRef;
use tracing::trace;

use super::builder::Graph;
use super::types::Weight;

/// Non-negative weight view over a graph, keyed by edge index.
///
/// The underlying graph keeps its original weights; only this view carries
/// the transformed ones, so the original weight space stays available for
/// the final un-reweighting and for auditing.
pub struct Reweighted<'a> {
    pub(crate) graph: &'a Graph,
    weights: Vec<Weight>,
}

impl Reweighted<'_> {
    pub fn weight(&self, edge: EdgeIndex) -> Weight {
        self.weights[edge.index()]
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

/// Apply Johnson's reweighting `w'(u,v) = w(u,v) + h[u] - h[v]`.
///
/// With `h` taken from a completed negative-cycle-free relaxation,
/// `h[v] <= h[u] + w(u,v)` holds for every edge, so every transformed
/// weight is non-negative. Self-loops keep their original weight; both
/// shortest-path procedures ignore them anyway.
pub fn reweight<'a>(graph: &'a Graph, h: &[Weight]) -> Reweighted<'a> {
    let mut weights = vec![0; graph.edge_count()];
    for edge in graph.inner.edge_references() {
        let u = edge.source().index();
        let v = edge.target().index();
        let transformed = if u == v {
            *edge.weight()
        } else {
            *edge.weight() + h[u] - h[v]
        };
        debug_assert!(
            u == v || transformed >= 0,
            "reweighted {} -> {} came out negative ({})",
            u,
            v,
            transformed
        );
        weights[edge.id().index()] = transformed;
    }
    trace!(edges = weights.len(), "reweighted edge view built");
    Reweighted { graph, weights }
}
