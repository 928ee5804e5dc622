use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::reweight::Reweighted;
use super::types::{VertexId, Weight};

/// Heap entry; the reversed ordering turns `BinaryHeap` into a min-heap.
#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: Weight,
    vertex: VertexId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest distances over the reweighted view.
///
/// `None` marks a vertex no path reaches. Each call returns a fresh
/// distance vector; the shared view is read-only, so per-source runs
/// cannot interfere with one another.
///
/// Precondition: every non-self-loop weight in the view is >= 0. The
/// reweighting transform guarantees that; it is not re-checked here.
pub fn shortest_paths(view: &Reweighted<'_>, source: VertexId) -> Vec<Option<Weight>> {
    let mut dist: Vec<Option<Weight>> = vec![None; view.vertex_count()];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(State {
        cost: 0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if dist[vertex] != Some(cost) {
            continue; // stale entry, vertex already finalized cheaper
        }
        for edge in view.graph.inner.edges(NodeIndex::new(vertex)) {
            let next = edge.target().index();
            if next == vertex {
                continue; // self-loops never relax
            }
            let candidate = cost + view.weight(edge.id());
            if dist[next].map_or(true, |d| candidate < d) {
                dist[next] = Some(candidate);
                heap.push(State {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::Graph;
    use crate::graph::reweight::reweight;

    /// Zero potentials keep the original (already non-negative) weights.
    fn view_of(g: &Graph) -> Reweighted<'_> {
        reweight(g, &vec![0; g.vertex_count()])
    }

    #[test]
    fn straight_line_distances() {
        let g = Graph::from_edges(4, &[(0, 1, 2), (1, 2, 3), (2, 3, 4)]).unwrap();
        let dist = shortest_paths(&view_of(&g), 0);
        assert_eq!(dist, vec![Some(0), Some(2), Some(5), Some(9)]);
    }

    #[test]
    fn picks_the_shorter_of_two_routes() {
        let g = Graph::from_edges(3, &[(0, 2, 10), (0, 1, 3), (1, 2, 4)]).unwrap();
        let dist = shortest_paths(&view_of(&g), 0);
        assert_eq!(dist[2], Some(7));
    }

    #[test]
    fn unreachable_vertices_stay_none() {
        let g = Graph::from_edges(3, &[(1, 2, 1)]).unwrap();
        let dist = shortest_paths(&view_of(&g), 0);
        assert_eq!(dist, vec![Some(0), None, None]);
    }

    #[test]
    fn self_loop_never_lowers_the_self_distance() {
        let g = Graph::from_edges(2, &[(0, 0, 5), (0, 1, 1)]).unwrap();
        let dist = shortest_paths(&view_of(&g), 0);
        assert_eq!(dist, vec![Some(0), Some(1)]);
    }

    #[test]
    fn zero_weight_edges_are_real_edges() {
        let g = Graph::from_edges(3, &[(0, 1, 0), (1, 2, 0)]).unwrap();
        let dist = shortest_paths(&view_of(&g), 0);
        assert_eq!(dist, vec![Some(0), Some(0), Some(0)]);
    }
}
