use petgraph::visit::EdgeRef;
use tracing::{debug, trace};

use super::builder::AugmentedGraph;
use super::types::{GraphError, Weight};

/// Compute vertex potentials from the virtual source, detecting negative
/// cycles on the way.
///
/// Relaxes every edge in vertex-then-edge order, `|V'|-1` full sweeps (with
/// early exit once a sweep changes nothing), then runs one more sweep as the
/// cycle check: any edge that still relaxes proves a negative-weight cycle
/// and yields `Err(NegativeCycle)`.
///
/// On success returns one potential per original vertex; the virtual
/// source's own distance (always 0) is dropped.
pub fn potentials(augmented: &AugmentedGraph) -> Result<Vec<Weight>, GraphError> {
    let n = augmented.vertex_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    dist[augmented.source().index()] = Some(0);

    for pass in 1..n {
        if !relax_sweep(augmented, &mut dist) {
            trace!(pass, "relaxation converged early");
            break;
        }
    }

    if relax_sweep(augmented, &mut dist) {
        debug!("an edge still relaxes after |V|-1 sweeps");
        return Err(GraphError::NegativeCycle);
    }

    // Every original vertex sits one zero-weight edge from the virtual
    // source, so its distance is always finite here.
    Ok((0..n - 1).map(|id| dist[id].unwrap_or(0)).collect())
}

/// One full sweep over every edge of every vertex. Returns whether any
/// distance changed.
fn relax_sweep(augmented: &AugmentedGraph, dist: &mut [Option<Weight>]) -> bool {
    let mut updated = false;
    for u in augmented.inner.node_indices() {
        // Relaxing through an unreached vertex would add a finite weight
        // to no distance at all; skip until the vertex is reached.
        let Some(du) = dist[u.index()] else {
            continue;
        };
        for edge in augmented.inner.edges(u) {
            let v = edge.target();
            if v == u {
                continue; // self-loops never relax
            }
            let candidate = du + edge.weight();
            if dist[v.index()].map_or(true, |dv| candidate < dv) {
                dist[v.index()] = Some(candidate);
                updated = true;
            }
        }
    }
    updated
}
