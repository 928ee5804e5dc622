use thiserror::Error;

/// Edge weight and path distance scalar, in the original weight space.
pub type Weight = i64;

/// Stable vertex identity, always equal to the vertex's storage position.
pub type VertexId = usize;

/// Failure modes of the algorithmic core.
///
/// Distances and edge weights never share a sentinel: an absent edge is
/// simply not stored, and an unreached distance is `None` in the distance
/// vectors. Neither can leak into weight arithmetic, so neither needs an
/// error case here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A reachable cycle with negative total weight; shortest paths are
    /// undefined for the whole graph.
    #[error("the graph contains a negative-weight cycle")]
    NegativeCycle,

    /// Construction input that breaks the identity/position contract.
    #[error("malformed graph: {reason}")]
    MalformedGraph { reason: String },
}
