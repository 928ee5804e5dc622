pub mod bellman_ford;
pub mod builder;
pub mod dijkstra;
pub mod johnson;
pub mod reweight;
pub mod types;

// Re-exports for external use
pub use builder::Graph;
pub use johnson::{johnson, DistanceMatrix};
pub use types::{GraphError, Weight};
