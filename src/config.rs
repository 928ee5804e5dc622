//! Solver-wide constants

/// Upper bound on vertices per case, from the input format contract.
pub const MAX_VERTICES: usize = 100;

/// Token marking an absent edge on input and an unreachable pair on output.
pub const NO_EDGE_TOKEN: &str = "*";

/// Input file read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "matrix.txt";
