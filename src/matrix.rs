//! Adjacency-matrix text parsing
//!
//! Input format: a leading case count, then for each case a vertex count V
//! followed by V*V whitespace-separated cells. A cell is a finite integer
//! weight or `*` for "no edge between these vertices".

use thiserror::Error;
use tracing::warn;

use crate::config::{MAX_VERTICES, NO_EDGE_TOKEN};
use crate::graph::Weight;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("input is empty")]
    Empty,

    #[error("unexpected token {token:?} (expected an integer or `{}`)", NO_EDGE_TOKEN)]
    BadToken { token: String },

    #[error("vertex count {found} is out of range 1..={}", MAX_VERTICES)]
    VertexCountOutOfRange { found: i64 },

    #[error("case {case} is truncated: expected {expected} cells, found {found}")]
    Truncated {
        case: usize,
        expected: usize,
        found: usize,
    },
}

/// One parsed V×V weight matrix; `None` marks an absent edge.
///
/// This is the boundary where the textual "no edge" convention becomes the
/// core's: the `*` token turns into `None` here and the distance-domain
/// sentinel never appears in this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    pub size: usize,
    pub rows: Vec<Vec<Option<Weight>>>,
}

/// Parse every case in the input stream, in order.
///
/// The declared case count is informational only; a mismatch with the
/// actual content is tolerated with a warning.
pub fn parse_cases(input: &str) -> Result<Vec<WeightMatrix>, MatrixError> {
    let mut tokens = input.split_whitespace();

    let declared = tokens.next().ok_or(MatrixError::Empty)?;
    let declared: usize = declared.parse().map_err(|_| MatrixError::BadToken {
        token: declared.to_string(),
    })?;

    let mut cases = Vec::new();
    while let Some(token) = tokens.next() {
        let found: i64 = token.parse().map_err(|_| MatrixError::BadToken {
            token: token.to_string(),
        })?;
        if found < 1 || found > MAX_VERTICES as i64 {
            return Err(MatrixError::VertexCountOutOfRange { found });
        }
        let size = found as usize;

        let mut rows = Vec::with_capacity(size);
        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                let Some(cell) = tokens.next() else {
                    return Err(MatrixError::Truncated {
                        case: cases.len() + 1,
                        expected: size * size,
                        found: rows.len() * size + row.len(),
                    });
                };
                row.push(parse_cell(cell)?);
            }
            rows.push(row);
        }
        cases.push(WeightMatrix { size, rows });
    }

    if declared != cases.len() {
        warn!(
            declared,
            found = cases.len(),
            "case count in header does not match input content"
        );
    }
    Ok(cases)
}

fn parse_cell(token: &str) -> Result<Option<Weight>, MatrixError> {
    if token == NO_EDGE_TOKEN {
        return Ok(None);
    }
    token
        .parse::<Weight>()
        .map(Some)
        .map_err(|_| MatrixError::BadToken {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_case_with_absent_edges() {
        let cases = parse_cases("1\n3\n0 3 8\n* 0 -2\n* * 0\n").unwrap();
        assert_eq!(cases.len(), 1);
        let case = &cases[0];
        assert_eq!(case.size, 3);
        assert_eq!(case.rows[0], vec![Some(0), Some(3), Some(8)]);
        assert_eq!(case.rows[1], vec![None, Some(0), Some(-2)]);
        assert_eq!(case.rows[2], vec![None, None, Some(0)]);
    }

    #[test]
    fn parses_multiple_cases_in_order() {
        let cases = parse_cases("2  1 0  2 0 5 * 0").unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].size, 1);
        assert_eq!(cases[1].size, 2);
        assert_eq!(cases[1].rows[0], vec![Some(0), Some(5)]);
        assert_eq!(cases[1].rows[1], vec![None, Some(0)]);
    }

    #[test]
    fn count_mismatch_is_tolerated() {
        let cases = parse_cases("5  1 0").unwrap();
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_cases("  \n "), Err(MatrixError::Empty));
    }

    #[test]
    fn garbage_cell_is_an_error() {
        let err = parse_cases("1 2 0 x * 0").unwrap_err();
        assert_eq!(
            err,
            MatrixError::BadToken {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn truncated_case_is_an_error() {
        let err = parse_cases("1 2 0 1 *").unwrap_err();
        assert_eq!(
            err,
            MatrixError::Truncated {
                case: 1,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        let err = parse_cases("1 500").unwrap_err();
        assert_eq!(err, MatrixError::VertexCountOutOfRange { found: 500 });
    }
}
