//! Distance-matrix rendering and JSON result records

use chrono::Local;
use serde::Serialize;

use crate::config::NO_EDGE_TOKEN;
use crate::graph::{DistanceMatrix, Weight};

/// Render a distance matrix as tab-separated cells, `*` for an
/// unreachable pair, one line per row.
pub fn render_matrix(matrix: &DistanceMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        for cell in row {
            match cell {
                Some(d) => out.push_str(&d.to_string()),
                None => out.push_str(NO_EDGE_TOKEN),
            }
            out.push('\t');
        }
        out.push('\n');
    }
    out
}

/// One solved (or failed) case as a JSON Lines record.
#[derive(Debug, Serialize)]
pub struct CaseRecord {
    pub timestamp: String,
    pub case: usize,
    pub vertices: usize,
    pub negative_cycle: bool,
    pub distances: Option<Vec<Vec<Option<Weight>>>>,
}

impl CaseRecord {
    pub fn solved(case: usize, matrix: &DistanceMatrix) -> Self {
        Self {
            timestamp: now(),
            case,
            vertices: matrix.size(),
            negative_cycle: false,
            distances: Some(matrix.rows().map(|row| row.to_vec()).collect()),
        }
    }

    pub fn negative_cycle(case: usize, vertices: usize) -> Self {
        Self {
            timestamp: now(),
            case,
            vertices,
            negative_cycle: true,
            distances: None,
        }
    }
}

/// Write one record to stdout as a JSON line.
pub fn emit_json(record: &CaseRecord) {
    match serde_json::to_string(record) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Warning: failed to serialize case record: {}", e),
    }
}

fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
