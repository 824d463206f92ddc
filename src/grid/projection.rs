//! 1-D projections of the edge map.
//!
//! Summing edge magnitude along each row (and each column) turns a painted
//! grid line into a spike in the corresponding projection.
use crate::image::{ImageView, LumaImage};

/// Per-row or per-column summed edge magnitude.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection {
    pub values: Vec<u32>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Project the edge map onto both axes.
///
/// Returns `(rows, cols)`: `rows` has one entry per image row (length =
/// height) and feeds horizontal line detection, `cols` one entry per column
/// (length = width) for vertical lines.
pub fn project_edges(edges: &LumaImage) -> (Projection, Projection) {
    let mut rows = vec![0u32; edges.height()];
    let mut cols = vec![0u32; edges.width()];
    for (y, row) in edges.rows().enumerate() {
        let mut row_sum = 0u32;
        for (col, &v) in cols.iter_mut().zip(row) {
            row_sum += v as u32;
            *col += v as u32;
        }
        rows[y] = row_sum;
    }
    (Projection { values: rows }, Projection { values: cols })
}
