//! Ordered line sets → dense grid of cell corners.
//!
//! Lines within `border_margin` pixels of the frame edge are dropped, then the
//! frame bounds (`0` and `dim - 1`) are added as synthetic lines. When more
//! lines remain than `max + 1`, evenly spaced indices are picked so the first
//! and last lines survive. Cells are read directly from consecutive selected
//! lines; there is no interpolation or perspective warp.
use super::lines::LineSet;
use crate::types::{CellCorners, Grid};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct GridOptions {
    pub max_rows: usize,
    pub max_cols: usize,
    /// Lines closer than this to an image edge cannot bound a usable cell.
    pub border_margin: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            max_rows: 8,
            max_cols: 16,
            border_margin: 2,
        }
    }
}

/// Pick `target` evenly spaced entries, `index = round(i * (n - 1) / (target - 1))`.
pub fn subsample_lines(lines: &[usize], target: usize) -> Vec<usize> {
    let n = lines.len();
    if n <= target || target <= 1 {
        return lines.to_vec();
    }
    let mut out: Vec<usize> = (0..target)
        .map(|i| {
            let idx = (i as f64 * (n - 1) as f64 / (target - 1) as f64).round() as usize;
            lines[idx.min(n - 1)]
        })
        .collect();
    out.sort_unstable();
    out
}

fn bounded_lines(lines: &[usize], dim: usize, margin: usize) -> Vec<usize> {
    let last = dim - 1;
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(0);
    out.extend(
        lines
            .iter()
            .copied()
            .filter(|&p| p >= margin && p + margin <= last),
    );
    out.push(last);
    out
}

/// Build the grid, or `None` when the frame does not show one.
///
/// A miss is the normal outcome for frames without a visible pattern: fewer
/// than two detected lines on either axis, or a frame too small to hold an
/// interior.
pub fn extract_grid(lines: &LineSet, width: usize, height: usize, opts: &GridOptions) -> Option<Grid> {
    if lines.horizontal.len() < 2 || lines.vertical.len() < 2 {
        return None;
    }
    if width < 3 || height < 3 {
        return None;
    }

    let h_lines = bounded_lines(&lines.horizontal, height, opts.border_margin);
    let v_lines = bounded_lines(&lines.vertical, width, opts.border_margin);

    let h_sel = subsample_lines(&h_lines, (opts.max_rows + 1).min(h_lines.len()));
    let v_sel = subsample_lines(&v_lines, (opts.max_cols + 1).min(v_lines.len()));

    let rows = h_sel.len() - 1;
    let cols = v_sel.len() - 1;

    let cells = h_sel
        .windows(2)
        .map(|ys| {
            v_sel
                .windows(2)
                .map(|xs| CellCorners::from_bounds(xs[0], xs[1], ys[0], ys[1]))
                .collect()
        })
        .collect();

    Some(Grid { rows, cols, cells })
}
