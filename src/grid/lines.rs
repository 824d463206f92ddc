//! Edge map → ordered horizontal and vertical line positions.
use super::peaks::{find_peaks, merge_peaks};
use super::projection::project_edges;
use crate::image::LumaImage;
use serde::{Deserialize, Serialize};

/// Knobs for projection peak finding.
///
/// - `min_line_gap`: lines closer than this (pixels) are one line; half of it
///   is the local-maximum window.
/// - `min_peak_strength`: projection floor below which no peak is reported.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct LineOptions {
    pub min_line_gap: usize,
    pub min_peak_strength: u32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            min_line_gap: 8,
            min_peak_strength: 5,
        }
    }
}

/// Detected line positions, both ascending and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LineSet {
    /// y positions
    pub horizontal: Vec<usize>,
    /// x positions
    pub vertical: Vec<usize>,
}

pub fn detect_lines(edges: &LumaImage, opts: &LineOptions) -> LineSet {
    let (rows, cols) = project_edges(edges);
    let gap = opts.min_line_gap;
    let h_peaks = find_peaks(&rows.values, gap, opts.min_peak_strength);
    let v_peaks = find_peaks(&cols.values, gap, opts.min_peak_strength);
    LineSet {
        horizontal: merge_peaks(h_peaks, gap),
        vertical: merge_peaks(v_peaks, gap),
    }
}
