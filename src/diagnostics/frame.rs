//! Result of one processed frame, handed to the UI and audio collaborators.
use super::timing::TimingBreakdown;
use crate::grid::{GridSource, LineSet};
use crate::image::LumaImage;
use crate::types::{Grid, NoteSequence};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFrame {
    #[serde(skip)]
    pub grayscale: LumaImage,
    #[serde(skip)]
    pub edges: LumaImage,
    /// Edges as RGBA (value replicated into R, G, B; alpha 255).
    #[serde(skip)]
    pub edge_display: Vec<u8>,
    pub grid: Option<Grid>,
    /// Present exactly when `grid` is.
    pub note_sequence: Option<NoteSequence>,
    pub width: usize,
    pub height: usize,
    pub timestamp_ms: f64,
    pub grid_source: GridSource,
    /// Lines detected in this frame, before extraction.
    pub lines: LineSet,
    pub timings: TimingBreakdown,
    /// Total wall-clock time of the call.
    pub processing_ms: f64,
}

impl ProcessedFrame {
    pub fn found_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Equality ignoring wall-clock measurements.
    pub fn same_output(&self, other: &ProcessedFrame) -> bool {
        self.grayscale == other.grayscale
            && self.edges == other.edges
            && self.edge_display == other.edge_display
            && self.grid == other.grid
            && self.note_sequence == other.note_sequence
            && self.width == other.width
            && self.height == other.height
            && self.timestamp_ms == other.timestamp_ms
            && self.grid_source == other.grid_source
            && self.lines == other.lines
    }
}
