#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod sequencer;
pub mod types;

// Stage modules: usable on their own for tooling and tests.
pub mod edges;
pub mod grid;
pub mod sequence;
pub mod throttle;

// --- High-level re-exports -------------------------------------------------

// Main entry points: sequencer + frames + results.
pub use crate::diagnostics::{GridSource, ProcessedFrame};
pub use crate::sequencer::{Frame, FrameError, PatternSequencer, PixelBuffer, SequencerParams};
pub use crate::types::{Cell, CellCorners, Grid, NoteSequence, NoteStep, SEQUENCE_STEPS};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pattern_sequencer::prelude::*;
///
/// # fn main() {
/// let (w, h) = (320usize, 240usize);
/// let rgba = vec![0u8; w * h * 4];
///
/// let mut sequencer = PatternSequencer::new(SequencerParams::default());
/// let out = sequencer.process(&Frame::rgba(&rgba, w, h, 0.0)).unwrap();
/// println!("grid={} latency_ms={:.3}", out.grid.is_some(), out.processing_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::sequence::{Octave, PitchClass};
    pub use crate::{Frame, NoteSequence, PatternSequencer, ProcessedFrame, SequencerParams};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::edges::detect_edges;
    pub use crate::grid::{detect_grid, detect_lines, extract_grid, GridCache};
    pub use crate::image::{edges_to_rgba, grayscale};
    pub use crate::sequence::{map_to_notes, sample_cells};
    pub use crate::throttle::FrameThrottle;
}
