//! Sequencer pipeline driving one frame from pixels to notes.
//!
//! Stages run strictly in order: grayscale → Sobel edges → line projection →
//! grid extraction → grid cache → cell sampling → note mapping. The only state
//! kept between calls is the grid cache and the throttle counter, both owned
//! by the [`PatternSequencer`]; use one instance per camera stream.
//!
//! Typical usage:
//! ```no_run
//! use pattern_sequencer::{Frame, PatternSequencer, SequencerParams};
//!
//! # fn example(rgba: &[u8]) -> Result<(), pattern_sequencer::FrameError> {
//! let mut sequencer = PatternSequencer::new(SequencerParams::default());
//! let frame = Frame::rgba(rgba, 320, 240, 0.0);
//! if let Some(out) = sequencer.offer(&frame)? {
//!     if let Some(seq) = &out.note_sequence {
//!         println!("{} active steps", seq.active_count());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
use super::frame::{Frame, FrameError};
use super::params::SequencerParams;
use crate::diagnostics::{elapsed_ms, ProcessedFrame, TimingBreakdown};
use crate::edges::detect_edges;
use crate::grid::{detect_lines, extract_grid, GridCache};
use crate::image::{edges_to_rgba, grayscale};
use crate::sequence::{map_to_notes, sample_cells};
use crate::throttle::FrameThrottle;
use log::debug;
use std::time::Instant;

pub struct PatternSequencer {
    params: SequencerParams,
    cache: GridCache,
    throttle: FrameThrottle,
}

impl PatternSequencer {
    pub fn new(params: SequencerParams) -> Self {
        let cache = GridCache::new(params.cache.clone());
        let throttle = FrameThrottle::new(&params.throttle);
        Self {
            params,
            cache,
            throttle,
        }
    }

    pub fn params(&self) -> &SequencerParams {
        &self.params
    }

    /// Advance the throttle by one offered frame.
    pub fn should_process_frame(&mut self) -> bool {
        self.throttle.should_process()
    }

    pub fn target_fps(&self) -> f32 {
        self.params.throttle.target_fps
    }

    /// Throttle, then process. `Ok(None)` means the frame was skipped.
    pub fn offer(&mut self, frame: &Frame<'_>) -> Result<Option<ProcessedFrame>, FrameError> {
        if !self.should_process_frame() {
            return Ok(None);
        }
        self.process(frame).map(Some)
    }

    /// Forget the cached grid.
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Run every stage on `frame`.
    pub fn process(&mut self, frame: &Frame<'_>) -> Result<ProcessedFrame, FrameError> {
        let rgba = frame.validate()?;
        let (width, height) = (rgba.w, rgba.h);
        debug!("PatternSequencer::process start w={} h={}", width, height);
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let gray = timings.time("grayscale", || grayscale(&rgba));
        let edges = timings.time("edges", || detect_edges(&gray, self.params.edges.threshold));
        let edge_display = timings.time("edge_display", || edges_to_rgba(&edges));

        let lines = timings.time("lines", || detect_lines(&edges, &self.params.lines));
        let detected = timings.time("grid", || {
            extract_grid(&lines, width, height, &self.params.grid)
        });
        debug!(
            "PatternSequencer::process lines h={} v={} detected={}",
            lines.horizontal.len(),
            lines.vertical.len(),
            detected.is_some()
        );

        let (grid, grid_source) = self.cache.update(detected);
        debug!("PatternSequencer::process grid_source={:?}", grid_source);

        let note_sequence = grid.as_ref().map(|grid| {
            let cells = timings.time("sample", || sample_cells(&rgba, grid));
            timings.time("map", || map_to_notes(&cells, &self.params.mapping))
        });

        let processing_ms = elapsed_ms(total_start);
        timings.total_ms = processing_ms;

        Ok(ProcessedFrame {
            grayscale: gray,
            edges,
            edge_display,
            grid,
            note_sequence,
            width,
            height,
            timestamp_ms: frame.timestamp_ms,
            grid_source,
            lines,
            timings,
            processing_ms,
        })
    }
}

impl Default for PatternSequencer {
    fn default() -> Self {
        Self::new(SequencerParams::default())
    }
}
