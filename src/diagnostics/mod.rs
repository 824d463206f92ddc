//! Per-frame diagnostics returned by the sequencer.
//!
//! [`ProcessedFrame`] carries the intermediate buffers for overlays, the
//! chosen grid and note sequence, where the grid came from, and a timing
//! breakdown per stage.

pub mod frame;
pub mod timing;

pub use crate::grid::GridSource;
pub use frame::ProcessedFrame;
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
