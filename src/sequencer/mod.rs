//! Frame-to-sequence orchestration.
//!
//! - [`frame`]: typed camera frames and boundary validation.
//! - [`params`]: per-stage options grouped for configuration.
//! - `pipeline`: the [`PatternSequencer`] owning the cross-frame state.

pub mod frame;
pub mod params;
mod pipeline;

pub use frame::{Frame, FrameError, PixelBuffer};
pub use params::{EdgeOptions, SequencerParams};
pub use pipeline::PatternSequencer;
