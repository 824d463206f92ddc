//! Grid cells → note sequence.
//!
//! - [`sampler`]: mean color and brightness per cell.
//! - [`mapper`]: color buckets → scale degrees, brightness → active steps.
//! - [`pitch`]: pitch classes, scales, and octave resolution for playback.
//! - [`demo`]: built-in pattern.

pub mod demo;
pub mod mapper;
pub mod pitch;
pub mod sampler;

pub use demo::demo_sequence;
pub use mapper::{color_key, map_to_notes, MappingOptions};
pub use pitch::{Octave, Pitch, PitchClass, PitchedStep, Scale};
pub use sampler::sample_cells;
