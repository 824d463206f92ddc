//! Parameter types configuring the sequencer stages.
//!
//! Each stage owns its option struct; [`SequencerParams`] groups them so a
//! single JSON document can configure the whole pipeline. Every field has a
//! default, so partial documents are fine.
//!
//! Defaults target a ~320×240 camera stream processed at 15 fps.

use crate::grid::{CacheOptions, GridOptions, LineOptions};
use crate::sequence::MappingOptions;
use crate::throttle::ThrottleOptions;
use serde::{Deserialize, Serialize};

/// Sobel stage knobs.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Magnitudes at or below this are dropped from the edge map.
    pub threshold: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self { threshold: 40.0 }
    }
}

/// Pipeline-wide parameters.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SequencerParams {
    pub edges: EdgeOptions,
    pub lines: LineOptions,
    pub grid: GridOptions,
    pub cache: CacheOptions,
    pub mapping: MappingOptions,
    pub throttle: ThrottleOptions,
}
