//! Sampled cells → 16-step note sequence.
//!
//! The first [`SEQUENCE_STEPS`] cells in row-major order become the steps;
//! missing cells are silent. Colors are quantized per channel to
//! `floor(c / bucket) * bucket`; each distinct bucket gets the next scale
//! degree in first-seen order, wrapping round-robin. The bucket table is local
//! to one call, so the same frame always maps the same way.
//!
//! A step sounds when its brightness exceeds the threshold. Velocity is the
//! cell brightness whether or not the step sounds.
use super::pitch::Scale;
use crate::types::{Cell, NoteSequence, SEQUENCE_STEPS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingOptions {
    pub scale: Scale,
    /// Strictly greater brightness activates a step.
    pub brightness_threshold: u8,
    /// Per-channel quantization step.
    pub color_bucket: u8,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            scale: Scale::pentatonic(),
            brightness_threshold: 128,
            color_bucket: 32,
        }
    }
}

/// Quantized color used to group similar cells.
pub fn color_key(color: [u8; 3], bucket: u8) -> [u8; 3] {
    let bucket = bucket.max(1);
    color.map(|c| c / bucket * bucket)
}

pub fn map_to_notes(cells: &[Cell], opts: &MappingOptions) -> NoteSequence {
    let cells = &cells[..cells.len().min(SEQUENCE_STEPS)];

    let mut degrees: HashMap<[u8; 3], usize> = HashMap::new();
    for cell in cells {
        let next = degrees.len();
        degrees
            .entry(color_key(cell.color, opts.color_bucket))
            .or_insert(next);
    }

    let mut steps = [(None, 0u8); SEQUENCE_STEPS];
    for (slot, cell) in steps.iter_mut().zip(cells) {
        let active = cell.brightness > opts.brightness_threshold;
        let note = active.then(|| {
            let index = degrees
                .get(&color_key(cell.color, opts.color_bucket))
                .copied()
                .unwrap_or(0);
            opts.scale.degree(index)
        });
        *slot = (note, cell.brightness);
    }
    NoteSequence::from_steps(steps)
}
