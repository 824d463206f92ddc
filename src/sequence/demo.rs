//! Fixed pattern used before a camera is available.
use super::pitch::PitchClass;
use crate::types::NoteSequence;

/// C-E-G-A pentatonic figure over 16 steps.
pub fn demo_sequence() -> NoteSequence {
    use PitchClass::*;
    NoteSequence::from_steps([
        (Some(C), 200),
        (None, 0),
        (None, 0),
        (Some(E), 180),
        (None, 0),
        (Some(G), 220),
        (None, 0),
        (None, 0),
        (Some(A), 190),
        (None, 0),
        (Some(C), 160),
        (None, 0),
        (Some(E), 200),
        (None, 0),
        (Some(G), 180),
        (None, 0),
    ])
}
