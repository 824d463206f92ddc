//! Pitch classes, scales, and the note-name → pitch mapping used by the audio
//! side of the sequencer.
//!
//! The mapper only emits pitch classes. Whoever plays the pattern appends an
//! octave (clamped to 2..=6, default 4) and scales velocity into a `[0, 1]`
//! gain.
use crate::types::{NoteSequence, SEQUENCE_STEPS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the twelve equal-tempered pitch classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl PitchClass {
    /// Semitones above C.
    pub fn semitone(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, non-empty list of scale degrees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PitchClass>", into = "Vec<PitchClass>")]
pub struct Scale {
    degrees: Vec<PitchClass>,
}

impl Scale {
    pub fn new(degrees: Vec<PitchClass>) -> Option<Self> {
        (!degrees.is_empty()).then_some(Self { degrees })
    }

    /// Major pentatonic on C: C D E G A.
    pub fn pentatonic() -> Self {
        use PitchClass::*;
        Self {
            degrees: vec![C, D, E, G, A],
        }
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Degree `index`, wrapping round-robin past the end.
    pub fn degree(&self, index: usize) -> PitchClass {
        self.degrees[index % self.degrees.len()]
    }

    pub fn degrees(&self) -> &[PitchClass] {
        &self.degrees
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::pentatonic()
    }
}

impl TryFrom<Vec<PitchClass>> for Scale {
    type Error = String;

    fn try_from(degrees: Vec<PitchClass>) -> Result<Self, Self::Error> {
        Scale::new(degrees).ok_or_else(|| "scale needs at least one degree".to_string())
    }
}

impl From<Scale> for Vec<PitchClass> {
    fn from(scale: Scale) -> Self {
        scale.degrees
    }
}

/// Playback octave, clamped to the range the audio engine supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Octave(u8);

impl Octave {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 6;

    pub fn new(octave: i32) -> Self {
        Self(octave.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Octave {
    fn default() -> Self {
        Self(4)
    }
}

/// Pitch class in a concrete octave, e.g. `A4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: Octave,
}

impl Pitch {
    /// MIDI note number, C4 = 60.
    pub fn midi(self) -> u8 {
        12 * (self.octave.get() + 1) + self.class.semitone()
    }

    /// Equal-tempered frequency with A4 = 440 Hz.
    pub fn frequency_hz(self) -> f32 {
        440.0 * 2f32.powf((self.midi() as f32 - 69.0) / 12.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave.get())
    }
}

/// A sounding step ready for a synthesizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PitchedStep {
    pub step: usize,
    pub pitch: Pitch,
    /// `min(1, velocity / 255)`
    pub gain: f32,
}

impl NoteSequence {
    /// Resolve every step in `octave`; silent steps map to `None`.
    pub fn pitched(&self, octave: Octave) -> [Option<PitchedStep>; SEQUENCE_STEPS] {
        let mut out = [None; SEQUENCE_STEPS];
        for step in self.iter() {
            let Some(class) = step.note else { continue };
            out[step.step % SEQUENCE_STEPS] = Some(PitchedStep {
                step: step.step,
                pitch: Pitch { class, octave },
                gain: (step.velocity as f32 / 255.0).min(1.0),
            });
        }
        out
    }
}
