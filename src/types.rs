use crate::sequence::pitch::PitchClass;
use nalgebra::Point2;
use serde::Serialize;

/// Number of steps in one sequencer pattern.
pub const SEQUENCE_STEPS: usize = 16;

/// Corner points of one grid cell, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellCorners {
    pub top_left: Point2<usize>,
    pub top_right: Point2<usize>,
    pub bottom_left: Point2<usize>,
    pub bottom_right: Point2<usize>,
}

impl CellCorners {
    /// Axis-aligned cell spanning `[x0, x1] × [y0, y1]`.
    pub fn from_bounds(x0: usize, x1: usize, y0: usize, y1: usize) -> Self {
        Self {
            top_left: Point2::new(x0, y0),
            top_right: Point2::new(x1, y0),
            bottom_left: Point2::new(x0, y1),
            bottom_right: Point2::new(x1, y1),
        }
    }
}

/// Rectangular partition of the frame, `rows × cols` cells, row-major.
///
/// Never mutated after creation; a fresh detection replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<CellCorners>>,
}

impl Grid {
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &CellCorners {
        &self.cells[row][col]
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// One sampled grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub center: Point2<usize>,
    /// Averaged `[r, g, b]`
    pub color: [u8; 3],
    pub brightness: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NoteStep {
    pub step: usize,
    /// `None` renders the step silent.
    pub note: Option<PitchClass>,
    pub velocity: u8,
}

/// Exactly [`SEQUENCE_STEPS`] steps with contiguous indices `0..16`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteSequence {
    steps: Vec<NoteStep>,
}

impl NoteSequence {
    /// Build a sequence from per-step `(note, velocity)` pairs.
    pub fn from_steps(steps: [(Option<PitchClass>, u8); SEQUENCE_STEPS]) -> Self {
        let steps = steps
            .into_iter()
            .enumerate()
            .map(|(step, (note, velocity))| NoteStep {
                step,
                note,
                velocity,
            })
            .collect();
        Self { steps }
    }

    /// All-silent pattern.
    pub fn silent() -> Self {
        Self::from_steps([(None, 0); SEQUENCE_STEPS])
    }

    pub fn steps(&self) -> &[NoteStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&NoteStep> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoteStep> {
        self.steps.iter()
    }

    /// Number of steps that carry a note.
    pub fn active_count(&self) -> usize {
        self.steps.iter().filter(|s| s.note.is_some()).count()
    }
}

impl<'a> IntoIterator for &'a NoteSequence {
    type Item = &'a NoteStep;
    type IntoIter = std::slice::Iter<'a, NoteStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
