//! Camera frames at the pipeline boundary.
//!
//! A [`Frame`] is validated once by [`Frame::validate`]; every stage after
//! that reads through the resulting [`RgbaView`].
use crate::image::{ChannelOrder, RgbaView};
use std::fmt;

/// Pixel payload, one variant per supported camera layout.
#[derive(Clone, Copy, Debug)]
pub enum PixelBuffer<'a> {
    /// Packed R, G, B, A bytes, row-major.
    Rgba8(&'a [u8]),
    /// Packed B, G, R, A bytes, row-major.
    Bgra8(&'a [u8]),
}

impl<'a> PixelBuffer<'a> {
    fn parts(self) -> (&'a [u8], ChannelOrder) {
        match self {
            PixelBuffer::Rgba8(data) => (data, ChannelOrder::Rgba),
            PixelBuffer::Bgra8(data) => (data, ChannelOrder::Bgra),
        }
    }
}

/// One camera frame, borrowed for the duration of a processing call.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub pixels: PixelBuffer<'a>,
    pub width: usize,
    pub height: usize,
    /// Capture time; echoed back, never checked for ordering.
    pub timestamp_ms: f64,
}

impl<'a> Frame<'a> {
    pub fn rgba(data: &'a [u8], width: usize, height: usize, timestamp_ms: f64) -> Self {
        Self {
            pixels: PixelBuffer::Rgba8(data),
            width,
            height,
            timestamp_ms,
        }
    }

    /// Check the buffer against the declared dimensions.
    pub fn validate(&self) -> Result<RgbaView<'a>, FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::ZeroSized {
                width: self.width,
                height: self.height,
            });
        }
        let (data, order) = self.pixels.parts();
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FrameError::BufferTooSmall {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() < expected {
            return Err(FrameError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbaView::packed(self.width, self.height, order, data))
    }
}

/// Caller contract violations detected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    ZeroSized { width: usize, height: usize },
    BufferTooSmall { expected: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ZeroSized { width, height } => {
                write!(f, "frame has zero size ({width}x{height})")
            }
            FrameError::BufferTooSmall { expected, actual } => write!(
                f,
                "pixel buffer too small: need {expected} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for FrameError {}
