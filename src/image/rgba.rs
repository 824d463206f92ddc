//! Borrowed 4-bytes-per-pixel color view.
//!
//! The view is only constructed through validated frames, so row slicing
//! never goes out of bounds. Channel order is resolved here, which lets every
//! downstream stage read plain `[r, g, b]` triples.

/// Byte layout of a 4-channel pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgba,
    Bgra,
}

impl ChannelOrder {
    #[inline]
    fn rgb(self, px: &[u8]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgba => [px[0], px[1], px[2]],
            ChannelOrder::Bgra => [px[2], px[1], px[0]],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (`4 * w` for packed buffers).
    pub stride: usize,
    pub order: ChannelOrder,
    pub data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Packed view; the caller guarantees `data.len() >= 4 * w * h`.
    pub(crate) fn packed(w: usize, h: usize, order: ChannelOrder, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: 4 * w,
            order,
            data,
        }
    }

    #[inline]
    pub fn row_bytes(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + 4 * self.w]
    }

    #[inline]
    pub(crate) fn order_rgb(&self, px: &[u8]) -> [u8; 3] {
        self.order.rgb(px)
    }

    /// Color channels of the pixel at (x, y), alpha dropped.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 4 * x;
        self.order.rgb(&self.data[i..i + 4])
    }

    /// Like [`rgb`](Self::rgb) but tolerates coordinates outside the frame.
    #[inline]
    pub fn rgb_checked(&self, x: i64, y: i64) -> Option<[u8; 3]> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return None;
        }
        Some(self.rgb(x as usize, y as usize))
    }

    /// Raw channel lookup for degenerate geometry: any byte missing from the
    /// buffer reads as 0.
    pub fn rgb_or_zero(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y.saturating_mul(self.stride).saturating_add(4 * x);
        let byte = |k: usize| self.data.get(i + k).copied().unwrap_or(0);
        match self.order {
            ChannelOrder::Rgba => [byte(0), byte(1), byte(2)],
            ChannelOrder::Bgra => [byte(2), byte(1), byte(0)],
        }
    }
}
