//! Thresholded Sobel gradient magnitude.
//!
//! - Convolves the 3×3 Sobel pair on every pixel strictly inside the frame.
//! - Stores `min(255, sqrt(gx^2 + gy^2))`, truncated to an integer, when it
//!   exceeds the threshold and 0 otherwise.
//! - The outermost 1-pixel ring is always 0; the kernel is undefined there.
//!
//! Complexity: O(W·H), one output buffer.
use crate::image::{ImageView, ImageViewMut, LumaImage};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Sobel response at an interior pixel, returned as `(gx, gy)`.
#[inline]
fn convolve_at(rows: &[&[u8]; 3], x: usize) -> (i32, i32) {
    let mut sum_x = 0i32;
    let mut sum_y = 0i32;
    for (ky, row) in rows.iter().enumerate() {
        let kx_row = &SOBEL_KERNEL_X[ky];
        let ky_row = &SOBEL_KERNEL_Y[ky];
        for k in 0..3 {
            let sample = row[x + k - 1] as i32;
            sum_x += sample * kx_row[k];
            sum_y += sample * ky_row[k];
        }
    }
    (sum_x, sum_y)
}

/// Clamped gradient magnitude of a Sobel response.
#[inline]
pub fn magnitude(gx: i32, gy: i32) -> f32 {
    (((gx * gx + gy * gy) as f32).sqrt()).min(255.0)
}

/// Compute the thresholded edge map of a luminance buffer.
pub fn detect_edges(gray: &LumaImage, threshold: f32) -> LumaImage {
    let (w, h) = (gray.width(), gray.height());
    let mut edges = LumaImage::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    for y in 1..h - 1 {
        let rows = [gray.row(y - 1), gray.row(y), gray.row(y + 1)];
        let out = edges.row_mut(y);
        for x in 1..w - 1 {
            let (gx, gy) = convolve_at(&rows, x);
            let mag = magnitude(gx, gy);
            if mag > threshold {
                out[x] = mag as u8;
            }
        }
    }
    edges
}
