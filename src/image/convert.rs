//! Color-space conversions at both ends of the edge stage.
//!
//! - [`grayscale`]: ITU-R BT.601 luma, `round(0.299 R + 0.587 G + 0.114 B)`.
//! - [`edges_to_rgba`]: replicate a single-channel map into an opaque RGBA
//!   buffer for overlay rendering.
use super::luma::LumaImage;
use super::rgba::RgbaView;

const R_COEF: f64 = 0.299;
const G_COEF: f64 = 0.587;
const B_COEF: f64 = 0.114;

/// Luma of one color triple, rounded to the nearest integer.
#[inline]
pub fn luma([r, g, b]: [u8; 3]) -> u8 {
    let v = R_COEF * r as f64 + G_COEF * g as f64 + B_COEF * b as f64;
    v.round().clamp(0.0, 255.0) as u8
}

/// Reduce a color frame to one luminance value per pixel.
pub fn grayscale(rgba: &RgbaView<'_>) -> LumaImage {
    let mut out = LumaImage::new(rgba.w, rgba.h);
    for y in 0..rgba.h {
        let src = rgba.row_bytes(y);
        let dst_start = y * rgba.w;
        let dst = &mut out.data[dst_start..dst_start + rgba.w];
        for (x, px) in dst.iter_mut().enumerate() {
            let i = 4 * x;
            *px = luma(rgba.order_rgb(&src[i..i + 4]));
        }
    }
    out
}

/// Edge map as a displayable RGBA image: value in R, G and B, alpha 255.
pub fn edges_to_rgba(edges: &LumaImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(edges.data.len() * 4);
    for &v in &edges.data {
        out.extend_from_slice(&[v, v, v, 255]);
    }
    out
}
