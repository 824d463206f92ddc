//! Edge detection on the luminance buffer.
//!
//! A fixed-threshold Sobel operator: deterministic and independent of image
//! statistics, so the same frame always yields the same edge map.

pub mod sobel;

pub use sobel::{detect_edges, magnitude};
