//! Pixel buffers and conversions used by the pipeline.
//!
//! - [`RgbaView`]: borrowed color frame, produced once per frame by
//!   validation at the sequencer boundary.
//! - [`LumaImage`]: owned 8-bit single-channel buffer (luminance, edges).
//! - [`convert`]: grayscale and edge-display conversions.
//! - [`io`]: file helpers for the command-line tools.

pub mod convert;
pub mod io;
pub mod luma;
pub mod rgba;
pub mod traits;

pub use self::convert::{edges_to_rgba, grayscale, luma};
pub use self::luma::LumaImage;
pub use self::rgba::{ChannelOrder, RgbaView};
pub use self::traits::{ImageView, ImageViewMut, Rows};
