//! Grid detection from the edge map.
//!
//! - [`projection`]: sum edge magnitude per row and per column.
//! - [`peaks`]: local-maximum filter plus cluster-and-pick-strongest merge.
//! - [`lines`]: edge map → ordered horizontal/vertical line positions.
//! - [`extract`]: line sets → bounded rectangular [`Grid`](crate::types::Grid).
//! - [`cache`]: reuse the last good grid for a few failed frames.

pub mod cache;
pub mod extract;
pub mod lines;
pub mod peaks;
pub mod projection;

pub use cache::{CacheOptions, GridCache, GridSource};
pub use extract::{extract_grid, subsample_lines, GridOptions};
pub use lines::{detect_lines, LineOptions, LineSet};
pub use peaks::{find_peaks, merge_peaks, Peak};
pub use projection::{project_edges, Projection};

use crate::image::LumaImage;
use crate::types::Grid;

/// Edge map → grid in one call.
pub fn detect_grid(
    edges: &LumaImage,
    line_opts: &LineOptions,
    grid_opts: &GridOptions,
) -> Option<Grid> {
    let lines = detect_lines(edges, line_opts);
    extract_grid(&lines, edges.w, edges.h, grid_opts)
}
