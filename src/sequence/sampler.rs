//! Per-cell color sampling.
//!
//! Each cell is represented by the mean color of a small square around its
//! center. The radius follows the cell width, `clamp(floor(w / 4), 1, 3)`, and
//! pixels outside the frame are skipped. A neighborhood with no in-frame
//! pixels falls back to the center pixel, reading missing channels as 0.
use crate::image::{luma, RgbaView};
use crate::types::{Cell, CellCorners, Grid};
use nalgebra::Point2;

const MIN_RADIUS: usize = 1;
const MAX_RADIUS: usize = 3;

fn sample_cell(frame: &RgbaView<'_>, corners: &CellCorners, row: usize, col: usize) -> Cell {
    let x_min = corners.top_left.x;
    let x_max = corners.top_right.x;
    let y_min = corners.top_left.y;
    let y_max = corners.bottom_left.y;

    let cx = (x_min + x_max) / 2;
    let cy = (y_min + y_max) / 2;
    let radius = (x_max.saturating_sub(x_min) / 4).clamp(MIN_RADIUS, MAX_RADIUS) as i64;

    let mut sum = [0u32; 3];
    let mut count = 0u32;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if let Some(px) = frame.rgb_checked(cx as i64 + dx, cy as i64 + dy) {
                for (acc, v) in sum.iter_mut().zip(px) {
                    *acc += v as u32;
                }
                count += 1;
            }
        }
    }

    if count == 0 {
        sum = frame.rgb_or_zero(cx, cy).map(u32::from);
        count = 1;
    }

    let color = sum.map(|s| (s as f64 / count as f64).round() as u8);
    Cell {
        row,
        col,
        center: Point2::new(cx, cy),
        color,
        brightness: luma(color),
    }
}

/// Sample every cell of `grid`, row-major.
pub fn sample_cells(frame: &RgbaView<'_>, grid: &Grid) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(grid.cell_count());
    for (r, row) in grid.cells.iter().enumerate() {
        for (c, corners) in row.iter().enumerate() {
            cells.push(sample_cell(frame, corners, r, c));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ChannelOrder;

    fn frame_with(w: usize, h: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(w * h * 4);
        for y in 0..h {
            for x in 0..w {
                let [r, g, b] = f(x, y);
                buf.extend_from_slice(&[r, g, b, 255]);
            }
        }
        buf
    }

    fn one_cell(x0: usize, x1: usize, y0: usize, y1: usize) -> Grid {
        Grid {
            rows: 1,
            cols: 1,
            cells: vec![vec![CellCorners::from_bounds(x0, x1, y0, y1)]],
        }
    }

    #[test]
    fn uniform_cell_reads_its_color() {
        let buf = frame_with(40, 40, |_, _| [250, 10, 10]);
        let view = RgbaView::packed(40, 40, ChannelOrder::Rgba, &buf);
        let cells = sample_cells(&view, &one_cell(0, 39, 0, 39));
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].center, Point2::new(19, 19));
        assert_eq!(cells[0].color, [250, 10, 10]);
        assert_eq!(cells[0].brightness, luma([250, 10, 10]));
    }

    #[test]
    fn average_rounds_half_up() {
        // Narrow cell -> radius 1 -> 3x3 window around (2, 2): columns 1..=3.
        let buf = frame_with(5, 5, |x, _| if x == 3 { [101, 0, 0] } else { [100, 0, 0] });
        let view = RgbaView::packed(5, 5, ChannelOrder::Rgba, &buf);
        let cells = sample_cells(&view, &one_cell(0, 4, 0, 4));
        // (6 * 100 + 3 * 101) / 9 = 100.33
        assert_eq!(cells[0].color, [100, 0, 0]);

        let buf = frame_with(2, 1, |x, _| if x == 0 { [10, 0, 0] } else { [11, 0, 0] });
        let view = RgbaView::packed(2, 1, ChannelOrder::Rgba, &buf);
        let cells = sample_cells(&view, &one_cell(0, 1, 0, 0));
        // Window clipped to the two pixels: 10.5 -> 11
        assert_eq!(cells[0].color, [11, 0, 0]);
    }

    #[test]
    fn radius_follows_cell_width() {
        // Ring of white at distance 3 from the center only enters a radius-3 window.
        let center = 20usize;
        let buf = frame_with(41, 41, |x, y| {
            let d = x.abs_diff(center).max(y.abs_diff(center));
            if d == 3 {
                [255, 255, 255]
            } else {
                [0, 0, 0]
            }
        });
        let view = RgbaView::packed(41, 41, ChannelOrder::Rgba, &buf);
        let wide = sample_cells(&view, &one_cell(0, 40, 0, 40));
        assert_eq!(wide[0].center, Point2::new(20, 20));
        assert!(wide[0].brightness > 0);
        let narrow = sample_cells(&view, &one_cell(16, 24, 16, 24));
        assert_eq!(narrow[0].center, Point2::new(20, 20));
        assert_eq!(narrow[0].brightness, 0);
    }

    #[test]
    fn center_outside_frame_reads_zero() {
        let buf = frame_with(4, 4, |_, _| [200, 200, 200]);
        let view = RgbaView::packed(4, 4, ChannelOrder::Rgba, &buf);
        let cells = sample_cells(&view, &one_cell(20, 40, 20, 40));
        assert_eq!(cells[0].color, [0, 0, 0]);
        assert_eq!(cells[0].brightness, 0);
    }

    #[test]
    fn cells_come_out_row_major() {
        let buf = frame_with(30, 20, |x, y| [x as u8 * 8, y as u8 * 12, 0]);
        let view = RgbaView::packed(30, 20, ChannelOrder::Rgba, &buf);
        let grid = Grid {
            rows: 2,
            cols: 3,
            cells: (0..2)
                .map(|r| {
                    (0..3)
                        .map(|c| CellCorners::from_bounds(c * 10, c * 10 + 9, r * 10, r * 10 + 9))
                        .collect()
                })
                .collect(),
        };
        let cells = sample_cells(&view, &grid);
        let order: Vec<(usize, usize)> = cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
