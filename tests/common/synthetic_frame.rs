/// Grid line thickness in pixels.
pub const LINE_PX: usize = 2;
/// Distance between consecutive grid lines.
pub const PERIOD: usize = 12;

pub const YELLOW: [u8; 3] = [250, 200, 60];
pub const CYAN: [u8; 3] = [90, 220, 240];
pub const PINK: [u8; 3] = [240, 140, 230];
pub const SLATE: [u8; 3] = [40, 40, 60];

/// Paints a `rows × cols` grid of colored cells separated by black lines.
///
/// Lines sit at `k * PERIOD` for `k = 0..=cols` (and likewise for rows), each
/// `LINE_PX` wide, so the outer lines touch the frame border. Cells are narrow
/// enough that every interior column lies within the peak window of a line.
pub fn painted_grid_rgba(
    rows: usize,
    cols: usize,
    color_at: impl Fn(usize, usize) -> [u8; 3],
) -> (Vec<u8>, usize, usize) {
    assert!(rows > 0 && cols > 0, "grid must have cells");
    let width = cols * PERIOD + LINE_PX;
    let height = rows * PERIOD + LINE_PX;
    let on_line = |v: usize| v % PERIOD < LINE_PX;

    let mut buf = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b] = if on_line(x) || on_line(y) {
                [0, 0, 0]
            } else {
                color_at(y / PERIOD, x / PERIOD)
            };
            buf.extend_from_slice(&[r, g, b, 255]);
        }
    }
    (buf, width, height)
}

/// Steps that light up in the demo pattern.
pub const DEMO_ACTIVE: [usize; 7] = [0, 3, 5, 8, 10, 12, 14];

/// Three rows of sixteen cells; the first row spells the demo pattern.
pub fn demo_pattern_rgba() -> (Vec<u8>, usize, usize) {
    painted_grid_rgba(3, 16, |row, col| match row {
        0 => match col {
            0 | 8 | 14 => YELLOW,
            3 | 10 => CYAN,
            5 | 12 => PINK,
            _ => SLATE,
        },
        1 => SLATE,
        _ => CYAN,
    })
}

pub fn uniform_rgba(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    let [r, g, b] = color;
    [r, g, b, 255]
        .iter()
        .copied()
        .cycle()
        .take(width * height * 4)
        .collect()
}

/// Swap R and B in place, turning an RGBA buffer into BGRA.
pub fn to_bgra(mut rgba: Vec<u8>) -> Vec<u8> {
    for px in rgba.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    rgba
}
