use pattern_sequencer::sequence::Octave;
use pattern_sequencer::{Frame, PatternSequencer, SequencerParams};

const WIDTH: usize = 194;
const HEIGHT: usize = 38;
const PERIOD: usize = 12;

/// Three rows of sixteen cells separated by 2-pixel black lines.
fn painted_pattern() -> Vec<u8> {
    let bright = [[250u8, 200, 60], [90, 220, 240], [240, 140, 230]];
    let dark = [40u8, 40, 60];
    let mut buf = Vec::with_capacity(WIDTH * HEIGHT * 4);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let [r, g, b] = if x % PERIOD < 2 || y % PERIOD < 2 {
                [0, 0, 0]
            } else {
                let col = x / PERIOD;
                if y / PERIOD == 0 && [0, 3, 5, 8, 10, 12, 14].contains(&col) {
                    bright[col % 3]
                } else {
                    dark
                }
            };
            buf.extend_from_slice(&[r, g, b, 255]);
        }
    }
    buf
}

fn main() {
    // Demo stub: paints a grid pattern and runs the sequencer once
    let rgba = painted_pattern();
    let mut sequencer = PatternSequencer::new(SequencerParams::default());
    let out = match sequencer.process(&Frame::rgba(&rgba, WIDTH, HEIGHT, 0.0)) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    match (&out.grid, &out.note_sequence) {
        (Some(grid), Some(seq)) => {
            println!("grid={}x{} latency_ms={:.3}", grid.rows, grid.cols, out.processing_ms);
            let pitched = seq.pitched(Octave::default());
            for (step, pitch) in seq.iter().zip(pitched.iter()) {
                match pitch {
                    Some(p) => println!(
                        "  step {:>2}: {:<3} {:>7.2} Hz  vel={}",
                        step.step,
                        p.pitch.to_string(),
                        p.pitch.frequency_hz(),
                        step.velocity
                    ),
                    None => println!("  step {:>2}: -", step.step),
                }
            }
        }
        _ => println!("no grid found latency_ms={:.3}", out.processing_ms),
    }
}
