use pattern_sequencer::config::load_config;
use pattern_sequencer::image::io::{load_rgba_image, save_luma_png, write_json_file};
use pattern_sequencer::{Frame, PatternSequencer, ProcessedFrame};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input_path)?;
    let frame = Frame::rgba(&image.data, image.width, image.height, 0.0);

    let mut sequencer = PatternSequencer::new(config.params.clone());
    let out = sequencer.process(&frame).map_err(|e| e.to_string())?;

    print_text_summary(&out);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &out)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.grayscale_png {
        save_luma_png(&out.grayscale, path)?;
        println!("Grayscale image written to {}", path.display());
    }
    if let Some(path) = &config.output.edges_png {
        save_luma_png(&out.edges, path)?;
        println!("Edge map written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: frame_to_sequence <config.json>".to_string()
}

fn print_text_summary(out: &ProcessedFrame) {
    println!("Sequencer summary");
    println!("  frame: {}x{}", out.width, out.height);
    println!(
        "  lines: {} horizontal, {} vertical",
        out.lines.horizontal.len(),
        out.lines.vertical.len()
    );
    match &out.grid {
        Some(grid) => println!("  grid: {}x{} ({:?})", grid.rows, grid.cols, out.grid_source),
        None => println!("  grid: not found"),
    }
    if let Some(seq) = &out.note_sequence {
        let pattern: Vec<String> = seq
            .iter()
            .map(|s| s.note.map_or_else(|| "-".to_string(), |n| n.to_string()))
            .collect();
        println!("  notes: {}", pattern.join(" "));
    }
    for stage in &out.timings.stages {
        println!("  {:<12} {:>8.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  total        {:>8.3} ms", out.processing_ms);
}
