mod common;

use common::synthetic_frame::{
    demo_pattern_rgba, to_bgra, uniform_rgba, DEMO_ACTIVE, PERIOD, YELLOW,
};
use pattern_sequencer::image::luma;
use pattern_sequencer::sequence::PitchClass;
use pattern_sequencer::{
    Frame, FrameError, GridSource, PatternSequencer, PixelBuffer, SequencerParams,
};

#[test]
fn painted_grid_becomes_the_demo_sequence() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (buf, width, height) = demo_pattern_rgba();
    let mut sequencer = PatternSequencer::new(SequencerParams::default());
    let out = sequencer
        .process(&Frame::rgba(&buf, width, height, 16.0))
        .expect("valid frame");

    assert_eq!((out.width, out.height), (width, height));
    assert_eq!(out.timestamp_ms, 16.0);
    assert_eq!(out.grid_source, GridSource::Detected);

    let grid = out.grid.as_ref().expect("grid should be detected");
    assert_eq!((grid.rows, grid.cols), (3, 16));
    assert_eq!(out.lines.horizontal.len(), 2);
    assert_eq!(out.lines.vertical.len(), 15);
    for (k, &x) in out.lines.vertical.iter().enumerate() {
        let line = (k + 1) * PERIOD;
        assert!(
            x + 1 >= line && x <= line + 2,
            "vertical line {k} at {x}, painted at {line}"
        );
    }

    let seq = out.note_sequence.as_ref().expect("sequence with grid");
    assert_eq!(seq.steps().len(), 16);
    let active: Vec<usize> = seq
        .iter()
        .filter(|s| s.note.is_some())
        .map(|s| s.step)
        .collect();
    assert_eq!(active, DEMO_ACTIVE.to_vec());

    use PitchClass::*;
    // First-seen buckets: yellow, slate, cyan, pink -> C, D, E, G.
    let notes: Vec<Option<PitchClass>> = DEMO_ACTIVE
        .iter()
        .map(|&i| seq.step(i).unwrap().note)
        .collect();
    assert_eq!(
        notes,
        vec![Some(C), Some(E), Some(G), Some(C), Some(E), Some(G), Some(C)]
    );
    assert_eq!(seq.step(0).unwrap().velocity, luma(YELLOW));
    assert_eq!(seq.step(0).unwrap().velocity, 199);
    assert_eq!(seq.step(1).unwrap().velocity, 42);
}

#[test]
fn intermediate_buffers_match_frame_shape() {
    let (buf, width, height) = demo_pattern_rgba();
    let mut sequencer = PatternSequencer::default();
    let out = sequencer
        .process(&Frame::rgba(&buf, width, height, 0.0))
        .unwrap();
    assert_eq!(out.grayscale.data.len(), width * height);
    assert_eq!(out.edges.data.len(), width * height);
    assert_eq!(out.edge_display.len(), width * height * 4);
    for (i, &e) in out.edges.data.iter().enumerate() {
        assert_eq!(&out.edge_display[i * 4..i * 4 + 4], &[e, e, e, 255]);
    }
    assert!(out.timings.stage_ms("edges").is_some());
    assert!(out.timings.stage_ms("map").is_some());
    assert!(out.processing_ms >= 0.0);
}

#[test]
fn same_frame_gives_same_output() {
    let (buf, width, height) = demo_pattern_rgba();
    let frame = Frame::rgba(&buf, width, height, 5.0);
    let a = PatternSequencer::default().process(&frame).unwrap();
    let b = PatternSequencer::default().process(&frame).unwrap();
    assert!(a.same_output(&b));
}

#[test]
fn bgra_source_matches_rgba_source() {
    let (buf, width, height) = demo_pattern_rgba();
    let bgra = to_bgra(buf.clone());
    let rgba_out = PatternSequencer::default()
        .process(&Frame::rgba(&buf, width, height, 0.0))
        .unwrap();
    let bgra_out = PatternSequencer::default()
        .process(&Frame {
            pixels: PixelBuffer::Bgra8(&bgra),
            width,
            height,
            timestamp_ms: 0.0,
        })
        .unwrap();
    assert!(rgba_out.same_output(&bgra_out));
}

#[test]
fn blank_frame_has_no_grid() {
    let buf = uniform_rgba(64, 48, [200, 200, 200]);
    let out = PatternSequencer::default()
        .process(&Frame::rgba(&buf, 64, 48, 0.0))
        .unwrap();
    assert!(out.grayscale.data.iter().all(|&v| v == 200));
    assert!(out.edges.data.iter().all(|&v| v == 0));
    assert!(out.grid.is_none());
    assert!(out.note_sequence.is_none());
    assert_eq!(out.grid_source, GridSource::Missing);
}

#[test]
fn cached_grid_bridges_four_misses() {
    let (pattern, width, height) = demo_pattern_rgba();
    let blank = uniform_rgba(width, height, [255, 255, 255]);
    let mut sequencer = PatternSequencer::default();

    let first = sequencer
        .process(&Frame::rgba(&pattern, width, height, 0.0))
        .unwrap();
    let grid = first.grid.expect("initial detection");

    for age in 1..=4 {
        let out = sequencer
            .process(&Frame::rgba(&blank, width, height, age as f64))
            .unwrap();
        assert_eq!(out.grid_source, GridSource::Cached { age });
        assert_eq!(out.grid.as_ref(), Some(&grid));
        let seq = out.note_sequence.expect("cached grid still maps");
        // White everywhere: one bucket, every step sounds at full velocity.
        assert!(seq
            .iter()
            .all(|s| s.note == Some(PitchClass::C) && s.velocity == 255));
    }

    let expired = sequencer
        .process(&Frame::rgba(&blank, width, height, 5.0))
        .unwrap();
    assert_eq!(expired.grid_source, GridSource::Missing);
    assert!(expired.grid.is_none());
    assert!(expired.note_sequence.is_none());
}

#[test]
fn reset_drops_the_cache() {
    let (pattern, width, height) = demo_pattern_rgba();
    let blank = uniform_rgba(width, height, [0, 0, 0]);
    let mut sequencer = PatternSequencer::default();
    sequencer
        .process(&Frame::rgba(&pattern, width, height, 0.0))
        .unwrap();
    sequencer.reset();
    let out = sequencer
        .process(&Frame::rgba(&blank, width, height, 1.0))
        .unwrap();
    assert_eq!(out.grid_source, GridSource::Missing);
}

#[test]
fn offer_processes_every_fourth_frame() {
    let (pattern, width, height) = demo_pattern_rgba();
    let frame = Frame::rgba(&pattern, width, height, 0.0);
    let mut sequencer = PatternSequencer::default();
    assert_eq!(sequencer.target_fps(), 15.0);
    let processed: Vec<usize> = (1..=12)
        .filter(|_| sequencer.offer(&frame).unwrap().is_some())
        .collect();
    assert_eq!(processed, vec![4, 8, 12]);
}

#[test]
fn undersized_buffer_fails_fast() {
    let buf = vec![0u8; 100];
    let err = PatternSequencer::default()
        .process(&Frame::rgba(&buf, 10, 10, 0.0))
        .unwrap_err();
    assert_eq!(
        err,
        FrameError::BufferTooSmall {
            expected: 400,
            actual: 100
        }
    );
}

#[test]
fn report_serializes_without_raw_buffers() {
    let (pattern, width, height) = demo_pattern_rgba();
    let out = PatternSequencer::default()
        .process(&Frame::rgba(&pattern, width, height, 0.0))
        .unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert!(json.get("grayscale").is_none());
    assert_eq!(json["gridSource"]["kind"], "detected");
    assert_eq!(json["noteSequence"][0]["note"], "C");
    assert_eq!(json["grid"]["cols"], 16);
}
