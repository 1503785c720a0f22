use std::path::PathBuf;

use image::AnimationDecoder as _;
use image::codecs::gif::GifDecoder;

use super::*;
use crate::foundation::core::Fps;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/unit_gif");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 8,
        height: 6,
        fps: Fps::new(4, 1).unwrap(),
    }
}

#[test]
fn writes_a_looping_gif_at_four_fps() {
    let path = scratch("loop.gif");
    let mut sink = GifSink::new(GifSinkOpts::new(&path));
    sink.begin(cfg()).unwrap();
    for (i, c) in [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]]
        .into_iter()
        .enumerate()
    {
        sink.push_frame(FrameIndex(i as u64), &solid(8, 6, c)).unwrap();
    }
    sink.end().unwrap();

    assert!(!partial_path(&path).exists());
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
    assert!(bytes.windows(11).any(|w| w == b"NETSCAPE2.0"));

    let decoder = GifDecoder::new(std::io::Cursor::new(bytes)).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 3);
    for f in &frames {
        let (n, d) = f.delay().numer_denom_ms();
        assert_eq!(f64::from(n) / f64::from(d), 250.0);
    }
}

#[test]
fn rejects_out_of_order_and_mismatched_frames() {
    let mut sink = GifSink::new(GifSinkOpts::new(scratch("bad.gif")));
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(1), &solid(8, 6, [0, 0, 0, 255]))
        .unwrap();
    assert!(sink
        .push_frame(FrameIndex(1), &solid(8, 6, [0, 0, 0, 255]))
        .is_err());
    assert!(matches!(
        sink.push_frame(FrameIndex(2), &solid(4, 4, [0, 0, 0, 255])),
        Err(FieldError::Validation(_))
    ));
    sink.end().unwrap();
}

#[test]
fn abandoned_sink_leaves_no_file_behind() {
    let path = scratch("abandoned.gif");
    let _ = std::fs::remove_file(&path);
    {
        let mut sink = GifSink::new(GifSinkOpts::new(&path));
        sink.begin(cfg()).unwrap();
        sink.push_frame(FrameIndex(0), &solid(8, 6, [0, 0, 0, 255]))
            .unwrap();
        assert!(partial_path(&path).exists());
        assert!(!path.exists());
    }
    assert!(!partial_path(&path).exists());
    assert!(!path.exists());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = GifSink::new(GifSinkOpts::new(scratch("unused.gif")));
    assert!(sink.push_frame(FrameIndex(0), &solid(8, 6, [0; 4])).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn zero_fps_is_a_validation_error() {
    let mut sink = GifSink::new(GifSinkOpts::new(scratch("zero.gif")));
    let bad = SinkConfig {
        fps: Fps { num: 0, den: 1 },
        ..cfg()
    };
    assert!(matches!(sink.begin(bad), Err(FieldError::Validation(_))));
}

#[test]
fn flatten_transparent_pixel_yields_background() {
    let mut dst = vec![0u8; 8];
    flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0, 1, 2, 3, 255], Rgb8::new(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255, 1, 2, 3, 255]);
}
