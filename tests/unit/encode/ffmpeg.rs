use super::*;
use crate::foundation::core::Fps;

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_straight_over_black() {
    let src = vec![255u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128, 0, 0, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 4], true, [0, 0, 0, 255]).is_err());
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(24, 1).unwrap(),
    }
}

#[test]
fn begin_rejects_odd_dimensions() {
    let mut sink = WebmSink::new(WebmSinkOpts::new("target/webm_unit/odd.webm"));
    let err = sink.begin(cfg(11, 10)).unwrap_err();
    assert!(matches!(err, BrollError::Validation(_)));
}

#[test]
fn missing_program_is_an_encode_error() {
    let mut opts = WebmSinkOpts::new("target/webm_unit/missing.webm");
    opts.program = PathBuf::from("target/no-such-ffmpeg-binary");
    let mut sink = WebmSink::new(opts);
    let err = sink.begin(cfg(16, 16)).unwrap_err();
    assert!(matches!(err, BrollError::Encode(_)));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = WebmSink::new(WebmSinkOpts::new("target/webm_unit/unstarted.webm"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn vp9_args_describe_raw_input_and_webm_output() {
    let args = vp9_args(&cfg(64, 36), true);
    let pos = |a: &str| args.iter().position(|x| x == a).unwrap();
    assert_eq!(args[0], "-y");
    assert_eq!(args[pos("-s") + 1], "64x36");
    assert_eq!(args[pos("-r") + 1], "24/1");
    assert!(pos("-r") < pos("-i"));
    assert_eq!(args[pos("-c:v") + 1], "libvpx-vp9");
    assert_eq!(args.last().map(String::as_str), Some("webm"));
    assert_eq!(vp9_args(&cfg(64, 36), false)[0], "-n");
}

#[test]
fn frames_must_strictly_increase() {
    let mut sink = WebmSink::new(WebmSinkOpts::new("target/webm_unit/order.webm"));
    sink.cfg = Some(cfg(2, 2));
    sink.scratch = vec![0; 16];
    sink.last_idx = Some(FrameIndex(3));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    let err = sink.push_frame(FrameIndex(3), &frame).unwrap_err();
    assert!(matches!(err, BrollError::Encode(_)));
}

#[test]
fn bare_file_name_needs_no_parent_dir() {
    ensure_parent_dir(Path::new("clip.webm")).unwrap();
}
