use super::*;
use crate::animate::camera_path::CAMERA_BASE;
use crate::encode::sink::InMemorySink;
use crate::prompt::settings::CameraMove;

fn small_cfg() -> StudioConfig {
    StudioConfig {
        preview: Canvas {
            width: 64,
            height: 36,
        },
        still: Canvas {
            width: 128,
            height: 72,
        },
        out_dir: PathBuf::from("target").join("studio_unit"),
        ..StudioConfig::default()
    }
}

fn solid(rgb: [u8; 3]) -> image::DynamicImage {
    image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(8, 8, image::Rgb(rgb)))
}

#[test]
fn new_studio_mounts_default_scene() {
    let s = Studio::new(small_cfg()).unwrap();
    assert_eq!(s.rebuild_count(), 1);
    assert_eq!(s.settings(), SceneSettings::default());
    assert!(s.scene().is_some());
    assert_eq!(s.camera().unwrap().position, CAMERA_BASE);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = StudioConfig {
        fps: 0,
        ..small_cfg()
    };
    assert!(Studio::new(cfg).is_err());
}

#[test]
fn prompt_edits_rebuild_only_on_settings_change() {
    let mut s = Studio::new(small_cfg()).unwrap();
    assert!(s.set_prompt("warm"));
    assert!(!s.set_prompt("warm light over a bench"));
    assert_eq!(s.rebuild_count(), 2);
    assert!(s.set_prompt("warm light, orbit"));
    assert_eq!(s.settings().camera_move, CameraMove::OrbitRight);
    assert_eq!(s.rebuild_count(), 3);
}

#[test]
fn rebuild_restarts_the_clock() {
    let mut s = Studio::new(small_cfg()).unwrap();
    for _ in 0..10 {
        s.tick().unwrap();
    }
    assert!(s.elapsed_secs() > 0.0);
    s.set_prompt("dolly");
    assert_eq!(s.elapsed_secs(), 0.0);
}

#[test]
fn first_tick_of_static_keeps_base_camera() {
    let mut s = Studio::new(small_cfg()).unwrap();
    s.tick().unwrap();
    assert_eq!(s.elapsed_secs(), 0.0);
    assert!(s.camera().unwrap().position.distance(CAMERA_BASE) < 1e-6);
}

#[test]
fn presets_overwrite_the_prompt() {
    let mut s = Studio::new(small_cfg()).unwrap();
    s.set_prompt("something else");
    assert!(s.apply_preset("noir").unwrap());
    assert!(s.prompt().starts_with("Black and white"));
    assert!(s.settings().monochrome);
    assert!(matches!(
        s.apply_preset("nope"),
        Err(BrollError::Validation(_))
    ));
}

#[test]
fn reference_image_changes_trigger_rebuilds() {
    let mut s = Studio::new(small_cfg()).unwrap();
    assert!(s.set_reference_image(&solid([200, 100, 50])));
    assert_eq!(
        s.palette().map(|p| p.dominant),
        Some(crate::foundation::core::Rgb8::new(200, 100, 50))
    );
    assert!(!s.set_reference_image(&solid([200, 100, 50])));
    assert!(s.set_reference_image(&solid([10, 10, 10])));
    assert!(s.remove_reference_image());
    assert!(s.palette().is_none());
    assert!(!s.remove_reference_image());
    assert_eq!(s.rebuild_count(), 4);
}

#[test]
fn still_capture_uses_still_size_and_restores_preview() {
    let mut s = Studio::new(small_cfg()).unwrap();
    s.next_preview_frame().unwrap();
    let ticks_before = s.elapsed_secs();
    let still = s.capture_still().unwrap();
    assert_eq!((still.width, still.height), (128, 72));
    assert_eq!(s.renderer.surface_size(), Some((64, 36)));
    assert_eq!(s.elapsed_secs(), ticks_before);
}

#[test]
fn export_still_writes_png() {
    let mut s = Studio::new(small_cfg()).unwrap();
    let out = s.export_still().unwrap();
    assert_eq!(out.file_name().unwrap(), "cinematic_still_4k.png");
    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (128, 72));
}

#[test]
fn clip_records_duration_times_fps_frames() {
    let mut s = Studio::new(small_cfg()).unwrap();
    s.set_prompt("pan, 5s");
    let mut sink = InMemorySink::new();
    let stats = s.record_clip(&mut sink).unwrap();
    assert_eq!(stats.frames, 120);
    assert_eq!(stats.duration_secs, 5);
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().width, 64);
    assert_eq!(sink.frames().len(), 120);
    assert!(sink.frames().windows(2).all(|w| w[0].0 < w[1].0));
    // The recording advanced the live loop.
    assert!((s.elapsed_secs() - 119.0 / 24.0).abs() < 1e-9);
}

#[test]
fn teardown_releases_and_next_tick_remounts() {
    let mut s = Studio::new(small_cfg()).unwrap();
    s.next_preview_frame().unwrap();
    s.teardown();
    assert!(s.scene().is_none());
    assert_eq!(s.renderer.surface_size(), None);
    s.tick().unwrap();
    assert!(s.scene().is_some());
    assert_eq!(s.rebuild_count(), 2);
}
