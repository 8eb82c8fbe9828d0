use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> image::DynamicImage {
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(w, h, image::Rgba(rgba)))
}

#[test]
fn uniform_image_yields_clamped_companions() {
    let p = extract_palette(&solid(64, 48, [200, 100, 50, 255]));
    assert_eq!(p.dominant, Rgb8::new(200, 100, 50));
    assert_eq!(p.ambient, Rgb8::new(240, 140, 90));
    assert_eq!(p.accent, Rgb8::new(140, 40, 0));
}

#[test]
fn bright_channels_clamp_at_255() {
    let p = extract_palette(&solid(8, 8, [250, 230, 10, 255]));
    assert_eq!(p.ambient, Rgb8::new(255, 255, 50));
    assert_eq!(p.accent, Rgb8::new(190, 170, 0));
}

#[test]
fn large_images_are_downsampled_before_sampling() {
    let p = extract_palette(&solid(1024, 300, [10, 20, 30, 255]));
    assert_eq!(p.dominant, Rgb8::new(10, 20, 30));
}

#[test]
fn sampling_takes_every_fourth_pixel() {
    // 8 pixels; samples land on pixel 0 and pixel 4.
    let mut buf = Vec::new();
    for i in 0..8u8 {
        let v = if i % 4 == 0 { 100 } else { 0 };
        buf.extend_from_slice(&[v, v, v, 255]);
    }
    assert_eq!(mean_palette(&buf).dominant, Rgb8::gray(100));
}

#[test]
fn alpha_is_ignored() {
    let p = extract_palette(&solid(4, 4, [200, 100, 50, 0]));
    assert_eq!(p.dominant, Rgb8::new(200, 100, 50));
}

#[test]
fn empty_input_falls_back_to_neutral() {
    assert_eq!(mean_palette(&[]), Palette::NEUTRAL);
    let empty = image::DynamicImage::ImageRgba8(image::RgbaImage::new(0, 0));
    assert_eq!(extract_palette(&empty), Palette::NEUTRAL);
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = load_palette(Path::new("target/definitely/missing.png")).unwrap_err();
    assert!(matches!(err, BrollError::Validation(_)));
}

#[test]
fn load_palette_reads_png_from_disk() {
    let dir = std::path::PathBuf::from("target").join("palette_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ref.png");
    solid(16, 16, [30, 60, 90, 255]).save(&path).unwrap();
    let p = load_palette(&path).unwrap();
    assert_eq!(p.dominant, Rgb8::new(30, 60, 90));
}
