use std::path::Path;

use anyhow::Context as _;
use image::imageops::FilterType;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BrollError, BrollResult};

/// Longest edge the reference image is reduced to before sampling.
pub(crate) const SAMPLE_EDGE: u32 = 256;
/// Byte stride between samples: every 4th RGBA pixel.
pub(crate) const SAMPLE_STRIDE_BYTES: usize = 16;

const AMBIENT_LIFT: i16 = 40;
const ACCENT_DROP: i16 = -60;

/// Three representative colors taken from a reference image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Mean sampled color.
    pub dominant: Rgb8,
    /// Darker companion of the mean.
    pub accent: Rgb8,
    /// Lighter companion of the mean.
    pub ambient: Rgb8,
}

impl Palette {
    /// Palette used when an image has nothing to sample.
    pub const NEUTRAL: Self = Self {
        dominant: Rgb8::gray(128),
        accent: Rgb8::gray(68),
        ambient: Rgb8::gray(168),
    };

    /// Derive ambient and accent from a mean color.
    pub fn from_mean(mean: Rgb8) -> Self {
        Self {
            dominant: mean,
            accent: mean.offset(ACCENT_DROP),
            ambient: mean.offset(AMBIENT_LIFT),
        }
    }
}

/// Extract a [`Palette`] from a decoded image.
///
/// The image is reduced to fit within 256x256 (never enlarged), then every 4th pixel is averaged.
/// Alpha is ignored. Deterministic for identical pixel data.
#[tracing::instrument(level = "debug", skip(img), fields(w = img.width(), h = img.height()))]
pub fn extract_palette(img: &image::DynamicImage) -> Palette {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Palette::NEUTRAL;
    }

    let rgba = if w > SAMPLE_EDGE || h > SAMPLE_EDGE {
        let scale = f64::from(SAMPLE_EDGE) / f64::from(w.max(h));
        let sw = ((f64::from(w) * scale).round() as u32).clamp(1, SAMPLE_EDGE);
        let sh = ((f64::from(h) * scale).round() as u32).clamp(1, SAMPLE_EDGE);
        image::imageops::resize(&img.to_rgba8(), sw, sh, FilterType::Triangle)
    } else {
        img.to_rgba8()
    };

    mean_palette(rgba.as_raw())
}

/// Average the RGB channels of every sampled pixel in a tightly packed RGBA8 buffer.
pub(crate) fn mean_palette(rgba: &[u8]) -> Palette {
    let mut sum = [0u64; 3];
    let mut n = 0u64;
    for px in rgba.chunks_exact(4).step_by(SAMPLE_STRIDE_BYTES / 4) {
        sum[0] += u64::from(px[0]);
        sum[1] += u64::from(px[1]);
        sum[2] += u64::from(px[2]);
        n += 1;
    }
    if n == 0 {
        return Palette::NEUTRAL;
    }

    let mean = |s: u64| ((s as f64) / (n as f64)).round() as u8;
    Palette::from_mean(Rgb8::new(mean(sum[0]), mean(sum[1]), mean(sum[2])))
}

/// Decode a reference image from disk and extract its palette.
pub fn load_palette(path: &Path) -> BrollResult<Palette> {
    if !path.is_file() {
        return Err(BrollError::validation(format!(
            "reference image '{}' does not exist",
            path.display()
        )));
    }
    let img = image::open(path)
        .with_context(|| format!("decode reference image '{}'", path.display()))?;
    Ok(extract_palette(&img))
}

#[cfg(test)]
#[path = "../../tests/unit/palette/extract.rs"]
mod tests;
