use std::path::Path;

use anyhow::Context as _;

use crate::encode::ffmpeg::{ensure_parent_dir, flatten_to_opaque_rgba8};
use crate::foundation::error::{BrollError, BrollResult};
use crate::render::frame::FrameRGBA;

/// Write `frame` as an opaque RGBA PNG, compositing any transparency over `bg_rgba`.
#[tracing::instrument(level = "debug", skip(frame), fields(w = frame.width, h = frame.height))]
pub fn write_png(frame: &FrameRGBA, out_path: &Path, bg_rgba: [u8; 4]) -> BrollResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(BrollError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }

    let mut straight = vec![0u8; expected];
    flatten_to_opaque_rgba8(&mut straight, &frame.data, frame.premultiplied, bg_rgba)?;

    ensure_parent_dir(out_path)?;
    image::save_buffer_with_format(
        out_path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out_path.display()))
    .map_err(BrollError::from)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/still.rs"]
mod tests;
