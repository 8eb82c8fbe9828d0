use rayon::prelude::*;

use crate::scene::model::Grade;

/// Apply saturation and contrast to premultiplied RGBA8 rows in place.
///
/// Contrast pivots around half the pixel's alpha, so translucent pixels stay valid premultiplied
/// values.
pub(crate) fn apply_grade(data: &mut [u8], width: u32, grade: Grade) {
    if grade.is_identity() || width == 0 {
        return;
    }
    let row_bytes = (width as usize) * 4;
    data.par_chunks_mut(row_bytes).for_each(|row| {
        for px in row.chunks_exact_mut(4) {
            grade_px(px, grade);
        }
    });
}

fn grade_px(px: &mut [u8], g: Grade) {
    let a = f32::from(px[3]);
    if a == 0.0 {
        return;
    }
    let [r, gr, b] = [px[0], px[1], px[2]].map(f32::from);
    let luma = 0.2126 * r + 0.7152 * gr + 0.0722 * b;
    let pivot = a * 0.5;
    for (i, c) in [r, gr, b].into_iter().enumerate() {
        let sat = luma + (c - luma) * g.saturation;
        let con = (sat - pivot) * g.contrast + pivot;
        px[i] = con.round().clamp(0.0, a) as u8;
    }
}

/// Set every alpha byte to 255.
///
/// Frames start from an opaque clear, so any alpha below 255 is rounding left behind by
/// translucent fills stacked on opaque ones.
pub(crate) fn force_opaque(data: &mut [u8], width: u32) {
    if width == 0 {
        return;
    }
    let row_bytes = (width as usize) * 4;
    data.par_chunks_mut(row_bytes).for_each(|row| {
        for px in row.chunks_exact_mut(4) {
            px[3] = 255;
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/grade.rs"]
mod tests;
