use crate::foundation::error::{BrollError, BrollResult};

pub use glam::Vec3;
pub use kurbo::{BezPath, Point};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> BrollResult<Self> {
        if den == 0 {
            return Err(BrollError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(BrollError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> BrollResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Canvas sizes are bounded by the raster context, which addresses pixels with `u16`.
    pub fn validate(self) -> BrollResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BrollError::validation("canvas width/height must be non-zero"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(BrollError::validation(format!(
                "canvas {}x{} exceeds the {}px raster limit",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }
}

/// Straight (non-premultiplied) opaque RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Add `delta` to each channel, clamping to `0..=255`.
    pub fn offset(self, delta: i16) -> Self {
        fn ch(c: u8, d: i16) -> u8 {
            (i16::from(c) + d).clamp(0, 255) as u8
        }
        Self {
            r: ch(self.r, delta),
            g: ch(self.g, delta),
            b: ch(self.b, delta),
        }
    }

    /// Channels as `0..=1` floats.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    pub fn from_vec3(v: Vec3) -> Self {
        fn to_u8(x: f32) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self {
            r: to_u8(v.x),
            g: to_u8(v.y),
            b: to_u8(v.z),
        }
    }

    pub fn mix(self, other: Self, t: f32) -> Self {
        Self::from_vec3(self.to_vec3().lerp(other.to_vec3(), t.clamp(0.0, 1.0)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
