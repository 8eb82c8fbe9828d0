use crate::foundation::core::{Rgb8, Vec3};
use crate::palette::extract::Palette;
use crate::prompt::settings::SceneSettings;

/// Sky/ground gradient fill light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HemisphereLight {
    pub sky: Rgb8,
    pub ground: Rgb8,
    pub intensity: f32,
}

/// Parallel light shining from `position` toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Rgb8,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the lit surface toward the light.
    pub fn to_light(&self) -> Vec3 {
        (self.position - self.target).normalize_or(Vec3::Y)
    }
}

/// Cone light. `angle` is the half-angle in radians; `penumbra` in `0..=1` softens the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Rgb8,
    pub intensity: f32,
    pub angle: f32,
    pub penumbra: f32,
}

impl SpotLight {
    pub fn is_on(&self) -> bool {
        self.intensity > 0.0
    }
}

/// Exponential-squared fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Rgb8,
    pub density: f64,
}

/// Flat rectangle spanned by `center ± half_u ± half_v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub center: Vec3,
    pub half_u: Vec3,
    pub half_v: Vec3,
    pub color: Rgb8,
}

impl Plane {
    pub fn normal(&self) -> Vec3 {
        self.half_u.cross(self.half_v).normalize_or(Vec3::Y)
    }

    /// Point at parametric coordinates `(s, t)` in `-1..=1`.
    pub fn at(&self, s: f32, t: f32) -> Vec3 {
        self.center + self.half_u * s + self.half_v * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Capsule { a: Vec3, b: Vec3, radius: f32 },
}

impl Shape {
    pub fn centroid(&self) -> Vec3 {
        match *self {
            Self::Sphere { center, .. } => center,
            Self::Capsule { a, b, .. } => (a + b) * 0.5,
        }
    }

    pub fn radius(&self) -> f32 {
        match *self {
            Self::Sphere { radius, .. } | Self::Capsule { radius, .. } => radius,
        }
    }

    pub(crate) fn map_points(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        match *self {
            Self::Sphere { center, radius } => Self::Sphere {
                center: f(center),
                radius,
            },
            Self::Capsule { a, b, radius } => Self::Capsule {
                a: f(a),
                b: f(b),
                radius,
            },
        }
    }
}

/// One primitive of the figure, in figure-local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub shape: Shape,
    pub albedo: Rgb8,
}

/// Humanoid made of primitives. Feet rest at `y = 0` in local space.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub parts: Vec<Part>,
    /// Vertical bob applied on top of the rest pose.
    pub offset_y: f32,
    /// Yaw around the vertical axis, radians.
    pub rotation_y: f32,
}

impl Figure {
    /// Parts transformed into world space by the current bob and yaw.
    pub fn world_parts(&self) -> impl Iterator<Item = Part> + '_ {
        let rot = glam::Quat::from_rotation_y(self.rotation_y);
        let lift = Vec3::new(0.0, self.offset_y, 0.0);
        self.parts.iter().map(move |p| Part {
            shape: p.shape.map_points(|v| rot * v + lift),
            ..*p
        })
    }
}

/// Output color grade applied after rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grade {
    /// 1 keeps colors, 0 is grayscale.
    pub saturation: f32,
    /// Contrast gain around mid-gray.
    pub contrast: f32,
}

impl Grade {
    pub fn is_identity(&self) -> bool {
        self.saturation == 1.0 && self.contrast == 1.0
    }
}

/// Scene graph for one studio build. Rebuilt whenever its inputs change.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub settings: SceneSettings,
    pub palette: Option<Palette>,
    pub fog: Fog,
    pub ground: Plane,
    pub backdrop: Plane,
    pub figure: Figure,
    pub hemisphere: HemisphereLight,
    pub spot: SpotLight,
    pub key: DirectionalLight,
    pub rim: DirectionalLight,
    pub grade: Grade,
}
