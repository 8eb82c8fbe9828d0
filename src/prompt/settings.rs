/// Named camera motion applied during animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraMove {
    /// Push toward the figure over each cycle.
    DollyIn,
    /// Sway sideways along X.
    PanLeft,
    /// Swing around the figure on a fixed-radius arc.
    OrbitRight,
    /// Rise along Y over each cycle.
    TiltUp,
    /// Hold the base position.
    #[default]
    Static,
}

impl CameraMove {
    /// Kebab-case label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DollyIn => "dolly-in",
            Self::PanLeft => "pan-left",
            Self::OrbitRight => "orbit-right",
            Self::TiltUp => "tilt-up",
            Self::Static => "static",
        }
    }
}

impl std::fmt::Display for CameraMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-shape record controlling lighting, fog, lens, camera motion and clip length.
///
/// Every prompt maps to a valid value; see [`crate::interpret`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    /// Warm key/spot light color.
    pub warm: bool,
    /// Low fill, strong key.
    pub high_contrast: bool,
    /// Strong rim light behind the figure.
    pub backlit: bool,
    /// Overhead spot light enabled.
    pub spotlight: bool,
    /// Fully desaturated grade.
    pub monochrome: bool,
    /// Partially desaturated grade.
    pub desaturated: bool,
    /// Exponential-squared fog density.
    pub fog_density: f64,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Camera motion pattern.
    #[serde(rename = "move")]
    pub camera_move: CameraMove,
    /// Length of one camera cycle and of exported clips.
    pub duration_secs: u32,
}

impl SceneSettings {
    pub(crate) const DEFAULT_FOG_DENSITY: f64 = 0.006;
    pub(crate) const DEFAULT_FOV_DEG: f64 = 45.0;
    pub(crate) const DEFAULT_DURATION_SECS: u32 = 7;
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            warm: false,
            high_contrast: false,
            backlit: false,
            spotlight: false,
            monochrome: false,
            desaturated: false,
            fog_density: Self::DEFAULT_FOG_DENSITY,
            fov_deg: Self::DEFAULT_FOV_DEG,
            camera_move: CameraMove::Static,
            duration_secs: Self::DEFAULT_DURATION_SECS,
        }
    }
}
