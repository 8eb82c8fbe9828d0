//! broll renders a stylized 3D figure from free-text prompt keywords.
//!
//! The flow is session-oriented:
//!
//! - [`interpret`] a prompt into [`SceneSettings`] (optionally tinted by a reference [`Palette`])
//! - Create a [`Studio`], which owns the live scene and rebuilds it only when its inputs change
//! - Tick the preview, capture a PNG still, or stream a clip into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animate;
/// Export sinks: PNG stills and `ffmpeg` WEBM clips.
pub mod encode;
pub(crate) mod palette;
pub(crate) mod prompt;
/// CPU rendering of a projected scene.
pub mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{BezPath, Canvas, Fps, FrameIndex, Point, Rgb8, Vec3};
pub use crate::foundation::error::{BrollError, BrollResult};

pub use crate::animate::animator::{Animator, CAMERA_SMOOTHING, CameraState};
pub use crate::animate::camera_path::{CAMERA_BASE, LOOK_AT, camera_target, figure_pose};
pub use crate::encode::ffmpeg::{WebmSink, WebmSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::still::write_png;
pub use crate::palette::extract::{Palette, extract_palette, load_palette};
pub use crate::prompt::interpret::interpret;
pub use crate::prompt::presets::{PRESETS, Preset, find_preset};
pub use crate::prompt::settings::{CameraMove, SceneSettings};
pub use crate::render::cpu::CpuRenderer;
pub use crate::render::frame::FrameRGBA;
pub use crate::scene::build::build_scene;
pub use crate::scene::model::{
    DirectionalLight, Figure, Fog, Grade, HemisphereLight, Part, Plane, Scene, Shape, SpotLight,
};
pub use crate::session::config::{CLIP_FILE_NAME, STILL_FILE_NAME, StudioConfig};
pub use crate::session::studio::{ClipStats, Studio};
