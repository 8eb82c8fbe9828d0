use crate::animate::camera_path::{CAMERA_BASE, LOOK_AT, camera_target, figure_pose};
use crate::foundation::core::Vec3;
use crate::scene::model::Scene;

/// Fraction of the remaining distance the camera covers per tick.
///
/// Applied once per tick rather than per second, so the easing speed follows the tick rate.
pub const CAMERA_SMOOTHING: f32 = 0.1;

/// Camera pose used for projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_deg: f64,
}

/// Drives the figure and the camera of one [`Scene`].
#[derive(Clone, Debug)]
pub struct Animator {
    camera: CameraState,
    elapsed_secs: f64,
    ticks: u64,
}

impl Animator {
    /// Start at the base camera position with the scene's field of view.
    pub fn new(scene: &Scene) -> Self {
        Self {
            camera: CameraState {
                position: CAMERA_BASE,
                look_at: LOOK_AT,
                fov_deg: scene.settings.fov_deg,
            },
            elapsed_secs: 0.0,
            ticks: 0,
        }
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance to elapsed time `t` (seconds since the scene was built).
    pub fn tick(&mut self, scene: &mut Scene, t: f64) {
        let (offset_y, rotation_y) = figure_pose(t);
        scene.figure.offset_y = offset_y;
        scene.figure.rotation_y = rotation_y;

        let target = camera_target(scene.settings.camera_move, t, scene.settings.duration_secs);
        self.camera.position = self.camera.position.lerp(target, CAMERA_SMOOTHING);
        self.camera.look_at = LOOK_AT;

        self.elapsed_secs = t;
        self.ticks += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/animator.rs"]
mod tests;
