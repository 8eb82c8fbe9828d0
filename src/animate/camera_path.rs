use std::f64::consts::TAU;

use crate::foundation::core::Vec3;
use crate::prompt::settings::CameraMove;

/// Resting camera position every move is defined relative to.
pub const CAMERA_BASE: Vec3 = Vec3::new(3.2, 1.9, 4.2);
/// Point the camera always looks at.
pub const LOOK_AT: Vec3 = Vec3::new(0.0, 1.6, 0.0);
/// Orbit radius in the X-Z plane.
pub const ORBIT_RADIUS: f64 = 3.6;

/// Progress through the current cycle, `0..=1`.
fn cycle_progress(t: f64, duration: f64) -> f64 {
    (t.rem_euclid(duration) / duration).min(1.0)
}

/// Where the camera is heading at elapsed time `t` (seconds) for a cycle of `duration_secs`.
pub fn camera_target(mv: CameraMove, t: f64, duration_secs: u32) -> Vec3 {
    let d = f64::from(duration_secs.max(1));
    let base = CAMERA_BASE;
    match mv {
        CameraMove::DollyIn => {
            let z = 4.2 - 0.8 * cycle_progress(t, d);
            Vec3::new(base.x, base.y, z as f32)
        }
        CameraMove::PanLeft => {
            let x = 3.2 - 1.0 * (TAU * t / d).sin();
            Vec3::new(x as f32, base.y, base.z)
        }
        CameraMove::OrbitRight => {
            let angle = 0.4 + 0.25 * (TAU * t / d).sin();
            Vec3::new(
                (ORBIT_RADIUS * angle.cos()) as f32,
                base.y,
                (ORBIT_RADIUS * angle.sin()) as f32,
            )
        }
        CameraMove::TiltUp => {
            let y = 1.6 + 0.5 * cycle_progress(t, d);
            Vec3::new(base.x, y as f32, base.z)
        }
        CameraMove::Static => base,
    }
}

/// Figure bob and yaw at elapsed time `t`: `(offset_y, rotation_y)`.
pub fn figure_pose(t: f64) -> (f32, f32) {
    let offset_y = 0.02 * (t * 1.1).sin();
    let rotation_y = 0.05 + 0.02 * (t * 0.6).sin();
    (offset_y as f32, rotation_y as f32)
}

#[cfg(test)]
#[path = "../../tests/unit/animate/camera_path.rs"]
mod tests;
