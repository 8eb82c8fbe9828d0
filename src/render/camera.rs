use glam::Mat4;
use kurbo::Point;

use crate::animate::animator::CameraState;
use crate::foundation::core::{Canvas, Vec3};

pub(crate) const NEAR: f32 = 0.1;

/// Pinhole projection from world space onto a canvas, y down.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projector {
    eye: Vec3,
    view: Mat4,
    half_w: f32,
    half_h: f32,
    focal_px: f32,
}

impl Projector {
    pub(crate) fn new(camera: &CameraState, canvas: Canvas) -> Self {
        let fov = (camera.fov_deg as f32).to_radians();
        let half_h = canvas.height as f32 * 0.5;
        Self {
            eye: camera.position,
            view: Mat4::look_at_rh(camera.position, camera.look_at, Vec3::Y),
            half_w: canvas.width as f32 * 0.5,
            half_h,
            focal_px: half_h / (fov * 0.5).tan(),
        }
    }

    pub(crate) fn eye(&self) -> Vec3 {
        self.eye
    }

    pub(crate) fn to_view(&self, p: Vec3) -> Vec3 {
        self.view.transform_point3(p)
    }

    /// Distance in front of the camera along the view axis.
    pub(crate) fn depth(&self, p: Vec3) -> f32 {
        -self.to_view(p).z
    }

    /// Screen position of a view-space point. Callers keep `v.z <= -NEAR`.
    pub(crate) fn view_to_screen(&self, v: Vec3) -> Point {
        let d = (-v.z).max(NEAR);
        Point::new(
            f64::from(self.half_w + self.focal_px * v.x / d),
            f64::from(self.half_h - self.focal_px * v.y / d),
        )
    }

    /// Project a world point, or `None` when it is behind the near plane.
    pub(crate) fn project(&self, p: Vec3) -> Option<(Point, f32)> {
        let v = self.to_view(p);
        if -v.z < NEAR {
            return None;
        }
        Some((self.view_to_screen(v), -v.z))
    }

    /// On-screen radius of a world-space length at `depth`.
    pub(crate) fn radius_px(&self, r: f32, depth: f32) -> f64 {
        f64::from(r * self.focal_px / depth.max(NEAR))
    }

    /// Clip a world-space polygon against the near plane and project it.
    pub(crate) fn project_polygon(&self, world: &[Vec3]) -> Vec<Point> {
        let view: Vec<Vec3> = world.iter().map(|&p| self.to_view(p)).collect();
        clip_near(&view)
            .into_iter()
            .map(|v| self.view_to_screen(v))
            .collect()
    }
}

/// Sutherland-Hodgman clip of a view-space polygon to `z <= -NEAR`.
pub(crate) fn clip_near(poly: &[Vec3]) -> Vec<Vec3> {
    let inside = |v: Vec3| v.z <= -NEAR;
    let mut out = Vec::with_capacity(poly.len() + 2);
    for (i, &cur) in poly.iter().enumerate() {
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        match (inside(prev), inside(cur)) {
            (true, true) => out.push(cur),
            (true, false) => out.push(intersect(prev, cur)),
            (false, true) => {
                out.push(intersect(prev, cur));
                out.push(cur);
            }
            (false, false) => {}
        }
    }
    if out.len() < 3 {
        out.clear();
    }
    out
}

fn intersect(a: Vec3, b: Vec3) -> Vec3 {
    let t = (-NEAR - a.z) / (b.z - a.z);
    a.lerp(b, t)
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;
