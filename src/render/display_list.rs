use kurbo::Point;

use crate::animate::animator::CameraState;
use crate::foundation::core::{Canvas, Rgb8, Vec3};
use crate::render::camera::{NEAR, Projector};
use crate::scene::lighting::{apply_fog, shade};
use crate::scene::model::{Part, Plane, Scene, Shape};

const BACKDROP_TILES: (u32, u32) = (8, 6);
const GROUND_TILES: (u32, u32) = (16, 14);
const SHADOW_RADIUS: f32 = 0.45;
const SHADOW_SEGMENTS: usize = 32;
/// Peak opacity of the floor pool at full spot intensity.
const POOL_ALPHA: f32 = 70.0;
const POOL_FULL_INTENSITY: f32 = 2.2;
/// Rim intensity above which the figure gets a halo.
const RIM_HALO_THRESHOLD: f32 = 0.5;

/// Screen-space geometry.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Geom {
    Polygon(Vec<Point>),
    Disc {
        center: Point,
        radius: f64,
    },
    Capsule {
        a: Point,
        ra: f64,
        b: Point,
        rb: f64,
    },
}

/// One fill, in paint order. `rgba` is straight alpha.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DrawItem {
    pub(crate) layer: Layer,
    pub(crate) geom: Geom,
    pub(crate) rgba: [u8; 4],
}

/// Paint order: later variants are drawn over earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Layer {
    Backdrop,
    Ground,
    Pool,
    Shadow,
    Figure,
}

fn opaque(c: Rgb8) -> [u8; 4] {
    [c.r, c.g, c.b, 255]
}

/// Flatten the scene into back-to-front fills for one camera pose.
pub(crate) fn build_display_list(
    scene: &Scene,
    camera: &CameraState,
    canvas: Canvas,
) -> Vec<DrawItem> {
    let proj = Projector::new(camera, canvas);
    let mut items = Vec::new();

    push_plane_tiles(&mut items, scene, &proj, &scene.backdrop, BACKDROP_TILES, Layer::Backdrop);
    push_plane_tiles(&mut items, scene, &proj, &scene.ground, GROUND_TILES, Layer::Ground);
    push_spot_pool(&mut items, scene, &proj);
    push_contact_shadow(&mut items, scene, &proj);
    push_figure(&mut items, scene, &proj);

    debug_assert!(
        items.windows(2).all(|w| w[0].layer <= w[1].layer),
        "display list layers out of paint order"
    );
    items
}

fn push_plane_tiles(
    out: &mut Vec<DrawItem>,
    scene: &Scene,
    proj: &Projector,
    plane: &Plane,
    (nu, nv): (u32, u32),
    layer: Layer,
) {
    let n = plane.normal();
    let mut tiles: Vec<(f32, DrawItem)> = Vec::with_capacity((nu * nv) as usize);
    for iv in 0..nv {
        for iu in 0..nu {
            let s0 = -1.0 + 2.0 * iu as f32 / nu as f32;
            let s1 = -1.0 + 2.0 * (iu + 1) as f32 / nu as f32;
            let t0 = -1.0 + 2.0 * iv as f32 / nv as f32;
            let t1 = -1.0 + 2.0 * (iv + 1) as f32 / nv as f32;
            let corners = [
                plane.at(s0, t0),
                plane.at(s1, t0),
                plane.at(s1, t1),
                plane.at(s0, t1),
            ];
            let pts = proj.project_polygon(&corners);
            if pts.is_empty() {
                continue;
            }
            let center = plane.at((s0 + s1) * 0.5, (t0 + t1) * 0.5);
            let depth = proj.depth(center).max(NEAR);
            let color = shade(scene, plane.color, center, n, depth);
            tiles.push((
                depth,
                DrawItem {
                    layer,
                    geom: Geom::Polygon(pts),
                    rgba: opaque(color),
                },
            ));
        }
    }
    tiles.sort_by(|a, b| b.0.total_cmp(&a.0));
    out.extend(tiles.into_iter().map(|(_, item)| item));
}

fn ground_ellipse(center: Vec3, rx: f32, rz: f32) -> Vec<Vec3> {
    (0..SHADOW_SEGMENTS)
        .map(|i| {
            let a = std::f32::consts::TAU * i as f32 / SHADOW_SEGMENTS as f32;
            Vec3::new(center.x + rx * a.cos(), 0.002, center.z + rz * a.sin())
        })
        .collect()
}

/// Where the spot axis meets the floor, or `None` if it never points down.
fn spot_floor_hit(scene: &Scene) -> Option<Vec3> {
    let axis = scene.spot.target - scene.spot.position;
    if axis.y >= -1e-4 {
        return None;
    }
    let t = -scene.spot.position.y / axis.y;
    Some(scene.spot.position + axis * t)
}

/// Soft lit ellipse under the spot: an outer penumbra ring and a brighter core.
fn push_spot_pool(out: &mut Vec<DrawItem>, scene: &Scene, proj: &Projector) {
    if !scene.spot.is_on() {
        return;
    }
    let Some(hit) = spot_floor_hit(scene) else {
        return;
    };
    let reach = (hit - scene.spot.position).length();
    let outer = reach * scene.spot.angle.tan();
    let inner = outer * (1.0 - scene.spot.penumbra);
    let strength = (scene.spot.intensity / POOL_FULL_INTENSITY).min(1.0);
    let depth = proj.depth(hit).max(NEAR);
    let c = apply_fog(scene, scene.spot.color, depth);

    for (radius, alpha) in [(outer, POOL_ALPHA * 0.5), (inner, POOL_ALPHA)] {
        let pts = proj.project_polygon(&ground_ellipse(hit, radius, radius));
        if pts.is_empty() {
            continue;
        }
        out.push(DrawItem {
            layer: Layer::Pool,
            geom: Geom::Polygon(pts),
            rgba: [c.r, c.g, c.b, (alpha * strength) as u8],
        });
    }
}

fn push_contact_shadow(out: &mut Vec<DrawItem>, scene: &Scene, proj: &Projector) {
    let ring = ground_ellipse(Vec3::ZERO, SHADOW_RADIUS, SHADOW_RADIUS * 0.6);
    let pts = proj.project_polygon(&ring);
    if pts.is_empty() {
        return;
    }
    // Stronger under a hard key.
    let alpha = if scene.settings.high_contrast { 130 } else { 90 };
    out.push(DrawItem {
        layer: Layer::Shadow,
        geom: Geom::Polygon(pts),
        rgba: [0, 0, 0, alpha],
    });
}

fn part_geom(proj: &Projector, shape: &Shape, grow_px: f64) -> Option<Geom> {
    match *shape {
        Shape::Sphere { center, radius } => {
            let (c, d) = proj.project(center)?;
            Some(Geom::Disc {
                center: c,
                radius: (proj.radius_px(radius, d) + grow_px).max(0.5),
            })
        }
        Shape::Capsule { a, b, radius } => {
            let (pa, da) = proj.project(a)?;
            let (pb, db) = proj.project(b)?;
            Some(Geom::Capsule {
                a: pa,
                ra: (proj.radius_px(radius, da) + grow_px).max(0.5),
                b: pb,
                rb: (proj.radius_px(radius, db) + grow_px).max(0.5),
            })
        }
    }
}

fn push_figure(out: &mut Vec<DrawItem>, scene: &Scene, proj: &Projector) {
    let eye = proj.eye();
    let key_dir = scene.key.to_light();

    let mut parts: Vec<(f32, Part)> = scene
        .figure
        .world_parts()
        .map(|p| (proj.depth(p.shape.centroid()), p))
        .filter(|(d, p)| *d > NEAR + p.shape.radius())
        .collect();
    parts.sort_by(|a, b| b.0.total_cmp(&a.0));

    let halo_strength = (scene.rim.intensity / 1.8).min(1.0);
    let show_halo = scene.rim.intensity > RIM_HALO_THRESHOLD;

    for (depth, part) in parts {
        let c = part.shape.centroid();
        let view_n = (eye - c).normalize_or(Vec3::Z);
        let r = part.shape.radius();

        if show_halo {
            let halo_px = proj.radius_px(r * 0.18, depth).max(1.0);
            if let Some(g) = part_geom(proj, &part.shape, halo_px) {
                let rim = apply_fog(scene, scene.rim.color, depth);
                out.push(DrawItem {
                    layer: Layer::Figure,
                    geom: g,
                    rgba: [rim.r, rim.g, rim.b, (200.0 * halo_strength) as u8],
                });
            }
        }

        if let Some(g) = part_geom(proj, &part.shape, 0.0) {
            let base = shade(scene, part.albedo, c, view_n, depth);
            out.push(DrawItem {
                layer: Layer::Figure,
                geom: g,
                rgba: opaque(base),
            });
        }

        // Highlight lobe: a smaller copy nudged toward the key light.
        let hl_n = (view_n + key_dir * 0.8).normalize_or(view_n);
        let nudge = key_dir * (r * 0.35);
        let hl_shape = part.shape.map_points(|v| v + nudge);
        let shrink = -proj.radius_px(r * 0.45, depth);
        if let Some(g) = part_geom(proj, &hl_shape, shrink) {
            let hl = shade(scene, part.albedo, c, hl_n, depth);
            out.push(DrawItem {
                layer: Layer::Figure,
                geom: g,
                rgba: [hl.r, hl.g, hl.b, 150],
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/display_list.rs"]
mod tests;
