use crate::foundation::core::{Rgb8, Vec3};
use crate::foundation::math::{fog_exp2, smoothstep};
use crate::scene::model::{DirectionalLight, HemisphereLight, Scene, SpotLight};

fn hemisphere(l: &HemisphereLight, n: Vec3) -> Vec3 {
    let w = 0.5 + 0.5 * n.y;
    l.ground.to_vec3().lerp(l.sky.to_vec3(), w) * l.intensity
}

fn directional(l: &DirectionalLight, n: Vec3) -> Vec3 {
    l.color.to_vec3() * (l.intensity * n.dot(l.to_light()).max(0.0))
}

fn spot(l: &SpotLight, p: Vec3, n: Vec3) -> Vec3 {
    if !l.is_on() {
        return Vec3::ZERO;
    }
    let to_light = l.position - p;
    let dist = to_light.length();
    if dist <= f32::EPSILON {
        return Vec3::ZERO;
    }
    let ldir = to_light / dist;
    let axis = (l.target - l.position).normalize_or(Vec3::NEG_Y);
    let cos_theta = (-ldir).dot(axis);
    let outer = l.angle.cos();
    let inner = (l.angle * (1.0 - l.penumbra)).cos();
    let cone = smoothstep(outer, inner, cos_theta);
    let lambert = n.dot(ldir).max(0.0);
    let falloff = 1.0 / (1.0 + 0.04 * dist * dist);
    l.color.to_vec3() * (l.intensity * cone * lambert * falloff)
}

/// Incoming light at `p` with unit normal `n`, summed over every light in the scene.
pub(crate) fn irradiance(scene: &Scene, p: Vec3, n: Vec3) -> Vec3 {
    hemisphere(&scene.hemisphere, n)
        + directional(&scene.key, n)
        + directional(&scene.rim, n)
        + spot(&scene.spot, p, n)
}

/// Lit surface color, then blended toward the fog color by view depth.
pub(crate) fn shade(scene: &Scene, albedo: Rgb8, p: Vec3, n: Vec3, depth: f32) -> Rgb8 {
    let lit = Rgb8::from_vec3(albedo.to_vec3() * irradiance(scene, p, n));
    apply_fog(scene, lit, depth)
}

pub(crate) fn apply_fog(scene: &Scene, c: Rgb8, depth: f32) -> Rgb8 {
    let f = fog_exp2(scene.fog.density, f64::from(depth)) as f32;
    c.mix(scene.fog.color, f)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lighting.rs"]
mod tests;
