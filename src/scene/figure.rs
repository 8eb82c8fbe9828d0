use crate::foundation::core::{Rgb8, Vec3};
use crate::scene::model::{Figure, Part, Shape};

/// Material tints for the mannequin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FigureTints {
    pub(crate) clay: Rgb8,
    pub(crate) cloth: Rgb8,
    pub(crate) shoes: Rgb8,
}

fn sphere(name: &'static str, c: [f32; 3], radius: f32, albedo: Rgb8) -> Part {
    Part {
        name,
        shape: Shape::Sphere {
            center: Vec3::from_array(c),
            radius,
        },
        albedo,
    }
}

fn capsule(name: &'static str, a: [f32; 3], b: [f32; 3], radius: f32, albedo: Rgb8) -> Part {
    Part {
        name,
        shape: Shape::Capsule {
            a: Vec3::from_array(a),
            b: Vec3::from_array(b),
            radius,
        },
        albedo,
    }
}

/// Mirror a part across the figure's sagittal plane.
fn mirrored(p: &Part, name: &'static str) -> Part {
    Part {
        name,
        shape: p.shape.map_points(|v| Vec3::new(-v.x, v.y, v.z)),
        albedo: p.albedo,
    }
}

/// Standing humanoid about 1.78 units tall, facing +Z, feet at the origin.
pub(crate) fn humanoid(t: FigureTints) -> Figure {
    let mut parts = vec![
        sphere("head", [0.0, 1.66, 0.0], 0.115, t.clay),
        capsule("neck", [0.0, 1.47, 0.0], [0.0, 1.56, 0.0], 0.045, t.clay),
        capsule("chest", [0.0, 1.08, 0.0], [0.0, 1.34, 0.0], 0.165, t.cloth),
        sphere("pelvis", [0.0, 0.95, 0.0], 0.14, t.cloth),
    ];

    let right = [
        capsule(
            "upper_arm_r",
            [0.22, 1.38, 0.0],
            [0.26, 1.1, 0.02],
            0.05,
            t.cloth,
        ),
        capsule(
            "forearm_r",
            [0.26, 1.1, 0.02],
            [0.28, 0.86, 0.06],
            0.042,
            t.clay,
        ),
        sphere("hand_r", [0.28, 0.8, 0.07], 0.045, t.clay),
        capsule("thigh_r", [0.09, 0.9, 0.0], [0.1, 0.5, 0.01], 0.07, t.cloth),
        capsule("shin_r", [0.1, 0.5, 0.01], [0.1, 0.1, 0.0], 0.055, t.cloth),
        capsule("foot_r", [0.1, 0.045, -0.02], [0.1, 0.045, 0.12], 0.045, t.shoes),
    ];
    let left_names = [
        "upper_arm_l",
        "forearm_l",
        "hand_l",
        "thigh_l",
        "shin_l",
        "foot_l",
    ];
    for (p, name) in right.iter().zip(left_names) {
        parts.push(*p);
        parts.push(mirrored(p, name));
    }

    Figure {
        parts,
        offset_y: 0.0,
        rotation_y: 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/figure.rs"]
mod tests;
