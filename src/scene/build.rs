use crate::foundation::core::{Rgb8, Vec3};
use crate::palette::extract::Palette;
use crate::prompt::settings::SceneSettings;
use crate::scene::figure::{FigureTints, humanoid};
use crate::scene::model::{
    DirectionalLight, Fog, Grade, HemisphereLight, Plane, Scene, SpotLight,
};

const NEUTRAL_KEY: Rgb8 = Rgb8::new(0xf2, 0xf4, 0xff);
const WARM_KEY: Rgb8 = Rgb8::new(0xff, 0xcf, 0x9a);
const COOL_RIM: Rgb8 = Rgb8::new(0xcf, 0xe0, 0xff);
const WARM_RIM: Rgb8 = Rgb8::new(0xff, 0xd8, 0xa8);

const BACKDROP: Rgb8 = Rgb8::new(0x3a, 0x3f, 0x4a);
const WARM_BACKDROP: Rgb8 = Rgb8::new(0x4a, 0x3c, 0x33);
const GROUND: Rgb8 = Rgb8::new(0x2b, 0x2d, 0x33);
const CLAY: Rgb8 = Rgb8::new(0xb8, 0xb0, 0xa8);
const CLOTH: Rgb8 = Rgb8::new(0x5a, 0x6b, 0x80);
const SHOES: Rgb8 = Rgb8::new(0x22, 0x22, 0x26);

/// Backdrop plane distance behind the figure.
pub(crate) const BACKDROP_Z: f32 = -6.0;

/// Build the fixed scene topology for one set of inputs.
#[tracing::instrument(level = "debug", skip_all, fields(mv = %settings.camera_move))]
pub fn build_scene(settings: &SceneSettings, palette: Option<&Palette>) -> Scene {
    let key_color = if settings.warm { WARM_KEY } else { NEUTRAL_KEY };
    let rim_color = if settings.warm { WARM_RIM } else { COOL_RIM };

    let mut backdrop_color = if settings.warm { WARM_BACKDROP } else { BACKDROP };
    let mut ground_color = GROUND;
    let mut cloth = CLOTH;
    if let Some(p) = palette {
        backdrop_color = backdrop_color.mix(p.ambient, 0.5);
        ground_color = ground_color.mix(p.accent, 0.5);
        cloth = p.dominant;
    }
    let fog_color = backdrop_color.mix(Rgb8::gray(0), 0.45);

    let hemisphere = HemisphereLight {
        sky: if settings.warm {
            Rgb8::new(0xff, 0xe8, 0xcc)
        } else {
            Rgb8::new(0xdd, 0xe6, 0xff)
        },
        ground: Rgb8::new(0x2a, 0x25, 0x20),
        intensity: if settings.high_contrast { 0.2 } else { 0.55 },
    };

    let key = DirectionalLight {
        position: Vec3::new(3.0, 4.0, 3.0),
        target: Vec3::new(0.0, 1.2, 0.0),
        color: key_color,
        intensity: if settings.high_contrast { 1.7 } else { 1.1 },
    };

    let rim = DirectionalLight {
        position: Vec3::new(-2.5, 3.0, -4.0),
        target: Vec3::new(0.0, 1.2, 0.0),
        color: rim_color,
        intensity: if settings.backlit { 1.8 } else { 0.35 },
    };

    let spot = SpotLight {
        position: Vec3::new(0.0, 5.2, 1.6),
        target: Vec3::new(0.0, 0.9, 0.0),
        color: key_color,
        intensity: if settings.spotlight { 2.2 } else { 0.0 },
        angle: 0.42,
        penumbra: 0.45,
    };

    let grade = Grade {
        saturation: if settings.monochrome {
            0.0
        } else if settings.desaturated {
            0.45
        } else {
            1.0
        },
        contrast: if settings.high_contrast { 1.25 } else { 1.0 },
    };

    Scene {
        settings: *settings,
        palette: palette.copied(),
        fog: Fog {
            color: fog_color,
            density: settings.fog_density,
        },
        ground: Plane {
            center: Vec3::new(0.0, 0.0, 4.5),
            half_u: Vec3::new(15.0, 0.0, 0.0),
            half_v: Vec3::new(0.0, 0.0, -10.5),
            color: ground_color,
        },
        backdrop: Plane {
            center: Vec3::new(0.0, 6.0, BACKDROP_Z),
            half_u: Vec3::new(15.0, 0.0, 0.0),
            half_v: Vec3::new(0.0, 6.0, 0.0),
            color: backdrop_color,
        },
        figure: humanoid(FigureTints {
            clay: CLAY,
            cloth,
            shoes: SHOES,
        }),
        hemisphere,
        spot,
        key,
        rim,
        grade,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
