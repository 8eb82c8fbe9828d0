use super::*;
use crate::animate::animator::Animator;
use crate::palette::extract::Palette;
use crate::prompt::interpret::interpret;
use crate::scene::build::build_scene;

fn canvas() -> Canvas {
    Canvas {
        width: 320,
        height: 180,
    }
}

fn list_for(prompt: &str) -> Vec<DrawItem> {
    let scene = build_scene(&interpret(prompt), None);
    let cam = Animator::new(&scene).camera();
    build_display_list(&scene, &cam, canvas())
}

#[test]
fn layers_are_painted_back_to_front() {
    let items = list_for("");
    assert!(items.windows(2).all(|w| w[0].layer <= w[1].layer));
    assert!(items.iter().any(|i| i.layer == Layer::Backdrop));
    assert!(items.iter().any(|i| i.layer == Layer::Ground));
    assert_eq!(
        items.iter().filter(|i| i.layer == Layer::Shadow).count(),
        1
    );
}

#[test]
fn layer_order_matches_paint_order() {
    assert!(Layer::Backdrop < Layer::Ground);
    assert!(Layer::Ground < Layer::Pool);
    assert!(Layer::Pool < Layer::Shadow);
    assert!(Layer::Shadow < Layer::Figure);

    let items = list_for("dramatic backlit spotlight, thick fog");
    assert!(items.iter().any(|i| i.layer == Layer::Pool));
    assert!(items.windows(2).all(|w| w[0].layer <= w[1].layer));
}

#[test]
fn spotlight_adds_floor_pool() {
    let pools = |prompt: &str| {
        list_for(prompt)
            .into_iter()
            .filter(|i| i.layer == Layer::Pool)
            .count()
    };
    assert_eq!(pools(""), 0);
    assert_eq!(pools("stage spotlight"), 2);
}

#[test]
fn spot_axis_meets_floor_in_front_of_target() {
    let scene = build_scene(&interpret("spotlight"), None);
    let hit = spot_floor_hit(&scene).unwrap();
    assert!(hit.y.abs() < 1e-4);
    assert!(hit.z < scene.spot.target.z);
}

#[test]
fn backlit_adds_one_halo_per_part() {
    let plain = list_for("")
        .into_iter()
        .filter(|i| i.layer == Layer::Figure)
        .count();
    let backlit = list_for("backlit")
        .into_iter()
        .filter(|i| i.layer == Layer::Figure)
        .count();
    assert_eq!(plain, 32);
    assert_eq!(backlit, 48);
}

#[test]
fn polygons_are_well_formed() {
    for item in list_for("wide") {
        if let Geom::Polygon(pts) = &item.geom {
            assert!(pts.len() >= 3);
            assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}

#[test]
fn nearer_ground_tiles_paint_later() {
    let items = list_for("");
    let ground: Vec<&DrawItem> = items.iter().filter(|i| i.layer == Layer::Ground).collect();
    let bottom = |i: &DrawItem| match &i.geom {
        Geom::Polygon(p) => p.iter().map(|q| q.y).fold(f64::MIN, f64::max),
        _ => unreachable!(),
    };
    // Farther tiles sit higher on screen than the nearest one.
    assert!(bottom(ground[0]) < bottom(ground[ground.len() - 1]));
}

#[test]
fn palette_tints_the_figure() {
    let settings = interpret("");
    let plain = build_scene(&settings, None);
    let tinted = build_scene(
        &settings,
        Some(&Palette::from_mean(Rgb8::new(220, 40, 40))),
    );
    let cam = Animator::new(&plain).camera();
    let a = build_display_list(&plain, &cam, canvas());
    let b = build_display_list(&tinted, &cam, canvas());
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}
