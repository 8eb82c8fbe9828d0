use super::*;
use crate::prompt::interpret::interpret;
use crate::prompt::settings::CameraMove;

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(find_preset("NOIR").map(|p| p.name), Some("noir"));
    assert_eq!(find_preset(" interview ").map(|p| p.name), Some("interview"));
    assert!(find_preset("missing").is_none());
}

#[test]
fn presets_exercise_distinct_looks() {
    let interview = interpret(PRESETS[0].prompt);
    assert!(interview.warm && interview.spotlight);
    assert_eq!(interview.fov_deg, 35.0);
    assert_eq!(interview.camera_move, CameraMove::DollyIn);
    assert_eq!(interview.duration_secs, 10);

    let noir = interpret(PRESETS[1].prompt);
    assert!(noir.monochrome && noir.high_contrast && noir.backlit);
    assert_eq!(noir.fog_density, 0.035);
    assert_eq!(noir.camera_move, CameraMove::PanLeft);

    let showcase = interpret(PRESETS[2].prompt);
    assert!(showcase.desaturated && showcase.spotlight);
    assert_eq!(showcase.fov_deg, 60.0);
    assert_eq!(showcase.camera_move, CameraMove::OrbitRight);
    assert_eq!(showcase.duration_secs, 5);
}
