use super::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn static_target_is_base() {
    for t in [0.0, 1.3, 99.0] {
        assert_eq!(camera_target(CameraMove::Static, t, 7), CAMERA_BASE);
    }
}

#[test]
fn dolly_pushes_in_and_wraps_each_cycle() {
    assert!(close(camera_target(CameraMove::DollyIn, 0.0, 10).z, 4.2));
    assert!(close(camera_target(CameraMove::DollyIn, 5.0, 10).z, 3.8));
    assert!(close(camera_target(CameraMove::DollyIn, 9.999, 10).z, 3.4));
    assert!(close(camera_target(CameraMove::DollyIn, 10.0, 10).z, 4.2));
    let p = camera_target(CameraMove::DollyIn, 3.0, 10);
    assert_eq!((p.x, p.y), (CAMERA_BASE.x, CAMERA_BASE.y));
}

#[test]
fn pan_sways_along_x() {
    assert!(close(camera_target(CameraMove::PanLeft, 0.0, 8).x, 3.2));
    assert!(close(camera_target(CameraMove::PanLeft, 2.0, 8).x, 2.2));
    assert!(close(camera_target(CameraMove::PanLeft, 6.0, 8).x, 4.2));
}

#[test]
fn orbit_stays_on_circle() {
    for i in 0..200 {
        let t = f64::from(i) * 0.173;
        let p = camera_target(CameraMove::OrbitRight, t, 7);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(close(r, ORBIT_RADIUS as f32), "t={t} r={r}");
        assert_eq!(p.y, CAMERA_BASE.y);
    }
}

#[test]
fn tilt_rises_over_cycle() {
    assert!(close(camera_target(CameraMove::TiltUp, 0.0, 5).y, 1.6));
    assert!(close(camera_target(CameraMove::TiltUp, 2.5, 5).y, 1.85));
    assert!(close(camera_target(CameraMove::TiltUp, 7.5, 5).y, 1.85));
}

#[test]
fn figure_pose_formulas() {
    assert_eq!(figure_pose(0.0), (0.0, 0.05));
    let (y, r) = figure_pose(1.0);
    assert!(close(y, (0.02 * 1.1f64.sin()) as f32));
    assert!(close(r, (0.05 + 0.02 * 0.6f64.sin()) as f32));
}
