use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(1, 128), 1);
    assert_eq!(mul_div255_u16(1, 127), 0);
}

#[test]
fn fog_is_zero_at_camera_and_grows_with_depth() {
    assert_eq!(fog_exp2(0.035, 0.0), 0.0);
    let near = fog_exp2(0.015, 5.0);
    let far = fog_exp2(0.015, 40.0);
    assert!(near > 0.0 && near < far && far < 1.0);
    assert!(fog_exp2(0.035, 20.0) > fog_exp2(0.006, 20.0));
}

#[test]
fn smoothstep_clamps() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
}
